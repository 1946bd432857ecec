mod cli;
mod command_ext;
mod commands;
mod context;
mod engine;
mod error;
mod lifecycle;
mod scaffold;
mod util;
mod vars;
mod workspace;

#[cfg(test)]
mod tests;

use clap::Parser;
use cli::CliCommands;
use std::process::ExitCode;

pub use vars::*;

#[allow(unused_imports)]
pub mod prelude {
    pub use crate::context::Context;
    pub use anyhow::{anyhow, Context as AnyhowContext, Result};
}

use prelude::*;

/// Log level is taken from the environ, warnings only by default
fn init_logging() {
    let level = std::env::var(ENV_LOG_LEVEL)
        .ok()
        .and_then(|x| x.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn);

    if let Err(err) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logger: {}", err);
    }
}

fn main() -> ExitCode {
    init_logging();

    let args = cli::Cli::parse();

    exit_code(command(args))
}

/// Failed operations are only reported, anything unexpected fails the process
fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);

            if is_fatal(&err) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

/// Lifecycle and workspace errors are handled where they happen, everything else is fatal
fn is_fatal(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<error::DevcError>() {
        Some(x) => {
            log::debug!("Command failed with {}", x.kind());
            false
        }
        None => true,
    }
}

fn command(args: cli::Cli) -> Result<()> {
    let ctx = Context::new(&args.engine, args.dry_run);
    log::debug!("Using engine {:?} (dry run: {})", ctx.engine.path, ctx.engine.dry_run);

    let Some(cmd) = args.cmd else {
        println!("{} CLI. Use --help to view available commands.", APP_NAME);
        return Ok(());
    };

    match cmd {
        CliCommands::Init(x) => commands::init(&ctx, x),
        CliCommands::Start(x) => commands::start_container(&ctx, x),
        CliCommands::Stop(x) => commands::stop_container(&ctx, x),
        CliCommands::Restart(x) => commands::restart_container(&ctx, x),
        CliCommands::Status(x) => commands::print_status(&ctx, x),
        CliCommands::Exec(x) => commands::container_exec(&ctx, x),
        CliCommands::Cd(x) => commands::change_workspace(x),
        CliCommands::Cleanup(x) => commands::cleanup(&ctx, x),
        CliCommands::Completion(x) => commands::shell_completion(x),
    }
}
