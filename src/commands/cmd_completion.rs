use crate::cli::CmdCompletionArgs;
use crate::prelude::*;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{IsTerminal, Write};
use std::path::Path;

/// Completion script for `shell` covering every subcommand and flag
fn script(shell: Shell) -> Vec<u8> {
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut crate::cli::Cli::command(), crate::APP_NAME, &mut buf);

    buf
}

/// Line telling the user how to load the script into the shell
fn source_hint(shell: Shell, file: &Path) -> String {
    match shell {
        Shell::Bash | Shell::Zsh | Shell::Fish => format!("Source it using: source {}", file.display()),
        Shell::PowerShell => format!("Source it using: . {}", file.display()),
        _ => format!("Completion written to {}", file.display()),
    }
}

pub fn shell_completion(cli_args: CmdCompletionArgs) -> Result<()> {
    let shell = match cli_args.shell.or_else(Shell::from_env) {
        Some(x) => x,
        None => return Err(anyhow!("Could not detect the shell from $SHELL, pass it as an argument")),
    };

    let script = script(shell);

    match cli_args.output {
        Some(file) => {
            std::fs::write(&file, script)
                .with_context(|| format!("Could not write completion to {:?}", file))?;

            eprintln!("{}", source_hint(shell, &file));
        }
        None => {
            // the script is only useful redirected somewhere
            if std::io::stdout().is_terminal() {
                return Err(anyhow!("Refusing to print completion to a terminal, redirect it or use --output"));
            }

            std::io::stdout().write_all(&script)?;
        }
    }

    Ok(())
}
