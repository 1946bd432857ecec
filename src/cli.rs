use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Devc is a CLI for managing containerized development environments
#[derive(Parser, Debug)]
#[command(name = crate::APP_NAME, author, version, long_version = crate::FULL_VERSION, about, long_about = None)]
pub struct Cli {
    /// Container engine executable, must be docker compatible
    #[arg(long, global = true, env = crate::ENV_ENGINE, default_value = crate::DEFAULT_ENGINE)]
    pub engine: String,

    /// Just print engine commands that would've been ran, do not execute
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub cmd: Option<CliCommands>,
}

#[derive(Args, Debug, Clone)]
pub struct CmdInitArgs {
    /// Location of the Dockerfile
    #[arg(short = 'f', long = "file", default_value = crate::DEFAULT_DOCKERFILE)]
    pub dockerfile: PathBuf,

    /// Set up a default template with Dockerfile and environment scripts
    #[arg(short = 't', long)]
    pub setup_template: bool,

    /// Force overwriting existing files during template setup
    #[arg(short = 'F', long)]
    pub force: bool,

    /// Show examples of using the 'init' command
    #[arg(short, long)]
    pub examples: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CmdStartArgs {
    /// Local directory to mount as the container workspace
    #[arg(short, long, default_value = crate::DEFAULT_MOUNT)]
    pub mount: PathBuf,

    /// Show examples of using the 'start' command
    #[arg(short, long)]
    pub examples: bool,
}

/// Arguments of commands that only take `--examples`
#[derive(Args, Debug, Clone)]
pub struct CmdExamplesArgs {
    /// Show examples of using the command
    #[arg(short, long)]
    pub examples: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CmdExecArgs {
    /// Show examples of using the 'exec' command
    #[arg(short, long)]
    pub examples: bool,

    /// Command to execute inside the container, ran using bash
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CmdCdArgs {
    /// Show examples of using the 'cd' command
    #[arg(short, long)]
    pub examples: bool,

    /// Path inside the container to use as the active workspace
    #[arg(default_value = "")]
    pub path: String,
}

#[derive(Args, Debug, Clone)]
pub struct CmdCleanupArgs {
    /// Remove all unused containers, networks, and images (not just dangling ones)
    #[arg(short, long)]
    pub all: bool,

    /// Include unused volumes in the cleanup process
    #[arg(short, long)]
    pub volumes: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Show examples of using the 'cleanup' command
    #[arg(short, long)]
    pub examples: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CmdCompletionArgs {
    /// Generate completion for specific shell, detected from $SHELL by default
    pub shell: Option<clap_complete::Shell>,

    /// Write the script into a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommands {
    /// Build the image using a Dockerfile or set up a default template
    Init(CmdInitArgs),

    /// Start the container in detached mode
    Start(CmdStartArgs),

    /// Stop the container
    Stop(CmdExamplesArgs),

    /// Restart the container
    Restart(CmdExamplesArgs),

    /// Check the status of the container
    Status(CmdExamplesArgs),

    /// Execute a command inside the container
    Exec(CmdExecArgs),

    /// Print shell statement that sets the active workspace directory
    ///
    /// Evaluate the output in your shell, ex. `eval "$(devc cd <path>)"`
    Cd(CmdCdArgs),

    /// Clean up unused containers, images, networks, and optionally volumes
    Cleanup(CmdCleanupArgs),

    /// Generate shell completion script
    Completion(CmdCompletionArgs),
}
