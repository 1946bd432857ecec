//! Container engine invocation, the only place where external processes are spawned

use crate::command_ext::*;
use crate::error::DevcError;
use std::process::Command;

/// Result of a finished engine invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub success: bool,
    pub code: u8,
}

impl RunStatus {
    pub fn ok() -> Self {
        Self { success: true, code: 0 }
    }

    pub fn failed(code: u8) -> Self {
        Self { success: false, code }
    }
}

/// Runs engine commands, abstracted so the lifecycle can be tested without an engine
pub trait Executor {
    /// Program that is executed, used in messages
    fn program(&self) -> &str;

    /// Run the engine with `argv` and wait for it to finish
    ///
    /// Standard streams are inherited so interactive sessions work, spawn failure is an error
    /// while non-zero exit code is not
    fn execute(&self, argv: &[String]) -> Result<RunStatus, DevcError>;

    /// Command as it would be typed in a shell, for messages
    fn format(&self, argv: &[String]) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(argv.iter().cloned());

        parts.join(" ")
    }
}

/// Docker compatible engine executable
#[derive(Debug, Clone)]
pub struct Engine {
    /// Path to the engine, can also be name in PATH
    pub path: String,

    /// Meant mostly for debugging, print commands instead of executing them
    pub dry_run: bool,
}

impl Engine {
    pub fn new(path: impl Into<String>, dry_run: bool) -> Self {
        Self {
            path: path.into(),
            dry_run,
        }
    }

    /// Creates `std::process::Command` with program being the engine path
    pub fn command(&self) -> Command {
        Command::new(&self.path)
    }
}

impl Executor for Engine {
    fn program(&self) -> &str {
        &self.path
    }

    fn execute(&self, argv: &[String]) -> Result<RunStatus, DevcError> {
        let mut cmd = self.command();
        cmd.args(argv);

        if self.dry_run {
            cmd.print_escaped_cmd();
            return Ok(RunStatus::ok());
        }

        let status = cmd.log_status().map_err(|source| DevcError::RuntimeSpawnFailed {
            program: self.path.clone(),
            source,
        })?;

        if status.success() {
            Ok(RunStatus::ok())
        } else {
            Ok(RunStatus::failed(status.get_code()))
        }
    }
}
