//! Lifecycle of the container, each operation maps to one or more engine invocations
//!
//! The state of the container is never stored, the engine keeps it and reports failure when an
//! operation is not possible

use crate::engine::Executor;
use crate::error::DevcError;
use crate::util::Confirm;
use crate::{CONTAINER_NAME, CONTAINER_WORKSPACE, IMAGE_TAG};
use std::path::Path;

/// Scope of the engine prune
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneScope {
    /// Remove all unused images not just dangling ones
    pub all: bool,

    /// Remove unused volumes too
    pub volumes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    Pruned,
    Cancelled,
}

/// Build the command ran inside the container by `exec`
pub fn compose_exec_command(workspace: &str, command: &str) -> String {
    format!("cd {} && {}", crate::workspace::shell_quote(workspace), command.trim())
}

pub struct Lifecycle<'a, E: Executor> {
    pub engine: &'a E,

    /// Allocate a terminal for `exec`
    pub tty: bool,
}

impl<'a, E: Executor> Lifecycle<'a, E> {
    pub fn new(engine: &'a E, tty: bool) -> Self {
        Self { engine, tty }
    }

    /// Run engine and turn non-zero exit into an error with `hint`
    fn run(&self, argv: Vec<String>, hint: &str) -> Result<(), DevcError> {
        let status = self.engine.execute(&argv)?;

        if status.success {
            Ok(())
        } else {
            Err(DevcError::RuntimeOperationFailed {
                command: self.engine.format(&argv),
                code: status.code,
                hint: hint.to_string(),
            })
        }
    }

    /// Build the image from `dockerfile` with current directory as the context
    pub fn build(&self, dockerfile: &Path) -> Result<(), DevcError> {
        if !dockerfile.is_file() {
            return Err(DevcError::missing(format!(
                "Dockerfile not found at specified location: {}",
                dockerfile.display()
            )));
        }

        self.run(
            args(["build", "-t", IMAGE_TAG, "-f"])
                .chain([dockerfile.to_string_lossy().to_string(), ".".into()])
                .collect(),
            "Failed to build the image.",
        )
    }

    /// Run the container detached with `mount` as the workspace
    pub fn start(&self, mount: &Path) -> Result<(), DevcError> {
        if !mount.is_dir() {
            return Err(DevcError::missing(format!(
                "Specified mount path '{}' does not exist or is not a directory.",
                mount.display()
            )));
        }

        let mount = std::path::absolute(mount).map_err(|err| {
            DevcError::missing(format!("Could not resolve mount path '{}': {}", mount.display(), err))
        })?;

        self.run(
            args(["run", "-d", "--name", CONTAINER_NAME, "-v"])
                .chain([
                    format!("{}:{}", mount.display(), CONTAINER_WORKSPACE),
                    IMAGE_TAG.to_string(),
                ])
                .collect(),
            "Failed to start the container.",
        )
    }

    pub fn stop(&self) -> Result<(), DevcError> {
        self.run(
            args(["stop", CONTAINER_NAME]).collect(),
            "Could not stop the container. Ensure it is running.",
        )
    }

    /// Stop then start the existing container, nothing is rebuilt
    ///
    /// Not atomic, if start fails the container stays stopped
    pub fn restart(&self) -> Result<(), DevcError> {
        self.stop()?;

        self.run(
            args(["start", CONTAINER_NAME]).collect(),
            "Failed to start the container. Check the engine logs for details.",
        )
    }

    /// Print engine listing of the container, empty listing is not an error
    pub fn status(&self) -> Result<(), DevcError> {
        self.run(
            args(["ps", "-f"]).chain([format!("name={}", CONTAINER_NAME)]).collect(),
            "Could not retrieve the container status. Ensure the engine is running.",
        )
    }

    /// Run `command` with bash inside the container from `workspace` directory
    pub fn exec(&self, workspace: &str, command: &str) -> Result<(), DevcError> {
        if command.trim().is_empty() {
            return Err(DevcError::missing("No command provided to execute."));
        }

        let mut argv = args(["exec", "-i"]).collect::<Vec<_>>();
        if self.tty {
            argv.push("-t".into());
        }
        argv.extend(args([CONTAINER_NAME, "bash", "-c"]));
        argv.push(compose_exec_command(workspace, command));

        self.run(argv, "Failed to execute the command inside the container.")
    }

    /// Prune unused engine resources after confirmation
    pub fn cleanup(&self, scope: PruneScope, confirm: &dyn Confirm) -> Result<CleanupOutcome, DevcError> {
        let mut argv = args(["system", "prune", "-f"]).collect::<Vec<_>>();
        if scope.all {
            argv.push("--all".into());
        }
        if scope.volumes {
            argv.push("--volumes".into());
        }

        if !confirm.confirm("Warning: This action will remove unused containers, images, networks, and optionally volumes.\nDo you want to proceed?") {
            log::debug!("Prune cancelled by user");
            return Ok(CleanupOutcome::Cancelled);
        }

        self.run(argv, "Failed to clean up engine resources.")?;

        Ok(CleanupOutcome::Pruned)
    }
}

fn args<const N: usize>(items: [&str; N]) -> impl Iterator<Item = String> {
    items.map(String::from).into_iter()
}
