//! Contains helper functions for tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(unused_imports)]
pub mod prelude {
    pub use super::{devc, FakeEngine, Result};
}

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Script that records its arguments, one invocation per line
///
/// `stop` exits with `FAKE_ENGINE_STOP_CODE`, everything else succeeds
const FAKE_ENGINE: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "$FAKE_ENGINE_LOG"
case "$1" in
    stop) exit "${FAKE_ENGINE_STOP_CODE:-0}" ;;
esac
exit 0
"#;

/// Fake container engine living in its own temporary directory, also used as the working
/// directory for the command
pub struct FakeEngine {
    pub dir: TempDir,
    pub exe: PathBuf,
    pub log: PathBuf,
}

impl FakeEngine {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let exe = dir.path().join("fake-engine");
        let log = dir.path().join("engine.log");

        std::fs::write(&exe, FAKE_ENGINE)?;
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755))?;

        Ok(Self { dir, exe, log })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Invocations recorded so far
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .map(|x| x.lines().map(|x| x.to_string()).collect())
            .unwrap_or_default()
    }

    /// Command running devc with this engine inside the temporary directory
    pub fn devc(&self) -> Result<Command> {
        let mut cmd = devc()?;
        cmd.arg("--engine")
            .arg(&self.exe)
            .env("FAKE_ENGINE_LOG", &self.log)
            .env_remove("DEVC_WORKSPACE_PATH")
            .current_dir(self.path());

        Ok(cmd)
    }

    /// Same as `devc` but `std::process::Command` for use with pty
    pub fn devc_std(&self) -> Result<std::process::Command> {
        use assert_cmd::cargo::CommandCargoExt;

        let mut cmd = std::process::Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
        cmd.arg("--engine")
            .arg(&self.exe)
            .env("FAKE_ENGINE_LOG", &self.log)
            .env_remove("DEVC_WORKSPACE_PATH")
            .env_remove("DEVC_ENGINE")
            .current_dir(self.path());

        Ok(cmd)
    }
}

pub fn devc() -> Result<Command> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env_remove("DEVC_ENGINE").env_remove("LOG_LEVEL");

    Ok(cmd)
}
