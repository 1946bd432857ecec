//! Default environment template written by `init --setup-template`

use crate::util::Confirm;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DOCKERFILE: &str = include_str!("templates/Dockerfile");
pub const SETUP_USER_SCRIPT: &str = include_str!("templates/setup_user.sh");
pub const SETUP_TOOLS_SCRIPT: &str = include_str!("templates/setup_tools.sh");
pub const BASHRC: &str = include_str!("templates/developer_bashrc");

/// Directory with the setup scripts, relative to the root
pub const ENV_DIR: &str = "env";

/// Directory mounted as the workspace by default, relative to the root
pub const WORKSPACE_DIR: &str = "volumes/workspace";

/// Template files and their content, paths are relative to the root
pub const TEMPLATE_FILES: [(&str, &str); 4] = [
    ("Dockerfile", DOCKERFILE),
    ("env/setup_user.sh", SETUP_USER_SCRIPT),
    ("env/setup_tools.sh", SETUP_TOOLS_SCRIPT),
    ("env/developer_bashrc", BASHRC),
];

/// What happened to each template file
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

pub struct Scaffolder<'a> {
    /// Directory where the template is written
    pub root: PathBuf,

    /// Overwrite existing files without asking
    pub force: bool,

    /// Asked before each overwrite unless `force` is set
    pub confirm: &'a dyn Confirm,
}

impl<'a> Scaffolder<'a> {
    pub fn new(root: impl Into<PathBuf>, force: bool, confirm: &'a dyn Confirm) -> Self {
        Self {
            root: root.into(),
            force,
            confirm,
        }
    }

    /// Write all template files, each file is confirmed separately so declining one does not
    /// stop the others
    pub fn scaffold(&self) -> Result<ScaffoldReport> {
        // directories cannot lose data so they are always created
        for dir in [ENV_DIR, WORKSPACE_DIR] {
            let dir = self.root.join(dir);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory {:?}", dir))?;
        }

        let mut report = ScaffoldReport::default();
        for (path, content) in TEMPLATE_FILES {
            let path = self.root.join(path);

            if self.write_if_allowed(&path, content)? {
                report.written.push(path);
            } else {
                report.skipped.push(path);
            }
        }

        Ok(report)
    }

    /// Write the file unless it exists and overwriting was declined, returns whether it was
    /// written
    pub fn write_if_allowed(&self, path: &Path, content: &str) -> Result<bool> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        if path.exists()
            && !self.force
            && !self.confirm.confirm(&format!("File already exists: {}. Overwrite?", path.display()))
        {
            log::debug!("Overwrite of {:?} declined", path);
            return Ok(false);
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write file {:?}", path))?;

        let is_script = path.extension().is_some_and(|x| x == "sh");
        set_executable(path, is_script)?;

        log::debug!("Wrote {:?} (executable: {})", path, is_script);

        Ok(true)
    }
}

/// Add or remove all executable bits
fn set_executable(path: &Path, executable: bool) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {:?}", path))?
        .permissions();

    let mode = if executable {
        perms.mode() | 0o111
    } else {
        perms.mode() & !0o111
    };
    perms.set_mode(mode);

    std::fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to set permissions of {:?}", path))
}
