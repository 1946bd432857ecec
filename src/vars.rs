//! File containing constants

/// Prefix env var name with proper prefix
#[macro_export]
macro_rules! ENV_VAR_PREFIX {
    ($($args:literal),*) => {
        concat!(env!("CARGO_PKG_NAME_UPPERCASE"), "_", $($args),*)
    };
}

pub const FULL_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VERGEN_GIT_COMMIT_DATE"),
    ")"
);

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Name of the one and only container managed
pub const CONTAINER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "-container");

/// Image tag is the same as the container name
pub const IMAGE_TAG: &str = CONTAINER_NAME;

/// Workspace directory inside the container, the mount target
pub const CONTAINER_WORKSPACE: &str = "/home/developer/workspace";

/// Host directory mounted as the workspace when none is given
pub const DEFAULT_MOUNT: &str = "./volumes/workspace";

/// Dockerfile used by `init` when none is given
pub const DEFAULT_DOCKERFILE: &str = "./Dockerfile";

/// Default container engine executable
pub const DEFAULT_ENGINE: &str = "docker";

/// Set log level from the environ
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Active workspace path inside the container, read by exec and printed by cd
pub const ENV_WORKSPACE_PATH: &str = ENV_VAR_PREFIX!("WORKSPACE_PATH");

/// Container engine executable
pub const ENV_ENGINE: &str = ENV_VAR_PREFIX!("ENGINE");
