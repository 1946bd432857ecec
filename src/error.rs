use thiserror::Error;

/// Failures of lifecycle and scaffolding operations
#[derive(Debug, Error)]
pub enum DevcError {
    /// Required argument is blank or a local precondition does not hold
    #[error("{0}")]
    MissingInput(String),

    /// The engine executable could not be launched at all
    #[error("Could not execute {program:?}, is it installed and in PATH?")]
    RuntimeSpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but exited with non-zero code
    #[error("Command {command:?} exit with error code {code}. {hint}")]
    RuntimeOperationFailed {
        command: String,
        code: u8,
        hint: String,
    },
}

impl DevcError {
    pub fn missing(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Short machine friendly name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => "MissingInput",
            Self::RuntimeSpawnFailed { .. } => "RuntimeSpawnFailed",
            Self::RuntimeOperationFailed { .. } => "RuntimeOperationFailed",
        }
    }
}
