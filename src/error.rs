use thiserror::Error;

/// Unified error type for gitversion operations
#[derive(Error, Debug)]
pub enum GitVersionError {
    #[error("Command `{command}` failed with {}", exit_description(.code))]
    CommandFailed { code: Option<i32>, command: String },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Convenience type alias for Results in gitversion
pub type Result<T> = std::result::Result<T, GitVersionError>;

impl GitVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitVersionError::Config(msg.into())
    }

    /// Create a command failure for the given exit code and command line
    pub fn command_failed(code: Option<i32>, command: impl Into<String>) -> Self {
        GitVersionError::CommandFailed {
            code,
            command: command.into(),
        }
    }

    /// Exit code of a failed command, if this is a command failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GitVersionError::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}
