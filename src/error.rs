use std::io;
use std::path::PathBuf;

/// Exit status reported for every failed run.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("{tool} CLI is not installed")]
    MissingTool { tool: String },

    #[error("{tool} CLI is not authenticated")]
    Unauthenticated { tool: String },

    #[error("{action} failed: {detail}")]
    ExternalCall { action: String, detail: String },

    #[error("Failed to extract webhook secret")]
    Extraction,

    #[error("failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("operator input unavailable: {0}")]
    Input(#[source] io::Error),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl SetupError {
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// Short label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SetupError::MissingTool { .. } => "missing_tool",
            SetupError::Unauthenticated { .. } => "unauthenticated",
            SetupError::ExternalCall { .. } => "external_call",
            SetupError::Extraction => "extraction",
            SetupError::Filesystem { .. } => "filesystem",
            SetupError::Input(_) => "input",
            SetupError::InvalidValue { .. } => "invalid_value",
        }
    }
}

pub type SetupResult<T> = Result<T, SetupError>;
