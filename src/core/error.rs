use std::path::PathBuf;

use thiserror::Error;

/// Local input problems caught before the gateway is contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a project name")]
    MissingProjectName,

    #[error("Please select a file")]
    MissingFilePath,
}

/// Failures talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Non-2xx reply. `error` is the server's `{ "error": ... }` text, if any.
    #[error("backend replied {status}: {}", .error.as_deref().unwrap_or("no error message"))]
    Status { status: u16, error: Option<String> },

    /// 2xx reply whose body still carried an `error` field.
    #[error("backend rejected the request: {error}")]
    Rejected { error: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// The server-supplied error text, if the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { error, .. } => error.as_deref(),
            GatewayError::Rejected { error } => Some(error),
            GatewayError::Transport(_) | GatewayError::InvalidResponse(_) => None,
        }
    }

    /// Text to show the user: the server's error, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// A single project record that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed project record #{index}: {reason}")]
pub struct DecodeError {
    pub index: usize,
    pub reason: String,
}

/// File dialog failures. A user cancel is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("file dialog failed: {0}")]
    Dialog(String),

    #[error("selected path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    #[error("no file dialog is available in this environment")]
    Unavailable,
}

/// The error behind an error message recorded on an operation status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("{} malformed project record(s) skipped", .0.len())]
    Decode(Vec<DecodeError>),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
