use std::io;

use thiserror::Error;

/// Library-wide error type for storefront operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The request never produced an HTTP response (connection refused, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The backend answered with a body we could not decode.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Category name outside the fixed hardware enumeration.
    #[error(
        "Invalid category '{0}': must be one of CPU, MOTHERBOARD, RAM, GPU, STORAGE, PSU, CASE, COOLING"
    )]
    InvalidCategory(String),

    /// Caller-supplied value rejected before contacting the backend.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation needs a logged-in session.
    #[error("Authentication required: log in, then pass --token or set INFOTECH_TOKEN")]
    Unauthenticated,

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    /// HTTP status carried by the error, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidCategory(_)
            | AppError::InvalidInput(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Unauthenticated => io::ErrorKind::PermissionDenied,
            AppError::Http { status: 401 | 403, .. } => io::ErrorKind::PermissionDenied,
            AppError::Http { status: 404, .. } => io::ErrorKind::NotFound,
            AppError::Decode(_) => io::ErrorKind::InvalidData,
            AppError::Http { .. } | AppError::Transport(_) => io::ErrorKind::Other,
        }
    }
}
