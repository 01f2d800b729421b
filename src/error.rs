use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level errors for POV
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport-level failure: connect, DNS, timeout, bad HTTP status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status sentinel
    #[error("backend returned status {status}")]
    Status { status: String },

    /// Category string outside the fixed enumeration
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    /// Response parsed but an expected field is absent or unreadable
    #[error("malformed payload: {field}")]
    MalformedPayload { field: &'static str },

    /// Configuration value rejected at startup
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status(status: impl Into<String>) -> Self {
        Self::Status {
            status: status.into(),
        }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory { name: name.into() }
    }

    pub fn malformed(field: &'static str) -> Self {
        Self::MalformedPayload { field }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
