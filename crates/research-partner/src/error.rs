//! Error types for the research tool layer.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Tool errors never reach the agent runtime as errors: they are folded into a
//! failed [`ToolEnvelope`](crate::models::ToolEnvelope) using [`ToolError::to_user_message`].

/// Errors from the HTTP client layer (transport errors).
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-2xx status.
    #[error("{provider} returned status {status}")]
    Status {
        /// Human-readable provider name
        provider: &'static str,
        /// HTTP status code
        status: u16,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub const fn status(provider: &'static str, status: u16) -> Self {
        Self::Status { provider, status }
    }

    /// Returns true if the provider reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Errors from tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// A search or lookup produced zero results
    #[error("{0}")]
    NotFound(String),

    /// Tool arguments could not be decoded
    #[error("Invalid arguments: {0}")]
    Input(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Convert to the human-readable message carried by a failed envelope.
    ///
    /// `failure_prefix` is the tool's "Failed to ..." phrase, applied to
    /// transport errors only.
    #[must_use]
    pub fn to_user_message(&self, failure_prefix: &str) -> String {
        match self {
            Self::Client(err) => format!("{failure_prefix}: {err}"),
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            Self::NotFound(message) => message.clone(),
            Self::Input(err) => format!("Invalid arguments: {err}"),
        }
    }
}

/// Errors from the bookmark store and its durable blob backend.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// A bookmark with the same title already exists
    #[error("\"{title}\" is already bookmarked")]
    DuplicateBookmark {
        /// Title of the rejected paper
        title: String,
    },

    /// Persisted blob could not be encoded or decoded
    #[error("Corrupt bookmark data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend I/O failure
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a duplicate bookmark error.
    #[must_use]
    pub fn duplicate(title: impl Into<String>) -> Self {
        Self::DuplicateBookmark { title: title.into() }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
