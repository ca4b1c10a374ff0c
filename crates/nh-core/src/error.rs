use thiserror::Error;

/// Result type alias for network hierarchy operations
pub type Result<T> = std::result::Result<T, NhError>;

/// Errors that can occur when talking to the configuration API
#[derive(Error, Debug)]
pub enum NhError {
    /// Operating configuration is missing or corrupt
    #[error("configuration error: {0}")]
    Config(String),

    /// Authentication failed - invalid or missing SEC token
    #[error("authentication failed: invalid SEC token")]
    Unauthorized,

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response decoded fine but had the wrong shape (e.g. object instead of list)
    #[error("unexpected data format received: {0}")]
    UnexpectedFormat(String),

    /// A field the caller relies on is absent from the response
    #[error("missing field in response: {0}")]
    MissingField(&'static str),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}
