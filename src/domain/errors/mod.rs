// Domain errors - error types shared across layers

use thiserror::Error;

/// Errors produced by the client domain and its backend port
#[derive(Error, Debug)]
pub enum DomainError {
    /// Submitted URL was empty
    #[error("Video URL cannot be empty")]
    EmptyUrl,

    /// A request is already in flight for this session
    #[error("Another request is still in flight")]
    Busy,

    /// The wizard transition table has no entry for this (step, event) pair
    #[error("Invalid wizard transition: {event} is not valid in step '{from}'")]
    InvalidTransition { from: String, event: String },

    /// Backend answered with a non-2xx status; message is the server's
    /// error string, passed through unmodified
    #[error("Backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Request never produced a response (DNS failure, refused connection,
    /// timeout)
    #[error("Connection error: {0}")]
    Transport(String),

    /// Response body did not match the expected JSON shape
    #[error("Invalid backend response: {0}")]
    Decode(String),

    /// Clip data failed validation
    #[error("Invalid clip: {0}")]
    InvalidClip(String),

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Settings file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for client operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;
