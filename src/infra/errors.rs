// src/infra/errors.rs — Error types for tutor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    // The transport never reached the server
    #[error("Cannot reach the backend at {base_url}: {message}. Is the server running?")]
    Network { base_url: String, message: String },

    // The server answered with a non-success status
    #[error("Backend returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    // Success status but the body was not what we expected
    #[error("Malformed backend response: {message}")]
    Protocol { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TutorError {
    /// True when the server itself was unreachable, as opposed to it
    /// answering badly. Callers use this to pick the "check your backend"
    /// wording over the generic retry message.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, TutorError::Network { .. })
    }
}
