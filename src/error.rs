use thiserror::Error;

/// Custom error types for stopchat
#[derive(Debug, Error)]
pub enum StopChatError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to spawn {0} worker thread")]
    WorkerSpawn(&'static str),

    #[error("Failed to start logger: {0}")]
    Logger(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
