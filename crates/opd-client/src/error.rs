//! Client Errors
//!
//! A transport error means no usable response reached the client; a
//! server error means the service answered with an error status and,
//! usually, a structured message.

use thiserror::Error;

use opd_storage::StorageError;

/// Errors raised while running a query or touching local storage
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Query service unreachable: {0}")]
    Transport(String),
    #[error("Query service error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("Local storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// The most specific message available for a user notification
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(message) => message.clone(),
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Storage(e) => e.to_string(),
        }
    }
}
