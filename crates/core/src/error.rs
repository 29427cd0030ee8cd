//! Error types for the core library

use thiserror::Error;

/// Errors surfaced by use-cases and repositories.
///
/// Messages are shown to the user unchanged, so every variant except
/// `NotFound` displays its payload verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field was blank. Raised before any I/O.
    #[error("{0}")]
    Validation(String),

    #[error("Task not found with id: {0}")]
    NotFound(String),

    /// Network or server failure; the message is opaque to this layer.
    #[error("{0}")]
    Transport(String),

    /// The store refused a write, such as a duplicate id.
    #[error("{0}")]
    Storage(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
