//! Messaging error definitions.

use thiserror::Error;

use crate::blockchain::BlockchainError;

/// Errors produced while preparing or submitting a message.
#[derive(Debug, Error)]
pub enum MessagingError {
    /// Selector names must be non-empty ASCII.
    #[error("invalid selector name '{name}': {reason}")]
    InvalidSelectorName { name: String, reason: &'static str },

    /// A payload element is not an unsigned integer.
    #[error("invalid payload element '{element}': {reason}")]
    InvalidPayload { element: String, reason: String },

    /// Submission failed.
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

/// Result type for messaging operations.
pub type MessagingResult<T> = Result<T, MessagingError>;
