//! Top-level error type and process exit codes.

use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::config::ConfigError;
use crate::deploy::DeployError;
use crate::messaging::MessagingError;

/// Exit code used when the user interrupts a command.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Exit code for every failure without a more specific one.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Messaging(#[from] MessagingError),

    #[error("deployment failed: {0}")]
    Deploy(#[from] DeployError),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("interrupted")]
    Interrupted,
}

impl BridgeError {
    /// Process exit code for this error.
    ///
    /// A failed deployment tool passes its own status through.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Deploy(DeployError::ToolFailed { code: Some(code), .. }) => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(EXIT_FAILURE)
            }
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_FAILURE,
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
