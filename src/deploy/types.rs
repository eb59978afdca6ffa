//! Deployment error definitions.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    /// The deployment tool could not be started.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The deployment tool exited unsuccessfully.
    #[error("{tool} exited with {}", describe_exit(.code))]
    ToolFailed { tool: String, code: Option<i32> },

    #[error("unreadable broadcast file {path:?}: {reason}")]
    Broadcast { path: PathBuf, reason: String },

    #[error("contract '{name}' not found in broadcast file {path:?}")]
    ContractNotFound { name: String, path: PathBuf },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

pub type DeployResult<T> = Result<T, DeployError>;
