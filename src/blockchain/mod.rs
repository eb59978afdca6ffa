//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Env file (ACCOUNT_PRIVATE_KEY, ETH_RPC_URL)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (RPC connection with timeouts)
//!     → transaction.rs (build, sign, broadcast, confirm)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use transaction::TxBuilder;
pub use types::{BlockchainConfig, BlockchainError, ChainId, ConfirmationStatus, Submission};
pub use wallet::Wallet;
