//! Messaging bridge deployment and invocation library.
//!
//! Deploys the L1 messaging contracts through a deployment script, then
//! sends and consumes cross-domain messages against them.

pub mod blockchain;
pub mod commands;
pub mod config;
pub mod deploy;
pub mod error;
pub mod lifecycle;
pub mod messaging;
pub mod observability;

pub use commands::Outcome;
pub use config::{BridgeConfig, Requirement, Settings};
pub use error::{BridgeError, BridgeResult};
pub use messaging::{Payload, Selector};
