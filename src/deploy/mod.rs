//! Contract deployment subsystem.
//!
//! # Data Flow
//! ```text
//! deploy-messaging-contracts
//!     → forge.rs (forge script --broadcast --rpc-url, output inherited)
//!     → broadcast.rs (run-latest.json → addresses + receipts)
//! ```
//!
//! Compilation and signing happen inside the external tool.

pub mod broadcast;
pub mod forge;
pub mod types;

pub use broadcast::{DeployedContract, DeploymentReport, ReceiptSummary};
pub use forge::Deployer;
pub use types::{DeployError, DeployResult};
