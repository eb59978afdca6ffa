//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Env config → RPC client → chain ID check → wallet → TxBuilder
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl-C) → command future dropped → exit 130
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Nothing is rolled back on interrupt; a broadcast transaction stays broadcast

pub mod signals;
pub mod startup;

pub use signals::interrupted;
pub use startup::connect;
