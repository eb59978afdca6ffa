//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so stdout carries only command results
//! - Keys and secret values are never logged

pub mod logging;

pub use logging::init_logging;
