//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! env file (KEY=value)
//!     → loader.rs (read pairs into the process environment)
//!     → env.rs (typed view, required keys per command)
//!
//! settings file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All settings fields have defaults so the TOML file is optional
//! - Missing env keys are reported together, before any network call

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{BridgeConfig, Requirement};
pub use loader::{load_env_file, load_settings, ConfigError};
pub use schema::{BlockchainConfig, DeployConfig, ObservabilityConfig, Settings};
