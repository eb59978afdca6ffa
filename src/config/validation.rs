//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, multipliers >= 1.0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Runs before settings are accepted into the system

use crate::config::schema::Settings;

/// A single semantic problem in the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate settings, collecting every error.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let chain = &settings.blockchain;

    if url::Url::parse(&chain.rpc_url).is_err() {
        errors.push(ValidationError {
            field: "blockchain.rpc_url",
            message: format!("invalid URL '{}'", chain.rpc_url),
        });
    }
    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "blockchain.rpc_timeout_secs",
            message: "must be greater than 0".to_string(),
        });
    }
    if chain.gas_price_multiplier < 1.0 {
        errors.push(ValidationError {
            field: "blockchain.gas_price_multiplier",
            message: format!("must be >= 1.0, got {}", chain.gas_price_multiplier),
        });
    }
    if chain.gas_limit_multiplier < 1.0 {
        errors.push(ValidationError {
            field: "blockchain.gas_limit_multiplier",
            message: format!("must be >= 1.0, got {}", chain.gas_limit_multiplier),
        });
    }
    if chain.wait_for_receipt && chain.receipt_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "blockchain.receipt_timeout_secs",
            message: "must be greater than 0 when waiting for receipts".to_string(),
        });
    }
    if settings.deploy.forge_bin.trim().is_empty() {
        errors.push(ValidationError {
            field: "deploy.forge_bin",
            message: "must not be empty".to_string(),
        });
    }
    if !settings.deploy.script.contains(':') {
        errors.push(ValidationError {
            field: "deploy.script",
            message: format!("expected 'path:Contract', got '{}'", settings.deploy.script),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
