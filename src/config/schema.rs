//! Configuration schema definitions.
//!
//! Tuning knobs read from the optional TOML settings file. Endpoint, key
//! and address values come from the env file instead (see `env.rs`).

use serde::{Deserialize, Serialize};

/// Root settings for the bridge tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// RPC and transaction settings.
    pub blockchain: BlockchainConfig,

    /// Deployment script settings.
    pub deploy: DeployConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Blockchain integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    pub failover_urls: Vec<String>,

    /// Expected chain ID. When unset, whatever the endpoint reports is used.
    pub chain_id: Option<u64>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations required for finality.
    pub confirmation_blocks: u32,

    /// Gas price multiplier (1.0 = estimated, 1.2 = 20% buffer).
    pub gas_price_multiplier: f64,

    /// Maximum gas price in gwei (protection against spikes).
    pub max_gas_price_gwei: u64,

    /// Multiplier applied to `eth_estimateGas`.
    pub gas_limit_multiplier: f64,

    /// Wait for the receipt after broadcasting.
    pub wait_for_receipt: bool,

    /// How long to wait for confirmations, in seconds.
    pub receipt_timeout_secs: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            failover_urls: Vec::new(),
            chain_id: None,
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
            gas_price_multiplier: 1.2,
            max_gas_price_gwei: 500,
            gas_limit_multiplier: 1.3,
            wait_for_receipt: true,
            receipt_timeout_secs: 60,
        }
    }
}

/// Deployment script configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Deployment tool binary.
    pub forge_bin: String,

    /// Directory the script runs in (holds foundry.toml).
    pub project_dir: String,

    /// Script target, `path:Contract`.
    pub script: String,

    /// Contract reported as the primary deployment. Last CREATE if unset.
    pub contract_name: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            forge_bin: "forge".to_string(),
            project_dir: ".".to_string(),
            script: "script/LocalTesting.s.sol:LocalSetup".to_string(),
            contract_name: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [blockchain]
            confirmation_blocks = 3

            [deploy]
            contract_name = "ContractMsg"
            "#,
        )
        .unwrap();

        assert_eq!(settings.blockchain.confirmation_blocks, 3);
        assert_eq!(settings.blockchain.chain_id, None);
        assert_eq!(settings.deploy.forge_bin, "forge");
        assert_eq!(settings.deploy.contract_name.as_deref(), Some("ContractMsg"));
        assert_eq!(settings.observability.log_level, "info");
    }
}
