//! Typed view of the env-file keys.
//!
//! Each command declares a [`Requirement`]; every key it needs must be
//! present, otherwise the whole set of missing keys is reported at once.

use alloy::primitives::{Address, U256};
use std::path::Path;
use url::Url;

use crate::config::loader::{load_env_file, ConfigError};
use crate::config::schema::BlockchainConfig;

pub const ETH_RPC_URL: &str = "ETH_RPC_URL";
pub const ACCOUNT_PRIVATE_KEY: &str = "ACCOUNT_PRIVATE_KEY";
pub const L1_CONTRACT_ADDRESS: &str = "L1_CONTRACT_ADDRESS";
pub const L2_CONTRACT_ADDRESS: &str = "L2_CONTRACT_ADDRESS";
pub const ETH_CHAIN_ID: &str = "ETH_CHAIN_ID";
pub const ETH_FAILOVER_RPC_URLS: &str = "ETH_FAILOVER_RPC_URLS";
pub const MESSAGE_VALUE_WEI: &str = "MESSAGE_VALUE_WEI";

/// Value attached to `sendMessage` when `MESSAGE_VALUE_WEI` is unset.
pub const DEFAULT_MESSAGE_VALUE_WEI: u64 = 1;

/// Local development chain, used when the endpoint cannot be asked.
pub const DEFAULT_CHAIN_ID: u64 = 31337;

/// Which groups of keys a command needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// RPC endpoint and signing key (deployment).
    Endpoint,
    /// Contract addresses only (dry runs).
    Target,
    /// Everything needed to submit a message transaction.
    EndpointAndTarget,
}

impl Requirement {
    fn needs_endpoint(self) -> bool {
        matches!(self, Self::Endpoint | Self::EndpointAndTarget)
    }

    fn needs_target(self) -> bool {
        matches!(self, Self::Target | Self::EndpointAndTarget)
    }
}

/// Signing key kept out of `Debug` output.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Where transactions go and who signs them.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub rpc_url: Url,
    pub failover_urls: Vec<Url>,
    pub private_key: SecretKey,
    pub chain_id: Option<u64>,
}

/// Contracts a message transaction addresses.
#[derive(Debug, Clone)]
pub struct MessagingTarget {
    /// Messaging contract receiving the transaction.
    pub l1_contract: Address,
    /// Cross-domain contract address passed as `contractAddress`.
    pub l2_contract: U256,
    /// Value attached to `sendMessage`.
    pub message_value: U256,
}

/// Configuration built from the process environment.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    pub endpoint: Option<Endpoint>,
    pub target: Option<MessagingTarget>,
}

impl BridgeConfig {
    /// Build from the process environment.
    pub fn from_env(requirement: Requirement) -> Result<Self, ConfigError> {
        Self::from_lookup(requirement, |key| std::env::var(key).ok())
    }

    /// Load `env_file` into the process environment, then build from it.
    ///
    /// Mutates the process environment, so call it before any other thread
    /// is running.
    pub fn load(env_file: &Path, requirement: Requirement) -> Result<Self, ConfigError> {
        load_env_file(env_file)?;
        Self::from_env(requirement)
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(requirement: Requirement, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut required = Vec::new();
        if requirement.needs_endpoint() {
            required.extend([ETH_RPC_URL, ACCOUNT_PRIVATE_KEY]);
        }
        if requirement.needs_target() {
            required.extend([L1_CONTRACT_ADDRESS, L2_CONTRACT_ADDRESS]);
        }

        let missing: Vec<String> = required
            .into_iter()
            .filter(|key| get(*key).is_none())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingKeys(missing));
        }

        let endpoint = if requirement.needs_endpoint() {
            let rpc_url = parse_url(ETH_RPC_URL, &get(ETH_RPC_URL).unwrap_or_default())?;
            let failover_urls = get(ETH_FAILOVER_RPC_URLS)
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(|s| parse_url(ETH_FAILOVER_RPC_URLS, s))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?
                .unwrap_or_default();
            let chain_id = get(ETH_CHAIN_ID)
                .map(|raw| {
                    raw.trim().parse::<u64>().map_err(|e| invalid(ETH_CHAIN_ID, e))
                })
                .transpose()?;

            Some(Endpoint {
                rpc_url,
                failover_urls,
                private_key: SecretKey(get(ACCOUNT_PRIVATE_KEY).unwrap_or_default()),
                chain_id,
            })
        } else {
            None
        };

        let target = if requirement.needs_target() {
            let l1_contract = get(L1_CONTRACT_ADDRESS)
                .unwrap_or_default()
                .trim()
                .parse::<Address>()
                .map_err(|e| invalid(L1_CONTRACT_ADDRESS, e))?;
            let l2_contract = parse_u256(L2_CONTRACT_ADDRESS, &get(L2_CONTRACT_ADDRESS).unwrap_or_default())?;
            let message_value = match get(MESSAGE_VALUE_WEI) {
                Some(raw) => parse_u256(MESSAGE_VALUE_WEI, &raw)?,
                None => U256::from(DEFAULT_MESSAGE_VALUE_WEI),
            };

            Some(MessagingTarget {
                l1_contract,
                l2_contract,
                message_value,
            })
        } else {
            None
        };

        Ok(Self { endpoint, target })
    }

    /// Endpoint keys, or the missing-key error if they were not required.
    pub fn endpoint(&self) -> Result<&Endpoint, ConfigError> {
        self.endpoint.as_ref().ok_or_else(|| {
            ConfigError::MissingKeys(vec![ETH_RPC_URL.to_string(), ACCOUNT_PRIVATE_KEY.to_string()])
        })
    }

    /// Contract keys, or the missing-key error if they were not required.
    pub fn target(&self) -> Result<&MessagingTarget, ConfigError> {
        self.target.as_ref().ok_or_else(|| {
            ConfigError::MissingKeys(vec![
                L1_CONTRACT_ADDRESS.to_string(),
                L2_CONTRACT_ADDRESS.to_string(),
            ])
        })
    }

    /// Overlay endpoint values onto the blockchain settings.
    pub fn apply_to(&self, blockchain: &mut BlockchainConfig) {
        if let Some(endpoint) = &self.endpoint {
            blockchain.rpc_url = endpoint.rpc_url.to_string();
            if !endpoint.failover_urls.is_empty() {
                blockchain.failover_urls =
                    endpoint.failover_urls.iter().map(Url::to_string).collect();
            }
            if endpoint.chain_id.is_some() {
                blockchain.chain_id = endpoint.chain_id;
            }
        }
    }
}

fn invalid(key: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| invalid(key, e))
}

fn parse_u256(key: &str, raw: &str) -> Result<U256, ConfigError> {
    raw.trim().parse::<U256>().map_err(|e| invalid(key, e))
}
