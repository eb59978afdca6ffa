//! Wallet management and transaction signing.
//!
//! # Security
//! - The private key comes from the env file (`ACCOUNT_PRIVATE_KEY`)
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::config::env::{SecretKey, ACCOUNT_PRIVATE_KEY};

/// Signing key bound to a chain.
#[derive(Debug, Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for transaction signing
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex.parse().map_err(|e| {
            BlockchainError::Wallet(format!(
                "Invalid private key format in {}: {}",
                ACCOUNT_PRIVATE_KEY, e
            ))
        })?;

        tracing::debug!(address = %signer.address(), "Wallet initialized");

        Ok(Self {
            signer,
            chain_id,
        })
    }

    /// Create a wallet from the configured secret.
    pub fn from_secret(key: &SecretKey, chain_id: u64) -> BlockchainResult<Self> {
        Self::from_private_key(key.expose(), chain_id)
    }

    /// Same key, signing for another chain.
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Network wallet used to sign transaction requests.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}
