//! Transaction building, signing, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build transactions with chain nonce, gas price and gas estimation
//! - Sign locally and broadcast the raw transaction
//! - Monitor confirmations
//!
//! Every call to [`TxBuilder::submit`] broadcasts exactly one new
//! transaction; nothing is retried or deduplicated.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{
    BlockchainError, BlockchainResult, ConfirmationStatus, Submission,
};
use crate::blockchain::wallet::Wallet;

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Transaction builder for common operations.
pub struct TxBuilder {
    client: BlockchainClient,
    wallet: Wallet,
}

impl TxBuilder {
    /// Create a new transaction builder.
    pub fn new(client: BlockchainClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build a transaction request with gas estimation.
    ///
    /// # Arguments
    /// * `to` - Destination address
    /// * `value` - Amount of native token to send
    /// * `data` - Call data
    pub async fn build(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> BlockchainResult<TransactionRequest> {
        // Read fresh every time so repeated runs never reuse a nonce
        let nonce = self.client.get_transaction_count(self.wallet.address()).await?;

        let gas_price = self.client.get_gas_price().await?;
        let gas_price_gwei = gas_price / 1_000_000_000;

        let config = self.client.config();
        if gas_price_gwei > config.max_gas_price_gwei as u128 {
            return Err(BlockchainError::GasPriceTooHigh {
                current_gwei: gas_price_gwei as u64,
                max_gwei: config.max_gas_price_gwei,
            });
        }

        let adjusted_gas_price = (gas_price as f64 * config.gas_price_multiplier) as u128;

        let call = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(to)
            .with_value(value)
            .with_input(data);

        let estimated_gas = self.client.estimate_gas(&call).await?;
        let gas_limit = (estimated_gas as f64 * config.gas_limit_multiplier).ceil() as u64;

        tracing::debug!(
            nonce = nonce,
            gas_price = adjusted_gas_price,
            gas_limit = gas_limit,
            "Transaction request built"
        );

        Ok(call
            .with_nonce(nonce)
            .with_gas_price(adjusted_gas_price)
            .with_chain_id(self.wallet.chain_id())
            .with_gas_limit(gas_limit))
    }

    /// Sign a fully populated request and broadcast it.
    pub async fn send(&self, tx: TransactionRequest) -> BlockchainResult<TxHash> {
        let envelope = tx
            .build(&self.wallet.ethereum_wallet())
            .await
            .map_err(|e| BlockchainError::Wallet(format!("Signing failed: {}", e)))?;

        let tx_hash = self
            .client
            .send_raw_transaction(Bytes::from(envelope.encoded_2718()))
            .await?;

        tracing::info!(tx_hash = %tx_hash, "Transaction broadcast");
        Ok(tx_hash)
    }

    /// Build, sign, broadcast, and (if configured) wait for confirmation.
    pub async fn submit(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> BlockchainResult<Submission> {
        let tx = self.build(to, value, data).await?;
        let nonce = tx.nonce.unwrap_or_default();
        let tx_hash = self.send(tx).await?;

        let config = self.client.config();
        let status = if config.wait_for_receipt {
            self.wait_for_confirmation(tx_hash, config.receipt_timeout_secs)
                .await?
        } else {
            ConfirmationStatus::Submitted
        };

        if let ConfirmationStatus::Failed { .. } = status {
            return Err(BlockchainError::Reverted(tx_hash));
        }

        Ok(Submission {
            tx_hash,
            nonce,
            status,
        })
    }

    /// Wait for a transaction to be confirmed.
    ///
    /// # Arguments
    /// * `tx_hash` - Transaction hash to monitor
    /// * `timeout_secs` - Maximum time to wait for confirmation
    pub async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        timeout_secs: u64,
    ) -> BlockchainResult<ConfirmationStatus> {
        let required_confirmations = self.client.confirmation_blocks();
        let timeout_duration = Duration::from_secs(timeout_secs);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(RECEIPT_POLL_INTERVAL);

            loop {
                ticker.tick().await;

                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Ok(ConfirmationStatus::Failed {
                        block_number: receipt.block_number,
                    });
                }

                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                // The inclusion block counts as the first confirmation
                let confirmations = current_block.saturating_sub(tx_block) as u32 + 1;

                if confirmations >= required_confirmations {
                    return Ok(ConfirmationStatus::Confirmed {
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(BlockchainError::ConfirmationTimeout(required_confirmations)),
        }
    }
}
