//! Prepared message transactions.

use alloy::primitives::{Address, Bytes, U256};
use serde::Serialize;

use crate::blockchain::{Submission, TxBuilder};
use crate::messaging::types::MessagingResult;

/// Which bridge entry point a request calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Send,
    Consume,
}

/// A fully encoded call, ready to be signed and broadcast.
///
/// Built fresh for every invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRequest {
    pub kind: MessageKind,
    /// Solidity signature of the called function.
    pub function: &'static str,
    /// Messaging contract receiving the transaction.
    pub to: Address,
    /// Attached value in wei.
    pub value: U256,
    /// Cross-domain contract address argument.
    pub contract_address: U256,
    /// Selector argument, `send` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<U256>,
    pub payload: Vec<U256>,
    pub calldata: Bytes,
}

impl MessageRequest {
    /// Sign and broadcast the request once.
    pub async fn submit(&self, builder: &TxBuilder) -> MessagingResult<Submission> {
        tracing::info!(
            kind = ?self.kind,
            function = self.function,
            to = %self.to,
            value = %self.value,
            payload_len = self.payload.len(),
            "Submitting message transaction"
        );

        let submission = builder
            .submit(self.to, self.value, self.calldata.clone())
            .await?;

        tracing::info!(
            tx_hash = %submission.tx_hash,
            nonce = submission.nonce,
            status = ?submission.status,
            "Message transaction submitted"
        );
        Ok(submission)
    }
}
