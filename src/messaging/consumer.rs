//! `consumeMessage` invocation.

use alloy::primitives::U256;
use alloy::sol_types::SolCall;

use crate::config::env::MessagingTarget;
use crate::messaging::contract::IMessagingContract::consumeMessageCall;
use crate::messaging::payload::Payload;
use crate::messaging::request::{MessageKind, MessageRequest};

/// Consumes messages sent from the configured L2 contract.
#[derive(Debug, Clone)]
pub struct MessageConsumer {
    target: MessagingTarget,
}

impl MessageConsumer {
    pub fn new(target: MessagingTarget) -> Self {
        Self { target }
    }

    /// Encode `consumeMessage`. No value is attached.
    pub fn prepare(&self, payload: &Payload) -> MessageRequest {
        let call = consumeMessageCall {
            fromAddress: self.target.l2_contract,
            payload: payload.values().to_vec(),
        };

        MessageRequest {
            kind: MessageKind::Consume,
            function: consumeMessageCall::SIGNATURE,
            to: self.target.l1_contract,
            value: U256::ZERO,
            contract_address: self.target.l2_contract,
            selector: None,
            payload: payload.values().to_vec(),
            calldata: call.abi_encode().into(),
        }
    }
}
