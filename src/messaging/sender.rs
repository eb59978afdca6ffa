//! `sendMessage` invocation.

use alloy::sol_types::SolCall;

use crate::config::env::MessagingTarget;
use crate::messaging::contract::IMessagingContract::sendMessageCall;
use crate::messaging::payload::Payload;
use crate::messaging::request::{MessageKind, MessageRequest};
use crate::messaging::selector::Selector;
use crate::messaging::types::MessagingResult;

/// Sends messages to the configured L2 contract.
#[derive(Debug, Clone)]
pub struct MessageSender {
    target: MessagingTarget,
}

impl MessageSender {
    pub fn new(target: MessagingTarget) -> Self {
        Self { target }
    }

    /// Derive the selector and encode `sendMessage`, without touching the network.
    pub fn prepare(&self, selector_name: &str, payload: &Payload) -> MessagingResult<MessageRequest> {
        let selector = Selector::from_name(selector_name)?;
        tracing::debug!(name = selector_name, selector = %selector, "Selector derived");

        let call = sendMessageCall {
            contractAddress: self.target.l2_contract,
            selector: selector.as_u256(),
            payload: payload.values().to_vec(),
        };

        Ok(MessageRequest {
            kind: MessageKind::Send,
            function: sendMessageCall::SIGNATURE,
            to: self.target.l1_contract,
            value: self.target.message_value,
            contract_address: self.target.l2_contract,
            selector: Some(selector.as_u256()),
            payload: payload.values().to_vec(),
            calldata: call.abi_encode().into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    fn target() -> MessagingTarget {
        MessagingTarget {
            l1_contract: "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".parse().unwrap(),
            l2_contract: U256::from(0x1234),
            message_value: U256::from(1),
        }
    }

    #[test]
    fn test_prepare_encodes_arguments() {
        let sender = MessageSender::new(target());
        let payload: Payload = "[1,2]".parse().unwrap();
        let request = sender.prepare("func_name", &payload).unwrap();

        assert_eq!(request.to, target().l1_contract);
        assert_eq!(request.value, U256::from(1));

        let decoded = sendMessageCall::abi_decode(&request.calldata).unwrap();
        assert_eq!(decoded.contractAddress, U256::from(0x1234));
        assert_eq!(
            decoded.selector,
            Selector::from_name("func_name").unwrap().as_u256()
        );
        assert_eq!(decoded.payload, vec![U256::from(1), U256::from(2)]);
    }

    #[test]
    fn test_prepare_is_pure() {
        let sender = MessageSender::new(target());
        let payload: Payload = "[7]".parse().unwrap();
        assert_eq!(
            sender.prepare("msg_handler_value", &payload).unwrap(),
            sender.prepare("msg_handler_value", &payload).unwrap()
        );
    }

    #[test]
    fn test_prepare_rejects_bad_selector() {
        let sender = MessageSender::new(target());
        assert!(sender.prepare("", &Payload::default()).is_err());
    }
}
