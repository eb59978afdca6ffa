//! End-to-end message submission against a mock JSON-RPC endpoint.

use alloy::consensus::{Transaction, TxEnvelope};
use alloy::eips::eip2718::Decodable2718;
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use std::sync::atomic::Ordering;

use messaging_bridge::blockchain::{BlockchainError, ConfirmationStatus};
use messaging_bridge::commands::{self, Outcome};
use messaging_bridge::config::{BridgeConfig, ConfigError, Requirement};
use messaging_bridge::messaging::contract::IMessagingContract::{consumeMessageCall, sendMessageCall};
use messaging_bridge::messaging::{MessagingError, Payload, Selector};
use messaging_bridge::BridgeError;

mod common;

fn decode(raw: &Bytes) -> TxEnvelope {
    TxEnvelope::decode_2718(&mut raw.as_ref()).unwrap()
}

fn l1_contract() -> Address {
    common::L1_CONTRACT.parse().unwrap()
}

fn l2_contract() -> U256 {
    common::L2_CONTRACT.parse().unwrap()
}

fn payload(text: &str) -> Payload {
    text.parse().unwrap()
}

#[tokio::test]
async fn test_send_msg_encodes_selector_and_payload() {
    let rpc = common::start_mock_rpc(31337).await;
    let config = common::bridge_config(&rpc.url, &[]);

    let outcome = commands::send_msg(
        &common::fire_and_forget(),
        &config,
        "func_name",
        &payload("[1,2]"),
        false,
    )
    .await
    .unwrap();

    let Outcome::Submitted(submission) = outcome else {
        panic!("expected a submitted transaction");
    };
    assert_eq!(submission.status, ConfirmationStatus::Submitted);
    assert_eq!(submission.nonce, 0);

    let raw_txs = rpc.raw_txs();
    assert_eq!(raw_txs.len(), 1);
    let tx = decode(&raw_txs[0]);
    assert_eq!(*tx.tx_hash(), submission.tx_hash);
    assert_eq!(tx.to(), Some(l1_contract()));
    assert_eq!(tx.value(), U256::from(1));
    assert_eq!(tx.chain_id(), Some(31337));

    let call = sendMessageCall::abi_decode(tx.input()).unwrap();
    assert_eq!(call.contractAddress, l2_contract());
    assert_eq!(call.selector, Selector::from_name("func_name").unwrap().as_u256());
    assert_eq!(call.payload, vec![U256::from(1), U256::from(2)]);
}

#[tokio::test]
async fn test_send_msg_uses_configured_value() {
    let rpc = common::start_mock_rpc(31337).await;
    let config = common::bridge_config(&rpc.url, &[("MESSAGE_VALUE_WEI", "30000")]);

    commands::send_msg(&common::fire_and_forget(), &config, "deposit", &payload("[7]"), false)
        .await
        .unwrap();

    let tx = decode(&rpc.raw_txs()[0]);
    assert_eq!(tx.value(), U256::from(30000));
}

#[tokio::test]
async fn test_consume_msg_attaches_no_value() {
    let rpc = common::start_mock_rpc(31337).await;
    let config = common::bridge_config(&rpc.url, &[]);

    commands::consume_msg(&common::fire_and_forget(), &config, &payload("[1,2]"), false)
        .await
        .unwrap();

    let raw_txs = rpc.raw_txs();
    assert_eq!(raw_txs.len(), 1);
    let tx = decode(&raw_txs[0]);
    assert_eq!(tx.to(), Some(l1_contract()));
    assert_eq!(tx.value(), U256::ZERO);

    let call = consumeMessageCall::abi_decode(tx.input()).unwrap();
    assert_eq!(call.fromAddress, l2_contract());
    assert_eq!(call.payload, vec![U256::from(1), U256::from(2)]);
}

#[tokio::test]
async fn test_repeated_sends_are_independent() {
    let rpc = common::start_mock_rpc(31337).await;
    let config = common::bridge_config(&rpc.url, &[]);
    let settings = common::fire_and_forget();

    for _ in 0..2 {
        commands::send_msg(&settings, &config, "func_name", &payload("[1,2]"), false)
            .await
            .unwrap();
    }

    let txs: Vec<TxEnvelope> = rpc.raw_txs().iter().map(decode).collect();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].nonce(), 0);
    assert_eq!(txs[1].nonce(), 1);
    assert_ne!(txs[0].tx_hash(), txs[1].tx_hash());
    assert_eq!(txs[0].input(), txs[1].input());
}

#[tokio::test]
async fn test_chain_mismatch_sends_nothing() {
    let rpc = common::start_mock_rpc(31337).await;
    let config = common::bridge_config(&rpc.url, &[("ETH_CHAIN_ID", "1")]);

    let err = commands::send_msg(
        &common::fire_and_forget(),
        &config,
        "func_name",
        &payload("[1]"),
        false,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Chain ID mismatch"), "{err}");
    assert_eq!(err.exit_code(), 1);
    assert!(rpc.raw_txs().is_empty());
}

#[tokio::test]
async fn test_invalid_selector_fails_before_network() {
    let rpc = common::start_mock_rpc(31337).await;
    let config = common::bridge_config(&rpc.url, &[]);

    let err = commands::send_msg(
        &common::fire_and_forget(),
        &config,
        "transfér",
        &payload("[1]"),
        false,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BridgeError::Messaging(_)));
    assert_eq!(rpc.requests(), 0);
}

#[tokio::test]
async fn test_missing_keys_fail_before_network() {
    let rpc = common::start_mock_rpc(31337).await;
    let url = rpc.url.clone();

    let err = BridgeConfig::from_lookup(Requirement::EndpointAndTarget, move |key: &str| {
        (key == "ETH_RPC_URL").then(|| url.clone())
    })
    .unwrap_err();

    match err {
        ConfigError::MissingKeys(keys) => assert_eq!(
            keys,
            vec!["ACCOUNT_PRIVATE_KEY", "L1_CONTRACT_ADDRESS", "L2_CONTRACT_ADDRESS"]
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(rpc.requests(), 0);
}

#[tokio::test]
async fn test_nonce_comes_from_chain() {
    let rpc = common::start_mock_rpc(31337).await;
    rpc.state.nonce.store(5, Ordering::SeqCst);
    let config = common::bridge_config(&rpc.url, &[]);

    let outcome = commands::send_msg(
        &common::fire_and_forget(),
        &config,
        "func_name",
        &payload("[1]"),
        false,
    )
    .await
    .unwrap();

    let Outcome::Submitted(submission) = outcome else {
        panic!("expected a submitted transaction");
    };
    assert_eq!(submission.nonce, 5);
    assert_eq!(decode(&rpc.raw_txs()[0]).nonce(), 5);
}

#[tokio::test]
async fn test_node_error_is_surfaced_without_failover() {
    let rpc = common::start_mock_rpc(31337).await;
    let backup = common::start_mock_rpc(31337).await;
    rpc.revert_estimate_gas("INVALID_MESSAGE_TO_CONSUME");
    let config = common::bridge_config(&rpc.url, &[("ETH_FAILOVER_RPC_URLS", backup.url.as_str())]);

    let err = commands::consume_msg(&common::fire_and_forget(), &config, &payload("[1,2]"), false)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("INVALID_MESSAGE_TO_CONSUME"), "{message}");
    assert!(message.contains("eth_estimateGas"), "{message}");
    assert_eq!(backup.requests(), 0);
    assert!(rpc.raw_txs().is_empty());
}

#[tokio::test]
async fn test_send_waits_for_confirmation() {
    let rpc = common::start_mock_rpc(31337).await;
    rpc.serve_receipts(1);
    let config = common::bridge_config(&rpc.url, &[]);

    let outcome = commands::send_msg(&common::confirmed(), &config, "func_name", &payload("[1,2]"), false)
        .await
        .unwrap();

    let Outcome::Submitted(submission) = outcome else {
        panic!("expected a submitted transaction");
    };
    assert_eq!(submission.status, ConfirmationStatus::Confirmed { block_number: 16 });
    assert_eq!(rpc.raw_txs().len(), 1);
}

#[tokio::test]
async fn test_reverted_receipt_is_an_error() {
    let rpc = common::start_mock_rpc(31337).await;
    rpc.serve_receipts(0);
    let config = common::bridge_config(&rpc.url, &[]);

    let err = commands::consume_msg(&common::confirmed(), &config, &payload("[1,2]"), false)
        .await
        .unwrap_err();

    let tx_hash = *decode(&rpc.raw_txs()[0]).tx_hash();
    match err {
        BridgeError::Messaging(MessagingError::Blockchain(BlockchainError::Reverted(hash))) => {
            assert_eq!(hash, tx_hash)
        }
        other => panic!("unexpected error: {other}"),
    }
}
