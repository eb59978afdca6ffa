//! Shared utilities for integration testing.

use alloy::primitives::{keccak256, Bytes};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use messaging_bridge::config::{BridgeConfig, Requirement, Settings};

// Anvil's first account
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const L1_CONTRACT: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";
pub const L2_CONTRACT: &str = "0x0429a64d97c1422a37a09fc7406f35c264be59b744aaff5a79d59393eb1bc7e1";

/// What the mock endpoint has seen.
#[derive(Default)]
pub struct RpcState {
    pub chain_id: u64,
    pub nonce: AtomicU64,
    pub requests: AtomicU64,
    pub raw_txs: Mutex<Vec<Bytes>>,
    /// Error object returned for `eth_estimateGas`, if set.
    pub estimate_gas_error: Mutex<Option<Value>>,
    /// Receipt status served for every hash; `None` means still pending.
    pub receipt_status: Mutex<Option<u64>>,
}

pub struct MockRpc {
    pub url: String,
    pub state: Arc<RpcState>,
}

#[allow(dead_code)]
impl MockRpc {
    pub fn requests(&self) -> u64 {
        self.state.requests.load(Ordering::SeqCst)
    }

    pub fn raw_txs(&self) -> Vec<Bytes> {
        self.state.raw_txs.lock().unwrap().clone()
    }

    /// Make gas estimation fail the way a reverting call does.
    pub fn revert_estimate_gas(&self, reason: &str) {
        *self.state.estimate_gas_error.lock().unwrap() = Some(json!({
            "code": 3,
            "message": format!("execution reverted: {}", reason),
        }));
    }

    /// Serve mined receipts with the given status (1 success, 0 reverted).
    pub fn serve_receipts(&self, status: u64) {
        *self.state.receipt_status.lock().unwrap() = Some(status);
    }
}

/// Start a JSON-RPC endpoint on an ephemeral port.
///
/// Answers the handful of calls a message submission makes. Receipts stay
/// pending until [`MockRpc::serve_receipts`] is called.
pub async fn start_mock_rpc(chain_id: u64) -> MockRpc {
    let state = Arc::new(RpcState {
        chain_id,
        ..RpcState::default()
    });
    let app = Router::new()
        .route("/", post(handle))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockRpc {
        url: format!("http://{}", addr),
        state,
    }
}

async fn handle(State(state): State<Arc<RpcState>>, Json(body): Json<Value>) -> Json<Value> {
    match body {
        Value::Array(calls) => Json(Value::Array(
            calls.iter().map(|call| respond(&state, call)).collect(),
        )),
        call => Json(respond(&state, &call)),
    }
}

fn respond(state: &RpcState, call: &Value) -> Value {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let id = call["id"].clone();

    let result = match call["method"].as_str().unwrap_or_default() {
        "eth_chainId" => json!(format!("0x{:x}", state.chain_id)),
        "eth_getTransactionCount" => {
            json!(format!("0x{:x}", state.nonce.load(Ordering::SeqCst)))
        }
        "eth_gasPrice" => json!("0x3b9aca00"),
        "eth_estimateGas" => match state.estimate_gas_error.lock().unwrap().clone() {
            Some(error) => return json!({ "jsonrpc": "2.0", "id": id, "error": error }),
            None => json!("0x186a0"),
        },
        "eth_blockNumber" => json!("0x10"),
        "eth_sendRawTransaction" => {
            let raw = call["params"][0].as_str().unwrap_or_default();
            let raw = Bytes::from(alloy::primitives::hex::decode(raw).unwrap());
            let hash = keccak256(&raw);
            state.raw_txs.lock().unwrap().push(raw);
            state.nonce.fetch_add(1, Ordering::SeqCst);
            json!(hash)
        }
        "eth_getTransactionReceipt" => match *state.receipt_status.lock().unwrap() {
            Some(status) => receipt(&call["params"][0], status),
            None => Value::Null,
        },
        other => {
            return json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": format!("method not found: {}", other) },
            })
        }
    };

    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn receipt(tx_hash: &Value, status: u64) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": format!("0x{}", "ab".repeat(32)),
        "blockNumber": "0x10",
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": L1_CONTRACT,
        "cumulativeGasUsed": "0x186a0",
        "gasUsed": "0x186a0",
        "effectiveGasPrice": "0x3b9aca00",
        "contractAddress": null,
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "status": format!("0x{:x}", status),
        "type": "0x0",
    })
}

/// Config for every key, pointed at `rpc_url`.
#[allow(dead_code)]
pub fn bridge_config(rpc_url: &str, extra: &[(&str, &str)]) -> BridgeConfig {
    let mut pairs: Vec<(String, String)> = vec![
        ("ETH_RPC_URL".into(), rpc_url.into()),
        ("ACCOUNT_PRIVATE_KEY".into(), TEST_PRIVATE_KEY.into()),
        ("L1_CONTRACT_ADDRESS".into(), L1_CONTRACT.into()),
        ("L2_CONTRACT_ADDRESS".into(), L2_CONTRACT.into()),
    ];
    pairs.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    BridgeConfig::from_lookup(Requirement::EndpointAndTarget, move |key: &str| {
        pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    })
    .unwrap()
}

/// Settings that broadcast without waiting for receipts.
#[allow(dead_code)]
pub fn fire_and_forget() -> Settings {
    let mut settings = Settings::default();
    settings.blockchain.wait_for_receipt = false;
    settings.blockchain.rpc_timeout_secs = 5;
    settings
}

/// Settings that wait for one confirmation.
#[allow(dead_code)]
pub fn confirmed() -> Settings {
    let mut settings = Settings::default();
    settings.blockchain.wait_for_receipt = true;
    settings.blockchain.confirmation_blocks = 1;
    settings.blockchain.receipt_timeout_secs = 10;
    settings.blockchain.rpc_timeout_secs = 5;
    settings
}

/// Fresh scratch directory under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "messaging-bridge-it-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
