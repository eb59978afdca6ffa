//! Broadcast artifact parsing.
//!
//! `forge script --broadcast` writes
//! `broadcast/<script file>/<chain id>/run-latest.json` listing every
//! transaction it sent and the matching receipts.

use alloy::primitives::{Address, TxHash, U64};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::deploy::types::{DeployError, DeployResult};

#[derive(Debug, Deserialize)]
pub struct BroadcastFile {
    pub transactions: Vec<BroadcastTransaction>,
    #[serde(default)]
    pub receipts: Vec<BroadcastReceipt>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastTransaction {
    pub hash: Option<TxHash>,
    pub transaction_type: String,
    pub contract_name: Option<String>,
    pub contract_address: Option<Address>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<U64>,
    pub status: Option<U64>,
    pub contract_address: Option<Address>,
}

/// A contract created by the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployedContract {
    pub name: String,
    pub address: Address,
}

/// Receipt summary for one deployment transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptSummary {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub success: bool,
}

/// What a deployment produced.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentReport {
    /// Address of the primary contract.
    pub address: Address,
    pub contracts: Vec<DeployedContract>,
    pub receipts: Vec<ReceiptSummary>,
    pub broadcast_file: PathBuf,
}

impl BroadcastFile {
    /// Load from file path
    pub fn from_file(path: &Path) -> DeployResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DeployError::Broadcast {
            path: path.to_path_buf(),
            reason: source.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| DeployError::Broadcast {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// All contracts created by CREATE or CREATE2 transactions, in broadcast order.
    pub fn deployed_contracts(&self) -> Vec<DeployedContract> {
        self.transactions
            .iter()
            .filter(|tx| matches!(tx.transaction_type.as_str(), "CREATE" | "CREATE2"))
            .filter_map(|tx| {
                Some(DeployedContract {
                    name: tx.contract_name.clone()?,
                    address: tx.contract_address?,
                })
            })
            .collect()
    }

    pub fn receipt_summaries(&self) -> Vec<ReceiptSummary> {
        self.receipts
            .iter()
            .map(|r| ReceiptSummary {
                tx_hash: r.transaction_hash,
                block_number: r.block_number.map(|n| n.to::<u64>()),
                success: r.status.map(|s| s == U64::from(1)).unwrap_or(false),
            })
            .collect()
    }

    /// Build a report, picking `contract_name` or the last contract created.
    pub fn report(&self, contract_name: Option<&str>, path: &Path) -> DeployResult<DeploymentReport> {
        let contracts = self.deployed_contracts();

        let primary = match contract_name {
            Some(name) => contracts.iter().rev().find(|c| c.name == name),
            None => contracts.last(),
        }
        .ok_or_else(|| DeployError::ContractNotFound {
            name: contract_name.unwrap_or("<any>").to_string(),
            path: path.to_path_buf(),
        })?;

        Ok(DeploymentReport {
            address: primary.address,
            contracts: contracts.clone(),
            receipts: self.receipt_summaries(),
            broadcast_file: path.to_path_buf(),
        })
    }
}

/// Location forge writes the latest run of `script` to.
///
/// `script` is the `path:Contract` target passed to `forge script`.
pub fn broadcast_path(project_dir: &Path, script: &str, chain_id: u64) -> PathBuf {
    let script_path = script.split(':').next().unwrap_or(script);
    let file_name = Path::new(script_path)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| script_path.to_string());

    project_dir
        .join("broadcast")
        .join(file_name)
        .join(chain_id.to_string())
        .join("run-latest.json")
}
