//! Command handlers behind the CLI.
//!
//! Each handler takes settings and an already-resolved [`BridgeConfig`],
//! so nothing here reads the process environment.

use serde::Serialize;

use crate::blockchain::{BlockchainClient, BlockchainError, Submission};
use crate::config::env::DEFAULT_CHAIN_ID;
use crate::config::{BlockchainConfig, BridgeConfig, Settings};
use crate::deploy::{Deployer, DeploymentReport};
use crate::error::BridgeResult;
use crate::lifecycle::connect;
use crate::messaging::{MessageConsumer, MessageRequest, MessageSender, Payload, Selector};

/// Result of a message command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dry run: encoded but never sent.
    Prepared(MessageRequest),
    /// Broadcast once.
    Submitted(Submission),
}

fn blockchain_settings(settings: &Settings, config: &BridgeConfig) -> BlockchainConfig {
    let mut blockchain = settings.blockchain.clone();
    config.apply_to(&mut blockchain);
    blockchain
}

/// Run the deployment script against `ETH_RPC_URL`.
pub async fn deploy_messaging_contracts(
    settings: &Settings,
    config: &BridgeConfig,
) -> BridgeResult<DeploymentReport> {
    let endpoint = config.endpoint()?;
    let blockchain = blockchain_settings(settings, config);
    let configured = blockchain.chain_id;

    // The broadcast artifact is filed under the chain id. When the node
    // cannot be asked, let the script fail on its own terms.
    let client = BlockchainClient::new(blockchain).await?;
    let chain_id = match client.verify_chain_id().await {
        Ok(chain_id) => chain_id.0,
        Err(e @ BlockchainError::ChainMismatch { .. }) => return Err(e.into()),
        Err(e) => {
            let fallback = configured.unwrap_or(DEFAULT_CHAIN_ID);
            tracing::warn!(error = %e, chain_id = fallback, "Could not fetch chain ID, assuming");
            fallback
        }
    };

    let deployer = Deployer::new(settings.deploy.clone());
    Ok(deployer.deploy(&endpoint.rpc_url, chain_id).await?)
}

/// Send one message to the cross-domain contract.
pub async fn send_msg(
    settings: &Settings,
    config: &BridgeConfig,
    selector_str: &str,
    payload: &Payload,
    dry_run: bool,
) -> BridgeResult<Outcome> {
    let sender = MessageSender::new(config.target()?.clone());
    let request = sender.prepare(selector_str, payload)?;
    if dry_run {
        return Ok(Outcome::Prepared(request));
    }

    let endpoint = config.endpoint()?;
    let builder = connect(blockchain_settings(settings, config), endpoint).await?;
    Ok(Outcome::Submitted(request.submit(&builder).await?))
}

/// Consume one message previously sent from the other domain.
pub async fn consume_msg(
    settings: &Settings,
    config: &BridgeConfig,
    payload: &Payload,
    dry_run: bool,
) -> BridgeResult<Outcome> {
    let consumer = MessageConsumer::new(config.target()?.clone());
    let request = consumer.prepare(payload);
    if dry_run {
        return Ok(Outcome::Prepared(request));
    }

    let endpoint = config.endpoint()?;
    let builder = connect(blockchain_settings(settings, config), endpoint).await?;
    Ok(Outcome::Submitted(request.submit(&builder).await?))
}

/// Pretty JSON for anything printed to stdout.
pub fn render<T: Serialize>(value: &T) -> BridgeResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Selector for a function name, printed in full hex.
pub fn selector(name: &str) -> BridgeResult<Selector> {
    Ok(Selector::from_name(name)?)
}

/// Usage examples for the message commands.
pub fn usage() -> &'static str {
    r#"Deploy the messaging contracts (reads ETH_RPC_URL and ACCOUNT_PRIVATE_KEY):
    messaging-bridge deploy-messaging-contracts

Send a message to the L2 contract (L1_CONTRACT_ADDRESS, L2_CONTRACT_ADDRESS):
    messaging-bridge send-msg --selector-str func_name --payload "[1,2]"

Consume a message sent from L2:
    messaging-bridge consume-msg --payload "[1,2]"

Preview the transaction without sending it:
    messaging-bridge send-msg --selector-str func_name --payload "[1,2]" --dry-run

Print the selector for a function name:
    messaging-bridge selector func_name

Payload elements may be decimal or 0x-prefixed hex, separated by commas or spaces.
Keys are read from .env unless --env-file says otherwise."#
}
