//! Startup orchestration.
//!
//! Turns a resolved endpoint into a ready-to-use transaction builder.
//! The key is parsed before any request so a bad key never reaches the
//! network.

use crate::blockchain::{BlockchainClient, TxBuilder, Wallet};
use crate::config::env::Endpoint;
use crate::config::BlockchainConfig;
use crate::error::BridgeResult;

/// Connect to the endpoint and load the signing key.
///
/// The wallet signs for whatever chain the endpoint reports. A configured
/// chain ID that disagrees is an error.
pub async fn connect(blockchain: BlockchainConfig, endpoint: &Endpoint) -> BridgeResult<TxBuilder> {
    let wallet = Wallet::from_secret(&endpoint.private_key, blockchain.chain_id.unwrap_or_default())?;
    let client = BlockchainClient::new(blockchain).await?;
    let chain_id = client.verify_chain_id().await?;
    let wallet = wallet.with_chain_id(chain_id.0);

    tracing::info!(
        chain_id = chain_id.0,
        address = %wallet.address(),
        "Connected"
    );
    Ok(TxBuilder::new(client, wallet))
}
