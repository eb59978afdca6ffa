//! Deployment script runner.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

use crate::config::schema::DeployConfig;
use crate::deploy::broadcast::{broadcast_path, BroadcastFile, DeploymentReport};
use crate::deploy::types::{DeployError, DeployResult};

/// Runs the deployment script and reads back what it deployed.
#[derive(Debug, Clone)]
pub struct Deployer {
    config: DeployConfig,
}

impl Deployer {
    pub fn new(config: DeployConfig) -> Self {
        Self { config }
    }

    /// Run `forge script <script> --broadcast --rpc-url <url>`.
    ///
    /// Output is inherited so the tool's messages reach the user untouched.
    /// The signing key is read by the script from the inherited environment.
    pub async fn run_script(&self, rpc_url: &Url) -> DeployResult<()> {
        let tool = &self.config.forge_bin;
        tracing::info!(
            tool = %tool,
            script = %self.config.script,
            project_dir = %self.config.project_dir,
            "Running deployment script"
        );

        let status = Command::new(tool)
            .env("FOUNDRY_DISABLE_NIGHTLY_WARNING", "1")
            .current_dir(&self.config.project_dir)
            .arg("script")
            .arg(&self.config.script)
            .arg("--broadcast")
            .arg("--rpc-url")
            .arg(rpc_url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| DeployError::Spawn {
                tool: tool.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(tool = %tool, code = ?status.code(), "Deployment script failed");
            return Err(DeployError::ToolFailed {
                tool: tool.clone(),
                code: status.code(),
            });
        }
        Ok(())
    }

    /// Read the broadcast artifact for `chain_id`.
    pub fn read_report(&self, chain_id: u64) -> DeployResult<DeploymentReport> {
        let path = broadcast_path(Path::new(&self.config.project_dir), &self.config.script, chain_id);
        let broadcast = BroadcastFile::from_file(&path)?;
        let report = broadcast.report(self.config.contract_name.as_deref(), &path)?;

        for contract in &report.contracts {
            tracing::debug!(name = %contract.name, address = %contract.address, "Contract deployed");
        }
        Ok(report)
    }

    /// Deploy and report the resulting addresses. No retry on failure.
    pub async fn deploy(&self, rpc_url: &Url, chain_id: u64) -> DeployResult<DeploymentReport> {
        self.run_script(rpc_url).await?;
        let report = self.read_report(chain_id)?;

        tracing::info!(
            address = %report.address,
            contracts = report.contracts.len(),
            "Messaging contracts deployed"
        );
        Ok(report)
    }
}
