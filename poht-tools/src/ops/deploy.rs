// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use alloy::providers::{Provider, WalletProvider};

use crate::{
    core::{
        artifact::HardhatArtifacts,
        deployment::{
            ChainDeployer, Deployment, DeploymentConfig, DeploymentError, DeploymentRunner,
            TransactionConfig,
        },
        network::NetworkConfig,
    },
    utils::{color::DebugColor, format_ether},
    Result,
};

/// Loads the contract's artifact, so that a missing build is reported before any network call.
pub fn check_artifact(
    network: &NetworkConfig,
    config: &DeploymentConfig,
    artifacts: &HardhatArtifacts,
) -> Result<()> {
    artifacts
        .load(&config.contract)
        .map_err(|source| DeploymentError::Artifact {
            network: network.name.to_string(),
            contract: config.contract.clone(),
            source,
        })?;
    Ok(())
}

/// Deploys the configured contract to a network through the given provider.
///
/// The provider must be connected to the network's chain; its wallet pays for the deployment.
pub async fn deploy(
    network: &NetworkConfig,
    config: DeploymentConfig,
    artifacts: HardhatArtifacts,
    tx_config: TransactionConfig,
    provider: &(impl Provider + WalletProvider + Clone),
) -> Result<Deployment> {
    let chain_id = provider.get_chain_id().await?;
    network.check_chain_id(chain_id)?;

    let sender = provider.default_signer_address();
    let balance = provider.get_balance(sender).await?;
    debug!(@grey, "sender address: {}", sender.debug_lavender());
    debug!(@grey, "sender balance: {}", format_ether(balance));

    let deployer = ChainDeployer::new(artifacts, provider.clone(), tx_config);
    let runner = DeploymentRunner::new(deployer, config);
    Ok(runner.run(network).await?)
}

/// Prints the deployed address, as one line of text or as JSON.
pub fn print_deployment(deployment: &Deployment, json: bool) -> Result<()> {
    println!("{}", render_deployment(deployment, json)?);
    Ok(())
}

fn render_deployment(deployment: &Deployment, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(deployment)?)
    } else {
        Ok(format!(
            "{} deployed to: {}",
            deployment.contract, deployment.address
        ))
    }
}
