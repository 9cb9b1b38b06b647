// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use poht_tools::{
    core::{
        artifact::{HardhatArtifacts, DEFAULT_ARTIFACTS_DIR},
        deployment::{
            args::{
                DEFAULT_API_ADDRESS_URL, DEFAULT_API_AUTHOR_URL, DEFAULT_FEE, DEFAULT_FEE_POWER,
            },
            ConstructorLayout, DeploymentConfig, OracleParams, TransactionConfig,
            DEFAULT_CONTRACT,
        },
    },
    ops,
};

use crate::{
    common_args::{AuthArgs, NetworkArgs, ProviderArgs, SecretsArgs},
    error::PohtDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,

    /// Name of the compiled contract to deploy
    #[arg(long, default_value = DEFAULT_CONTRACT)]
    contract: String,
    /// Directory holding the Hardhat compilation artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts: PathBuf,
    /// Constructor declared by the contract
    #[arg(long, value_enum, default_value_t)]
    constructor: ConstructorLayout,

    /// Oracle fee mantissa (oracle constructor only)
    #[arg(long, default_value_t = DEFAULT_FEE)]
    fee: u64,
    /// Oracle fee exponent (oracle constructor only)
    #[arg(long, default_value_t = DEFAULT_FEE_POWER)]
    fee_power: u8,
    /// Endpoint resolving a profile's address (oracle constructor only)
    #[arg(long, default_value = DEFAULT_API_ADDRESS_URL)]
    api_address_url: String,
    /// Endpoint resolving a tweet's author (oracle constructor only)
    #[arg(long, default_value = DEFAULT_API_AUTHOR_URL)]
    api_author_url: String,

    /// Number of blocks to wait for, counting the one the deployment is mined in
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    confirmations: Option<u64>,
    /// Seconds to wait for the deployment to be mined
    #[arg(long)]
    timeout: Option<u64>,
    /// Print the deployment as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    secrets: SecretsArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

impl Args {
    fn deployment_config(&self) -> DeploymentConfig {
        DeploymentConfig {
            contract: self.contract.clone(),
            constructor: self.constructor,
            oracle: OracleParams {
                fee: self.fee,
                fee_power: self.fee_power,
                api_address_url: self.api_address_url.clone(),
                api_author_url: self.api_author_url.clone(),
            },
        }
    }

    fn tx_config(&self) -> eyre::Result<TransactionConfig> {
        Ok(TransactionConfig {
            max_fee_per_gas_wei: self.auth.get_max_fee_per_gas_wei()?,
            required_confirmations: self.confirmations,
            confirmation_timeout: self.timeout.map(Duration::from_secs),
        })
    }
}

pub async fn exec(args: Args) -> PohtDeployResult {
    let network = args.network.network()?;
    let config = args.deployment_config();
    let tx_config = args.tx_config()?;
    let artifacts = HardhatArtifacts::new(&args.artifacts);
    ops::check_artifact(network, &config, &artifacts)?;

    let secrets = args.secrets.load()?;
    let provider = args
        .provider
        .build_provider_with_wallet(network, &args.auth, &secrets)
        .await?;

    let deployment = ops::deploy(network, config, artifacts, tx_config, &provider).await?;
    ops::print_deployment(&deployment, args.json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    #[test]
    fn defaults_deploy_poh_twitter_to_kovan() {
        let args = Cli::parse_from(["poht"]).args;
        assert_eq!(args.network.network().unwrap().name, "kovan");

        let config = args.deployment_config();
        assert_eq!(config.contract, "PoHTwitterV5");
        assert_eq!(config.constructor, ConstructorLayout::Empty);
        assert_eq!(config.oracle, OracleParams::default());
        assert_eq!(args.artifacts, PathBuf::from("artifacts"));

        let tx = args.tx_config().unwrap();
        assert_eq!(tx.required_confirmations, None);
        assert_eq!(tx.confirmation_timeout, None);
    }

    #[test]
    fn oracle_flags_reach_the_config() {
        let args = Cli::parse_from([
            "poht",
            "--network",
            "rinkeby",
            "--constructor",
            "oracle",
            "--fee",
            "5",
            "--fee-power",
            "18",
            "--timeout",
            "90",
        ])
        .args;

        let config = args.deployment_config();
        assert_eq!(config.constructor, ConstructorLayout::Oracle);
        assert_eq!(config.oracle.fee, 5);
        assert_eq!(config.oracle.fee_power, 18);
        assert_eq!(
            args.tx_config().unwrap().confirmation_timeout,
            Some(Duration::from_secs(90))
        );
    }

    #[test]
    fn confirmations_must_be_positive() {
        assert!(Cli::try_parse_from(["poht", "--confirmations", "0"]).is_err());
        let args = Cli::try_parse_from(["poht", "--confirmations", "3"])
            .unwrap()
            .args;
        assert_eq!(args.tx_config().unwrap().required_confirmations, Some(3));
    }
}
