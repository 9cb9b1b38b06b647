// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{bail, eyre, Context};
use poht_tools::core::network::{NetworkConfig, NetworkError, NetworkRegistry, DEFAULT_NETWORK};

use crate::{
    constants::{DEFAULT_SECRETS_PATH, DEPLOYER_KEY, NODE_URL_SUFFIX},
    secrets::Secrets,
    utils::{convert_gwei_to_wei, parse_private_key},
};

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to deploy to
    #[arg(short, long, default_value = DEFAULT_NETWORK)]
    pub network: String,
}

impl NetworkArgs {
    pub fn network(&self) -> Result<&'static NetworkConfig, NetworkError> {
        NetworkRegistry::get(&self.network)
    }
}

#[derive(Debug, clap::Args)]
pub struct SecretsArgs {
    /// JSON file holding `deployer_key` and `<network>_node_url` entries.
    ///
    /// Defaults to `secret.json` in the working directory when that file exists.
    #[arg(long)]
    secrets: Option<PathBuf>,
}

impl SecretsArgs {
    pub fn load(&self) -> eyre::Result<Secrets> {
        match &self.secrets {
            Some(path) => Secrets::load(path),
            None if PathBuf::from(DEFAULT_SECRETS_PATH).is_file() => {
                Secrets::load(DEFAULT_SECRETS_PATH)
            }
            None => Ok(Secrets::default()),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Builds the deployer wallet, preferring explicit flags over the secrets file.
    fn build_wallet(&self, chain_id: u64, secrets: &Secrets) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            return wallet_from_key(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return wallet_from_key(&key, chain_id);
        }

        if let Some(keystore) = &self.keystore_path {
            let password = self
                .keystore_password_path
                .as_ref()
                .map(fs::read_to_string)
                .unwrap_or(Ok("".into()))?;
            let signer = LocalSigner::decrypt_keystore(keystore, password.trim_end())?
                .with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        match secrets.deployer_key() {
            Some(key) => wallet_from_key(key, chain_id),
            None => bail!(
                "no deployer credentials: pass --private-key, --private-key-path or \
                 --keystore-path, or set {DEPLOYER_KEY} in the secrets file"
            ),
        }
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn wallet_from_key(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let signer =
        PrivateKeySigner::from_bytes(&parse_private_key(key)?)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Ethereum RPC endpoint. Defaults to `<network>_node_url` from the secrets file
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

impl ProviderArgs {
    pub fn endpoint(&self, network: &NetworkConfig, secrets: &Secrets) -> eyre::Result<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        secrets
            .node_url(network.name)
            .map(str::to_string)
            .ok_or_else(|| {
                eyre!(
                    "no RPC endpoint for network {}: pass --endpoint or set {}{} in the secrets file",
                    network.name,
                    network.name,
                    NODE_URL_SUFFIX
                )
            })
    }

    pub async fn build_provider_with_wallet(
        &self,
        network: &NetworkConfig,
        auth: &AuthArgs,
        secrets: &Secrets,
    ) -> eyre::Result<impl Provider + WalletProvider + Clone> {
        let endpoint = self.endpoint(network, secrets)?;
        let provider = ProviderBuilder::new().connect(&endpoint).await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id, secrets)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&endpoint)
            .await?;
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        network: NetworkArgs,
        #[command(flatten)]
        auth: AuthArgs,
        #[command(flatten)]
        provider: ProviderArgs,
    }

    fn secrets(json: &str) -> Secrets {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn network_defaults_to_kovan() {
        let cli = Cli::parse_from(["poht"]);
        assert_eq!(cli.network.network().unwrap().name, "kovan");
        assert!(Cli::parse_from(["poht", "-n", "goerli"])
            .network
            .network()
            .is_err());
    }

    #[test]
    fn endpoint_flag_wins_over_secrets() {
        let kovan = NetworkRegistry::get("kovan").unwrap();
        let secrets = secrets(r#"{"kovan_node_url": "https://from-secrets"}"#);

        let cli = Cli::parse_from(["poht", "--endpoint", "http://localhost:8545"]);
        assert_eq!(
            cli.provider.endpoint(kovan, &secrets).unwrap(),
            "http://localhost:8545"
        );

        let cli = Cli::parse_from(["poht"]);
        assert_eq!(
            cli.provider.endpoint(kovan, &secrets).unwrap(),
            "https://from-secrets"
        );

        let rinkeby = NetworkRegistry::get("rinkeby").unwrap();
        let err = cli.provider.endpoint(rinkeby, &secrets).unwrap_err();
        assert!(err.to_string().contains("rinkeby_node_url"));
    }

    #[test]
    fn wallet_from_secrets_file() {
        let secrets = secrets(
            r#"{"deployer_key": "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659"}"#,
        );
        let cli = Cli::parse_from(["poht"]);
        assert!(cli.auth.build_wallet(42, &secrets).is_ok());
        assert!(cli.auth.build_wallet(42, &Secrets::default()).is_err());
    }

    #[test]
    fn max_fee_is_optional() {
        let cli = Cli::parse_from(["poht"]);
        assert_eq!(cli.auth.get_max_fee_per_gas_wei().unwrap(), None);
        let cli = Cli::parse_from(["poht", "--max-fee-per-gas-gwei", "2"]);
        assert_eq!(
            cli.auth.get_max_fee_per_gas_wei().unwrap(),
            Some(2_000_000_000)
        );
    }
}
