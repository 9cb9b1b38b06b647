// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use poht_tools::ops;

use crate::{
    common_args::{AuthArgs, NetworkArgs, ProviderArgs, SecretsArgs},
    error::PohtDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    secrets: SecretsArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> PohtDeployResult {
    let network = args.network.network()?;
    let secrets = args.secrets.load()?;
    let provider = args
        .provider
        .build_provider_with_wallet(network, &args.auth, &secrets)
        .await?;
    ops::accounts::list(&provider).await?;
    Ok(())
}
