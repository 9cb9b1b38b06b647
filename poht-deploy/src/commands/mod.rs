// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::PohtDeployResult;

mod accounts;
mod deploy;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the deployer accounts and their balances on a network
    Accounts(accounts::Args),
    /// Deploy the contract to a network and print its address
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the supported networks and their addresses
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> PohtDeployResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
    }
}
