// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use poht_tools::ops;

use crate::error::PohtDeployResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the networks as JSON
    #[arg(long)]
    json: bool,
}

pub fn exec(args: Args) -> PohtDeployResult {
    ops::networks::list(args.json)?;
    Ok(())
}
