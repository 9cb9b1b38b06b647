// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::network::{NetworkConfig, NetworkRegistry, DEFAULT_NETWORK},
    Result,
};

/// Prints every supported network and the addresses deployments to it use.
pub fn list(json: bool) -> Result<()> {
    if json {
        let networks = NetworkRegistry::iter().collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&networks)?);
        return Ok(());
    }
    for network in NetworkRegistry::iter() {
        let marker = if network.name == DEFAULT_NETWORK {
            " (default)"
        } else {
            ""
        };
        mintln!("{} [chain {}]{}", network.name, network.chain_id, marker);
        for (label, value) in describe(network) {
            greyln!("  {:<18} {}", label, value.lavender());
        }
    }
    Ok(())
}

fn describe(network: &NetworkConfig) -> [(&'static str, String); 4] {
    [
        ("proof of humanity", network.proof_of_humanity.to_checksum(None)),
        ("link token", network.link_token.to_checksum(None)),
        ("oracle", network.oracle.to_checksum(None)),
        ("job id", network.job_id.to_string()),
    ]
}
