// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor argument assembly.
//!
//! Arguments are produced as strings and coerced against the constructor in the contract ABI
//! when the deployment transaction is built, so the same list works for any artifact.

use crate::core::network::NetworkConfig;

pub const DEFAULT_FEE: u64 = 10;
pub const DEFAULT_FEE_POWER: u8 = 17;
pub const DEFAULT_API_ADDRESS_URL: &str =
    "https://us-central1-pohtwitter.cloudfunctions.net/api/tweet-address-hash/";
pub const DEFAULT_API_AUTHOR_URL: &str =
    "https://us-central1-pohtwitter.cloudfunctions.net/api/tweet-author/";

/// Which constructor the target contract declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ConstructorLayout {
    /// No constructor arguments.
    #[default]
    Empty,
    /// `(address poh, address link, address oracle, uint256 fee, uint256 feePower,
    /// string apiAddressURL, string apiAuthorURL)`
    Oracle,
}

/// Scalar parameters of the oracle constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleParams {
    /// Oracle fee mantissa, paid in LINK as `fee * 10^fee_power`.
    pub fee: u64,
    pub fee_power: u8,
    pub api_address_url: String,
    pub api_author_url: String,
}

impl Default for OracleParams {
    fn default() -> Self {
        Self {
            fee: DEFAULT_FEE,
            fee_power: DEFAULT_FEE_POWER,
            api_address_url: DEFAULT_API_ADDRESS_URL.to_string(),
            api_author_url: DEFAULT_API_AUTHOR_URL.to_string(),
        }
    }
}

/// Builds the ordered constructor arguments for a network.
pub fn assemble(
    layout: ConstructorLayout,
    network: &NetworkConfig,
    params: &OracleParams,
) -> Vec<String> {
    match layout {
        ConstructorLayout::Empty => Vec::new(),
        ConstructorLayout::Oracle => vec![
            network.proof_of_humanity.to_checksum(None),
            network.link_token.to_checksum(None),
            network.oracle.to_checksum(None),
            params.fee.to_string(),
            params.fee_power.to_string(),
            params.api_address_url.clone(),
            params.api_author_url.clone(),
        ],
    }
}
