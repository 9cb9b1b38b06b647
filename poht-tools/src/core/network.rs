// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Supported networks and the addresses the PoH Twitter contract depends on.
//!
//! Every network carries the Proof of Humanity registry, the LINK token, and the Chainlink
//! oracle together with the job the contract requests tweets through.

use std::fmt;

use alloy::primitives::{address, Address, B256};
use serde::Serialize;

use crate::utils::{color::Color, is_hex_of_len};

/// Network used when none is selected.
pub const DEFAULT_NETWORK: &str = "kovan";

/// Length of a Chainlink job identifier in hex digits.
pub const JOB_ID_LENGTH: usize = 32;

static NETWORKS: &[NetworkConfig] = &[
    NetworkConfig {
        name: "kovan",
        chain_id: 42,
        proof_of_humanity: address!("6a6b6121168c4Ed068204661cbCA3349b61e3e98"),
        link_token: address!("a36085F69e2889c224210F603D836748e7dC0088"),
        oracle: address!("2f90A6D021db21e1B2A077c5a37B3C7E75D15b7e"),
        job_id: JobId("72a98f1d58bd48a5a24feb468b6a1477"),
    },
    NetworkConfig {
        name: "rinkeby",
        chain_id: 4,
        proof_of_humanity: address!("6a6b6121168c4Ed068204661cbCA3349b61e3e98"),
        link_token: address!("01BE23585060835E02B77ef475b0Cc51aA1e0709"),
        oracle: address!("7AFe1118Ea78C1eae84ca8feE5C65Bc76CcF879e"),
        job_id: JobId("c637797f3e9a468489e88d5441a16a3e"),
    },
];

/// Addresses and identifiers the contract needs on one network.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub name: &'static str,
    pub chain_id: u64,
    pub proof_of_humanity: Address,
    pub link_token: Address,
    pub oracle: Address,
    pub job_id: JobId,
}

/// Chainlink job identifier, as 32 hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JobId(&'static str);

impl JobId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        is_hex_of_len(self.0, JOB_ID_LENGTH)
    }

    /// Encodes the identifier the way Chainlink consumers store it: the ASCII bytes of the id,
    /// left aligned in a `bytes32`.
    pub fn to_bytes32(&self) -> B256 {
        let bytes = self.0.as_bytes();
        B256::right_padding_from(&bytes[..bytes.len().min(32)])
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Static lookup of the supported networks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkRegistry;

impl NetworkRegistry {
    /// Looks up a network by name, ignoring ASCII case.
    pub fn get(name: &str) -> Result<&'static NetworkConfig, NetworkError> {
        NETWORKS
            .iter()
            .find(|network| network.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| NetworkError::UnknownNetwork {
                name: name.to_string(),
                known: Self::names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn iter() -> impl Iterator<Item = &'static NetworkConfig> {
        NETWORKS.iter()
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        NETWORKS.iter().map(|network| network.name)
    }
}

impl NetworkConfig {
    /// Fails if the connected chain is not the one this configuration was written for.
    pub fn check_chain_id(&self, chain_id: u64) -> Result<(), NetworkError> {
        if chain_id == self.chain_id {
            Ok(())
        } else {
            Err(NetworkError::ChainMismatch {
                network: self.name,
                expected: self.chain_id,
                actual: chain_id,
            })
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown network {} (known networks: {known})", .name.red())]
    UnknownNetwork { name: String, known: String },
    #[error(
        "endpoint is on chain {} but network {network} is chain {expected}",
        .actual.red()
    )]
    ChainMismatch {
        network: &'static str,
        expected: u64,
        actual: u64,
    },
}
