// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the PoH Twitter contract.
//!
//! [`core`] holds the network registry, artifact loading, and the deployment runner. [`ops`]
//! wires them to an alloy provider and prints results for the command line.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
