// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use deploy::{check_artifact, deploy, print_deployment};

pub mod accounts;
pub mod networks;

mod deploy;
