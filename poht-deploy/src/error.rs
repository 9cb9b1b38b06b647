// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use poht_tools::core::{deployment::DeploymentError, network::NetworkError};

pub type PohtDeployResult = Result<(), PohtDeployError>;

/// Any failure of a command. Every failure exits with status 1.
#[derive(Debug)]
pub struct PohtDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl PohtDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for PohtDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

macro_rules! failure_from {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for PohtDeployError {
                fn from(err: $err) -> Self {
                    Self {
                        error: err.into(),
                        exit_code: ExitCode::FAILURE,
                    }
                }
            }
        )*
    };
}

failure_from!(
    std::io::Error,
    eyre::Error,
    poht_tools::Error,
    NetworkError,
    DeploymentError,
);
