// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Single-contract deployment.
//!
//! A [`DeploymentRunner`] takes one network configuration through
//! `Idle -> ArgsAssembled -> FactoryResolved -> Submitted -> Confirmed | Failed`. Nothing is
//! retried: a failed run is reported and a new run deploys a new contract instance.

use std::fmt;

use alloy::{
    primitives::{Address, TxHash},
    transports::{RpcError, TransportErrorKind},
};
use serde::Serialize;

use crate::{
    core::{artifact::ArtifactError, network::NetworkConfig},
    utils::color::DebugColor,
};

pub use args::{assemble, ConstructorLayout, OracleParams};
pub use chain::{AlloyFactory, AlloyPendingDeployment, ChainDeployer, TransactionConfig};
pub use factory::{ArtifactSource, ContractFactory, PendingDeployment};

pub mod args;
pub mod chain;
pub mod factory;

/// Contract deployed when none is named.
pub const DEFAULT_CONTRACT: &str = "PoHTwitterV5";

/// What to deploy and how to build its constructor arguments.
#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub contract: String,
    pub constructor: ConstructorLayout,
    pub oracle: OracleParams,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            contract: DEFAULT_CONTRACT.to_string(),
            constructor: ConstructorLayout::default(),
            oracle: OracleParams::default(),
        }
    }
}

/// The contract to deploy together with its ordered constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub contract: String,
    pub args: Vec<String>,
}

/// A confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub network: String,
    pub contract: String,
    pub address: Address,
    pub tx_hash: TxHash,
}

pub type DeploymentResult = Result<Deployment, DeploymentError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStage {
    Idle,
    ArgsAssembled,
    FactoryResolved,
    Submitted,
    Confirmed,
    Failed,
}

impl fmt::Display for DeploymentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Idle => "idle",
            Self::ArgsAssembled => "constructor arguments assembled",
            Self::FactoryResolved => "contract factory resolved",
            Self::Submitted => "deploy tx submitted",
            Self::Confirmed => "deploy tx confirmed",
            Self::Failed => "failed",
        };
        f.write_str(stage)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("could not parse constructor arg {param}: {reason}")]
    InvalidArgument { param: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfirmationError {
    #[error("{0}")]
    Pending(#[from] alloy::providers::PendingTransactionError),
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("no contract address in receipt of {}", .tx_hash.debug_red())]
    MissingAddress { tx_hash: TxHash },
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("cannot deploy {contract} to {network}: {source}")]
    Artifact {
        network: String,
        contract: String,
        source: ArtifactError,
    },
    #[error("failed to submit {contract} deployment to {network}: {source}")]
    Submission {
        network: String,
        contract: String,
        source: SubmissionError,
    },
    #[error("{contract} deployment to {network} was not confirmed: {source}")]
    Confirmation {
        network: String,
        contract: String,
        source: ConfirmationError,
    },
}

impl DeploymentError {
    /// The last stage the deployment reached before failing.
    pub fn stage(&self) -> DeploymentStage {
        match self {
            Self::Artifact { .. } => DeploymentStage::ArgsAssembled,
            Self::Submission { .. } => DeploymentStage::FactoryResolved,
            Self::Confirmation { .. } => DeploymentStage::Submitted,
        }
    }

    pub fn network(&self) -> &str {
        match self {
            Self::Artifact { network, .. }
            | Self::Submission { network, .. }
            | Self::Confirmation { network, .. } => network,
        }
    }

    pub fn contract(&self) -> &str {
        match self {
            Self::Artifact { contract, .. }
            | Self::Submission { contract, .. }
            | Self::Confirmation { contract, .. } => contract,
        }
    }
}

/// Deploys the configured contract to one network.
#[derive(Debug)]
pub struct DeploymentRunner<S> {
    source: S,
    config: DeploymentConfig,
}

impl<S: ArtifactSource> DeploymentRunner<S> {
    pub fn new(source: S, config: DeploymentConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    /// Builds the deployment request for a network. Pure.
    pub fn request(&self, network: &NetworkConfig) -> DeploymentRequest {
        DeploymentRequest {
            contract: self.config.contract.clone(),
            args: assemble(self.config.constructor, network, &self.config.oracle),
        }
    }

    /// Runs one deployment, logging its outcome. Failures are returned for the caller to report.
    pub async fn run(&self, network: &NetworkConfig) -> DeploymentResult {
        let result = self.execute(network).await;
        match &result {
            Ok(deployment) => {
                info!(@grey, "deployed {} to {} at address: {}", deployment.contract, deployment.network, deployment.address.debug_lavender());
                info!(@grey, "deployment tx hash: {}", deployment.tx_hash.debug_lavender());
            }
            Err(err) => {
                trace_stage(&self.config.contract, DeploymentStage::Failed);
                debug!(@red, "deployment failed after stage '{}'", err.stage());
            }
        }
        result
    }

    async fn execute(&self, network: &NetworkConfig) -> DeploymentResult {
        let contract = self.config.contract.as_str();
        trace_stage(contract, DeploymentStage::Idle);

        let request = self.request(network);
        debug!(@grey, "constructor args: {:?}", request.args);
        trace_stage(contract, DeploymentStage::ArgsAssembled);

        let factory =
            self.source
                .get_factory(contract)
                .map_err(|source| DeploymentError::Artifact {
                    network: network.name.to_string(),
                    contract: contract.to_string(),
                    source,
                })?;
        trace_stage(contract, DeploymentStage::FactoryResolved);

        let pending =
            factory
                .deploy(request)
                .await
                .map_err(|source| DeploymentError::Submission {
                    network: network.name.to_string(),
                    contract: contract.to_string(),
                    source,
                })?;
        let tx_hash = pending.tx_hash();
        trace_stage(contract, DeploymentStage::Submitted);

        let address = pending
            .confirm()
            .await
            .map_err(|source| DeploymentError::Confirmation {
                network: network.name.to_string(),
                contract: contract.to_string(),
                source,
            })?;
        trace_stage(contract, DeploymentStage::Confirmed);

        Ok(Deployment {
            network: network.name.to_string(),
            contract: contract.to_string(),
            address,
            tx_hash,
        })
    }
}

fn trace_stage(contract: &str, stage: DeploymentStage) {
    debug!(@grey, "{}: {}", contract, stage.to_string().lavender());
}
