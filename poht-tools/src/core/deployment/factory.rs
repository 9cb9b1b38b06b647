// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The contract factory seam between the deployment runner and the chain client.

use std::future::Future;

use alloy::primitives::{Address, TxHash};

use super::{ConfirmationError, DeploymentRequest, SubmissionError};
use crate::core::artifact::ArtifactError;

/// Resolves contract names to factories able to deploy them.
pub trait ArtifactSource {
    type Factory: ContractFactory;

    /// Fails with [`ArtifactError::NotFound`] when the contract has not been compiled.
    fn get_factory(&self, contract: &str) -> Result<Self::Factory, ArtifactError>;
}

/// Submits the creation transaction of one contract.
pub trait ContractFactory {
    type Pending: PendingDeployment;

    /// Resolves once the transaction has been accepted by the RPC endpoint.
    fn deploy(
        &self,
        request: DeploymentRequest,
    ) -> impl Future<Output = Result<Self::Pending, SubmissionError>>;
}

/// A submitted creation transaction.
pub trait PendingDeployment {
    fn tx_hash(&self) -> TxHash;

    /// Waits for the transaction to be mined, returning the created contract's address.
    fn confirm(self) -> impl Future<Output = Result<Address, ConfirmationError>>;
}
