// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Network(#[from] crate::core::network::NetworkError),
    #[error("{0}")]
    Deployment(#[from] crate::core::deployment::DeploymentError),
}
