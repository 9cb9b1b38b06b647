// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts are produced by an external Solidity toolchain using the Hardhat layout, where each
//! contract lives at `artifacts/contracts/<Source>.sol/<Contract>.json` next to a `.dbg.json`
//! file that is ignored here.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{ContractObject, JsonAbi},
    primitives::Bytes,
};

use crate::utils::color::{Color, DebugColor};

/// Default directory searched for artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// ABI and creation code of a compiled contract.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub path: PathBuf,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

/// Reads artifacts from a Hardhat artifacts directory.
#[derive(Debug, Clone)]
pub struct HardhatArtifacts {
    root: PathBuf,
}

impl Default for HardhatArtifacts {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACTS_DIR)
    }
}

impl HardhatArtifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds the artifact file for a contract anywhere below the root directory.
    pub fn find(&self, contract: &str) -> Result<PathBuf, ArtifactError> {
        let pattern = format!(
            "{}/**/{}.json",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            glob::Pattern::escape(contract),
        );
        let mut matches = glob::glob(&pattern)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|path| !path.components().any(|c| c.as_os_str() == "build-info"))
            .collect::<Vec<_>>();
        matches.sort();

        match matches.len() {
            0 => Err(ArtifactError::NotFound {
                contract: contract.to_string(),
                root: self.root.clone(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                contract: contract.to_string(),
                paths: matches,
            }),
        }
    }

    /// Loads and parses the artifact of a contract.
    pub fn load(&self, contract: &str) -> Result<Artifact, ArtifactError> {
        let path = self.find(contract)?;
        debug!(@grey, "reading artifact {}", path.debug_lavender());
        let json = fs::read_to_string(&path).map_err(|source| ArtifactError::Read {
            path: path.clone(),
            source,
        })?;
        let object: ContractObject =
            serde_json::from_str(&json).map_err(|source| ArtifactError::Parse {
                path: path.clone(),
                source,
            })?;

        let bytecode = match object.bytecode {
            Some(code) if !code.is_empty() => code,
            _ => {
                return Err(ArtifactError::MissingBytecode {
                    contract: contract.to_string(),
                })
            }
        };
        Ok(Artifact {
            name: contract.to_string(),
            path,
            abi: object.abi.unwrap_or_default(),
            bytecode,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error(
        "artifact for contract {} not found under {} (has it been compiled?)",
        .contract.red(),
        .root.debug_lavender()
    )]
    NotFound { contract: String, root: PathBuf },
    #[error("contract name {contract} matches several artifacts: {paths:?}")]
    Ambiguous {
        contract: String,
        paths: Vec<PathBuf>,
    },
    #[error("failed to read artifact {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse artifact {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact for {contract} has no creation bytecode (abstract contract or interface?)")]
    MissingBytecode { contract: String },
    #[error("invalid artifact search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to search artifacts: {0}")]
    Glob(#[from] glob::GlobError),
}
