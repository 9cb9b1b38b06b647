// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployer credentials and RPC endpoints kept outside the repository.
//!
//! The secrets file is a flat JSON object:
//!
//! ```json
//! {
//!     "deployer_key": "0x...",
//!     "kovan_node_url": "https://kovan.infura.io/v3/...",
//!     "rinkeby_node_url": "https://rinkeby.infura.io/v3/..."
//! }
//! ```

use std::{collections::BTreeMap, fmt, fs, path::Path};

use eyre::Context;
use serde::Deserialize;

use crate::constants::{DEPLOYER_KEY, NODE_URL_SUFFIX};

#[derive(Default, Deserialize)]
#[serde(transparent)]
pub struct Secrets(BTreeMap<String, serde_json::Value>);

impl Secrets {
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read secrets file {}", path.display()))?;
        serde_json::from_str(&text)
            .wrap_err_with(|| format!("could not parse secrets file {}", path.display()))
    }

    pub fn deployer_key(&self) -> Option<&str> {
        self.get(DEPLOYER_KEY)
    }

    /// RPC endpoint of a network, stored under `<network>_node_url`.
    pub fn node_url(&self, network: &str) -> Option<&str> {
        self.get(&format!("{network}{NODE_URL_SUFFIX}"))
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|value| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

// Only key names are printed.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}
