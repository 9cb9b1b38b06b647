// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Secrets file read when `--secrets` is not given, if it exists.
pub const DEFAULT_SECRETS_PATH: &str = "secret.json";

/// Key of the deployer's private key in the secrets file.
pub const DEPLOYER_KEY: &str = "deployer_key";

/// Suffix of the per-network RPC endpoint keys in the secrets file, e.g. `kovan_node_url`.
pub const NODE_URL_SUFFIX: &str = "_node_url";
