// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use alloy::primitives::{utils::parse_units, B256};
use eyre::{bail, eyre, Context};

use style::{BOLD, ERROR};

mod style;

/// Converts a decimal amount of gwei, as typed on the command line, to wei.
pub fn convert_gwei_to_wei(fee_str: &str) -> eyre::Result<u128> {
    let fee_str = fee_str.trim();
    if fee_str.starts_with('-') {
        bail!("max fee per gas must be non-negative");
    }
    let wei = parse_units(fee_str, "gwei")
        .wrap_err_with(|| format!("invalid max fee per gas value: {fee_str}"))?
        .get_absolute();
    u128::try_from(wei).map_err(|_| eyre!("max fee per gas out of range: {fee_str}"))
}

/// Parses a hex private key, with or without `0x` and surrounding whitespace.
pub fn parse_private_key(text: impl AsRef<str>) -> eyre::Result<B256> {
    let text = text.as_ref().trim();
    if text.is_empty() {
        bail!("empty private key");
    }
    let text = text.strip_prefix("0x").unwrap_or(text);
    let bytes = hex::decode(text).wrap_err("private key is not valid hex")?;
    if bytes.len() != 32 {
        bail!("private key must be 32 bytes, got {}", bytes.len());
    }
    Ok(B256::from_slice(&bytes))
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gwei_to_wei() {
        assert_eq!(convert_gwei_to_wei("1").unwrap(), 1_000_000_000);
        assert_eq!(convert_gwei_to_wei("0.5").unwrap(), 500_000_000);
        assert!(convert_gwei_to_wei("-1").is_err());
        assert!(convert_gwei_to_wei("abc").is_err());
    }

    #[test]
    fn private_key_formats() {
        let key = "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
        let parsed = parse_private_key(key).unwrap();
        assert_eq!(parse_private_key(format!("0x{key}\n")).unwrap(), parsed);
        assert!(parse_private_key("").is_err());
        assert!(parse_private_key("0x0102").is_err());
        assert!(parse_private_key("0xzz").is_err());
    }
}
