// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{utils::format_units, U256};

use color::Color;

pub mod color;

/// Pretty-prints an amount of wei in ether.
pub fn format_ether(wei: U256) -> String {
    match format_units(wei, "ether") {
        Ok(eth) => format!("{eth} ETH").mint(),
        Err(_) => "???".red(),
    }
}

/// Checks whether a string is made of exactly `len` hexadecimal digits.
pub fn is_hex_of_len(text: &str, len: usize) -> bool {
    text.len() == len && text.chars().all(|c| c.is_ascii_hexdigit())
}
