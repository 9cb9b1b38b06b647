// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::providers::{Provider, WalletProvider};

use crate::{utils::format_ether, Result};

/// Prints the accounts of the provider's wallet with their balances.
pub async fn list(provider: &(impl Provider + WalletProvider)) -> Result<()> {
    for account in provider.signer_addresses() {
        let balance = provider.get_balance(account).await?;
        greyln!("{} {}", account.to_checksum(None).lavender(), format_ether(balance));
    }
    Ok(())
}
