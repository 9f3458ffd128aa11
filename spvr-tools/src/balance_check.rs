use std::io::Write;

use anyhow::{Context, Result};
use backend_spv_wallet::{self as wallet, SpvWalletClient};

/// Fetches the account balance, reports it, and compares it to `required`.
///
/// Returns whether the check passed; the caller decides the exit code.
pub async fn run(
    client: &SpvWalletClient,
    xpriv: &str,
    required: u64,
    out: &mut dyn Write,
) -> Result<bool> {
    let balance = wallet::get_balance(client, xpriv)
        .await
        .context("failed to check balance")?;

    writeln!(out, "Current balance: {balance} satoshis")?;

    if balance < required {
        writeln!(
            out,
            "Insufficient funds! Required: {required}, Available: {balance}"
        )?;
        return Ok(false);
    }

    writeln!(out, "Balance check passed! Sufficient funds available.")?;
    Ok(true)
}
