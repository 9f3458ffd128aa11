//! Checks the master instance's balance against a fixed threshold.
//!
//! Reads `MASTER_INSTANCE_URL` and `MASTER_INSTANCE_XPRIV` from the
//! environment; exits non-zero when either is missing, the instance is
//! unreachable, or the balance is below the threshold.

use anyhow::Result;
use backend_spv_wallet::SpvWalletClient;
use spvr_core::config::{self, MASTER_INSTANCE_URL, MASTER_INSTANCE_XPRIV};
use spvr_core::constants::MIN_MASTER_BALANCE;
use spvr_tools::balance_check;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let instance_url = config::require_env(MASTER_INSTANCE_URL)?;
    let xpriv = config::require_env(MASTER_INSTANCE_XPRIV)?;

    let client = SpvWalletClient::new(instance_url)?;
    let passed = balance_check::run(
        &client,
        &xpriv,
        MIN_MASTER_BALANCE,
        &mut std::io::stdout(),
    )
    .await?;

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}
