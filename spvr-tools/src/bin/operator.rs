//! Bootstraps two leader accounts for a regression run.
//!
//! The whole sequence lives in [`spvr_tools::bootstrap`]; any failure
//! surfaces here as a non-zero exit with a step-identifying message.

use anyhow::{Context, Result};
use spvr_core::Config;
use spvr_tools::bootstrap;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().context("failed to load configuration")?;
    bootstrap::run(&config, &mut std::io::stdout()).await?;
    Ok(())
}
