use std::io::Write;

use anyhow::{Context, Result, bail};
use backend_spv_wallet::{self as wallet, SpvWalletClient, User};
use log::info;
use spvr_core::Config;
use spvr_core::constants::{LEADER_PAYMAIL_ALIAS, MIN_LEADER_BALANCE, SEED_SATOSHIS};

/// Runs the full bootstrap sequence against the configured instances.
///
/// Creates a leader user on each client instance, funds both from the
/// master instance, and verifies each received its seed. Strictly
/// sequential; the first failure aborts the run. There is no rollback: a
/// late failure leaves earlier steps in place.
pub async fn run(config: &Config, out: &mut dyn Write) -> Result<(User, User)> {
    let master = SpvWalletClient::new(config.master_url.clone())?;
    let client_one = SpvWalletClient::new(config.client_one_url.clone())?;
    let client_two = SpvWalletClient::new(config.client_two_url.clone())?;

    // The master must be able to seed both leaders before anything is
    // created, otherwise we would abort with one leader funded.
    let master_balance = wallet::get_balance(&master, &config.master_xpriv)
        .await
        .context("failed to get balance for master instance")?;
    if master_balance < 2 * SEED_SATOSHIS {
        bail!("master instance has insufficient funds: {master_balance}");
    }

    let leader_one = wallet::create_user(
        &client_one,
        &config.client_one_leader_xpriv,
        &config.admin,
        LEADER_PAYMAIL_ALIAS,
    )
    .await
    .with_context(|| format!("failed to create leader user for {}", config.client_one_url))?;
    info!("created leader {}", leader_one.paymail);

    let leader_two = wallet::create_user(
        &client_two,
        &config.client_two_leader_xpriv,
        &config.admin,
        LEADER_PAYMAIL_ALIAS,
    )
    .await
    .with_context(|| format!("failed to create leader user for {}", config.client_two_url))?;
    info!("created leader {}", leader_two.paymail);

    wallet::send_funds(
        &master,
        &config.master_xpriv,
        &leader_one.paymail,
        SEED_SATOSHIS,
    )
    .await
    .with_context(|| format!("failed to send funds to {}", leader_one.paymail))?;

    let leader_one_balance = wallet::get_balance(&client_one, &config.client_one_leader_xpriv)
        .await
        .with_context(|| format!("failed to get balance for {}", leader_one.paymail))?;
    if leader_one_balance < MIN_LEADER_BALANCE {
        bail!(
            "leader instance {} has insufficient funds: {leader_one_balance}",
            config.client_one_url
        );
    }

    wallet::send_funds(
        &master,
        &config.master_xpriv,
        &leader_two.paymail,
        SEED_SATOSHIS,
    )
    .await
    .with_context(|| format!("failed to send funds to {}", leader_two.paymail))?;

    let leader_two_balance = wallet::get_balance(&client_two, &config.client_two_leader_xpriv)
        .await
        .with_context(|| format!("failed to get balance for {}", leader_two.paymail))?;
    if leader_two_balance < MIN_LEADER_BALANCE {
        bail!(
            "leader instance {} has insufficient funds: {leader_two_balance}",
            config.client_two_url
        );
    }

    writeln!(out, "Setup complete!")?;
    Ok((leader_one, leader_two))
}
