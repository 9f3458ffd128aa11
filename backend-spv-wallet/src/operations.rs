use log::debug;
use serde_json::json;
use spvr_core::config::AdminKeys;
use spvr_core::utils::strip_scheme;
use spvr_core::{Error, Result};

use crate::api_structs::{CreatePaymailRequest, Recipient, Transaction};
use crate::client::SpvWalletClient;
use crate::keys::derive_xpub;

/// A wallet user with key and paymail info.
///
/// Held in memory for the duration of a bootstrap run, never persisted.
#[derive(Clone, Debug)]
pub struct User {
    pub xpriv: String,
    pub xpub: String,
    pub paymail: String,
}

/// Resolves the instance's paymail domain from its shared config.
///
/// Requires exactly one registered domain; several domains would make
/// `alias@domain` ambiguous, so anything but one is an error.
pub async fn get_paymail_domain(client: &SpvWalletClient, admin_xpub: &str) -> Result<String> {
    let config = client.shared_config(admin_xpub).await?;

    let mut domains = config.paymail_domains;
    if domains.len() != 1 {
        return Err(Error::PaymailDomainCount { found: domains });
    }
    let domain = domains.remove(0);
    Ok(strip_scheme(&domain).to_string())
}

/// Creates a wallet user and sets up a paymail.
pub async fn create_user(
    client: &SpvWalletClient,
    user_xpriv: &str,
    admin: &AdminKeys,
    alias: &str,
) -> Result<User> {
    let xpub = derive_xpub(user_xpriv)?;
    let domain = get_paymail_domain(client, &admin.xpub).await?;
    let paymail = format!("{alias}@{domain}");

    // Admin calls authenticate as the key derived from the admin xpriv.
    let admin_auth = derive_xpub(&admin.xpriv)?;

    debug!("registering xpub for {paymail} on {}", client.host_url());
    client
        .admin_create_xpub(&admin_auth, &xpub, json!({"some_metadata": "remove"}))
        .await?;

    debug!("registering paymail {paymail}");
    let request = CreatePaymailRequest {
        key: xpub.clone(),
        address: paymail.clone(),
        public_name: "Regression Test".to_string(),
        avatar: String::new(),
        metadata: json!({"some_metadata": "remove"}),
    };
    client.admin_create_paymail(&admin_auth, &request).await?;

    Ok(User {
        xpriv: user_xpriv.to_string(),
        xpub,
        paymail,
    })
}

/// Retrieves the current balance, fetched fresh on every call.
pub async fn get_balance(client: &SpvWalletClient, xpriv: &str) -> Result<u64> {
    let xpub = derive_xpub(xpriv)?;
    let info = client.xpub_info(&xpub).await?;
    Ok(info.current_balance)
}

/// Transfers funds to the given paymail.
///
/// The balance is checked client-side first; if it does not cover the
/// amount, the transfer request never reaches the wire. The service remains
/// the final authority and may still reject the transfer.
pub async fn send_funds(
    client: &SpvWalletClient,
    from_xpriv: &str,
    to_paymail: &str,
    amount: u64,
) -> Result<Transaction> {
    let balance = get_balance(client, from_xpriv).await?;
    if balance < amount {
        return Err(Error::InsufficientFunds {
            available: balance,
            required: amount,
        });
    }

    let xpub = derive_xpub(from_xpriv)?;
    let recipients = vec![Recipient {
        to: to_paymail.to_string(),
        satoshis: amount,
    }];

    debug!("sending {amount} satoshis to {to_paymail}");
    client
        .send_to_recipients(
            &xpub,
            recipients,
            json!({"description": spvr_core::constants::TRANSFER_DESCRIPTION}),
        )
        .await
}
