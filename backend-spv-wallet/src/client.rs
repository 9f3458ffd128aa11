use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use spvr_core::constants::AUTH_HEADER;
use spvr_core::utils::add_prefix_if_needed;
use spvr_core::{Error, Result};

use crate::api_structs::{
    CreatePaymailRequest, CreateXpubRequest, Recipient, SendToRecipientsRequest,
    SharedConfigResponse, Transaction, XpubInfoResponse,
};

/// HTTP client for a single spv-wallet instance.
///
/// Every method is one round trip; no state is kept between calls. Requests
/// are authenticated by the xpub passed in the `x-auth-key` header, with the
/// instance deciding whether that key has admin privileges.
#[derive(Clone, Debug)]
pub struct SpvWalletClient {
    client: reqwest::Client,
    host_url: String,
}

impl SpvWalletClient {
    pub fn new(host_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let host_url = add_prefix_if_needed(&host_url);
        // we need a trailing slash, if not present we append it
        let host_url = if host_url.ends_with('/') {
            host_url
        } else {
            format!("{}/", host_url)
        };

        Ok(SpvWalletClient { client, host_url })
    }

    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    pub async fn shared_config(&self, admin_xpub: &str) -> Result<SharedConfigResponse> {
        let url = format!("{}v1/shared-config", self.host_url);
        let resp = self
            .client
            .get(&url)
            .header(AUTH_HEADER, admin_xpub)
            .send()
            .await?;
        parse_json(resp).await
    }

    pub async fn admin_create_xpub(
        &self,
        admin_auth_xpub: &str,
        xpub: &str,
        metadata: Value,
    ) -> Result<()> {
        let url = format!("{}v1/admin/xpub", self.host_url);
        let body = CreateXpubRequest {
            key: xpub.to_string(),
            metadata,
        };
        let resp = self
            .client
            .post(&url)
            .header(AUTH_HEADER, admin_auth_xpub)
            .json(&body)
            .send()
            .await?;
        ensure_success(resp).await
    }

    pub async fn admin_create_paymail(
        &self,
        admin_auth_xpub: &str,
        request: &CreatePaymailRequest,
    ) -> Result<()> {
        let url = format!("{}v1/admin/paymail", self.host_url);
        let resp = self
            .client
            .post(&url)
            .header(AUTH_HEADER, admin_auth_xpub)
            .json(request)
            .send()
            .await?;
        ensure_success(resp).await
    }

    pub async fn xpub_info(&self, xpub: &str) -> Result<XpubInfoResponse> {
        let url = format!("{}v1/xpub", self.host_url);
        let resp = self.client.get(&url).header(AUTH_HEADER, xpub).send().await?;
        parse_json(resp).await
    }

    pub async fn send_to_recipients(
        &self,
        xpub: &str,
        recipients: Vec<Recipient>,
        metadata: Value,
    ) -> Result<Transaction> {
        let url = format!("{}v1/transaction", self.host_url);
        let body = SendToRecipientsRequest {
            recipients,
            metadata,
        };
        let resp = self
            .client
            .post(&url)
            .header(AUTH_HEADER, xpub)
            .json(&body)
            .send()
            .await?;
        parse_json(resp).await
    }
}

async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp.json().await?)
}

async fn ensure_success(resp: reqwest::Response) -> Result<()> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(())
}
