use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Instance-level metadata exposed by the shared-config endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedConfigResponse {
    pub paymail_domains: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateXpubRequest {
    pub key: String,
    pub metadata: Value,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymailRequest {
    pub key: String,
    pub address: String,
    pub public_name: String,
    pub avatar: String,
    pub metadata: Value,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpubInfoResponse {
    pub current_balance: u64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub to: String,
    pub satoshis: u64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendToRecipientsRequest {
    pub recipients: Vec<Recipient>,
    pub metadata: Value,
}

/// The transaction record returned by a successful transfer.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
}
