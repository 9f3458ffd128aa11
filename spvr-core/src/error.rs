use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Configuration
    #[error("{0} environment variable is not set")]
    MissingEnv(&'static str),

    // Wallet service policy
    #[error("expected 1 paymail domain, got {} - [{found:?}]", found.len())]
    PaymailDomainCount { found: Vec<String> },
    #[error("insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: u64, required: u64 },
    #[error("wallet service returned status {status}: {body}")]
    Status { status: u16, body: String },

    // Wrapped external errors
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Bip32(#[from] bitcoin::bip32::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
