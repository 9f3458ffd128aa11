pub mod api_structs;

mod client;
mod keys;
mod operations;

pub use client::SpvWalletClient;
pub use keys::derive_xpub;
pub use operations::{User, create_user, get_balance, get_paymail_domain, send_funds};
