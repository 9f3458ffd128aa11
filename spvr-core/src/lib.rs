pub mod config;
pub mod constants;
mod error;
pub mod utils;

pub use bitcoin;

pub use config::Config;
pub use error::{Error, Result};
