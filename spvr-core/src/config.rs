use crate::constants::{DEFAULT_ADMIN_XPRIV, DEFAULT_ADMIN_XPUB};
use crate::error::{Error, Result};
use crate::utils::add_prefix_if_needed;

pub const MASTER_INSTANCE_URL: &str = "MASTER_INSTANCE_URL";
pub const MASTER_INSTANCE_XPRIV: &str = "MASTER_INSTANCE_XPRIV";
pub const CLIENT_ONE_URL: &str = "CLIENT_ONE_URL";
pub const CLIENT_TWO_URL: &str = "CLIENT_TWO_URL";
pub const CLIENT_ONE_LEADER_XPRIV: &str = "CLIENT_ONE_LEADER_XPRIV";
pub const CLIENT_TWO_LEADER_XPRIV: &str = "CLIENT_TWO_LEADER_XPRIV";
pub const ADMIN_XPRIV: &str = "ADMIN_XPRIV";
pub const ADMIN_XPUB: &str = "ADMIN_XPUB";

/// Admin credentials used for admin-authenticated calls.
#[derive(Clone, Debug)]
pub struct AdminKeys {
    pub xpriv: String,
    pub xpub: String,
}

/// Configuration for a full bootstrap run, resolved from the environment.
///
/// URLs are normalized at load time; key strings are kept raw and only
/// validated when a client actually uses them.
#[derive(Clone, Debug)]
pub struct Config {
    pub master_url: String,
    pub master_xpriv: String,
    pub client_one_url: String,
    pub client_two_url: String,
    pub client_one_leader_xpriv: String,
    pub client_two_leader_xpriv: String,
    pub admin: AdminKeys,
}

impl Config {
    /// Loads all required environment variables, failing on the first
    /// missing one.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with the environment lookup injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| -> Result<String> {
            match lookup(key) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(Error::MissingEnv(key)),
            }
        };

        let master_url = require(MASTER_INSTANCE_URL)?;
        let master_xpriv = require(MASTER_INSTANCE_XPRIV)?;
        let client_one_url = require(CLIENT_ONE_URL)?;
        let client_two_url = require(CLIENT_TWO_URL)?;
        let client_one_leader_xpriv = require(CLIENT_ONE_LEADER_XPRIV)?;
        let client_two_leader_xpriv = require(CLIENT_TWO_LEADER_XPRIV)?;

        let optional = |key: &'static str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            master_url: add_prefix_if_needed(&master_url),
            master_xpriv,
            client_one_url: add_prefix_if_needed(&client_one_url),
            client_two_url: add_prefix_if_needed(&client_two_url),
            client_one_leader_xpriv,
            client_two_leader_xpriv,
            admin: AdminKeys {
                xpriv: optional(ADMIN_XPRIV, DEFAULT_ADMIN_XPRIV),
                xpub: optional(ADMIN_XPUB, DEFAULT_ADMIN_XPUB),
            },
        })
    }
}

/// Looks up a single required environment variable.
pub fn require_env(key: &'static str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingEnv(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (MASTER_INSTANCE_URL, "master.example.com"),
            (MASTER_INSTANCE_XPRIV, "xprv-master"),
            (CLIENT_ONE_URL, "http://one.example.com"),
            (CLIENT_TWO_URL, "https://two.example.com"),
            (CLIENT_ONE_LEADER_XPRIV, "xprv-one"),
            (CLIENT_TWO_LEADER_XPRIV, "xprv-two"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<Config> {
        Config::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_loads_and_normalizes_urls() {
        let config = load(&full_env()).unwrap();

        assert_eq!(config.master_url, "https://master.example.com");
        assert_eq!(config.client_one_url, "http://one.example.com");
        assert_eq!(config.client_two_url, "https://two.example.com");
        assert_eq!(config.master_xpriv, "xprv-master");
        assert_eq!(config.client_one_leader_xpriv, "xprv-one");
        assert_eq!(config.client_two_leader_xpriv, "xprv-two");
    }

    #[test]
    fn test_fails_on_first_missing_variable() {
        let mut env = full_env();
        env.remove(MASTER_INSTANCE_XPRIV);
        env.remove(CLIENT_TWO_URL);

        // MASTER_INSTANCE_XPRIV comes first in the load order.
        match load(&env) {
            Err(Error::MissingEnv(key)) => assert_eq!(key, MASTER_INSTANCE_XPRIV),
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(CLIENT_ONE_LEADER_XPRIV, "");

        match load(&env) {
            Err(Error::MissingEnv(key)) => assert_eq!(key, CLIENT_ONE_LEADER_XPRIV),
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }

    #[test]
    fn test_admin_keys_default_when_unset() {
        let config = load(&full_env()).unwrap();

        assert_eq!(config.admin.xpriv, DEFAULT_ADMIN_XPRIV);
        assert_eq!(config.admin.xpub, DEFAULT_ADMIN_XPUB);
    }

    #[test]
    fn test_admin_keys_overridable() {
        let mut env = full_env();
        env.insert(ADMIN_XPRIV, "xprv-admin");
        env.insert(ADMIN_XPUB, "xpub-admin");

        let config = load(&env).unwrap();
        assert_eq!(config.admin.xpriv, "xprv-admin");
        assert_eq!(config.admin.xpub, "xpub-admin");
    }
}
