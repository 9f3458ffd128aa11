use std::str::FromStr;

use spvr_core::Result;
use spvr_core::bitcoin::bip32::{Xpriv, Xpub};
use spvr_core::bitcoin::secp256k1::Secp256k1;

/// Parses an extended private key and derives its extended public key.
pub fn derive_xpub(xpriv: &str) -> Result<String> {
    let xpriv = Xpriv::from_str(xpriv)?;
    let secp = Secp256k1::new();
    Ok(Xpub::from_priv(&secp, &xpriv).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spvr_core::constants::{DEFAULT_ADMIN_XPRIV, DEFAULT_ADMIN_XPUB};

    #[test]
    fn test_derives_known_admin_pair() {
        let xpub = derive_xpub(DEFAULT_ADMIN_XPRIV).unwrap();
        assert_eq!(xpub, DEFAULT_ADMIN_XPUB);
    }

    #[test]
    fn test_rejects_malformed_key() {
        assert!(derive_xpub("not-an-xpriv").is_err());
    }
}
