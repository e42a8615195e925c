//! Operator identity
//!
//! The operator account pays for and authorizes every submitted operation.
//! Both halves of the identity are parsed up front so that a typo fails the
//! command before any network traffic happens.

use super::error::CliError;
use hedera::{AccountId, PrivateKey};
use std::str::FromStr;

/// Account id and signing key of the paying account
#[derive(Clone, Debug)]
pub struct Operator {
    pub account_id: AccountId,
    pub private_key: PrivateKey,
}

impl Operator {
    /// Parse an operator from its textual account id and private key
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccountId` or `InvalidPrivateKey` when either value
    /// does not parse.
    pub fn parse(account_id: &str, private_key: &str) -> Result<Self, CliError> {
        Ok(Self {
            account_id: parse_account_id(account_id)?,
            private_key: parse_private_key(private_key)?,
        })
    }
}

/// Parse an account id in `shard.realm.num` form
pub fn parse_account_id(value: &str) -> Result<AccountId, CliError> {
    AccountId::from_str(value.trim()).map_err(|e| CliError::invalid_account_id(value, e))
}

/// Parse an Ed25519 private key
///
/// Accepts the raw hex encoding first and falls back to DER, which is what
/// the portal hands out. DER can also carry ECDSA keys; those are rejected.
pub fn parse_private_key(value: &str) -> Result<PrivateKey, CliError> {
    let value = value.trim();
    let key = PrivateKey::from_str_ed25519(value)
        .or_else(|_| PrivateKey::from_str_der(value))
        .map_err(CliError::invalid_private_key)?;

    if !key.is_ed25519() {
        return Err(CliError::invalid_private_key("expected an Ed25519 key"));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("0.0.1234", 1234)]
    #[case::padded(" 0.0.98 ", 98)]
    fn test_parse_account_id(#[case] value: &str, #[case] num: u64) {
        let account_id = parse_account_id(value).unwrap();
        assert_eq!(account_id.shard, 0);
        assert_eq!(account_id.realm, 0);
        assert_eq!(account_id.num, num);
    }

    #[rstest]
    #[case::empty("")]
    #[case::not_numeric("zero.zero.one")]
    #[case::too_many_parts("0.0.0.1")]
    fn test_parse_account_id_rejects_garbage(#[case] value: &str) {
        let error = parse_account_id(value).unwrap_err();
        assert!(matches!(error, CliError::InvalidAccountId { .. }));
    }

    #[test]
    fn test_parse_private_key_accepts_der_encoding() {
        let key = PrivateKey::generate_ed25519();
        let parsed = parse_private_key(&key.to_string_der()).unwrap();
        assert_eq!(parsed.public_key(), key.public_key());
    }

    #[test]
    fn test_parse_private_key_accepts_raw_encoding() {
        let key = PrivateKey::generate_ed25519();
        let parsed = parse_private_key(&key.to_string_raw()).unwrap();
        assert_eq!(parsed.public_key(), key.public_key());
    }

    #[test]
    fn test_parse_private_key_rejects_ecdsa_der() {
        let key = PrivateKey::generate_ecdsa();
        let error = parse_private_key(&key.to_string_der()).unwrap_err();
        assert_eq!(
            error,
            CliError::invalid_private_key("expected an Ed25519 key")
        );
    }

    #[test]
    fn test_parse_private_key_does_not_echo_input() {
        let error = parse_private_key("secret-not-a-key").unwrap_err();
        assert!(matches!(error, CliError::InvalidPrivateKey { .. }));
        assert!(!error.to_string().contains("secret-not-a-key"));
    }

    #[test]
    fn test_operator_parse_fails_on_bad_account_before_key() {
        let error = Operator::parse("nope", "also-nope").unwrap_err();
        assert!(matches!(error, CliError::InvalidAccountId { .. }));
    }
}
