// Path: crates/types/src/app/identity.rs

//! Defines the canonical `AccountId` used for both external callers and
//! deployed contract instances.

use crate::error::CoreError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const CONTRACT_ADDRESS_TAG: &[u8; 16] = b"dnote::contract:";

/// A stable 32-byte identity. The acting caller of every call, the owner of
/// every note and the address of every deployed contract are all `AccountId`s.
///
/// The text form (JSON, TOML, logs) is lowercase hex with an optional `0x`
/// prefix on input.
#[derive(
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Hash,
)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Derives the address of the `nonce`-th contract deployed on a host.
    pub fn for_contract(nonce: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(CONTRACT_ADDRESS_TAG);
        bytes[24..].copy_from_slice(&nonce.to_be_bytes());
        Self(bytes)
    }

    /// Returns true for the all-zero identity, which is what an unset
    /// reference decodes to.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl AsRef<[u8]> for AccountId {
    /// Allows treating the `AccountId` as a byte slice.
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for AccountId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw).map_err(|e| CoreError::InvalidIdentity(e.to_string()))?;
        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            CoreError::InvalidIdentity(format!("expected 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(arr))
    }
}

impl TryFrom<String> for AccountId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_addresses_are_distinct_and_nonzero() {
        let a = AccountId::for_contract(0);
        let b = AccountId::for_contract(1);
        assert_ne!(a, b);
        assert!(!a.is_zero());
        assert!(AccountId::default().is_zero());
    }

    #[test]
    fn test_text_form_parses_back() {
        let id = AccountId([0xab; 32]);
        let text = id.to_string();
        assert!(text.starts_with("0xabab"));
        assert_eq!(text.parse::<AccountId>().unwrap(), id);
        assert_eq!(text.trim_start_matches("0x").parse::<AccountId>().unwrap(), id);
    }

    #[test]
    fn test_text_form_rejects_wrong_length() {
        assert!("0x0102".parse::<AccountId>().is_err());
        assert!("not-hex".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let id = AccountId([1u8; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
