//! Per-round secret key.

use crate::GameError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret key for one round's commitment
///
/// `Debug` never prints key material; `Display` renders the full hex and is
/// only meant for disclosure after the round is resolved.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey(#[serde(with = "super::hex32")] [u8; KEY_LEN]);

impl SecretKey {
    /// Generate a new key from the operating system's entropy source
    pub fn random() -> Result<Self, GameError> {
        Self::generate(&mut OsRng)
    }

    /// Generate a new key from the given cryptographic RNG.
    ///
    /// Fails with [`GameError::EntropyUnavailable`] if the RNG cannot produce
    /// bytes; there is no fallback source.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| GameError::EntropyUnavailable(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex encoding (64 characters)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<redacted>)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for SecretKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::hex32::parse(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_keys_differ() {
        let key1 = SecretKey::random().unwrap();
        let key2 = SecretKey::random().unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let key1 = SecretKey::generate(&mut StdRng::seed_from_u64(7)).unwrap();
        let key2 = SecretKey::generate(&mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_hex_is_64_lowercase_chars() {
        let key = SecretKey::random().unwrap();
        let hex = key.to_string();

        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_parse_from_hex() {
        let key = SecretKey::from_bytes([0xab; KEY_LEN]);
        let parsed: SecretKey = key.to_hex().parse().unwrap();

        assert_eq!(parsed, key);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "abcd".parse::<SecretKey>().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = "zz".repeat(32).parse::<SecretKey>().unwrap_err();
        assert!(matches!(err, GameError::InvalidHex(_)));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::from_bytes([0x11; KEY_LEN]);
        let debug = format!("{:?}", key);

        assert_eq!(debug, "SecretKey(<redacted>)");
        assert!(!debug.contains("11"));
    }
}
