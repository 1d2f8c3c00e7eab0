//! Commitment for the commit-reveal scheme.

use super::SecretKey;
use crate::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Digest length in bytes (HMAC-SHA256)
pub const COMMITMENT_LEN: usize = 32;

/// Commitment = HMAC-SHA256(key, move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "super::hex32")] [u8; COMMITMENT_LEN]);

impl Commitment {
    /// Commit to a move name under the given key
    pub fn new(key: &SecretKey, move_name: &str) -> Self {
        let result = keyed_mac(key, move_name).finalize().into_bytes();
        Self(result.into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Verify that the given key and move produce this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        keyed_mac(key, move_name).verify_slice(&self.0).is_ok()
    }
}

fn keyed_mac(key: &SecretKey, move_name: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take a key of any size");
    mac.update(move_name.as_bytes());
    mac
}

/// Commit to `move_name` under `key`
pub fn commit(key: &SecretKey, move_name: &str) -> Commitment {
    Commitment::new(key, move_name)
}

/// Recompute the commitment for `(key, move_name)` and compare
pub fn verify(key: &SecretKey, move_name: &str, commitment: &Commitment) -> bool {
    commitment.verify(key, move_name)
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Commitment {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::hex32::parse(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitment_verification() {
        let key = SecretKey::random().unwrap();
        let commitment = commit(&key, "rock");

        assert!(verify(&key, "rock", &commitment));
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let key = SecretKey::random().unwrap();

        assert_eq!(commit(&key, "lizard"), commit(&key, "lizard"));
    }

    #[test]
    fn test_known_hmac_vector() {
        // RFC 4231 test case 2
        let mut key_bytes = [0u8; 32];
        key_bytes[..4].copy_from_slice(b"Jefe");
        let key = SecretKey::from_bytes(key_bytes);
        let commitment = commit(&key, "what do ya want for nothing?");

        assert_eq!(
            commitment.to_string(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_different_moves_different_commitments() {
        for _ in 0..256 {
            let key = SecretKey::random().unwrap();
            assert_ne!(commit(&key, "rock"), commit(&key, "paper"));
        }
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let key1 = SecretKey::random().unwrap();
        let key2 = SecretKey::random().unwrap();

        assert_ne!(commit(&key1, "rock"), commit(&key2, "rock"));
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = SecretKey::random().unwrap();
        let commitment = commit(&key, "rock");

        assert!(!commitment.verify(&key, "paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = SecretKey::random().unwrap();
        let key2 = SecretKey::random().unwrap();
        let commitment = commit(&key1, "rock");

        assert!(!commitment.verify(&key2, "rock"));
    }

    #[test]
    fn test_display_and_parse() {
        let key = SecretKey::random().unwrap();
        let commitment = commit(&key, "spock");
        let hex = commitment.to_string();

        assert_eq!(hex.len(), 64);
        assert_eq!(hex, hex.to_lowercase());
        assert_eq!(hex.parse::<Commitment>().unwrap(), commitment);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let commitment = Commitment::from_bytes([0x0f; COMMITMENT_LEN]);
        let json = serde_json::to_string(&commitment).unwrap();

        assert_eq!(json, format!("\"{}\"", "0f".repeat(32)));
        let back: Commitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commitment);
    }
}
