//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - SecretKey, the per-round key drawn from a secure random source
//! - Commitment, the HMAC-SHA256 of a move name under that key

mod commitment;
mod key;

pub use commitment::{commit, verify, Commitment, COMMITMENT_LEN};
pub use key::{SecretKey, KEY_LEN};

/// Hex (de)serialization for fixed 32-byte values
mod hex32 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom("expected 32 bytes"));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }

    /// Parse a 64-character hex string into 32 bytes
    pub fn parse(s: &str) -> Result<[u8; 32], crate::GameError> {
        let bytes = hex::decode(s.trim())?;
        if bytes.len() != 32 {
            return Err(crate::GameError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}
