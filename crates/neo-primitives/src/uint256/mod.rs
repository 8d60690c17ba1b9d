//! 256-bit hash type for transaction and asset identification.
//!
//! A `Uint256` stores its 32 bytes in the order they appear on the wire and
//! displays them reversed, so transaction ids and asset ids read the same
//! as in block explorers and RPC responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Size of a `Uint256` in bytes.
pub const UINT256_SIZE: usize = 32;

/// A 32-byte identifier such as a transaction id or a native asset id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uint256([u8; UINT256_SIZE]);

impl Uint256 {
    /// Create a `Uint256` from bytes in wire order.
    pub fn new(bytes: [u8; UINT256_SIZE]) -> Self {
        Uint256(bytes)
    }

    /// Create a `Uint256` from a wire-order byte slice.
    ///
    /// # Returns
    /// `Ok(Uint256)` if the slice is exactly 32 bytes, `InvalidHash` otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; UINT256_SIZE] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                UINT256_SIZE
            ))
        })?;
        Ok(Uint256(arr))
    }

    /// Parse a display-order hex string (64 characters, optional `0x`).
    ///
    /// The bytes are reversed into wire order.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let trimmed = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        if trimmed.len() != UINT256_SIZE * 2 {
            return Err(PrimitivesError::InvalidHash(format!(
                "expected {} hex characters, got {}",
                UINT256_SIZE * 2,
                trimmed.len()
            )));
        }
        let mut bytes = [0u8; UINT256_SIZE];
        hex::decode_to_slice(trimmed, &mut bytes)?;
        bytes.reverse();
        Ok(Uint256(bytes))
    }

    /// Hash `data` with SHA-256d and wrap the digest.
    pub fn hash_of(data: &[u8]) -> Self {
        Uint256(sha256d(data))
    }

    /// Access the bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; UINT256_SIZE] {
        &self.0
    }

    /// Return the display-order hex string (no prefix).
    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", self.to_hex())
    }
}

impl FromStr for Uint256 {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uint256::from_hex(s)
    }
}

impl Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Uint256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEO_ASSET_ID: &str = "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";

    #[test]
    fn test_from_hex_reverses_into_wire_order() {
        let id = Uint256::from_hex(NEO_ASSET_ID).unwrap();
        assert_eq!(id.as_bytes()[0], 0x9b);
        assert_eq!(id.as_bytes()[31], 0xc5);
        assert_eq!(id.to_string(), NEO_ASSET_ID);
    }

    #[test]
    fn test_from_hex_accepts_prefix() {
        let prefixed = format!("0x{}", NEO_ASSET_ID);
        assert_eq!(
            Uint256::from_hex(&prefixed).unwrap(),
            Uint256::from_hex(NEO_ASSET_ID).unwrap()
        );
    }

    #[test]
    fn test_from_hex_rejects_bad_length() {
        assert!(matches!(
            Uint256::from_hex("abcd"),
            Err(PrimitivesError::InvalidHash(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let bad = "zz".repeat(32);
        assert!(matches!(
            Uint256::from_hex(&bad),
            Err(PrimitivesError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hash_of_empty_displays_reversed() {
        let h = Uint256::hash_of(b"");
        assert_eq!(
            h.to_hex(),
            "56944c5d3f98413ef45cf54545538103cc9f298e0575820ad3591376e2e0f65d"
        );
    }

    #[test]
    fn test_serde_uses_display_hex() {
        let id = Uint256::from_hex(NEO_ASSET_ID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", NEO_ASSET_ID));
        let back: Uint256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
