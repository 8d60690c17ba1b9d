//! secp256r1 private key with WIF import/export.
//!
//! Wraps the p256 signing key. NEO WIF strings are the Base58Check encoding
//! of `0x80 || key || 0x01`; only the compressed form is used on this ledger.

use std::fmt;

use p256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// WIF version byte.
const WIF_PREFIX: u8 = 0x80;

/// Compression flag appended after the key in a WIF payload.
const COMPRESS_MAGIC: u8 = 0x01;

/// Length of a decoded WIF payload (prefix + key + flag), checksum excluded.
const WIF_PAYLOAD_LEN: usize = 1 + PRIVATE_KEY_BYTES_LEN + 1;

/// A secp256r1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key from the OS random number generator.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)`, or `InvalidPrivateKey` if the length is wrong or the
    /// scalar is zero or not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let inner = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    /// Create a private key from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_bytes(&bytes)
    }

    /// Decode a WIF string.
    ///
    /// # Arguments
    /// * `wif` - Base58Check string of `0x80 || key || 0x01`.
    ///
    /// # Returns
    /// `Ok(PrivateKey)`, `ChecksumMismatch` for a corrupted string, or
    /// `InvalidWif` for a wrong length, prefix or compression flag.
    pub fn from_wif(wif: &str) -> Result<Self, PrimitivesError> {
        let payload = Zeroizing::new(base58::check_decode(wif).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => e,
            other => PrimitivesError::InvalidWif(other.to_string()),
        })?);

        if payload.len() != WIF_PAYLOAD_LEN {
            return Err(PrimitivesError::InvalidWif(format!(
                "invalid payload length {}",
                payload.len()
            )));
        }
        if payload[0] != WIF_PREFIX {
            return Err(PrimitivesError::InvalidWif(format!(
                "invalid version byte {:#04x}",
                payload[0]
            )));
        }
        if payload[WIF_PAYLOAD_LEN - 1] != COMPRESS_MAGIC {
            return Err(PrimitivesError::InvalidWif(
                "invalid compression flag".to_string(),
            ));
        }

        Self::from_bytes(&payload[1..1 + PRIVATE_KEY_BYTES_LEN])
    }

    /// Encode the key as a compressed WIF string.
    pub fn to_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(WIF_PAYLOAD_LEN));
        payload.push(WIF_PREFIX);
        payload.extend_from_slice(&self.to_bytes()[..]);
        payload.push(COMPRESS_MAGIC);
        base58::check_encode(&payload)
    }

    /// Serialize the key as its 32-byte big-endian scalar.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_BYTES_LEN]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_BYTES_LEN]);
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.inner.verifying_key())
    }

    /// Sign `message` (hashed with SHA-256) using RFC6979 deterministic nonces.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, PrimitivesError> {
        Signature::sign(message, self)
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        *self.to_bytes() == *other.to_bytes()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.pub_key().to_hex())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "1dd37fba80fec4e6a6f13fd708d8dcb3b29def768017052f6c930fa1c5d90bbb";
    const KEY_WIF: &str = "KxDgvEKzgSBPPfuVfw67oPQBSjidEiqTHURKSDL1R7yGaGYAeYnr";
    const PUB_KEY_HEX: &str = "031a6c6fbbdf02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2a46c4fcf4a";

    #[test]
    fn test_from_wif() {
        let key = PrivateKey::from_wif(KEY_WIF).unwrap();
        assert_eq!(hex::encode(&key.to_bytes()[..]), KEY_HEX);
    }

    #[test]
    fn test_to_wif() {
        let key = PrivateKey::from_hex(KEY_HEX).unwrap();
        assert_eq!(key.to_wif(), KEY_WIF);
    }

    #[test]
    fn test_pub_key_compressed() {
        let key = PrivateKey::from_hex(KEY_HEX).unwrap();
        assert_eq!(key.pub_key().to_hex(), PUB_KEY_HEX);
    }

    #[test]
    fn test_from_wif_bad_checksum() {
        let mut wif = KEY_WIF.to_string();
        wif.pop();
        wif.push('s');
        assert!(PrivateKey::from_wif(&wif).is_err());
    }

    #[test]
    fn test_from_wif_wrong_prefix() {
        let mut payload = vec![0x81];
        payload.extend_from_slice(&hex::decode(KEY_HEX).unwrap());
        payload.push(COMPRESS_MAGIC);
        let wif = base58::check_encode(&payload);
        assert!(matches!(
            PrivateKey::from_wif(&wif),
            Err(PrimitivesError::InvalidWif(_))
        ));
    }

    #[test]
    fn test_from_wif_uncompressed_rejected() {
        let mut payload = vec![WIF_PREFIX];
        payload.extend_from_slice(&hex::decode(KEY_HEX).unwrap());
        let wif = base58::check_encode(&payload);
        assert!(matches!(
            PrivateKey::from_wif(&wif),
            Err(PrimitivesError::InvalidWif(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_zero_and_short() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[1u8; 31]).is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = PrivateKey::from_hex(KEY_HEX).unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(KEY_HEX));
        assert!(debug.contains(PUB_KEY_HEX));
    }
}
