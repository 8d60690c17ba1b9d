//! ECDSA signatures over secp256r1.
//!
//! Messages are hashed with SHA-256 and signed with RFC6979 deterministic
//! nonces, so signing the same bytes with the same key always yields the
//! same 64-byte `r || s` value. Witness invocation scripts push exactly
//! these 64 bytes.

use p256::ecdsa;
use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::hash::sha256;
use crate::PrimitivesError;

/// Length of a signature in its fixed `r || s` form.
pub const SIGNATURE_LEN: usize = 64;

/// An ECDSA signature with 32-byte big-endian R and S components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
}

impl Signature {
    /// Create a signature from raw R and S components.
    pub fn new(r: [u8; 32], s: [u8; 32]) -> Self {
        Signature { r, s }
    }

    /// Parse the fixed 64-byte `r || s` form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(PrimitivesError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Ok(Signature { r, s })
    }

    /// Serialize as `r || s`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Sign the SHA-256 digest of `message`.
    ///
    /// # Arguments
    /// * `message` - The bytes to authorize (for transactions, the unsigned
    ///   serialization).
    /// * `priv_key` - The signing key.
    pub fn sign(message: &[u8], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let digest = sha256(message);
        let sig: ecdsa::Signature = priv_key
            .signing_key()
            .sign_prehash(&digest)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        Self::from_bytes(&sig.to_bytes())
    }

    /// Verify this signature against the SHA-256 digest of `message`.
    pub fn verify(&self, message: &[u8], pub_key: &PublicKey) -> bool {
        let sig = match ecdsa::Signature::from_slice(&self.to_bytes()) {
            Ok(sig) => sig,
            Err(_) => return false,
        };
        pub_key
            .verifying_key()
            .verify_prehash(&sha256(message), &sig)
            .is_ok()
    }
}
