/// Elliptic curve cryptography on secp256r1 (NIST P-256).
///
/// Provides private keys with WIF encoding, compressed public keys, and
/// deterministic ECDSA signatures over SHA-256 message digests.

pub mod private_key;
pub mod public_key;
pub mod signature;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;
