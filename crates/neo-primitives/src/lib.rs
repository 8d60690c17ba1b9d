/// NEO SDK - Cryptographic primitives, hashing, and utilities.
///
/// This crate provides the foundational building blocks for the NEO SDK:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - 256-bit hash type for transaction and asset identification
/// - Fixed-point amounts with eight implied decimals
/// - Elliptic curve cryptography (secp256r1 keys, signatures, WIF)
/// - Variable-length integer encoding and binary reader/writer
/// - Base58 encoding/decoding

pub mod hash;
pub mod uint256;
pub mod fixed8;
pub mod util;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
pub use fixed8::Fixed8;
pub use uint256::Uint256;
