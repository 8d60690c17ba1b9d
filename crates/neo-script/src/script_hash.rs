//! Endianness-tagged 20-byte script hashes.
//!
//! A script hash is the Hash160 of a verification script. The same logical
//! value has two byte orders in circulation: the order stored in an address
//! payload and written on the wire (`Big`), and the reversed order used when
//! contract hashes are displayed (`Little`). `ScriptHash` always records which
//! one it holds, so the two can be compared but never silently mixed.

use std::fmt;
use std::hash::{Hash, Hasher};

use neo_primitives::hash::hash160;

use crate::address::Address;
use crate::ScriptError;

/// Length of a script hash in bytes.
pub const SCRIPT_HASH_LEN: usize = 20;

/// Byte order of a `ScriptHash`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Address payload order. This is what the wire format requires.
    Big,
    /// Reversed order, as used by block explorers and contract hash strings.
    Little,
}

/// Byte order used in serialized transactions and scripts.
pub const WIRE_ENDIANNESS: Endianness = Endianness::Big;

/// A 20-byte script hash together with the byte order it is stored in.
///
/// Equality and hashing compare the logical value, so a `Big` hash equals
/// its own `Little` conversion.
#[derive(Clone, Copy)]
pub struct ScriptHash {
    bytes: [u8; SCRIPT_HASH_LEN],
    endianness: Endianness,
}

impl ScriptHash {
    /// Wrap 20 bytes that are already in the given order.
    pub fn new(bytes: [u8; SCRIPT_HASH_LEN], endianness: Endianness) -> Self {
        ScriptHash { bytes, endianness }
    }

    /// Create a script hash from a byte slice in the given order.
    ///
    /// # Returns
    /// `InvalidScriptHash` unless the slice is exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8], endianness: Endianness) -> Result<Self, ScriptError> {
        let bytes: [u8; SCRIPT_HASH_LEN] = bytes.try_into().map_err(|_| {
            ScriptError::InvalidScriptHash(format!(
                "expected {} bytes, got {}",
                SCRIPT_HASH_LEN,
                bytes.len()
            ))
        })?;
        Ok(ScriptHash { bytes, endianness })
    }

    /// Parse a 40-character hex string (optional `0x` prefix) whose bytes are
    /// in the given order.
    pub fn from_hex(hex_str: &str, endianness: Endianness) -> Result<Self, ScriptError> {
        let trimmed = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(trimmed).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes, endianness)
    }

    /// Derive the script hash of an address.
    ///
    /// # Arguments
    /// * `address` - Base58Check address string.
    /// * `endianness` - The byte order the caller needs.
    ///
    /// # Returns
    /// The 20-byte hash in the requested order, or `InvalidAddress` if the
    /// address fails checksum, length or version validation.
    pub fn from_address(address: &str, endianness: Endianness) -> Result<Self, ScriptError> {
        Ok(Address::from_string(address)?
            .script_hash()
            .to_endianness(endianness))
    }

    /// Hash160 of a script, in wire order.
    pub fn from_script(script: &[u8]) -> Self {
        ScriptHash {
            bytes: hash160(script),
            endianness: WIRE_ENDIANNESS,
        }
    }

    /// Return the same value in the requested byte order.
    pub fn to_endianness(&self, endianness: Endianness) -> Self {
        if endianness == self.endianness {
            return *self;
        }
        let mut bytes = self.bytes;
        bytes.reverse();
        ScriptHash { bytes, endianness }
    }

    /// Bytes in wire order, regardless of how this value is stored.
    pub fn to_wire_bytes(&self) -> [u8; SCRIPT_HASH_LEN] {
        self.to_endianness(WIRE_ENDIANNESS).bytes
    }

    /// Bytes in the stored order.
    pub fn as_bytes(&self) -> &[u8; SCRIPT_HASH_LEN] {
        &self.bytes
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Hex of the bytes in the stored order.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl PartialEq for ScriptHash {
    fn eq(&self, other: &Self) -> bool {
        self.to_wire_bytes() == other.to_wire_bytes()
    }
}

impl Eq for ScriptHash {}

impl Hash for ScriptHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_wire_bytes().hash(state);
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptHash({:?}, {})", self.endianness, self.to_hex())
    }
}

/// Hex form of an address's script hash in the requested order.
///
/// With `Endianness::Big` this is the address payload as hex.
pub fn script_hash_hex_from_address(
    address: &str,
    endianness: Endianness,
) -> Result<String, ScriptError> {
    Ok(ScriptHash::from_address(address, endianness)?.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y";
    const BIG_HEX: &str = "23ba2703c53263e8d6e522dc32203339dcd8eee9";
    const LITTLE_HEX: &str = "e9eed8dc39332032dc22e5d6e86332c50327ba23";
    const VERIFICATION_SCRIPT: &str =
        "21031a6c6fbbdf02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2a46c4fcf4aac";

    #[test]
    fn test_from_address_big() {
        let hash = ScriptHash::from_address(ADDRESS, Endianness::Big).unwrap();
        assert_eq!(hash.to_hex(), BIG_HEX);
        assert_eq!(hash.endianness(), Endianness::Big);
    }

    #[test]
    fn test_from_address_little_is_reversed() {
        let hash = ScriptHash::from_address(ADDRESS, Endianness::Little).unwrap();
        assert_eq!(hash.to_hex(), LITTLE_HEX);
        assert_eq!(hex::encode(hash.to_wire_bytes()), BIG_HEX);
    }

    #[test]
    fn test_logical_equality_across_orders() {
        let big = ScriptHash::from_hex(BIG_HEX, Endianness::Big).unwrap();
        let little = ScriptHash::from_hex(LITTLE_HEX, Endianness::Little).unwrap();
        assert_eq!(big, little);
        assert_ne!(big.as_bytes(), little.as_bytes());
        let same_bytes_other_tag = ScriptHash::from_hex(BIG_HEX, Endianness::Little).unwrap();
        assert_ne!(big, same_bytes_other_tag);
    }

    #[test]
    fn test_from_script() {
        let script = hex::decode(VERIFICATION_SCRIPT).unwrap();
        let hash = ScriptHash::from_script(&script);
        assert_eq!(hash.to_hex(), BIG_HEX);
    }

    #[test]
    fn test_from_hex_accepts_prefix() {
        let hash = ScriptHash::from_hex(&format!("0x{}", LITTLE_HEX), Endianness::Little).unwrap();
        assert_eq!(hash.to_hex(), LITTLE_HEX);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            ScriptHash::from_hex("abcd", Endianness::Big),
            Err(ScriptError::InvalidScriptHash(_))
        ));
        assert!(matches!(
            ScriptHash::from_hex("zz", Endianness::Big),
            Err(ScriptError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_from_address_invalid() {
        assert!(matches!(
            ScriptHash::from_address("AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8z", Endianness::Big),
            Err(ScriptError::InvalidAddress(_))
        ));
        assert!(matches!(
            ScriptHash::from_address("not-an-address", Endianness::Big),
            Err(ScriptError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_hex_helper() {
        assert_eq!(
            script_hash_hex_from_address(ADDRESS, Endianness::Big).unwrap(),
            BIG_HEX
        );
    }
}
