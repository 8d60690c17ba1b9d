/// NEO address handling.
///
/// An address is the Base58Check encoding of the version byte `0x17`
/// followed by the 20-byte script hash of an account's verification script
/// (in wire order).

use std::fmt;

use neo_primitives::base58;
use neo_primitives::ec::public_key::PublicKey;
use neo_primitives::PrimitivesError;

use crate::script_hash::{Endianness, ScriptHash, SCRIPT_HASH_LEN, WIRE_ENDIANNESS};
use crate::verification::verification_script;
use crate::ScriptError;

/// Address version byte.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Decoded payload length: version byte plus script hash.
const ADDRESS_PAYLOAD_LEN: usize = 1 + SCRIPT_HASH_LEN;

/// A NEO address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The Base58Check address string.
    pub address_string: String,
    script_hash: ScriptHash,
}

impl Address {
    /// Parse and validate a Base58Check address string.
    ///
    /// # Arguments
    /// * `addr` - The address, e.g. `AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y`.
    ///
    /// # Returns
    /// An `Address`, or `InvalidAddress` for bad characters, a bad checksum,
    /// a wrong payload length or a wrong version byte.
    pub fn from_string(addr: &str) -> Result<Self, ScriptError> {
        let payload = base58::check_decode(addr).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => {
                ScriptError::InvalidAddress(format!("checksum failed for '{}'", addr))
            }
            other => ScriptError::InvalidAddress(format!("'{}': {}", addr, other)),
        })?;

        if payload.len() != ADDRESS_PAYLOAD_LEN {
            return Err(ScriptError::InvalidAddress(format!(
                "invalid address length for '{}'",
                addr
            )));
        }
        if payload[0] != ADDRESS_VERSION {
            return Err(ScriptError::InvalidAddress(format!(
                "unsupported version byte {:#04x} for '{}'",
                payload[0], addr
            )));
        }

        let script_hash = ScriptHash::from_bytes(&payload[1..], WIRE_ENDIANNESS)?;
        Ok(Address {
            address_string: addr.to_string(),
            script_hash,
        })
    }

    /// Encode the address of a script hash.
    pub fn from_script_hash(script_hash: &ScriptHash) -> Self {
        let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
        payload.push(ADDRESS_VERSION);
        payload.extend_from_slice(&script_hash.to_wire_bytes());
        Address {
            address_string: base58::check_encode(&payload),
            script_hash: script_hash.to_endianness(WIRE_ENDIANNESS),
        }
    }

    /// Address of the single-signature account for `pub_key`.
    pub fn from_public_key(pub_key: &PublicKey) -> Self {
        Self::from_script_hash(&verification_script(pub_key).script_hash())
    }

    /// The script hash behind this address, in wire (`Big`) order.
    pub fn script_hash(&self) -> ScriptHash {
        self.script_hash
    }

    /// The script hash in the requested order.
    pub fn script_hash_with(&self, endianness: Endianness) -> ScriptHash {
        self.script_hash.to_endianness(endianness)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}
