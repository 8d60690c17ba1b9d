//! Transaction output paying an asset amount to a script hash.

use neo_primitives::util::{BinaryReader, BinaryWriter};
use neo_primitives::{Fixed8, Uint256};
use neo_script::{ScriptHash, WIRE_ENDIANNESS};

use crate::asset::AssetKind;
use crate::TransactionError;

/// A single output in an invocation transaction.
///
/// # Wire format
///
/// | Field       | Size                  |
/// |-------------|-----------------------|
/// | asset_id    | 32 bytes (wire order) |
/// | value       | 8 bytes (LE, 10^-8)   |
/// | script_hash | 20 bytes (wire order) |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    pub asset_id: Uint256,
    pub value: Fixed8,
    /// Recipient; written in wire order whatever order it is stored in.
    pub script_hash: ScriptHash,
}

impl TransactionOutput {
    /// Create an output of a native asset.
    pub fn new(asset: AssetKind, value: Fixed8, script_hash: ScriptHash) -> Self {
        TransactionOutput {
            asset_id: asset.asset_id(),
            value,
            script_hash,
        }
    }

    /// The native asset of this output, if it is one.
    pub fn asset(&self) -> Option<AssetKind> {
        AssetKind::from_asset_id(&self.asset_id)
    }

    /// Deserialize an output from a `BinaryReader`.
    pub fn read_from(reader: &mut BinaryReader) -> Result<Self, TransactionError> {
        let asset_id = reader.read_array::<32>().map_err(|e| {
            TransactionError::SerializationError(format!("reading output asset: {}", e))
        })?;
        let value = reader.read_i64_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading output value: {}", e))
        })?;
        let script_hash = reader.read_array::<20>().map_err(|e| {
            TransactionError::SerializationError(format!("reading output script hash: {}", e))
        })?;
        Ok(TransactionOutput {
            asset_id: Uint256::new(asset_id),
            value: Fixed8::from_raw(value),
            script_hash: ScriptHash::new(script_hash, WIRE_ENDIANNESS),
        })
    }

    /// Serialize this output into a `BinaryWriter`.
    pub fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_bytes(self.asset_id.as_bytes());
        writer.write_i64_le(self.value.raw());
        writer.write_bytes(&self.script_hash.to_wire_bytes());
    }
}
