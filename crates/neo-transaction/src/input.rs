//! Transaction input referencing a previous output.

use neo_primitives::util::{BinaryReader, BinaryWriter};
use neo_primitives::Uint256;

use crate::TransactionError;

/// A reference to an unspent output being consumed.
///
/// # Wire format
///
/// | Field      | Size                  |
/// |------------|-----------------------|
/// | prev_hash  | 32 bytes (wire order) |
/// | prev_index | 2 bytes (LE)          |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionInput {
    /// Id of the transaction that created the output.
    pub prev_hash: Uint256,
    /// Index of the output within that transaction.
    pub prev_index: u16,
}

impl TransactionInput {
    pub fn new(prev_hash: Uint256, prev_index: u16) -> Self {
        TransactionInput {
            prev_hash,
            prev_index,
        }
    }

    /// Deserialize an input from a `BinaryReader`.
    pub fn read_from(reader: &mut BinaryReader) -> Result<Self, TransactionError> {
        let hash = reader.read_array::<32>().map_err(|e| {
            TransactionError::SerializationError(format!("reading input hash: {}", e))
        })?;
        let prev_index = reader.read_u16_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading input index: {}", e))
        })?;
        Ok(TransactionInput {
            prev_hash: Uint256::new(hash),
            prev_index,
        })
    }

    /// Serialize this input into a `BinaryWriter`.
    pub fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_bytes(self.prev_hash.as_bytes());
        writer.write_u16_le(self.prev_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txid_written_in_wire_order() {
        let txid = "00000000000000000000000000000000000000000000000000000000000000ff";
        let input = TransactionInput::new(Uint256::from_hex(txid).unwrap(), 0x0102);
        let mut writer = BinaryWriter::new();
        input.write_to(&mut writer);
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 34);
        assert_eq!(bytes[0], 0xff);
        assert_eq!(&bytes[32..], &[0x02, 0x01]);

        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(TransactionInput::read_from(&mut reader).unwrap(), input);
    }

    #[test]
    fn test_read_truncated() {
        let mut reader = BinaryReader::new(&[0u8; 33]);
        assert!(matches!(
            TransactionInput::read_from(&mut reader),
            Err(TransactionError::SerializationError(_))
        ));
    }
}
