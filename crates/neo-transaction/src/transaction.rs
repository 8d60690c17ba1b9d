//! Invocation transaction envelope.
//!
//! An invocation transaction runs a NEO VM script and may also move native
//! assets through ordinary inputs and outputs. Its id is the SHA-256d of
//! the unsigned serialization, shown byte-reversed; witnesses are not part
//! of what is hashed or signed.

use neo_primitives::util::{BinaryReader, BinaryWriter, VarInt};
use neo_primitives::{Fixed8, Uint256};
use neo_script::Script;

use crate::attribute::TransactionAttribute;
use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::witness::Witness;
use crate::TransactionError;

/// Type byte of an invocation transaction.
pub const INVOCATION_TX_TYPE: u8 = 0xd1;

/// Version that carries the `gas` field.
pub const INVOCATION_TX_VERSION: u8 = 1;

/// An invocation transaction.
///
/// # Wire format
///
/// | Field           | Size                             |
/// |-----------------|----------------------------------|
/// | type            | 1 byte (`0xd1`)                  |
/// | version         | 1 byte                           |
/// | script          | VarInt length + bytes            |
/// | gas             | 8 bytes (LE), version >= 1 only  |
/// | attributes      | VarInt count + attributes        |
/// | inputs          | VarInt count + 34 bytes each     |
/// | outputs         | VarInt count + 60 bytes each     |
/// | witnesses       | VarInt count + witnesses         |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationTransaction {
    pub version: u8,
    /// The script the VM executes.
    pub script: Script,
    /// System fee paid for execution.
    pub gas: Fixed8,
    pub attributes: Vec<TransactionAttribute>,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub witnesses: Vec<Witness>,
}

impl InvocationTransaction {
    /// Create an unsigned version-1 transaction running `script` with zero gas.
    pub fn new(script: Script) -> Self {
        InvocationTransaction {
            version: INVOCATION_TX_VERSION,
            script,
            gas: Fixed8::ZERO,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::SerializationError(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw bytes.
    ///
    /// The slice must hold exactly one complete transaction with no
    /// trailing data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = BinaryReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::SerializationError(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Deserialize a transaction from a `BinaryReader`.
    pub fn read_from(reader: &mut BinaryReader) -> Result<Self, TransactionError> {
        let tx_type = reader.read_u8().map_err(|e| {
            TransactionError::SerializationError(format!("reading type: {}", e))
        })?;
        if tx_type != INVOCATION_TX_TYPE {
            return Err(TransactionError::SerializationError(format!(
                "not an invocation transaction: type {:#04x}",
                tx_type
            )));
        }
        let version = reader.read_u8().map_err(|e| {
            TransactionError::SerializationError(format!("reading version: {}", e))
        })?;
        if version > INVOCATION_TX_VERSION {
            return Err(TransactionError::SerializationError(format!(
                "unsupported version {}",
                version
            )));
        }

        let script = reader.read_var_bytes().map_err(|e| {
            TransactionError::SerializationError(format!("reading script: {}", e))
        })?;
        let gas = if version >= 1 {
            let raw = reader.read_i64_le().map_err(|e| {
                TransactionError::SerializationError(format!("reading gas: {}", e))
            })?;
            Fixed8::from_raw(raw)
        } else {
            Fixed8::ZERO
        };

        let attributes = read_list(reader, "attribute", TransactionAttribute::read_from)?;
        let inputs = read_list(reader, "input", TransactionInput::read_from)?;
        let outputs = read_list(reader, "output", TransactionOutput::read_from)?;
        let witnesses = read_list(reader, "witness", Witness::read_from)?;

        Ok(InvocationTransaction {
            version,
            script: Script::from_bytes(script),
            gas,
            attributes,
            inputs,
            outputs,
            witnesses,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Write everything except the witnesses.
    fn write_unsigned(&self, writer: &mut BinaryWriter) {
        writer.write_u8(INVOCATION_TX_TYPE);
        writer.write_u8(self.version);
        writer.write_var_bytes(self.script.to_bytes());
        if self.version >= 1 {
            writer.write_i64_le(self.gas.raw());
        }

        writer.write_varint(VarInt::from(self.attributes.len()));
        for attribute in &self.attributes {
            attribute.write_to(writer);
        }
        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(writer);
        }
        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(writer);
        }
    }

    /// The bytes that are signed and hashed into the transaction id.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(256);
        self.write_unsigned(&mut writer);
        writer.into_bytes()
    }

    /// Serialize the full transaction, witnesses included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(512);
        self.write_unsigned(&mut writer);
        writer.write_varint(VarInt::from(self.witnesses.len()));
        for witness in &self.witnesses {
            witness.write_to(&mut writer);
        }
        writer.into_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    // -----------------------------------------------------------------
    // Transaction ID
    // -----------------------------------------------------------------

    /// SHA-256d of the unsigned bytes.
    pub fn tx_id(&self) -> Uint256 {
        Uint256::hash_of(&self.unsigned_bytes())
    }

    /// Transaction id as 64 display-order hex characters.
    pub fn tx_id_hex(&self) -> String {
        self.tx_id().to_hex()
    }
}

fn read_list<T>(
    reader: &mut BinaryReader,
    what: &str,
    read: impl Fn(&mut BinaryReader) -> Result<T, TransactionError>,
) -> Result<Vec<T>, TransactionError> {
    let count = reader.read_varint().map_err(|e| {
        TransactionError::SerializationError(format!("reading {} count: {}", what, e))
    })?;
    // Bound the preallocation by what the remaining bytes could hold.
    let capacity = usize::try_from(count.value())
        .unwrap_or(usize::MAX)
        .min(reader.remaining());
    let mut items = Vec::with_capacity(capacity);
    for _ in 0..count.value() {
        items.push(read(reader)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetKind;
    use neo_script::{Endianness, ScriptHash};

    fn sample() -> InvocationTransaction {
        let hash = ScriptHash::from_hex("23ba2703c53263e8d6e522dc32203339dcd8eee9", Endianness::Big).unwrap();
        let mut tx = InvocationTransaction::new(Script::from_bytes(&[0x00, 0xc1]));
        tx.attributes.push(TransactionAttribute::script(&hash));
        tx.attributes.push(TransactionAttribute::remark("hello"));
        tx.inputs.push(TransactionInput::new(Uint256::new([0xab; 32]), 1));
        tx.outputs.push(TransactionOutput::new(AssetKind::Gas, Fixed8::from_raw(5), hash));
        tx
    }

    #[test]
    fn test_unsigned_layout() {
        let bytes = sample().unsigned_bytes();
        assert_eq!(&bytes[..5], &[0xd1, 0x01, 0x02, 0x00, 0xc1]);
        assert_eq!(&bytes[5..13], &[0u8; 8]);
        // two attributes, then the Script attribute
        assert_eq!(bytes[13], 0x02);
        assert_eq!(bytes[14], 0x20);
        assert_eq!(&bytes[35..42], b"\xf0\x05hello");
        assert_eq!(bytes[42], 0x01);
        assert_eq!(&bytes[43..75], &[0xab; 32]);
        assert_eq!(&bytes[75..77], &[0x01, 0x00]);
        assert_eq!(bytes[77], 0x01);
        assert_eq!(bytes.len(), 78 + 60);
    }

    #[test]
    fn test_witnesses_follow_unsigned_bytes() {
        let tx = sample();
        let unsigned = tx.unsigned_bytes();
        let full = tx.to_bytes();
        assert_eq!(&full[..unsigned.len()], &unsigned[..]);
        assert_eq!(full.len(), unsigned.len() + 1);
        assert_eq!(full[unsigned.len()], 0x00);
    }

    #[test]
    fn test_roundtrip() {
        let tx = sample();
        let decoded = InvocationTransaction::from_hex(&tx.to_hex()).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.tx_id(), tx.tx_id());
    }

    #[test]
    fn test_tx_id_is_reversed_sha256d() {
        let tx = sample();
        let mut digest = neo_primitives::hash::sha256d(&tx.unsigned_bytes());
        digest.reverse();
        assert_eq!(tx.tx_id_hex(), hex::encode(digest));
    }

    #[test]
    fn test_version_zero_has_no_gas() {
        let mut tx = sample();
        tx.version = 0;
        let bytes = tx.to_bytes();
        assert_eq!(bytes.len(), sample().to_bytes().len() - 8);
        assert_eq!(InvocationTransaction::from_bytes(&bytes).unwrap(), tx);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut bytes = sample().to_bytes();
        bytes.push(0x00);
        assert!(InvocationTransaction::from_bytes(&bytes).is_err());

        let mut wrong_type = sample().to_bytes();
        wrong_type[0] = 0x80;
        assert!(InvocationTransaction::from_bytes(&wrong_type).is_err());

        let full = sample().to_bytes();
        assert!(InvocationTransaction::from_bytes(&full[..full.len() - 10]).is_err());
        assert!(InvocationTransaction::from_bytes(&[]).is_err());
    }
}
