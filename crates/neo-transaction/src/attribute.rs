//! Transaction attributes.
//!
//! An attribute is a usage byte followed by data whose length encoding
//! depends on the usage: hash-like usages carry fixed-size data,
//! `DescriptionUrl` a one-byte length, and descriptions and remarks a
//! VarInt length.

use neo_primitives::util::{BinaryReader, BinaryWriter};
use neo_script::ScriptHash;

use crate::TransactionError;

pub const USAGE_CONTRACT_HASH: u8 = 0x00;
pub const USAGE_ECDH02: u8 = 0x02;
pub const USAGE_ECDH03: u8 = 0x03;
/// Script hash of an additional signer.
pub const USAGE_SCRIPT: u8 = 0x20;
pub const USAGE_VOTE: u8 = 0x30;
pub const USAGE_DESCRIPTION_URL: u8 = 0x81;
pub const USAGE_DESCRIPTION: u8 = 0x90;
pub const USAGE_HASH1: u8 = 0xa1;
pub const USAGE_HASH15: u8 = 0xaf;
/// First of the sixteen free-form remark usages.
pub const USAGE_REMARK: u8 = 0xf0;
pub const USAGE_REMARK15: u8 = 0xff;

/// How the data of an attribute is delimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DataLength {
    Fixed(usize),
    ByteLength,
    VarLength,
}

fn data_length(usage: u8) -> Option<DataLength> {
    match usage {
        USAGE_CONTRACT_HASH | USAGE_ECDH02 | USAGE_ECDH03 | USAGE_VOTE => Some(DataLength::Fixed(32)),
        USAGE_HASH1..=USAGE_HASH15 => Some(DataLength::Fixed(32)),
        USAGE_SCRIPT => Some(DataLength::Fixed(20)),
        USAGE_DESCRIPTION_URL => Some(DataLength::ByteLength),
        USAGE_DESCRIPTION | USAGE_REMARK..=USAGE_REMARK15 => Some(DataLength::VarLength),
        _ => None,
    }
}

/// A usage byte and its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionAttribute {
    usage: u8,
    data: Vec<u8>,
}

impl TransactionAttribute {
    /// Create an attribute, checking the data fits the usage.
    pub fn new(usage: u8, data: Vec<u8>) -> Result<Self, TransactionError> {
        match data_length(usage) {
            None => Err(TransactionError::SerializationError(format!(
                "unknown attribute usage {:#04x}",
                usage
            ))),
            Some(DataLength::Fixed(n)) if data.len() != n => Err(TransactionError::SerializationError(
                format!("attribute {:#04x} needs {} bytes, got {}", usage, n, data.len()),
            )),
            Some(DataLength::ByteLength) if data.len() > u8::MAX as usize => {
                Err(TransactionError::SerializationError(format!(
                    "attribute {:#04x} data longer than {} bytes",
                    usage,
                    u8::MAX
                )))
            }
            _ => Ok(TransactionAttribute { usage, data }),
        }
    }

    /// A `Script` attribute naming a signer, in wire order.
    pub fn script(script_hash: &ScriptHash) -> Self {
        TransactionAttribute {
            usage: USAGE_SCRIPT,
            data: script_hash.to_wire_bytes().to_vec(),
        }
    }

    /// A `Remark` attribute carrying UTF-8 text. Empty remarks are allowed.
    pub fn remark(text: &str) -> Self {
        TransactionAttribute {
            usage: USAGE_REMARK,
            data: text.as_bytes().to_vec(),
        }
    }

    pub fn usage(&self) -> u8 {
        self.usage
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Deserialize an attribute from a `BinaryReader`.
    pub fn read_from(reader: &mut BinaryReader) -> Result<Self, TransactionError> {
        let usage = reader.read_u8().map_err(|e| {
            TransactionError::SerializationError(format!("reading attribute usage: {}", e))
        })?;
        let length = data_length(usage).ok_or_else(|| {
            TransactionError::SerializationError(format!("unknown attribute usage {:#04x}", usage))
        })?;
        let data = match length {
            DataLength::Fixed(n) => reader.read_bytes(n),
            DataLength::ByteLength => reader.read_u8().and_then(|n| reader.read_bytes(n as usize)),
            DataLength::VarLength => reader.read_var_bytes(),
        }
        .map_err(|e| {
            TransactionError::SerializationError(format!("reading attribute {:#04x}: {}", usage, e))
        })?;
        Ok(TransactionAttribute {
            usage,
            data: data.to_vec(),
        })
    }

    /// Serialize this attribute into a `BinaryWriter`.
    pub fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.usage);
        match data_length(self.usage) {
            Some(DataLength::ByteLength) => {
                writer.write_u8(self.data.len() as u8);
                writer.write_bytes(&self.data);
            }
            Some(DataLength::VarLength) => writer.write_var_bytes(&self.data),
            _ => writer.write_bytes(&self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_script::Endianness;

    fn encode(attr: &TransactionAttribute) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        attr.write_to(&mut writer);
        writer.into_bytes()
    }

    #[test]
    fn test_remark_encoding() {
        assert_eq!(encode(&TransactionAttribute::remark("hello")), b"\xf0\x05hello".to_vec());
        assert_eq!(encode(&TransactionAttribute::remark("")), vec![0xf0, 0x00]);
    }

    #[test]
    fn test_script_encoding_uses_wire_order() {
        let hash = ScriptHash::from_hex("e9eed8dc39332032dc22e5d6e86332c50327ba23", Endianness::Little)
            .unwrap();
        let bytes = encode(&TransactionAttribute::script(&hash));
        assert_eq!(bytes[0], USAGE_SCRIPT);
        assert_eq!(hex::encode(&bytes[1..]), "23ba2703c53263e8d6e522dc32203339dcd8eee9");
    }

    #[test]
    fn test_read_by_usage_class() {
        let cases: Vec<TransactionAttribute> = vec![
            TransactionAttribute::new(USAGE_HASH1, vec![7; 32]).unwrap(),
            TransactionAttribute::new(USAGE_DESCRIPTION_URL, b"https://neo.org".to_vec()).unwrap(),
            TransactionAttribute::new(USAGE_DESCRIPTION, vec![1; 300]).unwrap(),
            TransactionAttribute::remark("memo"),
        ];
        for attr in cases {
            let bytes = encode(&attr);
            let mut reader = BinaryReader::new(&bytes);
            assert_eq!(TransactionAttribute::read_from(&mut reader).unwrap(), attr);
            assert_eq!(reader.remaining(), 0);
        }
    }

    #[test]
    fn test_rejects_bad_usage_and_length() {
        assert!(TransactionAttribute::new(0x10, vec![]).is_err());
        assert!(TransactionAttribute::new(USAGE_SCRIPT, vec![0; 19]).is_err());
        assert!(TransactionAttribute::new(USAGE_DESCRIPTION_URL, vec![0; 256]).is_err());
        let mut reader = BinaryReader::new(&[0x10]);
        assert!(TransactionAttribute::read_from(&mut reader).is_err());
    }
}
