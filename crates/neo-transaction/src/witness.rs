//! Transaction witnesses.

use neo_primitives::ec::private_key::PrivateKey;
use neo_primitives::util::{BinaryReader, BinaryWriter};
use neo_script::verification::{invocation_script, verification_script};
use neo_script::Script;

use crate::TransactionError;

/// Proof that a script hash authorized a transaction: an invocation script
/// (the signature push) and the verification script it satisfies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    pub invocation_script: Script,
    pub verification_script: Script,
}

impl Witness {
    /// Sign `message` and build the single-signature witness for `key`.
    pub fn sign(message: &[u8], key: &PrivateKey) -> Result<Self, TransactionError> {
        let sig = key
            .sign(message)
            .map_err(|e| TransactionError::SigningError(e.to_string()))?;
        Ok(Witness {
            invocation_script: invocation_script(&sig),
            verification_script: verification_script(&key.pub_key()),
        })
    }

    /// Deserialize a witness from a `BinaryReader`.
    pub fn read_from(reader: &mut BinaryReader) -> Result<Self, TransactionError> {
        let invocation = reader.read_var_bytes().map_err(|e| {
            TransactionError::SerializationError(format!("reading invocation script: {}", e))
        })?;
        let verification = reader.read_var_bytes().map_err(|e| {
            TransactionError::SerializationError(format!("reading verification script: {}", e))
        })?;
        Ok(Witness {
            invocation_script: Script::from_bytes(invocation),
            verification_script: Script::from_bytes(verification),
        })
    }

    /// Serialize this witness into a `BinaryWriter`.
    pub fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_var_bytes(self.invocation_script.to_bytes());
        writer.write_var_bytes(self.verification_script.to_bytes());
    }
}
