//! Signed transaction assembly.
//!
//! Turns a coin selection, a signer and invocation parameters into the
//! serialized bytes of a signed `InvocationTransaction` and its id. Either
//! a complete transaction is produced or nothing is.

use std::fmt;

use tracing::debug;

use neo_primitives::ec::private_key::PrivateKey;
use neo_primitives::ec::public_key::PublicKey;
use neo_script::{Address, InvocationParams, ScriptError, ScriptHash};

use crate::attribute::TransactionAttribute;
use crate::input::TransactionInput;
use crate::selection::SelectionResult;
use crate::transaction::InvocationTransaction;
use crate::witness::Witness;
use crate::TransactionError;

/// Key material of the account that funds and signs a transaction.
#[derive(Clone)]
pub struct SignerKey {
    private_key: PrivateKey,
    public_key: PublicKey,
    address: Address,
}

impl SignerKey {
    /// Load a signer from a WIF string.
    pub fn from_wif(wif: &str) -> Result<Self, TransactionError> {
        Ok(Self::from_private_key(PrivateKey::from_wif(wif)?))
    }

    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.pub_key();
        let address = Address::from_public_key(&public_key);
        SignerKey {
            private_key,
            public_key,
            address,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Script hash of the signer's verification script, in wire order.
    pub fn script_hash(&self) -> ScriptHash {
        self.address.script_hash()
    }
}

impl fmt::Debug for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerKey")
            .field("address", &self.address.address_string)
            .field("public_key", &self.public_key.to_hex())
            .finish_non_exhaustive()
    }
}

/// A signed, serialized transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransaction {
    /// Transaction id, 64 display-order hex characters.
    pub id: String,
    /// Full wire serialization including witnesses.
    pub bytes: Vec<u8>,
}

impl RawTransaction {
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Build, sign and serialize an invocation transaction.
///
/// # Arguments
/// * `selection` - Inputs plus payment and change outputs.
/// * `signer` - Owner of the inputs; added as a `Script` attribute and
///   the sole witness.
/// * `script_params` - Contract call the transaction runs.
/// * `remark` - Free text stored in a `Remark` attribute (may be empty).
///
/// # Returns
/// The signed `RawTransaction`, or `InvalidScript` if `script_params`
/// cannot be encoded. Nothing is signed in that case.
pub fn assemble(
    selection: &SelectionResult,
    signer: &SignerKey,
    script_params: &InvocationParams,
    remark: &str,
) -> Result<RawTransaction, TransactionError> {
    let script = script_params.to_script().map_err(|e| match e {
        ScriptError::InvalidScript(msg) => TransactionError::InvalidScript(msg),
        other => TransactionError::InvalidScript(other.to_string()),
    })?;

    let mut tx = InvocationTransaction::new(script);
    tx.attributes.push(TransactionAttribute::script(&signer.script_hash()));
    tx.attributes.push(TransactionAttribute::remark(remark));
    tx.inputs = selection
        .inputs
        .iter()
        .map(|input| TransactionInput::new(input.entry.transaction_id, input.entry.output_index))
        .collect();
    tx.outputs = selection.outputs().copied().collect();

    let unsigned = tx.unsigned_bytes();
    tx.witnesses.push(Witness::sign(&unsigned, signer.private_key())?);

    let id = tx.tx_id_hex();
    let bytes = tx.to_bytes();
    debug!(
        txid = %id,
        inputs = tx.inputs.len(),
        outputs = tx.outputs.len(),
        size = bytes.len(),
        "assembled invocation transaction"
    );
    Ok(RawTransaction { id, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_WIF: &str = "KxDgvEKzgSBPPfuVfw67oPQBSjidEiqTHURKSDL1R7yGaGYAeYnr";

    #[test]
    fn test_signer_from_wif() {
        let signer = SignerKey::from_wif(KEY_WIF).unwrap();
        assert_eq!(signer.address().to_string(), "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y");
        assert_eq!(
            signer.script_hash().to_hex(),
            "23ba2703c53263e8d6e522dc32203339dcd8eee9"
        );
        assert_eq!(
            signer.public_key().to_hex(),
            "031a6c6fbbdf02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2a46c4fcf4a"
        );
    }

    #[test]
    fn test_signer_from_bad_wif() {
        assert!(matches!(
            SignerKey::from_wif("not a wif"),
            Err(TransactionError::Primitives(_))
        ));
    }

    #[test]
    fn test_signer_debug_hides_key() {
        let signer = SignerKey::from_wif(KEY_WIF).unwrap();
        let debug = format!("{:?}", signer);
        assert!(!debug.contains(KEY_WIF));
        assert!(!debug.contains("1dd37fba80fec4e6"));
    }
}
