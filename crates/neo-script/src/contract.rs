//! Contract invocation parameters.
//!
//! An invocation script calls `operation` on a deployed contract with an
//! argument array. Arguments are pushed in reverse order, followed by their
//! count and `PACK`; then the operation name is pushed and `APPCALL` names
//! the contract.

use crate::opcodes::PACK;
use crate::script::{Script, ScriptBuilder};
use crate::script_hash::{Endianness, ScriptHash};
use crate::ScriptError;

/// Deepest array nesting accepted in invocation arguments.
pub const MAX_ARRAY_DEPTH: usize = 16;

/// A single contract argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractParam {
    Boolean(bool),
    Integer(i64),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(ScriptHash),
    Array(Vec<ContractParam>),
}

impl ContractParam {
    fn emit(&self, sb: &mut ScriptBuilder, depth: usize) -> Result<(), ScriptError> {
        match self {
            ContractParam::Boolean(b) => {
                sb.emit_push_bool(*b);
            }
            ContractParam::Integer(n) => {
                sb.emit_push_integer(*n);
            }
            ContractParam::ByteArray(bytes) => {
                sb.emit_push_bytes(bytes)
                    .map_err(|e| ScriptError::InvalidScript(e.to_string()))?;
            }
            ContractParam::String(s) => {
                sb.emit_push_string(s)
                    .map_err(|e| ScriptError::InvalidScript(e.to_string()))?;
            }
            ContractParam::Hash160(hash) => {
                sb.emit_push_bytes(&hash.to_wire_bytes())?;
            }
            ContractParam::Array(items) => emit_array(sb, items, depth + 1)?,
        }
        Ok(())
    }
}

fn emit_array(sb: &mut ScriptBuilder, items: &[ContractParam], depth: usize) -> Result<(), ScriptError> {
    if depth > MAX_ARRAY_DEPTH {
        return Err(ScriptError::InvalidScript(format!(
            "arguments nested deeper than {} arrays",
            MAX_ARRAY_DEPTH
        )));
    }
    for item in items.iter().rev() {
        item.emit(sb, depth)?;
    }
    let count = i64::try_from(items.len())
        .map_err(|_| ScriptError::InvalidScript("too many arguments".to_string()))?;
    sb.emit_push_integer(count);
    sb.emit(PACK);
    Ok(())
}

/// Parameters of a contract invocation script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationParams {
    /// Contract script hash as displayed (reversed order), optionally `0x`-prefixed.
    pub contract: String,
    /// Operation name passed to the contract entry point.
    pub operation: String,
    pub args: Vec<ContractParam>,
}

impl InvocationParams {
    pub fn new(contract: impl Into<String>, operation: impl Into<String>, args: Vec<ContractParam>) -> Self {
        InvocationParams {
            contract: contract.into(),
            operation: operation.into(),
            args,
        }
    }

    /// Parse the contract hash.
    ///
    /// # Returns
    /// The hash (tagged `Little`), or `InvalidScript` if it is not 20 bytes
    /// of hex.
    pub fn contract_hash(&self) -> Result<ScriptHash, ScriptError> {
        ScriptHash::from_hex(&self.contract, Endianness::Little).map_err(|e| {
            ScriptError::InvalidScript(format!("contract hash '{}': {}", self.contract, e))
        })
    }

    /// Build the invocation script.
    ///
    /// # Returns
    /// The script, or `InvalidScript` for an empty operation, a malformed
    /// contract hash, or arguments that cannot be encoded.
    pub fn to_script(&self) -> Result<Script, ScriptError> {
        if self.operation.is_empty() {
            return Err(ScriptError::InvalidScript("operation is empty".to_string()));
        }
        let contract = self.contract_hash()?;

        let mut sb = ScriptBuilder::new();
        emit_array(&mut sb, &self.args, 1)?;
        sb.emit_push_string(&self.operation)
            .map_err(|e| ScriptError::InvalidScript(e.to_string()))?;
        sb.emit_app_call(&contract);
        Ok(sb.into_script())
    }
}
