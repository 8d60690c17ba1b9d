/// NEO VM scripts and a builder for emitting them.
///
/// `Script` wraps raw script bytes. `ScriptBuilder` emits opcodes and data
/// pushes using the shortest push encoding for each value.

use std::fmt;

use crate::opcodes::*;
use crate::script_hash::ScriptHash;
use crate::ScriptError;

/// A NEO VM script, represented as a byte vector newtype.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or `InvalidHex`.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(hex_str).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Script(bytes))
    }

    /// Encode the script as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hash160 of the script in wire order.
    pub fn script_hash(&self) -> ScriptHash {
        ScriptHash::from_script(&self.0)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

// ---------------------------------------------------------------------------
// ScriptBuilder
// ---------------------------------------------------------------------------

/// Incremental NEO VM script writer.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    buf: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        ScriptBuilder { buf: Vec::new() }
    }

    /// Append a single opcode.
    pub fn emit(&mut self, opcode: u8) -> &mut Self {
        self.buf.push(opcode);
        self
    }

    /// Append raw bytes with no push prefix (opcode operands).
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Push a byte string using the shortest encoding.
    ///
    /// Empty data becomes `PUSH0`; up to 75 bytes use a single length
    /// opcode; longer data uses `PUSHDATA1`, `PUSHDATA2` or `PUSHDATA4`.
    ///
    /// # Returns
    /// `DataTooBig` if the data does not fit a `PUSHDATA4` length.
    pub fn emit_push_bytes(&mut self, data: &[u8]) -> Result<&mut Self, ScriptError> {
        let len = data.len();
        if len == 0 {
            self.buf.push(PUSH0);
        } else if len <= PUSHBYTES75 as usize {
            self.buf.push(len as u8);
        } else if len <= 0xff {
            self.buf.push(PUSHDATA1);
            self.buf.push(len as u8);
        } else if len <= 0xffff {
            self.buf.push(PUSHDATA2);
            self.buf.extend_from_slice(&(len as u16).to_le_bytes());
        } else if len <= 0xffff_ffff {
            self.buf.push(PUSHDATA4);
            self.buf.extend_from_slice(&(len as u32).to_le_bytes());
        } else {
            return Err(ScriptError::DataTooBig(len));
        }
        self.buf.extend_from_slice(data);
        Ok(self)
    }

    /// Push an integer.
    ///
    /// `-1..=16` use the dedicated opcodes; anything else is pushed as its
    /// minimal little-endian two's-complement encoding.
    pub fn emit_push_integer(&mut self, n: i64) -> &mut Self {
        if let Some(op) = small_int_opcode(n) {
            self.buf.push(op);
            return self;
        }
        let bytes = minimal_le_bytes(n);
        // At most 8 bytes, so a single length opcode always suffices.
        self.buf.push(bytes.len() as u8);
        self.buf.extend_from_slice(&bytes);
        self
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.buf.push(if value { PUSHT } else { PUSHF });
        self
    }

    /// Push a UTF-8 string as bytes.
    pub fn emit_push_string(&mut self, s: &str) -> Result<&mut Self, ScriptError> {
        self.emit_push_bytes(s.as_bytes())
    }

    /// Emit `APPCALL` followed by the contract hash in wire order.
    pub fn emit_app_call(&mut self, contract: &ScriptHash) -> &mut Self {
        self.buf.push(APPCALL);
        self.buf.extend_from_slice(&contract.to_wire_bytes());
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish building and return the script.
    pub fn into_script(self) -> Script {
        Script(self.buf)
    }
}

/// Shortest little-endian two's-complement encoding of `n`.
fn minimal_le_bytes(n: i64) -> Vec<u8> {
    let mut bytes = n.to_le_bytes().to_vec();
    while bytes.len() > 1 {
        let last = bytes[bytes.len() - 1];
        let sign_of_prev = bytes[bytes.len() - 2] & 0x80;
        if (last == 0x00 && sign_of_prev == 0) || (last == 0xff && sign_of_prev != 0) {
            bytes.pop();
        } else {
            break;
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(f: impl FnOnce(&mut ScriptBuilder)) -> String {
        let mut sb = ScriptBuilder::new();
        f(&mut sb);
        sb.into_script().to_hex()
    }

    #[test]
    fn test_script_from_hex() {
        assert_eq!(Script::from_hex("51ac").unwrap().to_hex(), "51ac");
        assert!(matches!(Script::from_hex("5"), Err(ScriptError::InvalidHex(_))));
        assert!(matches!(Script::from_hex("zz"), Err(ScriptError::InvalidHex(_))));
    }

    #[test]
    fn test_push_small_integers() {
        assert_eq!(build(|sb| { sb.emit_push_integer(-1); }), "4f");
        assert_eq!(build(|sb| { sb.emit_push_integer(0); }), "00");
        assert_eq!(build(|sb| { sb.emit_push_integer(1); }), "51");
        assert_eq!(build(|sb| { sb.emit_push_integer(16); }), "60");
    }

    #[test]
    fn test_push_large_integers() {
        assert_eq!(build(|sb| { sb.emit_push_integer(17); }), "0111");
        assert_eq!(build(|sb| { sb.emit_push_integer(127); }), "017f");
        assert_eq!(build(|sb| { sb.emit_push_integer(128); }), "028000");
        assert_eq!(build(|sb| { sb.emit_push_integer(255); }), "02ff00");
        assert_eq!(build(|sb| { sb.emit_push_integer(256); }), "020001");
        assert_eq!(build(|sb| { sb.emit_push_integer(-2); }), "01fe");
        assert_eq!(build(|sb| { sb.emit_push_integer(-129); }), "027fff");
        assert_eq!(build(|sb| { sb.emit_push_integer(100_000_000); }), "0400e1f505");
    }

    #[test]
    fn test_push_bool() {
        assert_eq!(build(|sb| { sb.emit_push_bool(true); }), "51");
        assert_eq!(build(|sb| { sb.emit_push_bool(false); }), "00");
    }

    #[test]
    fn test_push_bytes_prefixes() {
        let mut sb = ScriptBuilder::new();
        sb.emit_push_bytes(&[]).unwrap();
        assert_eq!(sb.into_script().to_hex(), "00");

        let mut sb = ScriptBuilder::new();
        sb.emit_push_bytes(&[0xab; 75]).unwrap();
        assert_eq!(sb.into_script().to_bytes()[0], 0x4b);

        let mut sb = ScriptBuilder::new();
        sb.emit_push_bytes(&[0xab; 76]).unwrap();
        assert_eq!(&sb.into_script().to_bytes()[..2], &[PUSHDATA1, 76]);

        let mut sb = ScriptBuilder::new();
        sb.emit_push_bytes(&[0xab; 256]).unwrap();
        assert_eq!(&sb.into_script().to_bytes()[..3], &[PUSHDATA2, 0x00, 0x01]);

        let mut sb = ScriptBuilder::new();
        sb.emit_push_bytes(&vec![0u8; 0x10000]).unwrap();
        let script = sb.into_script();
        assert_eq!(&script.to_bytes()[..5], &[PUSHDATA4, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(script.len(), 5 + 0x10000);
    }

    #[test]
    fn test_push_string() {
        let mut sb = ScriptBuilder::new();
        sb.emit_push_string("mintTokens").unwrap();
        assert_eq!(sb.into_script().to_hex(), "0a6d696e74546f6b656e73");
    }

    #[test]
    fn test_script_hex_roundtrip() {
        let script = Script::from_hex("51c10a6d696e74546f6b656e73").unwrap();
        assert_eq!(script.to_hex(), "51c10a6d696e74546f6b656e73");
        assert!(Script::from_hex("zz").is_err());
        assert!(Script::new().is_empty());
    }
}
