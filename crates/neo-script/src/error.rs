/// Error types for script operations.
///
/// Covers address validation, script hash parsing, and malformed contract
/// invocation parameters.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Address failed Base58Check decoding, length, or version validation.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A script hash had the wrong length or could not be decoded.
    #[error("invalid script hash: {0}")]
    InvalidScriptHash(String),

    /// Invocation script parameters were missing or malformed.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Push data exceeds the largest PUSHDATA4 payload.
    #[error("data too big: {0} bytes")]
    DataTooBig(usize),

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] neo_primitives::PrimitivesError),
}
