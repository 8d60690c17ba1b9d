use neo_primitives::Fixed8;

use crate::asset::AssetKind;

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The asset identifier is not a known native asset.
    #[error("invalid asset: {0}")]
    InvalidAsset(String),
    /// An amount or fee is zero, negative, or not representable.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// The spendable entries of `asset` cannot cover `required`.
    #[error("insufficient {asset} funds: required {required}, available {available}")]
    InsufficientFunds {
        asset: AssetKind,
        required: Fixed8,
        available: Fixed8,
    },
    /// Invocation script parameters are missing or malformed.
    #[error("invalid script: {0}")]
    InvalidScript(String),
    /// An error occurred during binary serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// Producing the witness signature failed.
    #[error("signing error: {0}")]
    SigningError(String),
    /// The coin source failed; the underlying error is kept as is.
    #[error("coin source error: {0}")]
    CoinSource(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// An underlying script error (forwarded from `neo-script`).
    #[error("script error: {0}")]
    Script(#[from] neo_script::ScriptError),
    /// An underlying primitives error (forwarded from `neo-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] neo_primitives::PrimitivesError),
}
