/// NEO SDK - Coin selection, transaction building, signing, and serialization.
///
/// Aggregates a raw UTXO feed into per-asset balances, selects coins to
/// cover an amount plus network fee, and assembles signed
/// `InvocationTransaction`s in the ledger's binary wire format.

pub mod asset;
pub mod unspent;
pub mod selection;
pub mod input;
pub mod output;
pub mod attribute;
pub mod witness;
pub mod transaction;
pub mod assembler;
pub mod mint;

mod error;
pub use error::TransactionError;
pub use asset::AssetKind;
pub use unspent::{AssetBalance, RawUnspent, SpendableSet, UnspentEntry};
pub use selection::{select_and_build_outputs, SelectedInput, SelectionResult};
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use attribute::TransactionAttribute;
pub use witness::Witness;
pub use transaction::InvocationTransaction;
pub use assembler::{assemble, RawTransaction, SignerKey};
pub use mint::{mint_tokens_raw_transaction, CoinSource, MintRequest};
