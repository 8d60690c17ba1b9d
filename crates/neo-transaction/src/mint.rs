//! End-to-end construction of a `mintTokens` invocation.
//!
//! Sends a native asset to a token sale contract and calls its
//! `mintTokens` entry point in the same transaction. Coins come from a
//! `CoinSource`; everything after the fetch is pure.

use rust_decimal::Decimal;
use tracing::debug;

use neo_primitives::Fixed8;
use neo_script::{InvocationParams, ScriptError};

use crate::assembler::{assemble, RawTransaction, SignerKey};
use crate::asset::AssetKind;
use crate::output::TransactionOutput;
use crate::selection::select_and_build_outputs;
use crate::unspent::{RawUnspent, SpendableSet};
use crate::TransactionError;

/// Contract operation invoked by the mint flow.
pub const MINT_TOKENS_OPERATION: &str = "mintTokens";

/// Supplies the unspent outputs of an address.
///
/// Implementations report their own failures as
/// `TransactionError::CoinSource`.
pub trait CoinSource {
    fn fetch_unspent(&self, address: &str) -> Result<Vec<RawUnspent>, TransactionError>;
}

impl<T: CoinSource + ?Sized> CoinSource for &T {
    fn fetch_unspent(&self, address: &str) -> Result<Vec<RawUnspent>, TransactionError> {
        (**self).fetch_unspent(address)
    }
}

/// What to mint and how to pay for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintRequest {
    /// Token contract hash in display order.
    pub contract_script_hash: String,
    /// Asset sent to the contract: a symbol or an asset id.
    pub asset_id: String,
    /// Amount of the asset sent, in whole units.
    pub amount: Decimal,
    pub remark: String,
    /// Network fee in GAS.
    pub network_fee: Decimal,
}

/// Build a signed transaction that pays `request.amount` of the asset to the
/// contract and calls `mintTokens`.
///
/// The request is validated before any coins are fetched.
///
/// # Returns
/// The signed transaction, or the first of `InvalidAsset`, `InvalidAmount`,
/// `InvalidScript`, `CoinSource` or `InsufficientFunds` that applies.
pub fn mint_tokens_raw_transaction<S: CoinSource + ?Sized>(
    source: &S,
    signer: &SignerKey,
    request: &MintRequest,
) -> Result<RawTransaction, TransactionError> {
    let asset: AssetKind = request.asset_id.parse()?;
    let amount = Fixed8::from_decimal(request.amount)
        .map_err(|e| TransactionError::InvalidAmount(e.to_string()))?;
    if !amount.is_positive() {
        return Err(TransactionError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            request.amount
        )));
    }
    let fee = Fixed8::from_decimal(request.network_fee)
        .map_err(|e| TransactionError::InvalidAmount(e.to_string()))?;
    if fee.is_negative() {
        return Err(TransactionError::InvalidAmount(format!(
            "network fee must not be negative, got {}",
            request.network_fee
        )));
    }
    let params = InvocationParams::new(
        request.contract_script_hash.clone(),
        MINT_TOKENS_OPERATION,
        Vec::new(),
    );
    let contract = params.contract_hash().map_err(|e| match e {
        ScriptError::InvalidScript(msg) => TransactionError::InvalidScript(msg),
        other => TransactionError::InvalidScript(other.to_string()),
    })?;

    let address = &signer.address().address_string;
    let raw = source.fetch_unspent(address)?;
    debug!(address = %address, entries = raw.len(), "fetched unspent outputs");
    let balances = SpendableSet::aggregate(&raw);

    let mut selection =
        select_and_build_outputs(&balances, asset, amount, fee, &signer.script_hash())?;
    selection
        .payments
        .push(TransactionOutput::new(asset, amount, contract));

    assemble(&selection, signer, &params, &request.remark)
}
