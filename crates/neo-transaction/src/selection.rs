//! Fee-aware coin selection and output construction.
//!
//! Each asset that must be spent is covered independently: entries are
//! taken in the order the coin feed listed them until their sum reaches the
//! required value. Any excess goes back to the change script hash as exactly
//! one change output per covered asset.

use tracing::debug;

use neo_primitives::Fixed8;
use neo_script::ScriptHash;

use crate::asset::AssetKind;
use crate::output::TransactionOutput;
use crate::unspent::{AssetBalance, SpendableSet, UnspentEntry};
use crate::TransactionError;

/// An unspent output chosen as a transaction input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedInput {
    pub asset: AssetKind,
    pub entry: UnspentEntry,
}

/// Inputs and outputs chosen for a transaction.
///
/// `payments` is left empty by selection; the caller adds the outputs that
/// actually pay someone. Serialized outputs are `payments` followed by
/// `change_outputs`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionResult {
    pub inputs: Vec<SelectedInput>,
    pub payments: Vec<TransactionOutput>,
    pub change_outputs: Vec<TransactionOutput>,
}

impl SelectionResult {
    /// All outputs in serialization order.
    pub fn outputs(&self) -> impl Iterator<Item = &TransactionOutput> {
        self.payments.iter().chain(self.change_outputs.iter())
    }

    /// Sum of the selected inputs of `asset`.
    pub fn input_total(&self, asset: AssetKind) -> Option<Fixed8> {
        self.inputs
            .iter()
            .filter(|input| input.asset == asset)
            .try_fold(Fixed8::ZERO, |acc, input| acc.checked_add(input.entry.value))
    }
}

/// Select inputs covering `amount` of `target` plus `fee` in the fee asset.
///
/// # Arguments
/// * `balances` - Spendable entries per asset.
/// * `target` - Asset being sent.
/// * `amount` - Value to send; must be positive.
/// * `fee` - Network fee in `AssetKind::FEE`; must not be negative.
/// * `change` - Script hash that receives any excess.
///
/// # Returns
/// The selected inputs and change outputs, `InvalidAmount` for a
/// non-positive amount or negative fee, or `InsufficientFunds` naming the
/// first asset whose entries cannot cover what is required of it.
pub fn select_and_build_outputs(
    balances: &SpendableSet,
    target: AssetKind,
    amount: Fixed8,
    fee: Fixed8,
    change: &ScriptHash,
) -> Result<SelectionResult, TransactionError> {
    if !amount.is_positive() {
        return Err(TransactionError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            amount
        )));
    }
    if fee.is_negative() {
        return Err(TransactionError::InvalidAmount(format!(
            "fee must not be negative, got {}",
            fee
        )));
    }

    let mut requirements = Vec::with_capacity(2);
    if target == AssetKind::FEE {
        let total = amount.checked_add(fee).ok_or_else(|| {
            TransactionError::InvalidAmount(format!("amount {} plus fee {} overflows", amount, fee))
        })?;
        requirements.push((target, total));
    } else {
        requirements.push((target, amount));
        if fee.is_positive() {
            requirements.push((AssetKind::FEE, fee));
        }
    }

    let mut result = SelectionResult::default();
    for (asset, required) in requirements {
        let (entries, covered) = cover(balances.balance(asset), required)?;
        result
            .inputs
            .extend(entries.into_iter().map(|entry| SelectedInput { asset, entry }));

        // covered >= required, so this cannot underflow
        let excess = covered.checked_sub(required).unwrap_or(Fixed8::ZERO);
        if excess.is_positive() {
            result
                .change_outputs
                .push(TransactionOutput::new(asset, excess, *change));
        }
        debug!(
            asset = %asset,
            required = %required,
            covered = %covered,
            change = %excess,
            "covered asset requirement"
        );
    }
    Ok(result)
}

/// Take entries in order until their sum reaches `required`.
fn cover(
    balance: &AssetBalance,
    required: Fixed8,
) -> Result<(Vec<UnspentEntry>, Fixed8), TransactionError> {
    let mut chosen = Vec::new();
    let mut covered = Fixed8::ZERO;
    for entry in balance.entries.iter().filter(|e| e.value.is_positive()) {
        if covered >= required {
            break;
        }
        covered = covered.checked_add(entry.value).ok_or_else(|| {
            TransactionError::InvalidAmount(format!("{} inputs overflow", balance.asset))
        })?;
        chosen.push(*entry);
    }

    if covered < required {
        return Err(TransactionError::InsufficientFunds {
            asset: balance.asset,
            required,
            available: covered,
        });
    }
    Ok((chosen, covered))
}
