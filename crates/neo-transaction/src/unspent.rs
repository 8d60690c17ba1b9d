//! Per-asset aggregation of a raw UTXO feed.
//!
//! Coin feeds report every unspent output as loosely typed strings. The
//! aggregator groups them by native asset and converts the fields to wire
//! types. Entries it cannot interpret are skipped and logged; they never
//! abort aggregation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use neo_primitives::{Fixed8, Uint256};

use crate::asset::AssetKind;

/// One unspent output as reported by a coin feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUnspent {
    /// Asset tag; expected to contain the asset id.
    pub asset: String,
    /// Output index within the funding transaction.
    pub index: u32,
    /// Funding transaction id in display order.
    pub txid: String,
    /// Decimal amount, e.g. `"12.5"`.
    pub value: String,
}

/// A spendable output of a single asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnspentEntry {
    pub output_index: u16,
    pub transaction_id: Uint256,
    pub value: Fixed8,
}

/// Spendable outputs of one asset and their total.
///
/// `total` is the sum of `entries` after aggregation. A caller that knows a
/// separately reported balance may overwrite it; selection only ever spends
/// from `entries`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetBalance {
    pub asset: AssetKind,
    pub total: Fixed8,
    pub entries: Vec<UnspentEntry>,
}

impl AssetBalance {
    /// An empty balance with a zero total.
    pub fn new(asset: AssetKind) -> Self {
        AssetBalance {
            asset,
            total: Fixed8::ZERO,
            entries: Vec::new(),
        }
    }

    /// Append an entry and add its value to the total.
    ///
    /// # Returns
    /// `false` (leaving the balance untouched) if the total would overflow.
    pub fn push(&mut self, entry: UnspentEntry) -> bool {
        match self.total.checked_add(entry.value) {
            Some(total) => {
                self.total = total;
                self.entries.push(entry);
                true
            }
            None => false,
        }
    }
}

/// Balances for every native asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpendableSet {
    neo: AssetBalance,
    gas: AssetBalance,
}

impl SpendableSet {
    /// A set with an empty balance for every asset.
    pub fn new() -> Self {
        SpendableSet {
            neo: AssetBalance::new(AssetKind::Neo),
            gas: AssetBalance::new(AssetKind::Gas),
        }
    }

    /// Group raw feed entries by asset.
    ///
    /// An entry belongs to the first asset whose id its tag contains.
    /// Entries with an unknown tag are ignored. Entries whose value, txid or
    /// index cannot be converted are skipped with a debug record.
    ///
    /// # Returns
    /// A set that has a balance for every `AssetKind`, empty where the feed
    /// had no usable entries.
    pub fn aggregate(raw: &[RawUnspent]) -> Self {
        let mut set = SpendableSet::new();
        for item in raw {
            let Some(asset) = AssetKind::ALL.into_iter().find(|k| k.matches_tag(&item.asset)) else {
                continue;
            };
            let entry = match parse_entry(item) {
                Ok(entry) => entry,
                Err(reason) => {
                    debug!(
                        asset = %asset,
                        txid = %item.txid,
                        index = item.index,
                        value = %item.value,
                        reason = %reason,
                        "skipping unspent entry"
                    );
                    continue;
                }
            };
            if !set.balance_mut(asset).push(entry) {
                debug!(asset = %asset, txid = %item.txid, "skipping unspent entry: total overflows");
            }
        }
        debug!(
            neo_entries = set.neo.entries.len(),
            neo_total = %set.neo.total,
            gas_entries = set.gas.entries.len(),
            gas_total = %set.gas.total,
            "aggregated unspent outputs"
        );
        set
    }

    pub fn balance(&self, asset: AssetKind) -> &AssetBalance {
        match asset {
            AssetKind::Neo => &self.neo,
            AssetKind::Gas => &self.gas,
        }
    }

    pub fn balance_mut(&mut self, asset: AssetKind) -> &mut AssetBalance {
        match asset {
            AssetKind::Neo => &mut self.neo,
            AssetKind::Gas => &mut self.gas,
        }
    }

    /// Replace the balance of `balance.asset`.
    pub fn insert(&mut self, balance: AssetBalance) {
        let asset = balance.asset;
        *self.balance_mut(asset) = balance;
    }

    /// Iterate over the balances in `AssetKind::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = &AssetBalance> {
        [&self.neo, &self.gas].into_iter()
    }
}

impl Default for SpendableSet {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_entry(item: &RawUnspent) -> Result<UnspentEntry, String> {
    let value: Fixed8 = item.value.parse().map_err(|e| format!("value: {}", e))?;
    if value.is_negative() {
        return Err("value: negative".to_string());
    }
    let transaction_id = Uint256::from_hex(&item.txid).map_err(|e| format!("txid: {}", e))?;
    let output_index = u16::try_from(item.index)
        .map_err(|_| format!("index: {} exceeds {}", item.index, u16::MAX))?;
    Ok(UnspentEntry {
        output_index,
        transaction_id,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{GAS_ASSET_ID, NEO_ASSET_ID};

    const TXID: &str = "4c07ba7d8d5b0fca5ac0e3ac0e5f8f1e3e3c4b6c7a1a2b3c4d5e6f708192a3b4";

    fn raw(asset: &str, index: u32, value: &str) -> RawUnspent {
        RawUnspent {
            asset: asset.to_string(),
            index,
            txid: TXID.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_groups_by_asset() {
        let set = SpendableSet::aggregate(&[
            raw(&format!("0x{}", NEO_ASSET_ID), 0, "5"),
            raw(GAS_ASSET_ID, 1, "1.5"),
            raw(NEO_ASSET_ID, 2, "2"),
        ]);
        let neo = set.balance(AssetKind::Neo);
        assert_eq!(neo.entries.len(), 2);
        assert_eq!(neo.total, "7".parse().unwrap());
        assert_eq!(neo.entries[0].output_index, 0);
        assert_eq!(neo.entries[1].output_index, 2);
        assert_eq!(neo.entries[0].transaction_id.to_hex(), TXID);

        let gas = set.balance(AssetKind::Gas);
        assert_eq!(gas.entries.len(), 1);
        assert_eq!(gas.total.raw(), 150_000_000);
    }

    #[test]
    fn test_empty_feed_has_every_asset() {
        let set = SpendableSet::aggregate(&[]);
        for kind in AssetKind::ALL {
            let balance = set.balance(kind);
            assert_eq!(balance.asset, kind);
            assert!(balance.total.is_zero());
            assert!(balance.entries.is_empty());
        }
        assert_eq!(set.iter().count(), AssetKind::ALL.len());
    }

    #[test]
    fn test_skips_malformed_entries() {
        let mut bad_txid = raw(NEO_ASSET_ID, 0, "1");
        bad_txid.txid = "not-a-txid".to_string();
        let set = SpendableSet::aggregate(&[
            raw(NEO_ASSET_ID, 0, "abc"),
            raw(NEO_ASSET_ID, 1, "-1"),
            raw(NEO_ASSET_ID, 70_000, "1"),
            raw(NEO_ASSET_ID, 3, "0.000000001"),
            bad_txid,
            raw(NEO_ASSET_ID, 4, "3"),
        ]);
        let neo = set.balance(AssetKind::Neo);
        assert_eq!(neo.entries.len(), 1);
        assert_eq!(neo.entries[0].output_index, 4);
        assert_eq!(neo.total, "3".parse().unwrap());
    }

    #[test]
    fn test_ignores_unknown_assets() {
        let set = SpendableSet::aggregate(&[raw("ONT", 0, "10"), raw("", 1, "1")]);
        assert!(set.iter().all(|b| b.entries.is_empty()));
    }

    #[test]
    fn test_zero_value_entries_are_kept() {
        let set = SpendableSet::aggregate(&[raw(GAS_ASSET_ID, 0, "0")]);
        assert_eq!(set.balance(AssetKind::Gas).entries.len(), 1);
        assert!(set.balance(AssetKind::Gas).total.is_zero());
    }

    #[test]
    fn test_raw_unspent_json() {
        let json = format!(
            r#"{{"asset":"0x{}","index":3,"txid":"{}","value":"0.5"}}"#,
            GAS_ASSET_ID, TXID
        );
        let parsed: RawUnspent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.index, 3);
        assert_eq!(parsed.value, "0.5");
    }

    #[test]
    fn test_insert_replaces_balance() {
        let mut set = SpendableSet::new();
        let mut balance = AssetBalance::new(AssetKind::Gas);
        balance.total = Fixed8::from_raw(42);
        set.insert(balance.clone());
        assert_eq!(set.balance(AssetKind::Gas), &balance);
        assert!(set.balance(AssetKind::Neo).total.is_zero());

        let mut neo = AssetBalance::new(AssetKind::Neo);
        neo.total = Fixed8::from_raw(7);
        set.insert(neo);
        assert_eq!(set.balance(AssetKind::Neo).total.raw(), 7);
        assert_eq!(set.balance(AssetKind::Gas).total.raw(), 42);
    }
}
