//! Native assets of the UTXO ledger.

use std::fmt;
use std::str::FromStr;

use neo_primitives::Uint256;

use crate::TransactionError;

/// NEO asset id, display order.
pub const NEO_ASSET_ID: &str = "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";
/// GAS asset id, display order.
pub const GAS_ASSET_ID: &str = "602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7";

const NEO_ASSET_WIRE: [u8; 32] = [
    0x9b, 0x7c, 0xff, 0xda, 0xa6, 0x74, 0xbe, 0xae, 0x0f, 0x93, 0x0e, 0xbe, 0x60, 0x85, 0xaf, 0x90,
    0x93, 0xe5, 0xfe, 0x56, 0xb3, 0x4a, 0x5c, 0x22, 0x0c, 0xcd, 0xcf, 0x6e, 0xfc, 0x33, 0x6f, 0xc5,
];
const GAS_ASSET_WIRE: [u8; 32] = [
    0xe7, 0x2d, 0x28, 0x69, 0x79, 0xee, 0x6c, 0xb1, 0xb7, 0xe6, 0x5d, 0xfd, 0xdf, 0xb2, 0xe3, 0x84,
    0x10, 0x0b, 0x8d, 0x14, 0x8e, 0x77, 0x58, 0xde, 0x42, 0xe4, 0x16, 0x8b, 0x71, 0x79, 0x2c, 0x60,
];

/// A native asset type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Neo,
    Gas,
}

impl AssetKind {
    /// The asset network fees are paid in.
    pub const FEE: AssetKind = AssetKind::Gas;

    /// Every native asset, in a fixed order.
    pub const ALL: [AssetKind; 2] = [AssetKind::Neo, AssetKind::Gas];

    /// Asset id as it is written in transaction outputs.
    pub fn asset_id(&self) -> Uint256 {
        match self {
            AssetKind::Neo => Uint256::new(NEO_ASSET_WIRE),
            AssetKind::Gas => Uint256::new(GAS_ASSET_WIRE),
        }
    }

    /// Asset id in display order, without a `0x` prefix.
    pub fn asset_id_hex(&self) -> &'static str {
        match self {
            AssetKind::Neo => NEO_ASSET_ID,
            AssetKind::Gas => GAS_ASSET_ID,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AssetKind::Neo => "NEO",
            AssetKind::Gas => "GAS",
        }
    }

    /// Look up the asset with the given id.
    pub fn from_asset_id(id: &Uint256) -> Option<AssetKind> {
        Self::ALL.into_iter().find(|kind| kind.asset_id() == *id)
    }

    /// Whether a free-form asset tag from a coin feed names this asset.
    ///
    /// Feeds decorate ids inconsistently (`0x` prefixes, upper case), so the
    /// tag only has to contain the id.
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag.to_ascii_lowercase().contains(self.asset_id_hex())
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AssetKind {
    type Err = TransactionError;

    /// Parse a symbol (`NEO`, `GAS`, any case) or an exact asset id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let id = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|kind| {
                trimmed.eq_ignore_ascii_case(kind.symbol())
                    || id.eq_ignore_ascii_case(kind.asset_id_hex())
            })
            .ok_or_else(|| TransactionError::InvalidAsset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_wire_order() {
        for kind in AssetKind::ALL {
            assert_eq!(kind.asset_id().to_hex(), kind.asset_id_hex());
            assert_eq!(Uint256::from_hex(kind.asset_id_hex()).unwrap(), kind.asset_id());
            assert_eq!(AssetKind::from_asset_id(&kind.asset_id()), Some(kind));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("NEO".parse::<AssetKind>().unwrap(), AssetKind::Neo);
        assert_eq!("gas".parse::<AssetKind>().unwrap(), AssetKind::Gas);
        assert_eq!(
            format!("0x{}", GAS_ASSET_ID).parse::<AssetKind>().unwrap(),
            AssetKind::Gas
        );
        assert_eq!(NEO_ASSET_ID.to_uppercase().parse::<AssetKind>().unwrap(), AssetKind::Neo);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let too_long = format!("{}00", NEO_ASSET_ID);
        for tag in ["", "BTC", "c56f33fc", too_long.as_str()] {
            assert!(matches!(
                tag.parse::<AssetKind>(),
                Err(TransactionError::InvalidAsset(_))
            ));
        }
    }

    #[test]
    fn test_matches_tag_by_containment() {
        assert!(AssetKind::Neo.matches_tag(&format!("0x{}", NEO_ASSET_ID)));
        assert!(AssetKind::Gas.matches_tag(GAS_ASSET_ID));
        assert!(!AssetKind::Gas.matches_tag(NEO_ASSET_ID));
        assert!(!AssetKind::Neo.matches_tag("NEO"));
    }

    #[test]
    fn test_fee_asset_is_gas() {
        assert_eq!(AssetKind::FEE, AssetKind::Gas);
    }
}
