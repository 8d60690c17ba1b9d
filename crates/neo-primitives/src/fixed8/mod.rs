//! Fixed-point amounts with eight implied decimal places.
//!
//! Asset values travel on the wire as a signed 64-bit integer scaled by
//! 10^8 (so `1` NEO is `100_000_000`). Decimal strings from coin feeds and
//! caller-supplied `Decimal` amounts are converted exactly; values that
//! need more than eight fractional digits or overflow `i64` are rejected.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::PrimitivesError;

/// Number of implied decimal places.
pub const FIXED8_DECIMALS: u32 = 8;

/// Raw units per whole asset unit.
const FIXED8_FACTOR: i64 = 100_000_000;

/// An amount in units of 10^-8.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Fixed8(i64);

impl Fixed8 {
    /// The zero amount.
    pub const ZERO: Fixed8 = Fixed8(0);

    /// Wrap a raw value already scaled by 10^8.
    pub const fn from_raw(raw: i64) -> Self {
        Fixed8(raw)
    }

    /// Create an amount from a whole number of units.
    ///
    /// # Returns
    /// `None` if `units * 10^8` overflows.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(FIXED8_FACTOR).map(Fixed8)
    }

    /// Convert a decimal amount exactly.
    ///
    /// # Arguments
    /// * `value` - The amount in whole units, e.g. `1.5`.
    ///
    /// # Returns
    /// The scaled amount, or `InvalidFixed8` if `value` has more than eight
    /// fractional digits or does not fit in 64 bits once scaled.
    pub fn from_decimal(value: Decimal) -> Result<Self, PrimitivesError> {
        let scaled = value
            .checked_mul(Decimal::from(FIXED8_FACTOR))
            .ok_or_else(|| PrimitivesError::InvalidFixed8(format!("{} is out of range", value)))?;
        if !scaled.fract().is_zero() {
            return Err(PrimitivesError::InvalidFixed8(format!(
                "{} has more than {} decimal places",
                value, FIXED8_DECIMALS
            )));
        }
        scaled
            .to_i64()
            .map(Fixed8)
            .ok_or_else(|| PrimitivesError::InvalidFixed8(format!("{} is out of range", value)))
    }

    /// Return the amount as a normalized decimal in whole units.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, FIXED8_DECIMALS).normalize()
    }

    /// Return the raw scaled value written on the wire.
    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Fixed8) -> Option<Fixed8> {
        self.0.checked_add(other.0).map(Fixed8)
    }

    pub fn checked_sub(self, other: Fixed8) -> Option<Fixed8> {
        self.0.checked_sub(other.0).map(Fixed8)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl FromStr for Fixed8 {
    type Err = PrimitivesError;

    /// Parse a plain decimal string such as `"12.5"` or `"0.00000001"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| PrimitivesError::InvalidFixed8(format!("'{}': {}", s, e)))?;
        Fixed8::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Fixed8 {
    type Error = PrimitivesError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Fixed8::from_decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("1".parse::<Fixed8>().unwrap().raw(), 100_000_000);
        assert_eq!("12.5".parse::<Fixed8>().unwrap().raw(), 1_250_000_000);
        assert_eq!("0.00000001".parse::<Fixed8>().unwrap().raw(), 1);
        assert_eq!(" 3 ".parse::<Fixed8>().unwrap().raw(), 300_000_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "abc".parse::<Fixed8>(),
            Err(PrimitivesError::InvalidFixed8(_))
        ));
        assert!("".parse::<Fixed8>().is_err());
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert!(matches!(
            "0.000000001".parse::<Fixed8>(),
            Err(PrimitivesError::InvalidFixed8(_))
        ));
    }

    #[test]
    fn test_rejects_overflow() {
        assert!("100000000000".parse::<Fixed8>().is_err());
        assert!(Fixed8::from_units(i64::MAX).is_none());
    }

    #[test]
    fn test_display_is_normalized() {
        assert_eq!(Fixed8::from_raw(150_000_000).to_string(), "1.5");
        assert_eq!(Fixed8::from_raw(200_000_000).to_string(), "2");
        assert_eq!(Fixed8::ZERO.to_string(), "0");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Fixed8::from_units(5).unwrap();
        let b = Fixed8::from_units(3).unwrap();
        assert_eq!(a.checked_sub(b), Fixed8::from_units(2));
        assert_eq!(a.checked_add(b), Fixed8::from_units(8));
        assert!(Fixed8::from_raw(i64::MAX).checked_add(Fixed8::from_raw(1)).is_none());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Fixed8::from_raw(-1).is_negative());
        assert!(Fixed8::ZERO.is_zero());
        assert!(Fixed8::from_raw(1).is_positive());
    }
}
