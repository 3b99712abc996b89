//! Monetary magnitudes as integer minor units.
//!
//! [`Amount`] is the only representation for money inside the crate. Keeping
//! amounts in integer minor units (cents for decimal currencies) avoids
//! floating-point drift when summing long transaction histories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LedgerError, LedgerResult};

/// Non-negative monetary magnitude stored as **integer minor units**.
///
/// The value carries no sign: whether money came in or went out is expressed
/// by [`TransactionKind`], never by the amount itself. Construction and
/// deserialization both reject negative values, so any `Amount` a caller can
/// hold is already valid.
///
/// # Examples
///
/// ```rust
/// use ledger::Amount;
///
/// let amount = Amount::new(12_34)?;
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// # Ok::<(), ledger::LedgerError>(())
/// ```
///
/// Parsing accepts `.` or `,` as decimal separator, at most two fraction
/// digits, and no sign:
///
/// ```rust
/// use ledger::Amount;
///
/// assert_eq!("10".parse::<Amount>().unwrap().minor(), 10_00);
/// assert_eq!("10,5".parse::<Amount>().unwrap().minor(), 10_50);
/// assert!("-10".parse::<Amount>().is_err());
/// assert!("12.345".parse::<Amount>().is_err());
/// ```
///
/// [`TransactionKind`]: crate::TransactionKind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from minor units, rejecting negative values.
    pub fn new(minor: i64) -> LedgerResult<Self> {
        if minor < 0 {
            return Err(LedgerError::InvalidAmount(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(Self(minor))
    }

    /// Raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    /// Parses a decimal string like `12`, `12.3` or `12,34` into minor
    /// units. Signs are rejected: direction is not part of an amount.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidAmount(format!("not a valid amount: {s:?}"));

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::InvalidAmount("empty amount".to_string()));
        }
        if trimmed.starts_with('+') || trimmed.starts_with('-') {
            return Err(LedgerError::InvalidAmount(
                "amount carries no sign, direction comes from the transaction kind".to_string(),
            ));
        }

        let normalized = trimmed.replace(',', ".");
        let mut parts = normalized.splitn(2, '.');
        let major_str = parts.next().unwrap_or_default();
        let frac_str = parts.next();

        if major_str.is_empty() || !major_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let major: i64 = major_str.parse().map_err(|_| invalid())?;

        let minor: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(LedgerError::InvalidAmount(
                            "at most two decimal digits are supported".to_string(),
                        ));
                    }
                }
            }
        };

        major
            .checked_mul(100)
            .and_then(|units| units.checked_add(minor))
            .ok_or_else(|| LedgerError::InvalidAmount("amount out of range".to_string()))
            .map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minor = i64::deserialize(deserializer)?;
        Self::new(minor).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_negative_values() {
        assert!(Amount::new(-1).is_err());
        assert_eq!(Amount::new(0).unwrap().minor(), 0);
        assert_eq!(Amount::new(50_000_00).unwrap().minor(), 5_000_000);
    }

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!("0".parse::<Amount>().unwrap().minor(), 0);
        assert_eq!("7".parse::<Amount>().unwrap().minor(), 700);
        assert_eq!("12.3".parse::<Amount>().unwrap().minor(), 1230);
        assert_eq!("12.34".parse::<Amount>().unwrap().minor(), 1234);
        assert_eq!("12,34".parse::<Amount>().unwrap().minor(), 1234);
        assert_eq!("12.".parse::<Amount>().unwrap().minor(), 1200);
        assert_eq!("  9.99 ".parse::<Amount>().unwrap().minor(), 999);
    }

    #[test]
    fn rejects_signs() {
        assert!("-12".parse::<Amount>().is_err());
        assert!("+12".parse::<Amount>().is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<Amount>().is_err());
        assert!("   ".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!("1.234".parse::<Amount>().is_err());
        assert!(".50".parse::<Amount>().is_err());
        assert!("1.2a".parse::<Amount>().is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!("92233720368547758.08".parse::<Amount>().is_err());
    }

    #[test]
    fn displays_with_two_minor_digits() {
        assert_eq!(Amount::new(0).unwrap().to_string(), "0.00");
        assert_eq!(Amount::new(5).unwrap().to_string(), "0.05");
        assert_eq!(Amount::new(1230).unwrap().to_string(), "12.30");
        assert_eq!(Amount::new(500_000_00).unwrap().to_string(), "500000.00");
    }

    #[test]
    fn serializes_as_bare_minor_units() {
        let amount = Amount::new(1234).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "1234");
        assert_eq!(serde_json::from_str::<Amount>("1234").unwrap(), amount);
    }

    #[test]
    fn deserialization_rejects_negative_values() {
        assert!(serde_json::from_str::<Amount>("-1").is_err());
    }
}
