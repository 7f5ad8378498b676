use std::{
    fmt, iter,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::EngineError;

/// Signed money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (expense totals,
/// shares, payments, balances, transfers) to avoid floating-point drift.
///
/// The value is signed:
/// - positive = paid in / is owed
/// - negative = owes
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34€");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("20".parse::<MoneyCents>().unwrap().cents(), 2000);
/// assert_eq!("20,5".parse::<MoneyCents>().unwrap().cents(), 2050);
/// assert!("20.505".parse::<MoneyCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Settlement tolerance: one cent.
    ///
    /// Balances within ±`EPSILON` of zero count as settled, and money
    /// equality checks tolerate this difference.
    pub const EPSILON: MoneyCents = MoneyCents(1);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    #[must_use]
    pub const fn abs(self) -> MoneyCents {
        MoneyCents(self.0.abs())
    }

    /// Returns `true` if the amount is within ±[`EPSILON`] of zero.
    ///
    /// [`EPSILON`]: MoneyCents::EPSILON
    #[must_use]
    pub const fn is_settled(self) -> bool {
        self.0.abs() <= Self::EPSILON.0
    }

    /// Returns `true` if the two amounts differ by at most [`EPSILON`].
    ///
    /// [`EPSILON`]: MoneyCents::EPSILON
    #[must_use]
    pub const fn approx_eq(self, other: MoneyCents) -> bool {
        (self.0 - other.0).abs() <= Self::EPSILON.0
    }

    /// Splits the amount into `parts` near-equal cent amounts.
    ///
    /// Cents that do not divide evenly are spread one per part starting from
    /// the first, so the parts always sum back to `self` and every part is
    /// within one cent of the exact quotient. Works for negative amounts too
    /// (an overcommitted remainder splits into negative parts).
    ///
    /// Returns an empty vector when `parts` is 0.
    #[must_use]
    pub fn split_evenly(self, parts: usize) -> Vec<MoneyCents> {
        if parts == 0 {
            return Vec::new();
        }
        let parts = parts as i64;
        let base = self.0.div_euclid(parts);
        let leftover = self.0.rem_euclid(parts);
        (0..parts)
            .map(|i| MoneyCents(if i < leftover { base + 1 } else { base }))
            .collect()
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}€", abs / 100, abs % 100)
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 - rhs.0)
    }
}

impl SubAssign for MoneyCents {
    fn sub_assign(&mut self, rhs: MoneyCents) {
        self.0 -= rhs.0;
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}

impl iter::Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading
    /// `+`/`-`. Rejects empty strings, non-digit characters and more than two
    /// fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |msg: &str| EngineError::InvalidAmount(msg.to_string());

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix(['-', '+']) {
            Some(rest) => (trimmed.starts_with('-'), rest.trim()),
            None => (false, trimmed),
        };
        if digits.is_empty() {
            return Err(invalid("empty amount"));
        }

        let normalized = digits.replace(',', ".");
        let (whole, frac) = normalized
            .split_once('.')
            .unwrap_or((normalized.as_str(), ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("invalid amount"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("invalid amount"));
        }

        let units: i64 = whole.parse().map_err(|_| invalid("amount too large"))?;
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("invalid amount"))? * 10,
            2 => frac.parse::<i64>().map_err(|_| invalid("invalid amount"))?,
            _ => return Err(invalid("too many decimals")),
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(MoneyCents(if negative { -total } else { total }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_eur() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00€");
        assert_eq!(MoneyCents::new(7).to_string(), "0.07€");
        assert_eq!(MoneyCents::new(2050).to_string(), "20.50€");
        assert_eq!(MoneyCents::new(-305).to_string(), "-3.05€");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("60".parse::<MoneyCents>().unwrap().cents(), 6000);
        assert_eq!("60.5".parse::<MoneyCents>().unwrap().cents(), 6050);
        assert_eq!("60,50".parse::<MoneyCents>().unwrap().cents(), 6050);
        assert_eq!("-0.01".parse::<MoneyCents>().unwrap().cents(), -1);
        assert_eq!("+2.30".parse::<MoneyCents>().unwrap().cents(), 230);
        assert_eq!(" 4.20 ".parse::<MoneyCents>().unwrap().cents(), 420);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<MoneyCents>().is_err());
        assert!("-".parse::<MoneyCents>().is_err());
        assert!(".50".parse::<MoneyCents>().is_err());
        assert!("12.345".parse::<MoneyCents>().is_err());
        assert!("1.2.3".parse::<MoneyCents>().is_err());
        assert!("12e3".parse::<MoneyCents>().is_err());
    }

    #[test]
    fn split_evenly_spreads_leftover_cents() {
        let parts = MoneyCents::new(100_00).split_evenly(3);
        assert_eq!(
            parts,
            vec![
                MoneyCents::new(3334),
                MoneyCents::new(3333),
                MoneyCents::new(3333)
            ]
        );
        assert_eq!(parts.into_iter().sum::<MoneyCents>(), MoneyCents::new(10000));
    }

    #[test]
    fn split_evenly_handles_negative_amounts() {
        let parts = MoneyCents::new(-100).split_evenly(3);
        assert_eq!(parts.iter().copied().sum::<MoneyCents>(), MoneyCents::new(-100));
        assert!(parts.iter().all(|p| p.is_negative()));
    }

    #[test]
    fn split_evenly_zero_parts_is_empty() {
        assert!(MoneyCents::new(500).split_evenly(0).is_empty());
    }

    #[test]
    fn settled_within_one_cent() {
        assert!(MoneyCents::ZERO.is_settled());
        assert!(MoneyCents::new(1).is_settled());
        assert!(MoneyCents::new(-1).is_settled());
        assert!(!MoneyCents::new(2).is_settled());
    }
}
