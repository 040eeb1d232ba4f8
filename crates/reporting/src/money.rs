use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::ReportError;

/// Signed money amount represented as integer **minor units**.
///
/// Use this type for **all** monetary arithmetic in the engine (running
/// balances, totals, bucket sums) to avoid floating-point drift. The wire
/// types carry raw `i64` minor units; `Money` wraps them at the boundary.
///
/// The value is signed:
/// - positive = income / increase
/// - negative = expense / decrease
///
/// The display currency is zero-decimal rupiah with dot grouping:
///
/// ```rust
/// use reporting::Money;
///
/// assert_eq!(Money::new(1_250_000).to_string(), "Rp1.250.000");
/// assert_eq!(Money::new(-40).to_string(), "-Rp40");
/// ```
///
/// Parsing from user input accepts plain digit strings with optional `.`/`,`
/// grouping separators and an optional sign:
///
/// ```rust
/// use reporting::Money;
///
/// assert_eq!("1.250.000".parse::<Money>().unwrap().minor(), 1_250_000);
/// assert!("12,5x".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
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

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        write!(f, "{sign}Rp{grouped}")
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = ReportError;

    /// Parses a whole-unit amount string into minor units.
    ///
    /// Accepts an optional leading `+`/`-` and `.`/`,`/space grouping
    /// separators between digits. Rejects empty input and anything with a
    /// non-digit payload; the store never sends fractional amounts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || ReportError::InvalidAmount("empty amount".to_string());
        let invalid = || ReportError::InvalidAmount(format!("invalid amount: {s}"));
        let overflow = || ReportError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let digits: String = rest
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | ' '))
            .collect();
        if digits.is_empty() {
            return Err(empty());
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let minor: i64 = digits.parse().map_err(|_| overflow())?;
        minor.checked_mul(sign).map(Money).ok_or_else(overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_rupiah() {
        assert_eq!(Money::new(0).to_string(), "Rp0");
        assert_eq!(Money::new(40).to_string(), "Rp40");
        assert_eq!(Money::new(1_500).to_string(), "Rp1.500");
        assert_eq!(Money::new(1_250_000).to_string(), "Rp1.250.000");
        assert_eq!(Money::new(-1_250_000).to_string(), "-Rp1.250.000");
    }

    #[test]
    fn parse_accepts_grouping_separators() {
        assert_eq!("40".parse::<Money>().unwrap().minor(), 40);
        assert_eq!("1.250.000".parse::<Money>().unwrap().minor(), 1_250_000);
        assert_eq!("1,500".parse::<Money>().unwrap().minor(), 1_500);
        assert_eq!("-40".parse::<Money>().unwrap().minor(), -40);
        assert_eq!(" +2 300 ".parse::<Money>().unwrap().minor(), 2_300);
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!("".parse::<Money>().is_err());
        assert!("  ".parse::<Money>().is_err());
        assert!("12x".parse::<Money>().is_err());
        assert!("Rp40".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
    }

    #[test]
    fn sum_folds_signed_amounts() {
        let total: Money = [Money::new(100), Money::new(-40), Money::new(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(110));
    }
}
