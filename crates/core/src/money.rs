//! Money - exact decimal amounts for account balances
//!
//! Backed by `bigdecimal::BigDecimal`, an arbitrary-precision decimal, so
//! that every digit supplied at construction survives arithmetic no matter
//! how large or how precise the operands are: `1000.12345 - 100` is
//! `900.12345`, and adding `0.000000001` to a 20-digit balance keeps all 29
//! digits. There is no rounding and no overflow.

use bigdecimal::{BigDecimal, num_bigint::BigInt, ToPrimitive, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building a `Money` from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    Parse(String),
}

/// An exact decimal amount of money.
///
/// Equality and ordering are numeric (`100 == 100.00`), while `Display`
/// keeps the scale the value was built with, so `"2500" + 500` prints
/// `3000` and `"1500.2344" - 500` prints `1000.2344`.
///
/// # Example
/// ```
/// use minibank_core::Money;
///
/// let balance: Money = "1000.12345".parse().unwrap();
/// let rest = balance - Money::from(100);
/// assert_eq!(rest.to_string(), "900.12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(BigDecimal);

impl Money {
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Parse a decimal literal, keeping every digit.
    pub fn parse(input: &str) -> Result<Self, MoneyError> {
        let trimmed = input.trim();
        BigDecimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| MoneyError::Parse(trimmed.to_string()))
    }

    /// Get the inner decimal value
    #[inline]
    pub fn value(&self) -> &BigDecimal {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Integer part, truncated toward zero. `None` if it does not fit in an i64.
    pub fn whole(&self) -> Option<i64> {
        self.0.with_scale(0).to_i64()
    }

    /// Lossy float view, for display only.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_plain_string())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

/// Exact conversion: mantissa and scale carry over unchanged.
impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(BigDecimal::new(
            BigInt::from(value.mantissa()),
            i64::from(value.scale()),
        ))
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Money> for &'a Money {
    type Output = Money;

    fn add(self, rhs: &'a Money) -> Money {
        Money(&self.0 + &rhs.0)
    }
}

impl AddAssign<&Money> for Money {
    fn add_assign(&mut self, rhs: &Money) {
        self.0 = &self.0 + &rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl<'a> Sub<&'a Money> for &'a Money {
    type Output = Money;

    fn sub(self, rhs: &'a Money) -> Money {
        Money(&self.0 - &rhs.0)
    }
}

impl SubAssign<&Money> for Money {
    fn sub_assign(&mut self, rhs: &Money) {
        self.0 = &self.0 - &rhs.0;
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::cmp::Ordering;

    fn money(literal: &str) -> Money {
        literal.parse().unwrap()
    }

    #[test]
    fn test_parse_keeps_digits() {
        let money = money("1000.12345");
        assert_eq!(money, Money::from(dec!(1000.12345)));
        assert_eq!(money.to_string(), "1000.12345");
    }

    #[test]
    fn test_sub_is_exact() {
        let money = money("1000.12345") - Money::from(100);
        assert_eq!(money.to_string(), "900.12345");
        assert_eq!(money.whole(), Some(900));
    }

    #[test]
    fn test_add_keeps_integer_scale() {
        let money = money("2500") + Money::from(500);
        assert_eq!(money.to_string(), "3000");
    }

    #[test]
    fn test_add_beyond_96_bit_precision() {
        let sum = &money("90000000000000000000") + &money("0.000000001");
        assert_eq!(sum.to_string(), "90000000000000000000.000000001");

        let difference = &money("90000000000000000001") - &money("0.000000001");
        assert_eq!(difference.to_string(), "90000000000000000000.999999999");
    }

    #[test]
    fn test_add_past_decimal_max() {
        let sum = money("79228162514264337593543950335") + Money::from(1);
        assert_eq!(sum.to_string(), "79228162514264337593543950336");
    }

    #[test]
    fn test_compare() {
        let a = Money::from(dec!(100.5));
        let b = Money::from(100);
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert_eq!(b.cmp(&a), Ordering::Less);
        assert_eq!(Money::from(dec!(100.00)).cmp(&b), Ordering::Equal);
        assert_eq!(Money::from(dec!(100.00)), b);
    }

    #[test]
    fn test_sign_checks() {
        let money = money("1000.12345");
        assert!(money.is_positive());
        assert!(!money.is_negative());
        assert!(Money::zero().is_zero());
        assert!((&Money::zero() - &money).is_negative());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Money::parse("abc"), Err(MoneyError::Parse(_))));
        assert!(matches!(Money::parse(""), Err(MoneyError::Parse(_))));
    }

    #[test]
    fn test_parse_keeps_long_fractions() {
        let precise = money("0.123456789012345678901234567890123");
        assert_eq!(precise.to_string(), "0.123456789012345678901234567890123");
    }

    #[test]
    fn test_float_view() {
        let float = money("1000.12345").to_f64().unwrap();
        assert!((float - 1000.12345).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_as_string() {
        let money = money("900.12345");
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "\"900.12345\"");
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, money);
    }
}
