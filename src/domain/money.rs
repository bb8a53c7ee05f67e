use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const CENTS_PER_DOLLAR: u64 = 100;

/// A non-negative amount of money, counted in cents.
///
/// Serializes as the bare number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Adds `rhs`, or returns `None` if the sum does not fit in a `u64`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Subtracts `rhs`, or returns `None` if that would go below zero.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Splits the amount into dollars and cents.
    pub const fn to_display(self) -> DisplayPair {
        DisplayPair {
            whole: self.0 / CENTS_PER_DOLLAR,
            sub: (self.0 % CENTS_PER_DOLLAR) as u8,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_display(), f)
    }
}

/// Converts a dollar amount such as `0.75` into cents.
///
/// Negative amounts and fractions of a cent are rejected.
impl TryFrom<Decimal> for Money {
    type Error = VendingError;

    fn try_from(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(VendingError::ValidationError(format!(
                "Price must not be negative: {value}"
            )));
        }
        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| VendingError::ValidationError(format!("Price out of range: {value}")))?;
        if !cents.fract().is_zero() {
            return Err(VendingError::ValidationError(format!(
                "Price has fractions of a cent: {value}"
            )));
        }
        cents
            .to_u64()
            .map(Self)
            .ok_or_else(|| VendingError::ValidationError(format!("Price out of range: {value}")))
    }
}

/// The (dollars, cents) form of a [`Money`] amount, used for display.
///
/// `sub` is always in `0..=99`, and the pair always fits back into a [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPair {
    whole: u64,
    sub: u8,
}

impl DisplayPair {
    pub fn new(whole: u64, sub: u8) -> Result<Self> {
        if u64::from(sub) >= CENTS_PER_DOLLAR {
            return Err(VendingError::ValidationError(format!(
                "Cents must be below 100, got {sub}"
            )));
        }
        if whole
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|cents| cents.checked_add(u64::from(sub)))
            .is_none()
        {
            return Err(VendingError::ValidationError(format!(
                "Amount out of range: ${whole}.{sub:02}"
            )));
        }
        Ok(Self { whole, sub })
    }

    pub fn whole(&self) -> u64 {
        self.whole
    }

    pub fn sub(&self) -> u8 {
        self.sub
    }
}

/// Collapses a display pair back into cents: `whole * 100 + sub`.
pub fn to_minor_units(pair: DisplayPair) -> Money {
    Money(pair.whole * CENTS_PER_DOLLAR + u64::from(pair.sub))
}

/// Renders a display pair as currency, e.g. `(0, 5)` becomes `$0.05`.
pub fn format(pair: DisplayPair) -> String {
    format!("${}.{:02}", pair.whole, pair.sub)
}

impl From<DisplayPair> for Money {
    fn from(pair: DisplayPair) -> Self {
        to_minor_units(pair)
    }
}

impl fmt::Display for DisplayPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self))
    }
}

/// Parses the `$1.35` form produced by [`format`].
impl FromStr for DisplayPair {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VendingError::ValidationError(format!("Not a currency amount: {s:?}"));
        let (whole, sub) = s
            .strip_prefix('$')
            .and_then(|rest| rest.split_once('.'))
            .ok_or_else(invalid)?;
        if sub.len() != 2 || !sub.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole = whole.parse::<u64>().map_err(|_| invalid())?;
        let sub = sub.parse::<u8>().map_err(|_| invalid())?;
        Self::new(whole, sub)
    }
}
