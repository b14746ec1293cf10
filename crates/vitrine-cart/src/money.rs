//! Money values in integer minor units, plus the shop money format.
//!
//! The cart endpoints serialize every price as a bare integer in the
//! smallest currency unit (cents for USD). Keeping amounts integral end
//! to end avoids the floating-point precision issues that plague monetary
//! calculations; turning an amount into a display string is a separate
//! concern owned by [`MoneyFormat`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A monetary amount in minor units (e.g. cents).
///
/// Wire-compatible with the cart endpoints: serializes as a plain integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero minor units.
    pub const ZERO: Money = Money(0);

    /// Create a value from minor units.
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// The raw amount in minor units.
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Add, saturating at the numeric bounds.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtract, saturating at the numeric bounds.
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiply by a count (e.g. unit price times quantity).
    pub fn multiply(self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    /// Sum an iterator of amounts, returning `None` on overflow.
    pub fn checked_sum<I>(iter: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        iter.into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.0.checked_add(m.0).map(Money))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.saturating_sub(other)
    }
}

/// Shop money format template, e.g. `"${{amount}}"`.
///
/// The first `{{amount}}` placeholder is replaced with the amount rendered
/// to two decimal places, matching the storefront convention.
///
/// # Example
///
/// ```rust,ignore
/// use vitrine_cart::{Money, MoneyFormat};
///
/// let format = MoneyFormat::default();
/// assert_eq!(format.format(Money::new(1500)), "$15.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoneyFormat(String);

impl MoneyFormat {
    /// Create a format from a template string.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template.
    pub fn template(&self) -> &str {
        &self.0
    }

    /// Render an amount through the template (`1500` becomes `"$15.00"`).
    ///
    /// A template without the placeholder is returned unchanged.
    pub fn format(&self, amount: Money) -> String {
        self.0.replacen("{{amount}}", &amount_string(amount), 1)
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self("${{amount}}".to_string())
    }
}

/// Two-decimal rendering of minor units, sign included.
fn amount_string(amount: Money) -> String {
    let minor = amount.minor_units();
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
