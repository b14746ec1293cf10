//! Immutable cart snapshots.

use crate::ids::LineKey;
use crate::line::CartLine;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Full cart state as returned by the cart endpoints.
///
/// A snapshot is never patched in place: state changes arrive as whole
/// replacement snapshots, and every consumer of the current snapshot reads
/// the same value until the next replacement. All monetary fields are in
/// minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CartSnapshot {
    #[serde(default)]
    pub token: Option<String>,
    /// Total units across all lines, as counted by the server.
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total_price: Money,
    /// Total before cart-level discounts.
    #[serde(default)]
    pub original_total_price: Money,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the totals footer should point at checkout for taxes and
    /// shipping instead of showing them.
    #[serde(default)]
    pub taxes_shipping_calc_at_checkout: bool,
}

impl CartSnapshot {
    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line by its stable key.
    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.items.iter().find(|line| &line.key == key)
    }

    /// Total units across all lines, recounted from the lines themselves.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
