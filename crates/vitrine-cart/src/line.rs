//! Cart line items as served by the cart endpoints.

use crate::ids::{LineKey, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One line of the cart: a variant at a quantity, with server-computed
/// prices in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable key identifying this line across mutations.
    pub key: LineKey,
    /// The variant in this line.
    pub id: VariantId,
    pub quantity: u32,
    /// Unit price.
    pub price: Money,
    /// Extended price for the line, discounts applied.
    #[serde(default)]
    pub line_price: Money,
    /// Extended price before discounts.
    #[serde(default)]
    pub original_line_price: Money,
    #[serde(default)]
    pub product_title: String,
    #[serde(default)]
    pub variant_title: Option<String>,
    /// Line item properties. Keys starting with `_` are private metadata
    /// (e.g. bundle ids) and are not meant for display.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CartLine {
    /// Whether the extended price sits below the pre-discount price.
    pub fn is_discounted(&self) -> bool {
        self.line_price < self.original_line_price
    }

    /// Properties visible to shoppers: private keys and empty values
    /// are skipped.
    pub fn public_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .filter(|(key, value)| !key.starts_with('_') && !value.is_empty())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
