//! Products, variants, and option-based variant resolution.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock status of a variant, for availability display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: VariantId,
    #[serde(default)]
    pub title: String,
    /// Option values in option-position order (e.g. `["Blue", "M"]`).
    #[serde(default)]
    pub options: Vec<String>,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub available: bool,
    /// Units on hand, when the shop exposes inventory.
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
}

impl ProductVariant {
    /// Whether the compare-at price marks this variant down.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map_or(false, |compare| compare > self.price)
    }

    /// Stock status for display. `low_stock_threshold` is inclusive;
    /// unknown inventory counts as in stock when the variant is available.
    pub fn stock_status(&self, low_stock_threshold: i64) -> StockStatus {
        if !self.available {
            return StockStatus::OutOfStock;
        }
        match self.inventory_quantity {
            Some(quantity) if quantity <= 0 => StockStatus::OutOfStock,
            Some(quantity) if quantity <= low_stock_threshold => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }
}

/// A product with its option axes and variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    /// Option axis names (e.g. `["Color", "Size"]`).
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Resolve the variant whose option values match `selected`
    /// positionally, one value per option axis. `None` means the selected
    /// combination does not exist.
    pub fn variant_matching(&self, selected: &[String]) -> Option<&ProductVariant> {
        self.variants.iter().find(|variant| {
            variant.options.len() == selected.len()
                && variant
                    .options
                    .iter()
                    .zip(selected)
                    .all(|(have, want)| have == want)
        })
    }

    /// Look up a variant by id.
    pub fn variant_by_id(&self, id: VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|variant| variant.id == id)
    }

    /// The default variant shown before any selection: the first one.
    pub fn first_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }
}
