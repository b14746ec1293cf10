//! Storefront constants shared across the toolkit.

use std::time::Duration;

/// Debounce applied to quantity-input changes before they dispatch.
pub const QUANTITY_CHANGE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounce applied to cart-note edits before they persist.
pub const CART_NOTE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Inventory level at or below which a variant displays as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Cart error messages surfaced to shoppers.
pub mod cart_errors {
    /// Add-to-cart submitted with a zero quantity.
    pub const EMPTY_ITEM: &str = "You need to add at least 1 product";
    pub const PRODUCT_NOT_FOUND: &str = "Product not found";
    pub const INVALID_QUANTITY: &str = "Invalid quantity";
    pub const OUT_OF_STOCK: &str = "Out of stock";
}
