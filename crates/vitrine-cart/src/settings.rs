//! Theme-level settings: the shop money format and display strings.

use crate::money::MoneyFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failed to load theme settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid TOML.
    #[error("invalid settings document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display strings, with the storefront's fallback wording as defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeStrings {
    pub subtotal: String,
    pub checkout: String,
    pub continue_shopping: String,
    pub shipping_at_checkout: String,
    pub empty_cart: String,
    pub in_stock: String,
    pub out_of_stock: String,
    pub low_stock: String,
    pub unavailable: String,
    pub add_to_cart: String,
}

impl Default for ThemeStrings {
    fn default() -> Self {
        Self {
            subtotal: "Subtotal".to_string(),
            checkout: "Check out".to_string(),
            continue_shopping: "Continue Shopping".to_string(),
            shipping_at_checkout: "Shipping calculated at checkout".to_string(),
            empty_cart: "Your cart is empty".to_string(),
            in_stock: "In Stock".to_string(),
            out_of_stock: "Out of Stock".to_string(),
            low_stock: "Low Stock".to_string(),
            unavailable: "Unavailable".to_string(),
            add_to_cart: "Add to cart".to_string(),
        }
    }
}

/// Theme settings shared by the display fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeSettings {
    pub money_format: MoneyFormat,
    pub strings: ThemeStrings,
}

impl ThemeSettings {
    /// Parse settings from a TOML document. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(document)?)
    }
}
