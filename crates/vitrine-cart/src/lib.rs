//! Cart domain model for the Vitrine storefront toolkit.
//!
//! This crate provides the typed data the rest of the toolkit moves around:
//!
//! - **Snapshots**: immutable cart state as served by the cart endpoints
//! - **Money**: integer minor units plus the shop money format template
//! - **Catalog**: products, variants, option resolution, stock status
//! - **Pricing**: volume tiers, quantity rules, per-item savings
//! - **Settings**: theme strings and money format, loadable from TOML
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_cart::prelude::*;
//!
//! let cart: CartSnapshot = serde_json::from_str(body)?;
//! let format = MoneyFormat::default();
//!
//! for line in &cart.items {
//!     println!("{} x{} = {}", line.product_title, line.quantity,
//!              format.format(line.line_price));
//! }
//! println!("Total: {}", format.format(cart.total_price));
//! ```

pub mod constants;
pub mod ids;
pub mod line;
pub mod money;
pub mod pricing;
pub mod quantity;
pub mod settings;
pub mod snapshot;
pub mod variant;

pub use ids::{LineKey, ProductId, SellingPlanId, VariantId};
pub use line::CartLine;
pub use money::{Money, MoneyFormat};
pub use pricing::{PriceTier, VolumePricing};
pub use quantity::QuantityRule;
pub use settings::{SettingsError, ThemeSettings, ThemeStrings};
pub use snapshot::CartSnapshot;
pub use variant::{Product, ProductVariant, StockStatus};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::{LineKey, ProductId, SellingPlanId, VariantId};
    pub use crate::line::CartLine;
    pub use crate::money::{Money, MoneyFormat};
    pub use crate::pricing::{PriceTier, VolumePricing};
    pub use crate::quantity::QuantityRule;
    pub use crate::settings::{ThemeSettings, ThemeStrings};
    pub use crate::snapshot::CartSnapshot;
    pub use crate::variant::{Product, ProductVariant, StockStatus};
}
