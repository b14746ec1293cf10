//! Typed event payloads.

use crate::name::EventName;
use std::sync::Arc;
use vitrine_cart::{CartLine, CartSnapshot, LineKey, ProductVariant};

/// A storefront event with its payload.
///
/// Snapshots and variants are carried behind `Arc` so fanning an event
/// out to many subscribers never deep-copies domain state; every
/// consumer reads the same immutable value.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A new cart snapshot became current.
    CartUpdate { cart: Arc<CartSnapshot> },
    /// A quantity input settled on a new value. `key` is present when
    /// the input belongs to an existing cart line.
    QuantityUpdate {
        key: Option<LineKey>,
        quantity: u32,
    },
    /// The selected option combination resolved to a variant, or to
    /// nothing when the combination does not exist.
    VariantChange {
        variant: Option<Arc<ProductVariant>>,
    },
    /// A cart operation failed; `message` is shopper-facing.
    CartError { message: String },
    /// The product form added a line to the cart.
    ProductAdded { line: Arc<CartLine> },
    /// Open the cart drawer.
    CartOpen,
    /// Close the cart drawer.
    CartClose,
    /// A theme-defined event with an ad-hoc JSON detail.
    Custom {
        name: String,
        detail: serde_json::Value,
    },
}

impl StoreEvent {
    /// The name this event is delivered under.
    pub fn name(&self) -> EventName {
        match self {
            StoreEvent::CartUpdate { .. } => EventName::CartUpdate,
            StoreEvent::QuantityUpdate { .. } => EventName::QuantityUpdate,
            StoreEvent::VariantChange { .. } => EventName::VariantChange,
            StoreEvent::CartError { .. } => EventName::CartError,
            StoreEvent::ProductAdded { .. } => EventName::ProductAdded,
            StoreEvent::CartOpen => EventName::CartOpen,
            StoreEvent::CartClose => EventName::CartClose,
            StoreEvent::Custom { name, .. } => EventName::Custom(name.clone()),
        }
    }
}
