//! The cart endpoint surface as a swappable trait.

use crate::error::ApiError;
use async_trait::async_trait;
use serde::Serialize;
use vitrine_cart::{CartLine, CartSnapshot, LineKey, SellingPlanId, VariantId};

/// An add-to-cart submission from the product form.
///
/// Serializes to the form-encoded body the add endpoint expects.
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
    pub id: VariantId,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_plan: Option<SellingPlanId>,
}

impl AddToCartRequest {
    pub fn new(id: VariantId, quantity: u32) -> Self {
        Self {
            id,
            quantity,
            selling_plan: None,
        }
    }

    /// Attach a subscription selling plan.
    pub fn with_selling_plan(mut self, plan: SellingPlanId) -> Self {
        self.selling_plan = Some(plan);
        self
    }
}

/// The remote cart endpoints.
///
/// The synchronizer talks to the server through this trait only, so
/// tests can substitute scripted implementations and control response
/// timing.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Read the current cart.
    async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError>;

    /// Set a line's quantity; 0 removes the line. Returns the whole
    /// updated cart, never a delta.
    async fn change_line(&self, key: &LineKey, quantity: u32) -> Result<CartSnapshot, ApiError>;

    /// Persist the cart note. The endpoint returns the updated cart.
    async fn update_note(&self, note: &str) -> Result<CartSnapshot, ApiError>;

    /// Add a variant to the cart. Returns the added line, not the cart.
    async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<CartLine, ApiError>;
}
