//! Volume pricing tiers and per-item savings.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A quantity-break price: buying at least `min_quantity` units prices
/// each unit at `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Minimum quantity at which this tier applies.
    pub min_quantity: u32,
    /// Unit price at this tier.
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
}

impl PriceTier {
    /// Per-unit saving against the compare-at price, when there is one.
    pub fn savings(&self) -> Option<Money> {
        self.compare_at_price
            .filter(|compare| *compare > self.price)
            .map(|compare| compare.saturating_sub(self.price))
    }

    /// Saving as a whole percentage of the compare-at price
    /// (e.g. `Some(25)` for 25% off).
    pub fn savings_percent(&self) -> Option<u8> {
        let compare = self.compare_at_price?.minor_units();
        let savings = self.savings()?.minor_units();
        if compare == 0 {
            return None;
        }
        // Round half up in integer arithmetic, keeping money math
        // float-free.
        let percent = (savings * 200 + compare) / (2 * compare);
        Some(percent as u8)
    }
}

/// Volume pricing for a variant: a base unit price plus optional
/// quantity-break tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePricing {
    base_price: Money,
    #[serde(default)]
    base_compare_at: Option<Money>,
    #[serde(default)]
    tiers: Vec<PriceTier>,
}

impl VolumePricing {
    /// Pricing with no quantity breaks.
    pub fn new(base_price: Money) -> Self {
        Self {
            base_price,
            base_compare_at: None,
            tiers: Vec::new(),
        }
    }

    /// Set the compare-at price for the base tier.
    pub fn with_compare_at(mut self, compare_at: Money) -> Self {
        self.base_compare_at = Some(compare_at);
        self
    }

    /// Add a quantity-break tier.
    pub fn with_tier(mut self, tier: PriceTier) -> Self {
        self.tiers.push(tier);
        self
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// The deepest tier the quantity reaches: the highest `min_quantity`
    /// that is still `<= quantity`. `None` means the base price applies.
    pub fn tier_for(&self, quantity: u32) -> Option<&PriceTier> {
        self.tiers
            .iter()
            .filter(|tier| quantity >= tier.min_quantity)
            .max_by_key(|tier| tier.min_quantity)
    }

    /// Effective unit price at a quantity.
    pub fn unit_price(&self, quantity: u32) -> Money {
        self.tier_for(quantity)
            .map(|tier| tier.price)
            .unwrap_or(self.base_price)
    }

    /// Effective compare-at price at a quantity, when one applies.
    pub fn compare_at(&self, quantity: u32) -> Option<Money> {
        match self.tier_for(quantity) {
            Some(tier) => tier.compare_at_price,
            None => self.base_compare_at,
        }
    }
}
