//! Quantity bounds and stepping for quantity inputs.

use serde::{Deserialize, Serialize};

/// Min/max/step rule for a quantity input, with number-input stepping
/// semantics: stepping clamps to the bounds, and values below the minimum
/// clamp up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRule {
    pub min: u32,
    pub max: Option<u32>,
    pub step: u32,
}

impl Default for QuantityRule {
    /// Product-form default: at least one unit, whole steps.
    fn default() -> Self {
        Self {
            min: 1,
            max: None,
            step: 1,
        }
    }
}

impl QuantityRule {
    /// Rule for cart lines, where zero means remove.
    pub fn cart_line() -> Self {
        Self {
            min: 0,
            max: None,
            step: 1,
        }
    }

    /// Clamp a quantity into the rule's bounds.
    pub fn clamp(&self, quantity: u32) -> u32 {
        let q = quantity.max(self.min);
        match self.max {
            Some(max) => q.min(max),
            None => q,
        }
    }

    /// One step up, clamped.
    pub fn step_up(&self, quantity: u32) -> u32 {
        self.clamp(quantity.saturating_add(self.step))
    }

    /// One step down, clamped.
    pub fn step_down(&self, quantity: u32) -> u32 {
        self.clamp(quantity.saturating_sub(self.step))
    }
}
