//! The per-item price panel with volume tiers.

use crate::fragment::{Fragment, Subscriptions};
use std::sync::{Arc, Mutex};
use vitrine_cart::{MoneyFormat, VolumePricing};
use vitrine_events::{EventBus, EventName, StoreEvent};

/// Render state of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceView {
    /// Effective unit price at the current quantity, formatted.
    pub unit_price: String,
    /// Compare-at price when the current tier has one, formatted.
    pub compare_at: Option<String>,
    /// Whole-percent saving against the compare-at price.
    pub savings_percent: Option<u8>,
}

struct PanelState {
    pricing: VolumePricing,
    quantity: u32,
}

/// Consumer of `quantity-update` and `variant-change` showing the
/// effective per-unit price for the current quantity.
///
/// A variant change rebases the panel on that variant's price and
/// compare-at while the configured quantity breaks stay in place.
pub struct PricePerItemPanel {
    format: MoneyFormat,
    state: Arc<Mutex<PanelState>>,
    subscriptions: Subscriptions,
}

impl PricePerItemPanel {
    pub fn new(pricing: VolumePricing, format: MoneyFormat) -> Self {
        Self {
            format,
            state: Arc::new(Mutex::new(PanelState {
                pricing,
                quantity: 1,
            })),
            subscriptions: Subscriptions::default(),
        }
    }

    pub fn view(&self) -> PriceView {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let tier = state.pricing.tier_for(state.quantity);
        PriceView {
            unit_price: self.format.format(state.pricing.unit_price(state.quantity)),
            compare_at: state
                .pricing
                .compare_at(state.quantity)
                .map(|compare| self.format.format(compare)),
            savings_percent: tier.and_then(|t| t.savings_percent()),
        }
    }
}

impl Fragment for PricePerItemPanel {
    fn on_mount(&mut self, bus: &EventBus) {
        let state = self.state.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::QuantityUpdate, move |event| {
                if let StoreEvent::QuantityUpdate { quantity, .. } = event {
                    state.lock().unwrap_or_else(|e| e.into_inner()).quantity = *quantity;
                }
                Ok(())
            }));

        let state = self.state.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::VariantChange, move |event| {
                if let StoreEvent::VariantChange {
                    variant: Some(variant),
                } = event
                {
                    let mut panel = state.lock().unwrap_or_else(|e| e.into_inner());
                    let mut rebased = VolumePricing::new(variant.price);
                    if let Some(compare) = variant.compare_at_price {
                        rebased = rebased.with_compare_at(compare);
                    }
                    for tier in panel.pricing.tiers() {
                        rebased = rebased.with_tier(tier.clone());
                    }
                    panel.pricing = rebased;
                }
                Ok(())
            }));
    }

    fn on_unmount(&mut self, bus: &EventBus) {
        self.subscriptions.clear(bus);
    }
}
