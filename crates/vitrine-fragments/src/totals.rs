//! The header totals badge.

use crate::fragment::{Fragment, Subscriptions};
use std::sync::{Arc, Mutex};
use vitrine_cart::{Money, MoneyFormat};
use vitrine_events::{EventBus, EventName, StoreEvent};

/// Render state of the totals badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsView {
    pub subtotal: String,
    pub item_count: u32,
    pub empty: bool,
}

/// Consumer of `cart-update` that keeps the header badge current.
pub struct CartTotals {
    format: MoneyFormat,
    state: Arc<Mutex<TotalsView>>,
    subscriptions: Subscriptions,
}

impl CartTotals {
    pub fn new(format: MoneyFormat) -> Self {
        let view = TotalsView {
            subtotal: format.format(Money::ZERO),
            item_count: 0,
            empty: true,
        };
        Self {
            format,
            state: Arc::new(Mutex::new(view)),
            subscriptions: Subscriptions::default(),
        }
    }

    pub fn view(&self) -> TotalsView {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Fragment for CartTotals {
    fn on_mount(&mut self, bus: &EventBus) {
        let state = self.state.clone();
        let format = self.format.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::CartUpdate, move |event| {
                if let StoreEvent::CartUpdate { cart } = event {
                    let mut view = state.lock().unwrap_or_else(|e| e.into_inner());
                    view.subtotal = format.format(cart.total_price);
                    view.item_count = cart.item_count;
                    view.empty = cart.is_empty();
                }
                Ok(())
            }));
    }

    fn on_unmount(&mut self, bus: &EventBus) {
        self.subscriptions.clear(bus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_cart::{CartLine, CartSnapshot, LineKey, VariantId};

    fn cart_with_one_line() -> Arc<CartSnapshot> {
        Arc::new(CartSnapshot {
            item_count: 3,
            total_price: Money::new(1500),
            items: vec![CartLine {
                key: LineKey::new("abc123"),
                id: VariantId::new(1),
                quantity: 3,
                price: Money::new(500),
                line_price: Money::new(1500),
                original_line_price: Money::new(1500),
                product_title: "Aged Gouda".to_string(),
                variant_title: None,
                properties: Default::default(),
                url: None,
                image: None,
            }],
            ..CartSnapshot::default()
        })
    }

    #[test]
    fn test_totals_follow_cart_updates() {
        let bus = EventBus::new();
        let mut totals = CartTotals::new(MoneyFormat::default());
        totals.on_mount(&bus);

        assert_eq!(totals.view().subtotal, "$0.00");
        assert!(totals.view().empty);

        bus.publish(StoreEvent::CartUpdate {
            cart: cart_with_one_line(),
        });
        bus.drain();

        let view = totals.view();
        assert_eq!(view.subtotal, "$15.00");
        assert_eq!(view.item_count, 3);
        assert!(!view.empty);
    }

    #[test]
    fn test_unmounted_totals_stay_stale() {
        let bus = EventBus::new();
        let mut totals = CartTotals::new(MoneyFormat::default());
        totals.on_mount(&bus);
        totals.on_unmount(&bus);

        bus.publish(StoreEvent::CartUpdate {
            cart: Arc::new(CartSnapshot {
                total_price: Money::new(999),
                ..CartSnapshot::default()
            }),
        });
        bus.drain();
        assert_eq!(totals.view().subtotal, "$0.00");
    }
}
