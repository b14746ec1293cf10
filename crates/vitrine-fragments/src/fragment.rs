//! Fragment lifecycle.

use vitrine_events::{EventBus, SubscriptionToken};

/// Lifecycle of a display fragment.
///
/// Consumers subscribe in [`Fragment::on_mount`] and must drop every
/// token they took in [`Fragment::on_unmount`], so a re-created
/// fragment never leaves orphaned handlers behind. Producers that
/// subscribe to nothing keep the default no-ops.
pub trait Fragment {
    fn on_mount(&mut self, _bus: &EventBus) {}

    fn on_unmount(&mut self, _bus: &EventBus) {}
}

/// Token bookkeeping shared by the subscribing fragments.
#[derive(Debug, Default)]
pub struct Subscriptions(Vec<SubscriptionToken>);

impl Subscriptions {
    /// Remember a token taken at mount.
    pub fn track(&mut self, token: SubscriptionToken) {
        self.0.push(token);
    }

    /// Unsubscribe everything tracked.
    pub fn clear(&mut self, bus: &EventBus) {
        for token in self.0.drain(..) {
            bus.unsubscribe(token);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
