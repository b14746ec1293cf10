//! The error message area.

use crate::fragment::{Fragment, Subscriptions};
use std::sync::{Arc, Mutex};
use vitrine_events::{EventBus, EventName, StoreEvent};

/// Minimal consumer of `cart-error`: shows the latest description.
#[derive(Default)]
pub struct ErrorBanner {
    message: Arc<Mutex<Option<String>>>,
    subscriptions: Subscriptions,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message to display, if any.
    pub fn message(&self) -> Option<String> {
        self.message
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Dismiss the banner.
    pub fn clear(&self) {
        *self.message.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl Fragment for ErrorBanner {
    fn on_mount(&mut self, bus: &EventBus) {
        let message = self.message.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::CartError, move |event| {
                if let StoreEvent::CartError { message: text } = event {
                    *message.lock().unwrap_or_else(|e| e.into_inner()) = Some(text.clone());
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

    #[test]
    fn test_banner_shows_latest_error() {
        let bus = EventBus::new();
        let mut banner = ErrorBanner::new();
        banner.on_mount(&bus);
        assert_eq!(banner.message(), None);

        bus.publish(StoreEvent::CartError {
            message: "Invalid quantity".to_string(),
        });
        bus.publish(StoreEvent::CartError {
            message: "Out of stock".to_string(),
        });
        bus.drain();
        assert_eq!(banner.message().as_deref(), Some("Out of stock"));

        banner.clear();
        assert_eq!(banner.message(), None);
    }
}
