//! Quantity stepper inputs.

use crate::fragment::Fragment;
use vitrine_cart::{LineKey, QuantityRule};
use vitrine_events::{EventBus, StoreEvent};

/// Producer wrapping a quantity input.
///
/// Steps and direct edits clamp through the [`QuantityRule`] and
/// publish `quantity-update` only when the value actually changed, so
/// hammering a disabled bound stays silent.
pub struct QuantityStepper {
    rule: QuantityRule,
    value: u32,
    /// Set when the input belongs to an existing cart line.
    key: Option<LineKey>,
    bus: EventBus,
}

impl QuantityStepper {
    pub fn new(rule: QuantityRule, initial: u32, bus: EventBus) -> Self {
        Self {
            rule,
            value: rule.clamp(initial),
            key: None,
            bus,
        }
    }

    /// Tie the stepper to a cart line; its key rides along on every
    /// `quantity-update`.
    pub fn for_line(mut self, key: LineKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Increment by one step. Returns the settled value.
    pub fn step_up(&mut self) -> u32 {
        self.settle(self.rule.step_up(self.value))
    }

    /// Decrement by one step. Returns the settled value.
    pub fn step_down(&mut self) -> u32 {
        self.settle(self.rule.step_down(self.value))
    }

    /// Direct edit, clamped. Returns the settled value.
    pub fn set(&mut self, quantity: u32) -> u32 {
        self.settle(self.rule.clamp(quantity))
    }

    fn settle(&mut self, next: u32) -> u32 {
        if next != self.value {
            self.value = next;
            self.bus.publish(StoreEvent::QuantityUpdate {
                key: self.key.clone(),
                quantity: next,
            });
        }
        self.value
    }
}

impl Fragment for QuantityStepper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn published_quantities(bus: &EventBus) -> std::sync::Arc<std::sync::Mutex<Vec<u32>>> {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(vitrine_events::EventName::QuantityUpdate, move |event| {
            if let StoreEvent::QuantityUpdate { quantity, .. } = event {
                sink.lock().unwrap().push(*quantity);
            }
            Ok(())
        });
        seen
    }

    #[test]
    fn test_steps_publish_new_values() {
        let bus = EventBus::new();
        let seen = published_quantities(&bus);
        let mut stepper = QuantityStepper::new(QuantityRule::default(), 1, bus.clone());

        assert_eq!(stepper.step_up(), 2);
        assert_eq!(stepper.step_up(), 3);
        assert_eq!(stepper.step_down(), 2);
        bus.drain();
        assert_eq!(seen.lock().unwrap().as_slice(), [2, 3, 2]);
    }

    #[test]
    fn test_clamped_step_stays_silent() {
        let bus = EventBus::new();
        let seen = published_quantities(&bus);
        let mut stepper = QuantityStepper::new(QuantityRule::default(), 1, bus.clone());

        // Already at the minimum; nothing changes, nothing publishes.
        assert_eq!(stepper.step_down(), 1);
        bus.drain();
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_clamps_and_publishes_once() {
        let bus = EventBus::new();
        let seen = published_quantities(&bus);
        let rule = QuantityRule {
            min: 1,
            max: Some(5),
            step: 1,
        };
        let mut stepper = QuantityStepper::new(rule, 1, bus.clone());

        assert_eq!(stepper.set(99), 5);
        assert_eq!(stepper.set(5), 5);
        bus.drain();
        assert_eq!(seen.lock().unwrap().as_slice(), [5]);
    }

    #[test]
    fn test_line_stepper_carries_key() {
        let bus = EventBus::new();
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(vitrine_events::EventName::QuantityUpdate, move |event| {
            if let StoreEvent::QuantityUpdate { key, .. } = event {
                sink.lock().unwrap().push(key.clone());
            }
            Ok(())
        });

        let mut stepper = QuantityStepper::new(QuantityRule::cart_line(), 1, bus.clone())
            .for_line(LineKey::new("abc123"));
        stepper.step_down();
        bus.drain();
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            [Some(LineKey::new("abc123"))]
        );
    }

    #[test]
    fn test_cart_line_stepper_reaches_zero() {
        let bus = EventBus::new();
        let mut stepper = QuantityStepper::new(QuantityRule::cart_line(), 1, bus);
        assert_eq!(stepper.step_down(), 0);
    }
}
