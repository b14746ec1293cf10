//! The closed set of storefront event names.
//!
//! Centralizing the names as an enum keeps a typo from silently
//! registering a subscriber that never fires.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Name of a storefront event.
///
/// The well-known variants cover every event the toolkit's own flows
/// publish; `Custom` keeps the namespace open for theme-specific events.
/// String forms round-trip through [`EventName::as_str`] and
/// [`FromStr`]; an unknown string parses to `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    /// A new cart snapshot was installed.
    CartUpdate,
    /// A quantity input changed value.
    QuantityUpdate,
    /// The selected product variant changed.
    VariantChange,
    /// A cart operation failed; payload is the shopper-facing message.
    CartError,
    /// A line was added to the cart through the product form.
    ProductAdded,
    /// The cart drawer was asked to open.
    CartOpen,
    /// The cart drawer was asked to close.
    CartClose,
    /// A theme-defined event outside the well-known set.
    Custom(String),
}

impl EventName {
    /// Resolve a wire-form string; anything outside the well-known set
    /// becomes `Custom`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "cart-update" => EventName::CartUpdate,
            "quantity-update" => EventName::QuantityUpdate,
            "variant-change" => EventName::VariantChange,
            "cart-error" => EventName::CartError,
            "product:added" => EventName::ProductAdded,
            "cart:open" => EventName::CartOpen,
            "cart:close" => EventName::CartClose,
            other => EventName::Custom(other.to_string()),
        }
    }

    /// The wire-style string form of the name.
    pub fn as_str(&self) -> &str {
        match self {
            EventName::CartUpdate => "cart-update",
            EventName::QuantityUpdate => "quantity-update",
            EventName::VariantChange => "variant-change",
            EventName::CartError => "cart-error",
            EventName::ProductAdded => "product:added",
            EventName::CartOpen => "cart:open",
            EventName::CartClose => "cart:close",
            EventName::Custom(name) => name,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EventName::from_wire(s))
    }
}

impl Serialize for EventName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl Visitor<'_> for NameVisitor {
            type Value = EventName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an event name string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<EventName, E> {
                Ok(EventName::from_wire(value))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_names_round_trip() {
        for name in [
            EventName::CartUpdate,
            EventName::QuantityUpdate,
            EventName::VariantChange,
            EventName::CartError,
            EventName::ProductAdded,
            EventName::CartOpen,
            EventName::CartClose,
        ] {
            let parsed: EventName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn test_unknown_name_parses_to_custom() {
        let parsed: EventName = "drawer:refresh".parse().unwrap();
        assert_eq!(parsed, EventName::Custom("drawer:refresh".to_string()));
        assert_eq!(parsed.as_str(), "drawer:refresh");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&EventName::CartUpdate).unwrap();
        assert_eq!(json, "\"cart-update\"");
        let back: EventName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EventName::CartUpdate);
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(EventName::ProductAdded.to_string(), "product:added");
    }
}
