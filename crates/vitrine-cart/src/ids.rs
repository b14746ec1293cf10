//! Newtype identifiers for the cart wire format.
//!
//! Using newtypes prevents accidentally mixing up identifier kinds,
//! e.g. passing a variant id where a line key is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate string-backed key types.
macro_rules! define_key {
    ($name:ident) => {
        /// A stable string identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a key from a string.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Macro to generate numeric id types.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A numeric identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an id from its numeric value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// The numeric value.
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

// Cart lines are keyed by an opaque server-issued string; catalog ids
// are numeric on the wire.
define_key!(LineKey);
define_numeric_id!(ProductId);
define_numeric_id!(VariantId);
define_numeric_id!(SellingPlanId);
