//! Event layer for the Vitrine storefront toolkit.
//!
//! Components never hold references to each other: producers publish
//! [`StoreEvent`]s onto a shared [`EventBus`] and consumers subscribe by
//! [`EventName`]. Delivery is deferred and strictly FIFO, driven by the
//! host calling [`EventBus::drain`] at its yield points, so no handler
//! ever runs inside a `publish` call.

pub mod bus;
pub mod debounce;
pub mod event;
pub mod name;

pub use bus::{EventBus, SubscriptionToken};
pub use debounce::Debounce;
pub use event::StoreEvent;
pub use name::EventName;
