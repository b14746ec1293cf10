//! Cart state synchronization for the Vitrine storefront toolkit.
//!
//! The cart lives authoritatively on the server; this crate owns the
//! round-trips and the one piece of shared mutable state on the client,
//! the current [`CartSnapshot`](vitrine_cart::CartSnapshot). Mutations
//! are sequenced at issue time so a stale response arriving late can
//! never clobber newer state, and every installed snapshot fans out to
//! display fragments as a single `cart-update` event.

pub mod api;
pub mod error;
pub mod http;
pub mod synchronizer;

pub use api::{AddToCartRequest, CartApi};
pub use error::ApiError;
pub use http::{HttpCartApi, StoreRoutes};
pub use synchronizer::{AddOutcome, CartSynchronizer, MutationOutcome};
