//! The cart state synchronizer.
//!
//! One shared mutable value exists on the client: the currently
//! installed cart snapshot. Every snapshot-bearing operation draws a
//! sequence number from one counter at issue time and a response is
//! installed only if its sequence number is at least the installed
//! one's. Responses that lose the race are discarded without any
//! visible effect, so rapid-fire edits always settle on the newest
//! server state no matter how the network reorders completions.

use crate::api::{AddToCartRequest, CartApi};
use crate::error::ApiError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use vitrine_cart::constants::cart_errors;
use vitrine_cart::{CartLine, CartSnapshot, LineKey};
use vitrine_events::{EventBus, StoreEvent};

/// How a snapshot-bearing operation settled.
#[derive(Debug)]
pub enum MutationOutcome {
    /// The response became the current snapshot; `cart-update` was
    /// published.
    Installed(Arc<CartSnapshot>),
    /// A newer operation already installed; the response was discarded
    /// silently. Not an error.
    Superseded,
    /// The request failed; the prior snapshot stays current and one
    /// `cart-error` was published.
    Failed(ApiError),
}

impl MutationOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, MutationOutcome::Installed(_))
    }
}

/// How an add-to-cart submission settled.
#[derive(Debug)]
pub enum AddOutcome {
    /// The line was added; `product:added` was published.
    Added(Arc<CartLine>),
    /// Rejected client-side before any network call; one `cart-error`
    /// was published.
    Rejected(String),
    /// The endpoint refused the add; one `cart-error` was published.
    Failed(ApiError),
}

struct Installed {
    seq: u64,
    snapshot: Arc<CartSnapshot>,
}

/// Serializes cart mutations into a single authoritative snapshot and
/// fans it out over the event bus.
pub struct CartSynchronizer {
    api: Arc<dyn CartApi>,
    bus: EventBus,
    next_seq: AtomicU64,
    installed: Mutex<Option<Installed>>,
}

impl CartSynchronizer {
    pub fn new(api: Arc<dyn CartApi>, bus: EventBus) -> Self {
        Self {
            api,
            bus,
            next_seq: AtomicU64::new(1),
            installed: Mutex::new(None),
        }
    }

    /// The currently installed snapshot, if any operation has completed.
    pub fn installed(&self) -> Option<Arc<CartSnapshot>> {
        self.lock_installed()
            .as_ref()
            .map(|slot| slot.snapshot.clone())
    }

    /// Sequence number of the installed snapshot; 0 before the first
    /// install.
    pub fn installed_seq(&self) -> u64 {
        self.lock_installed().as_ref().map_or(0, |slot| slot.seq)
    }

    /// Set a line's quantity; 0 removes the line.
    ///
    /// Failures never propagate as `Err`: the outcome reports them and
    /// the bus carries the shopper-facing message.
    pub async fn mutate(&self, key: &LineKey, new_quantity: u32) -> MutationOutcome {
        let seq = self.issue_seq();
        match self.api.change_line(key, new_quantity).await {
            Ok(snapshot) => self.install(seq, snapshot),
            Err(error) => self.fail(error),
        }
    }

    /// Refresh from the cart read endpoint, e.g. on drawer open.
    ///
    /// Fetches share the mutation counter, so a fetch issued before a
    /// mutation can never overwrite that mutation's response.
    pub async fn fetch_current(&self) -> MutationOutcome {
        let seq = self.issue_seq();
        match self.api.fetch_cart().await {
            Ok(snapshot) => self.install(seq, snapshot),
            Err(error) => self.fail(error),
        }
    }

    /// Persist the cart note. The endpoint returns the updated cart,
    /// which goes through the same install discipline.
    pub async fn update_note(&self, note: &str) -> MutationOutcome {
        let seq = self.issue_seq();
        match self.api.update_note(note).await {
            Ok(snapshot) => self.install(seq, snapshot),
            Err(error) => self.fail(error),
        }
    }

    /// Submit the product form.
    ///
    /// The add endpoint returns the added line, not the cart, so no
    /// snapshot is installed here; callers follow up with
    /// [`CartSynchronizer::fetch_current`] for drawer freshness.
    pub async fn add_item(&self, request: &AddToCartRequest) -> AddOutcome {
        if request.quantity == 0 {
            let message = cart_errors::EMPTY_ITEM.to_string();
            self.bus.publish(StoreEvent::CartError {
                message: message.clone(),
            });
            return AddOutcome::Rejected(message);
        }

        match self.api.add_to_cart(request).await {
            Ok(line) => {
                let line = Arc::new(line);
                tracing::info!(id = %request.id, quantity = request.quantity, "line added");
                self.bus
                    .publish(StoreEvent::ProductAdded { line: line.clone() });
                AddOutcome::Added(line)
            }
            Err(error) => {
                tracing::error!(%error, "add to cart failed");
                self.bus.publish(StoreEvent::CartError {
                    message: error.description(),
                });
                AddOutcome::Failed(error)
            }
        }
    }

    fn issue_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Install a response if it is still fresh, then publish
    /// `cart-update`. A stale response changes nothing and stays
    /// silent.
    fn install(&self, seq: u64, snapshot: CartSnapshot) -> MutationOutcome {
        let snapshot = Arc::new(snapshot);
        let mut slot = self.lock_installed();
        if let Some(current) = slot.as_ref() {
            if seq < current.seq {
                tracing::debug!(seq, installed = current.seq, "stale response discarded");
                return MutationOutcome::Superseded;
            }
        }
        *slot = Some(Installed {
            seq,
            snapshot: snapshot.clone(),
        });
        // Publish while still holding the slot lock so cart-update
        // events enqueue in install order even with parallel callers.
        // Safe: publish only appends to the queue, it never runs
        // handlers.
        self.bus.publish(StoreEvent::CartUpdate {
            cart: snapshot.clone(),
        });
        drop(slot);
        tracing::info!(seq, items = snapshot.items.len(), "snapshot installed");
        MutationOutcome::Installed(snapshot)
    }

    fn fail(&self, error: ApiError) -> MutationOutcome {
        tracing::error!(%error, "cart request failed");
        self.bus.publish(StoreEvent::CartError {
            message: error.description(),
        });
        MutationOutcome::Failed(error)
    }

    fn lock_installed(&self) -> std::sync::MutexGuard<'_, Option<Installed>> {
        self.installed.lock().unwrap_or_else(|e| e.into_inner())
    }
}
