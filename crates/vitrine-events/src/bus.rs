//! The FIFO event bus.
//!
//! `publish` only enqueues; nothing is delivered until the host calls
//! [`EventBus::deliver_next`] or [`EventBus::drain`] at one of its yield
//! points. That split is what breaks publish-during-handle reentrancy:
//! a handler that publishes appends to the tail of the same queue and
//! the new event is delivered after the current one finishes, in order.

use crate::event::StoreEvent;
use crate::name::EventName;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Handle returned by [`EventBus::subscribe`]; pass it back to
/// [`EventBus::unsubscribe`] to remove the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

type Handler = dyn Fn(&StoreEvent) -> anyhow::Result<()> + Send + Sync;

struct Subscriber {
    token: SubscriptionToken,
    handler: Arc<Handler>,
}

struct BusInner {
    queue: Mutex<VecDeque<StoreEvent>>,
    subscribers: Mutex<HashMap<EventName, Vec<Subscriber>>>,
    next_token: AtomicU64,
    draining: AtomicBool,
}

/// Shared-handle publish/subscribe bus with deferred, strictly FIFO
/// delivery.
///
/// The handle is cheap to clone; all clones address the same queue and
/// subscriber table. Delivery happens only on the thread that calls
/// [`EventBus::drain`] or [`EventBus::deliver_next`]. The bus never
/// runs handlers in the background.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                queue: Mutex::new(VecDeque::new()),
                subscribers: Mutex::new(HashMap::new()),
                next_token: AtomicU64::new(1),
                draining: AtomicBool::new(false),
            }),
        }
    }

    /// Append an event to the tail of the queue.
    ///
    /// Never fails and never delivers synchronously; handlers may call
    /// this freely.
    pub fn publish(&self, event: StoreEvent) {
        self.lock_queue().push_back(event);
    }

    /// Register a handler for events delivered under `name`.
    ///
    /// Handlers for the same name run in registration order. A handler
    /// returning `Err` is logged and contained; it never interrupts
    /// delivery.
    pub fn subscribe<F>(&self, name: EventName, handler: F) -> SubscriptionToken
    where
        F: Fn(&StoreEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let token = SubscriptionToken(self.inner.next_token.fetch_add(1, Ordering::Relaxed));
        self.lock_subscribers()
            .entry(name)
            .or_default()
            .push(Subscriber {
                token,
                handler: Arc::new(handler),
            });
        token
    }

    /// Remove a previously registered handler. Returns `false` when the
    /// token is unknown or was already removed.
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        let mut subscribers = self.lock_subscribers();
        for list in subscribers.values_mut() {
            if let Some(index) = list.iter().position(|sub| sub.token == token) {
                list.remove(index);
                return true;
            }
        }
        false
    }

    /// One drain tick: pop the event at the queue head and deliver it to
    /// every subscriber of its name, in registration order. Returns
    /// whether an event was delivered.
    ///
    /// Returns `false` without delivering when called reentrantly from
    /// inside a handler; the outer drain pass owns the queue.
    pub fn deliver_next(&self) -> bool {
        let Some(_latch) = self.enter_drain() else {
            return false;
        };
        self.deliver_one()
    }

    /// Deliver queued events until the queue is empty, including events
    /// published by handlers during this pass. Returns the number of
    /// events delivered.
    ///
    /// A `drain` entered while another drain is running on the same bus
    /// returns 0 immediately; back-to-back publishes coalesce onto the
    /// pass already in flight.
    pub fn drain(&self) -> usize {
        let Some(_latch) = self.enter_drain() else {
            return 0;
        };
        let mut delivered = 0;
        while self.deliver_one() {
            delivered += 1;
        }
        delivered
    }

    /// Whether the queue is empty and no drain pass is running.
    pub fn is_idle(&self) -> bool {
        !self.inner.draining.load(Ordering::Acquire) && self.lock_queue().is_empty()
    }

    /// Number of events waiting for delivery.
    pub fn pending(&self) -> usize {
        self.lock_queue().len()
    }

    /// Take the drain latch. The returned guard releases it on drop,
    /// so a panic unwinding out of a delivery pass cannot wedge the
    /// bus.
    fn enter_drain(&self) -> Option<DrainLatch<'_>> {
        self.inner
            .draining
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then(|| DrainLatch {
                draining: &self.inner.draining,
            })
    }

    /// Pop and deliver a single event. No locks are held while handlers
    /// run, so handlers may publish, subscribe, and unsubscribe freely.
    fn deliver_one(&self) -> bool {
        let Some(event) = self.lock_queue().pop_front() else {
            return false;
        };
        let name = event.name();

        // Snapshot the handler list so subscribe/unsubscribe from inside
        // a handler affects later events, not this delivery.
        let handlers: Vec<Arc<Handler>> = self
            .lock_subscribers()
            .get(&name)
            .map(|list| list.iter().map(|sub| sub.handler.clone()).collect())
            .unwrap_or_default();

        for handler in handlers {
            // Contain panics the same way as Err returns: one broken
            // subscriber must not take down delivery for everyone else.
            match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler(&event))) {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    tracing::error!(event = %name, %error, "event handler failed");
                }
                Err(panic) => {
                    tracing::error!(
                        event = %name,
                        reason = panic_message(&panic),
                        "event handler panicked"
                    );
                }
            }
        }
        true
    }

    fn lock_queue(&self) -> std::sync::MutexGuard<'_, VecDeque<StoreEvent>> {
        self.inner.queue.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, HashMap<EventName, Vec<Subscriber>>> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

/// Holds the `draining` flag for the duration of a delivery pass and
/// clears it on drop, including during unwinding.
struct DrainLatch<'a> {
    draining: &'a AtomicBool,
}

impl Drop for DrainLatch<'_> {
    fn drop(&mut self) {
        self.draining.store(false, Ordering::Release);
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
