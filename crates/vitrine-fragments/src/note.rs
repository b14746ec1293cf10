//! The cart note input.

use crate::fragment::Fragment;
use std::time::Instant;
use vitrine_cart::constants::CART_NOTE_DEBOUNCE;
use vitrine_events::Debounce;

/// Producer buffering cart-note edits behind the note debounce.
///
/// Every keystroke lands in the buffer and re-arms the timer; once the
/// shopper stops typing for the debounce window, [`take_ready`] hands
/// the settled text to whoever persists it (the synchronizer's
/// `update_note`).
///
/// [`take_ready`]: CartNoteInput::take_ready
pub struct CartNoteInput {
    debounce: Debounce,
    pending: Option<String>,
}

impl Default for CartNoteInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CartNoteInput {
    pub fn new() -> Self {
        Self {
            debounce: Debounce::new(CART_NOTE_DEBOUNCE),
            pending: None,
        }
    }

    /// Record an edit at `now`.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(text.into());
        self.debounce.poke(now);
    }

    /// The settled note, once the debounce window has passed. Yields
    /// at most once per burst of edits.
    pub fn take_ready(&mut self, now: Instant) -> Option<String> {
        if self.debounce.fire(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop any buffered edit, e.g. when the drawer closes.
    pub fn discard(&mut self) {
        self.pending = None;
        self.debounce.cancel();
    }
}

impl Fragment for CartNoteInput {}
