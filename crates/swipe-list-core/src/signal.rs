//! Signal/slot notifications for swipe-list.
//!
//! A [`Signal<Args>`] holds any number of connected slots (closures) and
//! invokes each of them, in connection order, when the signal is emitted.
//! Widgets expose their outbound notifications (render requests, deletions)
//! as public signal fields.
//!
//! Everything in this crate runs on the UI thread, so emission is always a
//! direct call. Slots are cloned out of the connection table before they run,
//! which lets a slot connect or disconnect other slots on the same signal.
//!
//! # Example
//!
//! ```
//! use swipe_list_core::Signal;
//!
//! let deleted = Signal::<usize>::new();
//! let id = deleted.connect(|row| println!("row {row} deleted"));
//! deleted.emit(2);
//! deleted.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// Use `()` for signals with no arguments, or a tuple for several.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// Returns the number of slots invoked.
    #[tracing::instrument(skip_all, target = "swipe_list_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) -> usize {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in &slots {
            slot(&args);
        }
        slots.len()
    }
}

static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<()>::new();
        let count = Arc::new(Mutex::new(0));

        let c = count.clone();
        let id = signal.connect(move |_| *c.lock() += 1);
        assert_eq!(signal.emit(()), 1);
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        assert_eq!(signal.emit(()), 0);
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_slot_can_disconnect_all_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let inner = Arc::downgrade(&signal);
        signal.connect(move |_| {
            if let Some(s) = inner.upgrade() {
                s.disconnect_all();
            }
        });

        assert_eq!(signal.emit(()), 1);
        assert_eq!(signal.connection_count(), 0);
    }
}
