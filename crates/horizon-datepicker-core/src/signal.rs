//! Signal/slot notification for Horizon Datepicker.
//!
//! A [`Signal<Args>`] is the single channel through which a widget reports
//! changes to its host. Slots (closures) are connected to a signal and are
//! invoked synchronously, in connection order, every time the signal is
//! emitted.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! # Dispatch Model
//!
//! Widgets in this workspace are event-driven and single-threaded: a gesture
//! runs to completion before the next one is handled. Slots are therefore
//! always called directly on the emitting thread. `Signal` is still
//! `Send + Sync` so a widget can be handed to another thread as a whole.
//!
//! Emission takes a snapshot of the connected slots before invoking them, so
//! a slot may connect or disconnect slots on the same signal without
//! deadlocking. Changes made during an emission apply to the next one.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::Signal;
//!
//! let value_changed = Signal::<Option<u32>>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {:?}", value);
//! });
//!
//! value_changed.emit(Some(15));
//! value_changed.emit(None);
//!
//! value_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{CoreError, Result};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A connected slot and its position in connection order.
struct Connection<Args> {
    sequence: u64,
    slot: Slot<Args>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple for multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Sequence number handed to the next connection.
    next_sequence: AtomicU64,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
    /// Number of emissions that reached at least the dispatch stage.
    emissions: AtomicU64,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            next_sequence: AtomicU64::new(0),
            blocked: AtomicBool::new(false),
            emissions: AtomicU64::new(0),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_datepicker_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        self.connections.lock().insert(Connection {
            sequence,
            slot: Arc::new(slot),
        })
    }

    /// Connect a slot with automatic disconnection when the guard is dropped.
    ///
    /// The guard borrows the signal, so the borrow checker guarantees the
    /// signal outlives it.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard { signal: self, id }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect a slot, reporting an unknown ID as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<()> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(CoreError::InvalidConnection)
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Number of emissions dispatched so far (blocked emissions excluded).
    pub fn emission_count(&self) -> u64 {
        self.emissions.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "horizon_datepicker_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = {
            let connections = self.connections.lock();
            let mut ordered: Vec<&Connection<Args>> = connections.values().collect();
            ordered.sort_by_key(|connection| connection.sequence);
            ordered.iter().map(|connection| connection.slot.clone()).collect()
        };
        self.emissions.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`].
///
/// # Example
///
/// ```
/// use horizon_datepicker_core::Signal;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use std::sync::Arc;
///
/// let signal = Signal::<i32>::new();
/// let counter = Arc::new(AtomicI32::new(0));
/// {
///     let counter_clone = counter.clone();
///     let _guard = signal.connect_scoped(move |&n| {
///         counter_clone.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42);
/// }
/// signal.emit(43);
/// assert_eq!(counter.load(Ordering::SeqCst), 42);
/// ```
#[must_use = "dropping the guard disconnects the slot immediately"]
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<Option<u32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

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
        assert_eq!(signal.emission_count(), 2);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
        assert_eq!(signal.try_disconnect(conn_id), Err(CoreError::InvalidConnection));
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
        assert_eq!(signal.emission_count(), 2);
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            signal.connect(move |_| order.lock().push(i));
        }

        signal.emit(());
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_reused_slot_keeps_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let ids: Vec<_> = (0..3)
            .map(|i| {
                let order = order.clone();
                signal.connect(move |_| order.lock().push(i))
            })
            .collect();
        signal.disconnect(ids[0]);
        let late = order.clone();
        signal.connect(move |_| late.lock().push(3));

        signal.emit(());
        assert_eq!(*order.lock(), vec![1, 2, 3]);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();

        for _ in 0..5 {
            signal.connect(|_| {});
        }

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        {
            let received_clone = received.clone();
            let _guard = signal.connect_scoped(move |&value| {
                received_clone.lock().push(value);
            });
            signal.emit(1);
        }

        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_may_disconnect_itself() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let id_cell = Arc::new(Mutex::new(None));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        let id_clone = id_cell.clone();
        let id = signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = id_clone.lock().take() {
                signal_clone.disconnect(id);
            }
        });
        *id_cell.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_signal_with_option_payload() {
        let signal = Signal::<Option<(i32, u32, u32)>>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |value| {
            received_clone.lock().push(*value);
        });

        signal.emit(Some((2025, 4, 15)));
        signal.emit(None);

        assert_eq!(*received.lock(), vec![Some((2025, 4, 15)), None]);
    }
}
