//! Handler lists for event payloads.
//!
//! An [`EventHandlers<A>`] is the per-event callback list a control exposes,
//! for example "mouse down" with payload [`MouseEventArgs`]. Handlers receive
//! the payload by mutable reference and may mark it handled.
//!
//! Handlers must not keep references into the payload after they return; the
//! dispatcher releases it to its pool right away and the same instance will
//! describe a different event next.
//!
//! # Example
//!
//! ```
//! use event_pool::events::{HandledEvent, MouseEventArgs};
//! use event_pool::EventHandlers;
//!
//! let clicked = EventHandlers::<MouseEventArgs>::new();
//! let id = clicked.add(|args| args.set_handled(true));
//!
//! let mut args = MouseEventArgs::default();
//! assert!(clicked.invoke(&mut args));
//!
//! clicked.remove(id);
//! assert!(clicked.is_empty());
//! ```
//!
//! [`MouseEventArgs`]: crate::events::MouseEventArgs

use std::fmt;
use std::sync::Arc;

use event_pool_core::logging::targets;
use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::events::HandledEvent;

new_key_type! {
    /// Identifies a handler added to an [`EventHandlers`] list.
    ///
    /// Only meaningful for the list that returned it. A removed handler's
    /// key is never reissued by the same list.
    pub struct HandlerId;
}

/// A shared event callback.
pub type Handler<A> = Arc<dyn Fn(&mut A) + Send + Sync>;

type HandlerSnapshot<A> = Arc<Vec<(HandlerId, Handler<A>)>>;

/// An ordered, thread-safe list of event handlers.
///
/// Invocation works on a snapshot of the list, so handlers may add or remove
/// handlers (including themselves) while running. Changes take effect on the
/// next invocation.
pub struct EventHandlers<A> {
    inner: Mutex<HandlerList<A>>,
}

struct HandlerList<A> {
    /// Live keys; the snapshot holds the callbacks in invocation order.
    ids: SlotMap<HandlerId, ()>,
    snapshot: HandlerSnapshot<A>,
}

impl<A> EventHandlers<A> {
    /// Create an empty handler list.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HandlerList {
                ids: SlotMap::with_key(),
                snapshot: Arc::new(Vec::new()),
            }),
        }
    }

    /// Append a handler. Handlers run in the order they were added.
    pub fn add<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&mut A) + Send + Sync + 'static,
    {
        let mut list = self.inner.lock();
        let id = list.ids.insert(());
        let mut next = Vec::with_capacity(list.snapshot.len() + 1);
        next.extend(list.snapshot.iter().cloned());
        next.push((id, Arc::new(handler) as Handler<A>));
        list.snapshot = Arc::new(next);
        id
    }

    /// Remove a handler. Returns `false` if it was not in this list.
    pub fn remove(&self, id: HandlerId) -> bool {
        let mut list = self.inner.lock();
        if list.ids.remove(id).is_none() {
            return false;
        }
        let next: Vec<_> = list
            .snapshot
            .iter()
            .filter(|(existing, _)| *existing != id)
            .cloned()
            .collect();
        list.snapshot = Arc::new(next);
        true
    }

    /// Remove every handler.
    pub fn clear(&self) {
        let mut list = self.inner.lock();
        list.ids.clear();
        list.snapshot = Arc::new(Vec::new());
    }

    /// Number of handlers in the list.
    pub fn len(&self) -> usize {
        self.inner.lock().ids.len()
    }

    /// Check if the list has no handlers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> HandlerSnapshot<A> {
        self.inner.lock().snapshot.clone()
    }
}

impl<A: HandledEvent> EventHandlers<A> {
    /// Run every handler on `args` and report whether the event was handled.
    ///
    /// All handlers run even after one marks the event handled; a handler
    /// that only acts on unhandled events should check `is_handled` itself.
    pub fn invoke(&self, args: &mut A) -> bool {
        let handlers = self.snapshot();
        tracing::trace!(
            target: targets::HANDLERS,
            handler_count = handlers.len(),
            "invoking handlers"
        );
        for (_, handler) in handlers.iter() {
            (handler.as_ref())(&mut *args);
        }
        args.is_handled()
    }
}

impl<A> Default for EventHandlers<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for EventHandlers<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::events::{EventArgs, KeyCode, KeyEventArgs};

    static_assertions::assert_impl_all!(EventHandlers<KeyEventArgs>: Send, Sync);

    #[test]
    fn test_invoke_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let handlers = EventHandlers::<EventArgs>::new();
        for n in 0..3 {
            let order = order.clone();
            handlers.add(move |_| order.lock().push(n));
        }

        let mut args = EventArgs::new();
        assert!(!handlers.invoke(&mut args));
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_all_handlers_run_after_handled() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handlers = EventHandlers::<KeyEventArgs>::new();

        handlers.add(|args| {
            if args.key == KeyCode::Enter {
                args.set_handled(true);
            }
        });
        let counter = calls.clone();
        handlers.add(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut args = KeyEventArgs {
            key: KeyCode::Enter,
            ..Default::default()
        };
        assert!(handlers.invoke(&mut args));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove() {
        let handlers = EventHandlers::<EventArgs>::new();
        let a = handlers.add(|args| args.handle());
        let b = handlers.add(|_| {});
        assert_eq!(handlers.len(), 2);

        assert!(handlers.remove(a));
        assert!(!handlers.remove(a));
        assert_eq!(handlers.len(), 1);

        let mut args = EventArgs::new();
        assert!(!handlers.invoke(&mut args));

        assert!(handlers.remove(b));
        assert!(handlers.is_empty());
    }

    #[test]
    fn test_handler_can_modify_list_while_running() {
        let handlers = Arc::new(EventHandlers::<EventArgs>::new());
        let inner = handlers.clone();
        handlers.add(move |_| {
            inner.add(|args| args.handle());
        });

        let mut args = EventArgs::new();
        assert!(!handlers.invoke(&mut args));
        assert_eq!(handlers.len(), 2);

        let mut args = EventArgs::new();
        assert!(handlers.invoke(&mut args));
    }

    #[test]
    fn test_clear() {
        let handlers = EventHandlers::<EventArgs>::new();
        handlers.add(|_| {});
        handlers.clear();
        assert!(handlers.is_empty());
    }

    #[test]
    fn test_removed_id_is_not_reissued() {
        let handlers = EventHandlers::<EventArgs>::new();
        let first = handlers.add(|_| {});
        assert!(handlers.remove(first));

        let second = handlers.add(|args| args.handle());
        assert_ne!(first, second);
        assert!(!handlers.remove(first));
        assert_eq!(handlers.len(), 1);

        let mut args = EventArgs::new();
        assert!(handlers.invoke(&mut args));
    }

    #[test]
    fn test_ids_unique_and_order_kept_after_removal() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let handlers = EventHandlers::<EventArgs>::new();
        let ids: Vec<_> = (0..4)
            .map(|n| {
                let order = order.clone();
                handlers.add(move |_| order.lock().push(n))
            })
            .collect();
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 4);

        assert!(handlers.remove(ids[1]));
        let order_clone = order.clone();
        handlers.add(move |_| order_clone.lock().push(9));

        handlers.invoke(&mut EventArgs::new());
        assert_eq!(*order.lock(), vec![0, 2, 3, 9]);
    }
}
