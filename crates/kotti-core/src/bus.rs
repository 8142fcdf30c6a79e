//! Typed listener registry for [`TouchEvent`]s.
//!
//! Listeners subscribe to one [`TouchEventKind`] (or to all of them) and are
//! invoked in subscription order. A publish works on the listener list as it
//! was when the publish started, so handlers may subscribe or unsubscribe
//! from inside a callback.

use crate::event::{TouchEvent, TouchEventKind};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Token returned by [`TouchEventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Handler = Rc<dyn Fn(&TouchEvent)>;

struct Listener {
    kind: Option<TouchEventKind>,
    handler: Handler,
}

#[derive(Default)]
pub struct TouchEventBus {
    listeners: RefCell<IndexMap<ListenerId, Listener, FxBuildHasher>>,
    next_id: Cell<u64>,
}

impl TouchEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of `kind`.
    pub fn subscribe(
        &self,
        kind: TouchEventKind,
        handler: impl Fn(&TouchEvent) + 'static,
    ) -> ListenerId {
        self.insert(Some(kind), Rc::new(handler))
    }

    /// Registers `handler` for every event kind.
    pub fn subscribe_all(&self, handler: impl Fn(&TouchEvent) + 'static) -> ListenerId {
        self.insert(None, Rc::new(handler))
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().shift_remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }

    pub fn publish(&self, event: &TouchEvent) {
        let kind = event.kind();
        let handlers: SmallVec<[Handler; 4]> = self
            .listeners
            .borrow()
            .values()
            .filter(|listener| listener.kind.map_or(true, |k| k == kind))
            .map(|listener| Rc::clone(&listener.handler))
            .collect();

        log::trace!("publishing {:?} to {} listener(s)", kind, handlers.len());
        for handler in handlers {
            handler(event);
        }
    }

    fn insert(&self, kind: Option<TouchEventKind>, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .insert(id, Listener { kind, handler });
        id
    }
}

impl std::fmt::Debug for TouchEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchEventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/bus_tests.rs"]
mod tests;
