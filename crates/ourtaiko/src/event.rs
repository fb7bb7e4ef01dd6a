//! Named-event publish/subscribe.
//!
//! Callbacks take no payload and run synchronously, in registration order, on
//! the emitting thread. A panicking callback aborts the remaining ones.

use std::collections::HashMap;

/// The songs database finished loading (successfully or not).
pub const SONGS_LOADED: &str = "songs-loaded";
/// The active locale changed.
pub const LOCALE_CHANGED: &str = "locale-changed";
/// The user dismissed the current announcements.
pub const ANNOUNCEMENTS_DISMISSED: &str = "announcements-dismissed";

/// Handle returned by [`EventBus::on`], used to remove the callback again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn Fn()>;

#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<(ListenerId, Callback)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under `event`.
    pub fn on<F>(&mut self, event: &str, callback: F) -> ListenerId
    where
        F: Fn() + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event.to_string())
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Unknown events or ids are ignored.
    pub fn off(&mut self, event: &str, id: ListenerId) {
        let Some(callbacks) = self.listeners.get_mut(event) else {
            return;
        };
        callbacks.retain(|(listener, _)| *listener != id);
        if callbacks.is_empty() {
            self.listeners.remove(event);
        }
    }

    /// Invoke every callback registered under `event`.
    pub fn emit(&self, event: &str) {
        let Some(callbacks) = self.listeners.get(event) else {
            return;
        };
        for (_, callback) in callbacks {
            callback();
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(event, callbacks)| (event.as_str(), callbacks.len()))
            .collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_emit_invokes_callback_once() {
        let mut bus = EventBus::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        bus.on("refresh", move || counter.set(counter.get() + 1));

        bus.emit("refresh");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_off_prevents_invocation() {
        let mut bus = EventBus::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = bus.on("refresh", move || counter.set(counter.get() + 1));

        bus.off("refresh", id);
        bus.emit("refresh");
        assert_eq!(calls.get(), 0);
        assert_eq!(bus.listener_count("refresh"), 0);
    }

    #[test]
    fn test_registration_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = Rc::clone(&order);
            bus.on("tick", move || order.borrow_mut().push(n));
        }

        bus.emit("tick");
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_off_removes_only_that_callback() {
        let mut bus = EventBus::new();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&hits);
        let first = bus.on("tick", move || a.borrow_mut().push("a"));
        let b = Rc::clone(&hits);
        bus.on("tick", move || b.borrow_mut().push("b"));

        bus.off("tick", first);
        bus.off("unknown", first);
        bus.emit("tick");
        bus.emit("other");
        assert_eq!(*hits.borrow(), vec!["b"]);
    }
}
