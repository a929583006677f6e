//! Session change notifications
//!
//! The store emits an event after every mutation. The navigation layer
//! subscribes to [`SessionEvent::Invalidated`] to send the user back to the
//! login screen, which keeps the HTTP layer free of routing concerns.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// What changed in the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    UserUpdated,
    LoggedOut,
    /// The server rejected the credential; the session has been cleared
    Invalidated,
}

type Listener = Rc<dyn Fn(&SessionEvent)>;
type Listeners = RefCell<Vec<(u64, Listener)>>;

/// Listener registry shared by clones of a session store
#[derive(Clone, Default)]
pub struct SessionEvents {
    listeners: Rc<Listeners>,
    next_id: Rc<Cell<u64>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the returned
    /// [`Subscription`] is dropped
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Notify every listener
    pub fn emit(&self, event: &SessionEvent) {
        // Snapshot first so listeners may subscribe or unsubscribe while running
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Keeps a listener registered; unsubscribes on drop
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_subscribers() {
        let events = SessionEvents::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = seen.clone();
            events.subscribe(move |event| seen.borrow_mut().push(event.clone()))
        };

        events.emit(&SessionEvent::LoggedIn);
        events.emit(&SessionEvent::Invalidated);

        assert_eq!(
            *seen.borrow(),
            vec![SessionEvent::LoggedIn, SessionEvent::Invalidated]
        );
    }

    #[test]
    fn test_drop_unsubscribes() {
        let events = SessionEvents::new();
        let count = Rc::new(Cell::new(0));

        let subscription = {
            let count = count.clone();
            events.subscribe(move |_| count.set(count.get() + 1))
        };
        events.emit(&SessionEvent::LoggedOut);
        drop(subscription);
        events.emit(&SessionEvent::LoggedOut);

        assert_eq!(count.get(), 1);
        assert_eq!(events.listener_count(), 0);
    }
}
