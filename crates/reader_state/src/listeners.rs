//! Change-notification registry used by the state containers.

use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Handle returned by [`Listeners::subscribe`].
pub struct SubscriptionId(u64);

/// Single-threaded list of callbacks invoked after each committed change.
pub struct Listeners<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Rc<dyn Fn(&T)>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Listeners<T> {
    /// Registers `callback`; it runs on every later [`Listeners::notify`].
    pub fn subscribe(&mut self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Rc::new(callback)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Calls every listener in subscription order.
    pub fn notify(&self, value: &T) {
        for (_, callback) in &self.entries {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn notify_runs_listeners_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::<u32>::default();
        let first = Rc::clone(&seen);
        listeners.subscribe(move |v| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&seen);
        listeners.subscribe(move |v| second.borrow_mut().push(("second", *v)));

        listeners.notify(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe_removes_only_the_given_listener() {
        let calls = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::<()>::default();
        let counter = Rc::clone(&calls);
        let kept = listeners.subscribe(move |_| *counter.borrow_mut() += 1);
        let dropped = listeners.subscribe(|_| panic!("unsubscribed listener called"));

        assert!(listeners.unsubscribe(dropped));
        assert!(!listeners.unsubscribe(dropped));
        listeners.notify(&());

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(listeners.len(), 1);
        assert!(listeners.unsubscribe(kept));
        assert!(listeners.is_empty());
    }
}
