//! Change notification for view-model state holders.
//!
//! The UI layer subscribes a callback and receives the name of each piece
//! of state that changed; how those names map onto widgets is the UI's
//! business. This replaces framework-level property-changed binding with
//! an explicit subscription mechanism.

type Callback = Box<dyn Fn(&str) + Send>;

pub type Subscription = usize;

#[derive(Default)]
pub struct ChangeNotifier {
    next_id: usize,
    subscribers: Vec<(Subscription, Callback)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked with the name of every state change.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(id, _)| *id != subscription);
    }

    pub fn notify(&self, state: &str) {
        for (_, callback) in &self.subscribers {
            callback(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn subscribers_receive_state_names() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let sink = Arc::clone(&seen);
        notifier.subscribe(move |state| sink.lock().unwrap().push(state.to_string()));

        notifier.notify("books");
        notifier.notify("is_loading");

        assert_eq!(*seen.lock().unwrap(), vec!["books", "is_loading"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let seen = Arc::new(Mutex::new(0u32));
        let mut notifier = ChangeNotifier::new();

        let sink = Arc::clone(&seen);
        let sub = notifier.subscribe(move |_| *sink.lock().unwrap() += 1);

        notifier.notify("books");
        notifier.unsubscribe(sub);
        notifier.notify("books");

        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
