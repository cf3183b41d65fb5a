use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

// StatusListener receives plain-text status messages emitted when copies of
// a book are lent or returned. Delivery is synchronous and fire-and-forget;
// listeners never influence the outcome of the operation that notified them.
pub trait StatusListener: Sync + Send {
    fn update(&self, message: &str);
}

// ListenerSet holds the listeners registered on a book or member and
// notifies them in registration order.
#[derive(Default, Clone)]
pub struct ListenerSet {
    listeners: Vec<Arc<dyn StatusListener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        ListenerSet { listeners: Vec::new() }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn StatusListener>) {
        self.listeners.push(listener);
    }

    // Removes a previously registered listener, matched by pointer identity.
    pub fn unsubscribe(&mut self, listener: &Arc<dyn StatusListener>) {
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
    }

    pub fn notify(&self, message: &str) {
        for listener in &self.listeners {
            listener.update(message);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Debug for ListenerSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerSet[{}]", self.listeners.len())
    }
}

// LoggingListener forwards every status message to the tracing log,
// prefixed with the name it was registered under.
pub struct LoggingListener {
    name: String,
}

impl LoggingListener {
    pub fn new(name: &str) -> Self {
        LoggingListener { name: name.to_string() }
    }
}

impl StatusListener for LoggingListener {
    fn update(&self, message: &str) {
        tracing::info!("Notification to {}: {}", self.name.as_str(), message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use crate::core::events::{ListenerSet, LoggingListener, StatusListener};

    struct RecordingListener {
        messages: Mutex<Vec<String>>,
        tag: String,
    }

    impl RecordingListener {
        fn new(tag: &str) -> Self {
            RecordingListener { messages: Mutex::new(Vec::new()), tag: tag.to_string() }
        }
    }

    impl StatusListener for RecordingListener {
        fn update(&self, message: &str) {
            self.messages.lock().unwrap().push(format!("{}:{}", self.tag, message));
        }
    }

    #[test]
    fn test_should_notify_in_registration_order() {
        let shared = Arc::new(RecordingListener::new("first"));
        let second = Arc::new(RecordingListener::new("second"));
        let mut listeners = ListenerSet::new();
        listeners.subscribe(shared.clone());
        listeners.subscribe(second.clone());
        listeners.notify("Book lent: 1984");
        assert_eq!(vec!["first:Book lent: 1984".to_string()],
                   shared.messages.lock().unwrap().clone());
        assert_eq!(vec!["second:Book lent: 1984".to_string()],
                   second.messages.lock().unwrap().clone());
    }

    #[test]
    fn test_should_unsubscribe_listener() {
        let listener = Arc::new(RecordingListener::new("only"));
        let as_dyn: Arc<dyn StatusListener> = listener.clone();
        let mut listeners = ListenerSet::new();
        listeners.subscribe(as_dyn.clone());
        assert_eq!(1, listeners.len());
        listeners.unsubscribe(&as_dyn);
        assert!(listeners.is_empty());
        listeners.notify("Book returned: 1984");
        assert!(listener.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_should_build_logging_listener() {
        let listener = LoggingListener::new("Library Staff");
        listener.update("Book lent: 1984");
    }
}
