//! Thread-safe handle over an [`EventDispatcher`].

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::dispatcher::{EventDispatcher, RegisteredHandler, dispatch};
use crate::event::{Event, EventData};
use crate::handler::{EventHandler, HandlerResult};

/// A cloneable, lock-protected dispatcher for use across threads.
///
/// Registration takes the write lock. `notify` copies the handler sequence
/// for the event's name under the read lock and invokes the copy after
/// releasing it, so handlers may register or unregister (affecting later
/// notifications) without deadlocking.
#[derive(Clone, Default, Debug)]
pub struct SharedEventDispatcher {
    inner: Arc<RwLock<EventDispatcher>>,
}

impl SharedEventDispatcher {
    /// Creates an empty shared dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`EventDispatcher::register`].
    pub fn register<T: EventData>(
        &self,
        event_name: impl Into<String>,
        handler: Arc<dyn EventHandler<T>>,
    ) {
        self.inner.write().register(event_name, handler);
    }

    /// See [`EventDispatcher::subscribe`].
    pub fn subscribe<T: EventData>(&self, handler: Arc<dyn EventHandler<T>>) {
        self.inner.write().subscribe(handler);
    }

    /// See [`EventDispatcher::unregister`].
    pub fn unregister<T: EventData>(&self, event_name: &str, handler: &Arc<dyn EventHandler<T>>) {
        self.inner.write().unregister(event_name, handler);
    }

    /// See [`EventDispatcher::unregister_all`].
    pub fn unregister_all(&self) {
        self.inner.write().unregister_all();
    }

    /// Returns a snapshot of the handlers registered under `event_name`.
    pub fn handlers_for(&self, event_name: &str) -> Vec<RegisteredHandler> {
        self.inner.read().handlers_for(event_name).to_vec()
    }

    /// Returns the number of handlers registered under `event_name`.
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.inner.read().handler_count(event_name)
    }

    /// Locks the dispatcher for reading.
    ///
    /// Holding the guard blocks registration; do not notify through the
    /// shared handle while holding it.
    pub fn read(&self) -> RwLockReadGuard<'_, EventDispatcher> {
        self.inner.read()
    }

    /// See [`EventDispatcher::notify`].
    pub fn notify<T: EventData>(&self, event: &Event<T>) -> HandlerResult {
        let handlers = self.handlers_for(event.name());
        dispatch(&handlers, event)
    }
}

impl From<EventDispatcher> for SharedEventDispatcher {
    fn from(dispatcher: EventDispatcher) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dispatcher)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Pinged;

    impl EventData for Pinged {
        const EVENT_NAME: &'static str = "PingedEvent";
    }

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl EventHandler<Pinged> for Counter {
        fn handle(&self, _event: &Event<Pinged>) -> HandlerResult {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Registers another counter each time it runs.
    struct SelfRegistering {
        dispatcher: SharedEventDispatcher,
        spawned: Arc<Counter>,
    }

    impl EventHandler<Pinged> for SelfRegistering {
        fn handle(&self, _event: &Event<Pinged>) -> HandlerResult {
            self.dispatcher.subscribe(self.spawned.clone() as Arc<dyn EventHandler<Pinged>>);
            Ok(())
        }
    }

    #[test]
    fn clones_share_one_registry() {
        let dispatcher = SharedEventDispatcher::new();
        let other = dispatcher.clone();
        let counter = Arc::new(Counter::default());

        other.subscribe(counter.clone() as Arc<dyn EventHandler<Pinged>>);
        dispatcher.notify(&Event::new(Pinged)).unwrap();

        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.handler_count("PingedEvent"), 1);
    }

    #[test]
    fn handler_may_register_during_notify() {
        let dispatcher = SharedEventDispatcher::new();
        let spawned = Arc::new(Counter::default());
        let handler: Arc<dyn EventHandler<Pinged>> = Arc::new(SelfRegistering {
            dispatcher: dispatcher.clone(),
            spawned: Arc::clone(&spawned),
        });
        dispatcher.subscribe(handler);

        dispatcher.notify(&Event::new(Pinged)).unwrap();
        // The handler added during the first notify only sees the second one.
        assert_eq!(spawned.0.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.handler_count("PingedEvent"), 2);

        dispatcher.notify(&Event::new(Pinged)).unwrap();
        assert_eq!(spawned.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn notify_from_many_threads() {
        let dispatcher = SharedEventDispatcher::new();
        let counter = Arc::new(Counter::default());
        dispatcher.subscribe(counter.clone() as Arc<dyn EventHandler<Pinged>>);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let dispatcher = dispatcher.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        dispatcher.notify(&Event::new(Pinged)).unwrap();
                    }
                });
            }
        });

        assert_eq!(counter.0.load(Ordering::SeqCst), 800);
    }

    #[test]
    fn wraps_a_configured_dispatcher() {
        let counter: Arc<dyn EventHandler<Pinged>> = Arc::new(Counter::default());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(Arc::clone(&counter));

        let shared = SharedEventDispatcher::from(dispatcher);
        assert!(shared.handlers_for("PingedEvent")[0].is(&counter));

        shared.unregister("PingedEvent", &counter);
        assert!(shared.read().handlers_for("PingedEvent").is_empty());
    }
}
