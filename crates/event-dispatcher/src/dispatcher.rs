//! Name-keyed registry and synchronous fan-out.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::event::{Event, EventData};
use crate::handler::{EventHandler, HandlerResult};

/// A handler entry in the dispatcher's registry.
///
/// Entries are type-erased so handlers for different payload types can share
/// one map. Identity is the address of the registered `Arc` allocation, so two
/// entries are the same handler only if they were registered from clones of
/// the same `Arc`.
#[derive(Clone)]
pub struct RegisteredHandler {
    key: usize,
    payload_type: TypeId,
    payload_type_name: &'static str,
    // Holds an `Arc<dyn EventHandler<T>>` for the registered `T`.
    handler: Arc<dyn Any + Send + Sync>,
}

impl RegisteredHandler {
    fn new<T: EventData>(handler: Arc<dyn EventHandler<T>>) -> Self {
        Self {
            key: identity(&handler),
            payload_type: TypeId::of::<T>(),
            payload_type_name: std::any::type_name::<T>(),
            handler: Arc::new(handler),
        }
    }

    /// Returns true if this entry was registered from `handler`.
    pub fn is<T: EventData>(&self, handler: &Arc<dyn EventHandler<T>>) -> bool {
        self.key == identity(handler)
    }

    /// Returns true if this entry accepts events carrying `T`.
    pub fn accepts<T: EventData>(&self) -> bool {
        self.payload_type == TypeId::of::<T>()
    }

    /// Returns the Rust type name of the payload this handler accepts.
    pub fn payload_type_name(&self) -> &'static str {
        self.payload_type_name
    }

    fn invoke<T: EventData>(&self, event: &Event<T>) -> HandlerResult {
        match self.handler.downcast_ref::<Arc<dyn EventHandler<T>>>() {
            Some(handler) => handler.handle(event),
            None => {
                tracing::warn!(
                    event_name = event.name(),
                    expected = self.payload_type_name,
                    actual = std::any::type_name::<T>(),
                    "skipping handler registered for a different payload type"
                );
                Ok(())
            }
        }
    }
}

impl fmt::Debug for RegisteredHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredHandler")
            .field("key", &format_args!("{:#x}", self.key))
            .field("payload_type", &self.payload_type_name)
            .finish()
    }
}

fn identity<T: EventData>(handler: &Arc<dyn EventHandler<T>>) -> usize {
    Arc::as_ptr(handler) as *const () as usize
}

/// Invokes `handlers` in order, stopping at the first failure.
pub(crate) fn dispatch<T: EventData>(
    handlers: &[RegisteredHandler],
    event: &Event<T>,
) -> HandlerResult {
    if handlers.is_empty() {
        tracing::trace!(event_name = event.name(), "no handlers registered");
        return Ok(());
    }

    metrics::counter!("events_dispatched_total", "event" => event.name()).increment(1);

    for handler in handlers {
        handler.invoke(event)?;
    }
    Ok(())
}

/// Routes events to the handlers registered under their name.
///
/// The dispatcher owns its handler map. Mutation goes through `&mut self`
/// and notification through `&self`; for shared, multi-threaded use see
/// [`SharedEventDispatcher`](crate::SharedEventDispatcher).
///
/// Registration performs no validation and no deduplication: registering the
/// same handler twice under one name invokes it twice per notification.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<RegisteredHandler>>,
}

impl EventDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live handler map, keyed by event name.
    pub fn event_handlers(&self) -> &HashMap<String, Vec<RegisteredHandler>> {
        &self.handlers
    }

    /// Returns the handlers registered under `event_name`, in registration order.
    ///
    /// Unknown names yield an empty slice.
    pub fn handlers_for(&self, event_name: &str) -> &[RegisteredHandler] {
        self.handlers
            .get(event_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of handlers registered under `event_name`.
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers_for(event_name).len()
    }

    /// Returns true if no handler is registered under any name.
    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }

    /// Appends `handler` to the sequence for `event_name`.
    pub fn register<T: EventData>(
        &mut self,
        event_name: impl Into<String>,
        handler: Arc<dyn EventHandler<T>>,
    ) {
        let event_name = event_name.into();
        let entry = RegisteredHandler::new(handler);

        tracing::debug!(
            event_name = %event_name,
            payload_type = entry.payload_type_name,
            "registered event handler"
        );

        self.handlers.entry(event_name).or_default().push(entry);
    }

    /// Registers `handler` under its payload's declared event name.
    pub fn subscribe<T: EventData>(&mut self, handler: Arc<dyn EventHandler<T>>) {
        self.register(T::EVENT_NAME, handler);
    }

    /// Removes the first occurrence of `handler` from the sequence for
    /// `event_name`. Unknown names and handlers are ignored.
    pub fn unregister<T: EventData>(
        &mut self,
        event_name: &str,
        handler: &Arc<dyn EventHandler<T>>,
    ) {
        let Some(handlers) = self.handlers.get_mut(event_name) else {
            return;
        };

        if let Some(index) = handlers.iter().position(|entry| entry.is(handler)) {
            handlers.remove(index);
            tracing::debug!(event_name, "unregistered event handler");
        }
    }

    /// Removes every handler under every name.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
        tracing::debug!("unregistered all event handlers");
    }

    /// Invokes every handler registered under `event.name()`, in order.
    ///
    /// The first handler error is returned unchanged and the remaining
    /// handlers are not invoked. An event with no registered handlers is a
    /// no-op.
    pub fn notify<T: EventData>(&self, event: &Event<T>) -> HandlerResult {
        dispatch(self.handlers_for(event.name()), event)
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers)
            .finish()
    }
}
