//! Event handler contract.

use crate::event::{Event, EventData};

/// Error raised by a handler.
///
/// The dispatcher never wraps or inspects it; it reaches the `notify` caller
/// exactly as the handler returned it.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for handler invocations.
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// A unit of behaviour invoked with events of one payload type.
///
/// Handlers are side-effecting (logging, downstream calls). They are shared
/// with the dispatcher through an `Arc`, so the same instance can be
/// registered under several names or with several dispatchers.
pub trait EventHandler<T: EventData>: Send + Sync {
    /// Handles a single event.
    fn handle(&self, event: &Event<T>) -> HandlerResult;
}

/// Adapts a closure into an [`EventHandler`].
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F> {
    /// Wraps the closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> EventHandler<T> for FnHandler<F>
where
    T: EventData,
    F: Fn(&Event<T>) -> HandlerResult + Send + Sync,
{
    fn handle(&self, event: &Event<T>) -> HandlerResult {
        (self.f)(event)
    }
}
