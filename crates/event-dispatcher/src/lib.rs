//! Synchronous, in-process domain event dispatch.
//!
//! This crate provides:
//! - [`Event`] envelopes carrying an occurrence time and a typed payload
//! - [`EventHandler`], the capability invoked for each event
//! - [`EventDispatcher`], a registry of handlers keyed by event name with
//!   in-order, fail-fast fan-out
//! - [`SharedEventDispatcher`], a lock-protected handle for multi-threaded use

pub mod dispatcher;
pub mod event;
pub mod handler;
pub mod shared;

pub use dispatcher::{EventDispatcher, RegisteredHandler};
pub use event::{Event, EventData, EventId};
pub use handler::{EventHandler, FnHandler, HandlerError, HandlerResult};
pub use shared::SharedEventDispatcher;
