use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an event ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload carried by an [`Event`].
///
/// Each payload type declares the name its events are dispatched under.
/// Handlers register interest in that name, not in the Rust type.
pub trait EventData: Send + Sync + 'static {
    /// The event-type name used as the dispatcher lookup key
    /// (e.g. `"CustomerCreatedEvent"`).
    const EVENT_NAME: &'static str;
}

/// An immutable event envelope.
///
/// The occurrence timestamp is captured when the event is constructed, not
/// when it is delivered. Fields are private; the envelope cannot be changed
/// once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event<T> {
    event_id: EventId,
    occurred_at: DateTime<Utc>,
    data: T,
}

impl<T: EventData> Event<T> {
    /// Creates an event stamped with the current time.
    pub fn new(data: T) -> Self {
        Self::occurred_at(data, Utc::now())
    }

    /// Creates an event with an explicit occurrence time.
    pub fn occurred_at(data: T, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: EventId::new(),
            occurred_at,
            data,
        }
    }

    /// Returns the event-type name this event is dispatched under.
    pub fn name(&self) -> &'static str {
        T::EVENT_NAME
    }
}

impl<T> Event<T> {
    /// Returns the unique identifier of this event.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns when the event occurred.
    pub fn date_time_occurred(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Returns the event payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the envelope, returning the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}
