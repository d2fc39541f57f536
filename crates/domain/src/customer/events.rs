//! Customer domain events.

use common::CustomerId;
use event_dispatcher::EventData;
use serde::{Deserialize, Serialize};

/// A customer signed up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    /// The new customer's ID.
    pub customer_id: CustomerId,

    /// Customer name.
    pub name: String,

    /// Login handle chosen at sign-up (e.g. `"@allysonreis"`).
    pub user_login: String,
}

impl EventData for CustomerCreated {
    const EVENT_NAME: &'static str = "CustomerCreatedEvent";
}

/// A customer's address was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedAddress {
    /// The customer whose address changed.
    pub id: CustomerId,

    /// Customer name.
    pub name: String,

    /// The new address, formatted for display.
    pub address: String,
}

impl EventData for ChangedAddress {
    const EVENT_NAME: &'static str = "ChangedAddressEvent";
}
