//! Handlers reacting to customer events.

use event_dispatcher::{Event, EventHandler, HandlerResult};

use super::{ChangedAddress, CustomerCreated};

/// First logging handler for [`CustomerCreated`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerCreatedFirstLogHandler;

impl EventHandler<CustomerCreated> for CustomerCreatedFirstLogHandler {
    fn handle(&self, event: &Event<CustomerCreated>) -> HandlerResult {
        tracing::info!(
            customer_id = %event.data().customer_id,
            "This is the first console.log of the event: CustomerCreated"
        );
        Ok(())
    }
}

/// Second logging handler for [`CustomerCreated`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerCreatedSecondLogHandler;

impl EventHandler<CustomerCreated> for CustomerCreatedSecondLogHandler {
    fn handle(&self, event: &Event<CustomerCreated>) -> HandlerResult {
        tracing::info!(
            customer_id = %event.data().customer_id,
            "This is the second console.log of the event: CustomerCreated"
        );
        Ok(())
    }
}

/// Logs the new address of a customer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChangedAddressLogHandler;

impl EventHandler<ChangedAddress> for ChangedAddressLogHandler {
    fn handle(&self, event: &Event<ChangedAddress>) -> HandlerResult {
        let data = event.data();
        tracing::info!(
            occurred_at = %event.date_time_occurred(),
            "Customer address: {}, {} changed to: {}",
            data.id,
            data.name,
            data.address
        );
        Ok(())
    }
}
