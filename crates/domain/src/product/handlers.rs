use event_dispatcher::{Event, EventHandler, HandlerResult};

use super::ProductCreated;

/// Sends the "new product" e-mail. Delivery is a log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductCreatedEmailHandler;

impl EventHandler<ProductCreated> for ProductCreatedEmailHandler {
    fn handle(&self, event: &Event<ProductCreated>) -> HandlerResult {
        let data = event.data();
        tracing::info!(
            product_id = %data.product_id,
            price = %data.price,
            "Sending email to subscribers: product {} created",
            data.name
        );
        Ok(())
    }
}
