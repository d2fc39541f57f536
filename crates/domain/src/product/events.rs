use common::ProductId;
use event_dispatcher::EventData;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A product was added to the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
}

impl EventData for ProductCreated {
    const EVENT_NAME: &'static str = "ProductCreatedEvent";
}
