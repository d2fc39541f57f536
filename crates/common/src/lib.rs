//! Shared identifier types for the e-commerce domain.

pub mod types;

pub use types::{CustomerId, OrderId, OrderItemId, ProductId};
