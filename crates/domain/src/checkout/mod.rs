//! Orders, order items and checkout.

mod order;
mod order_item;
mod service;

pub use order::Order;
pub use order_item::OrderItem;
pub use service::OrderService;

use thiserror::Error;

/// Validation errors for orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Order ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Customer ID is required.
    #[error("CustomerId is required")]
    CustomerIdRequired,

    /// An order needs at least one item.
    #[error("Items are required")]
    ItemsRequired,

    /// Every item needs a positive quantity.
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    /// Item prices cannot be negative.
    #[error("Price must be greater than or equal to zero")]
    NegativePrice,
}
