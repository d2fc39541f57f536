//! Product entity, events and services.

mod entity;
mod events;
mod handlers;
mod service;

pub use entity::Product;
pub use events::ProductCreated;
pub use handlers::ProductCreatedEmailHandler;
pub use service::{ProductService, increase_price};

use thiserror::Error;

/// Validation errors for products.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Product ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Product name is required.
    #[error("Name is required")]
    NameRequired,

    /// Product price cannot be negative.
    #[error("Price must be greater than or equal to zero")]
    NegativePrice,
}
