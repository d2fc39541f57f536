//! Domain error types.

use event_dispatcher::HandlerError;
use thiserror::Error;

use crate::checkout::OrderError;
use crate::customer::CustomerError;
use crate::product::ProductError;
use crate::repository::RepositoryError;

/// Errors that can occur during domain service operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A customer failed validation.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// A product failed validation.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An order failed validation.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The repository failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// An event handler failed after the change was persisted.
    #[error("Event handler failed: {0}")]
    Handler(#[source] HandlerError),
}
