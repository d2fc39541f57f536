//! Customer entity, address value object, events and services.

mod address;
mod entity;
mod events;
mod handlers;
mod service;

pub use address::Address;
pub use entity::Customer;
pub use events::{ChangedAddress, CustomerCreated};
pub use handlers::{
    ChangedAddressLogHandler, CustomerCreatedFirstLogHandler, CustomerCreatedSecondLogHandler,
};
pub use service::CustomerService;

use thiserror::Error;

/// Validation errors for customers and their addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// Customer ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Customer name is required.
    #[error("Name is required")]
    NameRequired,

    /// A customer cannot be activated without an address.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    /// Address street is required.
    #[error("Street is required")]
    StreetRequired,

    /// Address number must be greater than zero.
    #[error("Number must be greater than 0")]
    NumberRequired,

    /// Address zip code is required.
    #[error("Zip is required")]
    ZipRequired,

    /// Address city is required.
    #[error("City is required")]
    CityRequired,
}
