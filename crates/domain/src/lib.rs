//! Domain layer for the e-commerce model.
//!
//! This crate provides:
//! - Customer, Address, Product, Order and OrderItem with their validation rules
//! - Domain events (`CustomerCreatedEvent`, `ChangedAddressEvent`,
//!   `ProductCreatedEvent`) and the handlers that react to them
//! - Repository contracts with in-memory implementations
//! - Services that persist changes and publish events through the dispatcher

pub mod checkout;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod repository;

pub use checkout::{Order, OrderError, OrderItem, OrderService};
pub use customer::{
    Address, ChangedAddress, ChangedAddressLogHandler, Customer, CustomerCreated,
    CustomerCreatedFirstLogHandler, CustomerCreatedSecondLogHandler, CustomerError,
    CustomerService,
};
pub use error::DomainError;
pub use money::Money;
pub use product::{
    Product, ProductCreated, ProductCreatedEmailHandler, ProductError, ProductService,
    increase_price,
};
pub use repository::{
    CustomerRepository, Entity, InMemoryCustomerRepository, InMemoryOrderRepository,
    InMemoryProductRepository, InMemoryRepository, OrderRepository, ProductRepository, Repository,
    RepositoryError,
};
