//! Repository contracts for persisting entities.
//!
//! Every entity type gets the same four operations. The traits are async and
//! object-safe so services can be generic over in-memory and database-backed
//! implementations alike.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::checkout::Order;
use crate::customer::Customer;
use crate::product::Product;

pub use memory::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    InMemoryRepository,
};

/// An entity that can be stored in a repository.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The identifier type.
    type Id: Clone + Eq + std::fmt::Display + Send + Sync;

    /// Entity name used in error messages (e.g. `"Customer"`).
    const NAME: &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> &Self::Id;
}

/// Errors that can occur when persisting or loading entities.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity with the given id exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An entity with the given id already exists.
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    /// A stored record could not be turned back into a valid entity.
    #[error("Corrupted {entity} record {id}: {reason}")]
    Corrupted {
        entity: &'static str,
        id: String,
        reason: String,
    },

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Builds a `NotFound` error for entity `E`.
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            entity: E::NAME,
            id: id.to_string(),
        }
    }

    /// Builds an `AlreadyExists` error for entity `E`.
    pub fn already_exists<E: Entity>(id: &E::Id) -> Self {
        Self::AlreadyExists {
            entity: E::NAME,
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Generic persistence contract.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Stores a new entity.
    async fn create(&self, entity: &E) -> Result<()>;

    /// Overwrites an existing entity.
    ///
    /// Fails with `NotFound` if the entity was never created.
    async fn update(&self, entity: &E) -> Result<()>;

    /// Loads an entity by id.
    async fn find(&self, id: &E::Id) -> Result<E>;

    /// Loads every entity, in creation order.
    async fn find_all(&self) -> Result<Vec<E>>;
}

/// Repository for customers.
pub trait CustomerRepository: Repository<Customer> {}

impl<R: Repository<Customer>> CustomerRepository for R {}

/// Repository for products.
pub trait ProductRepository: Repository<Product> {}

impl<R: Repository<Product>> ProductRepository for R {}

/// Repository for orders and their items.
pub trait OrderRepository: Repository<Order> {}

impl<R: Repository<Order>> OrderRepository for R {}
