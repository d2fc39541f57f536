//! In-memory repositories.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Entity, Repository, RepositoryError, Result};
use crate::checkout::Order;
use crate::customer::Customer;
use crate::product::Product;

/// In-memory repository for any [`Entity`].
///
/// Entities are kept in insertion order. Clones share the same storage.
#[derive(Clone)]
pub struct InMemoryRepository<E> {
    entities: Arc<RwLock<Vec<E>>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }

    /// Removes every stored entity.
    pub async fn clear(&self) {
        self.entities.write().await.clear();
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn create(&self, entity: &E) -> Result<()> {
        let mut entities = self.entities.write().await;
        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(RepositoryError::already_exists::<E>(entity.id()));
        }
        entities.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<()> {
        let mut entities = self.entities.write().await;
        let slot = entities
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or_else(|| RepositoryError::not_found::<E>(entity.id()))?;
        *slot = entity.clone();
        Ok(())
    }

    async fn find(&self, id: &E::Id) -> Result<E> {
        self.entities
            .read()
            .await
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found::<E>(id))
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.entities.read().await.clone())
    }
}

/// In-memory customer repository.
pub type InMemoryCustomerRepository = InMemoryRepository<Customer>;

/// In-memory product repository.
pub type InMemoryProductRepository = InMemoryRepository<Product>;

/// In-memory order repository.
pub type InMemoryOrderRepository = InMemoryRepository<Order>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use common::{CustomerId, ProductId};

    fn product(id: &str, name: &str, dollars: i64) -> Product {
        Product::new(ProductId::new(id), name, Money::from_dollars(dollars)).unwrap()
    }

    #[tokio::test]
    async fn create_then_find() {
        let repo = InMemoryProductRepository::new();
        let p = product("1", "Product 1", 100);

        repo.create(&p).await.unwrap();

        assert_eq!(repo.find(&ProductId::new("1")).await.unwrap(), p);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_ids() {
        let repo = InMemoryProductRepository::new();
        repo.create(&product("1", "Product 1", 100)).await.unwrap();

        let err = repo
            .create(&product("1", "Other", 5))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists { entity: "Product", .. }));
    }

    #[tokio::test]
    async fn update_overwrites_existing() {
        let repo = InMemoryProductRepository::new();
        let mut p = product("1", "Product 1", 100);
        repo.create(&p).await.unwrap();

        p.change_name("Product 2").unwrap();
        p.change_price(Money::from_dollars(200)).unwrap();
        repo.update(&p).await.unwrap();

        let found = repo.find(p.id()).await.unwrap();
        assert_eq!(found.name(), "Product 2");
        assert_eq!(found.price(), Money::from_dollars(200));
    }

    #[tokio::test]
    async fn update_of_unknown_entity_fails() {
        let repo = InMemoryProductRepository::new();

        let err = repo.update(&product("9", "Ghost", 1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn find_missing_customer_reports_not_found() {
        let repo = InMemoryCustomerRepository::new();

        let err = repo.find(&CustomerId::new("456ABC")).await.unwrap_err();
        assert_eq!(err.to_string(), "Customer not found: 456ABC");
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryProductRepository::new();
        let p1 = product("2", "Product 2", 20);
        let p2 = product("1", "Product 1", 10);
        repo.create(&p1).await.unwrap();
        repo.create(&p2).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![p1, p2]);

        repo.clear().await;
        assert!(repo.is_empty().await);
    }
}
