//! Product catalogue operations.

use event_dispatcher::{Event, SharedEventDispatcher};

use super::{Product, ProductCreated};
use crate::error::DomainError;
use crate::repository::{ProductRepository, Repository};

/// Adds products to the catalogue and reprices them.
pub struct ProductService<R: ProductRepository> {
    repository: R,
    dispatcher: SharedEventDispatcher,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service over `repository` that publishes to `dispatcher`.
    pub fn new(repository: R, dispatcher: SharedEventDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Stores a product, then publishes `ProductCreatedEvent`.
    #[tracing::instrument(skip(self), fields(product_id = %product.id()))]
    pub async fn create(&self, product: Product) -> Result<Product, DomainError> {
        self.repository.create(&product).await?;

        let event = Event::new(ProductCreated {
            product_id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
        });
        self.dispatcher.notify(&event).map_err(DomainError::Handler)?;

        Ok(product)
    }

    /// Raises the price of every stored product by `percentage` percent.
    #[tracing::instrument(skip(self))]
    pub async fn increase_all_prices(&self, percentage: u32) -> Result<Vec<Product>, DomainError> {
        let mut products = self.repository.find_all().await?;
        increase_price(&mut products, percentage)?;

        for product in &products {
            self.repository.update(product).await?;
        }

        tracing::info!(count = products.len(), percentage, "product prices increased");
        Ok(products)
    }
}

/// Raises the price of each product by `percentage` percent.
pub fn increase_price(products: &mut [Product], percentage: u32) -> Result<(), DomainError> {
    for product in products.iter_mut() {
        let price = product.price().increased_by_percent(percentage);
        product.change_price(price)?;
    }
    Ok(())
}
