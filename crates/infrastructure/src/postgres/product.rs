use async_trait::async_trait;
use common::ProductId;
use domain::repository::Result;
use domain::{Money, Product, Repository, RepositoryError};
use sqlx::{PgPool, Row, postgres::PgRow};

use super::{corrupted, insert_error, storage};

/// PostgreSQL-backed product repository.
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_product(row: PgRow) -> Result<Product> {
        let id: String = row.try_get("id").map_err(storage)?;
        let name: String = row.try_get("name").map_err(storage)?;
        let price_cents: i64 = row.try_get("price_cents").map_err(storage)?;

        Product::new(id.clone(), name, Money::from_cents(price_cents))
            .map_err(|e| corrupted::<Product>(&id, e))
    }
}

#[async_trait]
impl Repository<Product> for PostgresProductRepository {
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn create(&self, product: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price_cents) VALUES ($1, $2, $3)")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.price().cents())
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error::<Product>(e, product.id()))?;
        Ok(())
    }

    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn update(&self, product: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = $2, price_cents = $3 WHERE id = $1")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.price().cents())
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Product>(product.id()));
        }
        Ok(())
    }

    async fn find(&self, id: &ProductId) -> Result<Product> {
        let row = sqlx::query("SELECT id, name, price_cents FROM products WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::not_found::<Product>(id))?;

        Self::row_to_product(row)
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price_cents FROM products ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.into_iter().map(Self::row_to_product).collect()
    }
}
