use std::collections::HashMap;

use async_trait::async_trait;
use common::OrderId;
use domain::repository::Result;
use domain::{Money, Order, OrderItem, Repository, RepositoryError};
use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};

use super::{corrupted, insert_error, storage};

/// PostgreSQL-backed order repository.
///
/// An order and its items are written in one transaction. Updating an order
/// replaces its whole item set.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn insert_items(tx: &mut Transaction<'_, Postgres>, order: &Order) -> Result<()> {
        for (position, item) in order.items().iter().enumerate() {
            let position = i32::try_from(position).map_err(storage)?;
            let quantity = i32::try_from(item.quantity()).map_err(storage)?;

            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, name, price_cents, quantity, position)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(item.id().as_str())
            .bind(order.id().as_str())
            .bind(item.product_id().as_str())
            .bind(item.name())
            .bind(item.price().cents())
            .bind(quantity)
            .bind(position)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        }
        Ok(())
    }

    fn row_to_item(order_id: &str, row: &PgRow) -> Result<OrderItem> {
        let id: String = row.try_get("id").map_err(storage)?;
        let product_id: String = row.try_get("product_id").map_err(storage)?;
        let name: String = row.try_get("name").map_err(storage)?;
        let price_cents: i64 = row.try_get("price_cents").map_err(storage)?;
        let quantity: i32 = row.try_get("quantity").map_err(storage)?;
        let quantity = u32::try_from(quantity).map_err(|e| corrupted::<Order>(order_id, e))?;

        Ok(OrderItem::new(
            id,
            name,
            Money::from_cents(price_cents),
            product_id,
            quantity,
        ))
    }

    fn assemble(id: String, customer_id: String, items: Vec<OrderItem>) -> Result<Order> {
        Order::new(id.clone(), customer_id, items).map_err(|e| corrupted::<Order>(&id, e))
    }
}

#[async_trait]
impl Repository<Order> for PostgresOrderRepository {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn create(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        sqlx::query("INSERT INTO orders (id, customer_id, total_cents) VALUES ($1, $2, $3)")
            .bind(order.id().as_str())
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .execute(&mut *tx)
            .await
            .map_err(|e| insert_error::<Order>(e, order.id()))?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await.map_err(storage)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn update(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let result =
            sqlx::query("UPDATE orders SET customer_id = $2, total_cents = $3 WHERE id = $1")
                .bind(order.id().as_str())
                .bind(order.customer_id().as_str())
                .bind(order.total().cents())
                .execute(&mut *tx)
                .await
                .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Order>(order.id()));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await.map_err(storage)?;
        Ok(())
    }

    async fn find(&self, id: &OrderId) -> Result<Order> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::not_found::<Order>(id))?;

        let customer_id: String = row.try_get("customer_id").map_err(storage)?;

        let item_rows = sqlx::query(
            r#"
            SELECT id, product_id, name, price_cents, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        let items = item_rows
            .iter()
            .map(|row| Self::row_to_item(id.as_str(), row))
            .collect::<Result<Vec<_>>>()?;

        Self::assemble(id.to_string(), customer_id, items)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let order_rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        if order_rows.is_empty() {
            return Ok(Vec::new());
        }

        let item_rows = sqlx::query(
            r#"
            SELECT order_id, id, product_id, name, price_cents, quantity
            FROM order_items
            ORDER BY order_id, position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in &item_rows {
            let order_id: String = row.try_get("order_id").map_err(storage)?;
            let item = Self::row_to_item(&order_id, row)?;
            items_by_order.entry(order_id).or_default().push(item);
        }

        order_rows
            .into_iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(storage)?;
                let customer_id: String = row.try_get("customer_id").map_err(storage)?;
                let items = items_by_order.remove(&id).unwrap_or_default();
                Self::assemble(id, customer_id, items)
            })
            .collect()
    }
}
