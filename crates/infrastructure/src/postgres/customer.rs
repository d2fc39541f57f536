use async_trait::async_trait;
use common::CustomerId;
use domain::repository::Result;
use domain::{Address, Customer, Repository, RepositoryError};
use sqlx::{PgPool, Row, postgres::PgRow};

use super::{corrupted, insert_error, storage};

/// PostgreSQL-backed customer repository.
#[derive(Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

struct AddressColumns {
    street: Option<String>,
    number: Option<i64>,
    zipcode: Option<String>,
    city: Option<String>,
}

impl AddressColumns {
    fn from_address(address: Option<&Address>) -> Self {
        match address {
            Some(a) => Self {
                street: Some(a.street().to_string()),
                number: Some(i64::from(a.number())),
                zipcode: Some(a.zip().to_string()),
                city: Some(a.city().to_string()),
            },
            None => Self {
                street: None,
                number: None,
                zipcode: None,
                city: None,
            },
        }
    }
}

impl PostgresCustomerRepository {
    /// Creates a new repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_customer(row: PgRow) -> Result<Customer> {
        let id: String = row.try_get("id").map_err(storage)?;
        let name: String = row.try_get("name").map_err(storage)?;
        let active: bool = row.try_get("active").map_err(storage)?;
        let reward_points: i64 = row.try_get("reward_points").map_err(storage)?;
        let columns = AddressColumns {
            street: row.try_get("street").map_err(storage)?,
            number: row.try_get("number").map_err(storage)?,
            zipcode: row.try_get("zipcode").map_err(storage)?,
            city: row.try_get("city").map_err(storage)?,
        };

        let address = match columns {
            AddressColumns {
                street: Some(street),
                number: Some(number),
                zipcode: Some(zipcode),
                city: Some(city),
            } => {
                let number = u32::try_from(number)
                    .map_err(|e| corrupted::<Customer>(&id, e))?;
                let address = Address::new(street, number, zipcode, city)
                    .map_err(|e| corrupted::<Customer>(&id, e))?;
                Some(address)
            }
            AddressColumns {
                street: None,
                number: None,
                zipcode: None,
                city: None,
            } => None,
            _ => return Err(corrupted::<Customer>(&id, "partial address")),
        };

        let reward_points =
            u64::try_from(reward_points).map_err(|e| corrupted::<Customer>(&id, e))?;

        Customer::restore(
            CustomerId::new(id.clone()),
            name,
            address,
            active,
            reward_points,
        )
        .map_err(|e| corrupted::<Customer>(&id, e))
    }
}

#[async_trait]
impl Repository<Customer> for PostgresCustomerRepository {
    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn create(&self, customer: &Customer) -> Result<()> {
        let address = AddressColumns::from_address(customer.address());
        let reward_points = i64::try_from(customer.reward_points()).map_err(storage)?;

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(address.street)
        .bind(address.number)
        .bind(address.zipcode)
        .bind(address.city)
        .bind(customer.is_active())
        .bind(reward_points)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error::<Customer>(e, customer.id()))?;

        Ok(())
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn update(&self, customer: &Customer) -> Result<()> {
        let address = AddressColumns::from_address(customer.address());
        let reward_points = i64::try_from(customer.reward_points()).map_err(storage)?;

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, street = $3, number = $4, zipcode = $5, city = $6,
                active = $7, reward_points = $8
            WHERE id = $1
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(address.street)
        .bind(address.number)
        .bind(address.zipcode)
        .bind(address.city)
        .bind(customer.is_active())
        .bind(reward_points)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Customer>(customer.id()));
        }
        Ok(())
    }

    async fn find(&self, id: &CustomerId) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or_else(|| RepositoryError::not_found::<Customer>(id))?;

        Self::row_to_customer(row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        rows.into_iter().map(Self::row_to_customer).collect()
    }
}
