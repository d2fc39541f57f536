//! PostgreSQL-backed repositories.
//!
//! Each repository wraps a [`PgPool`] and maps rows back through the domain
//! constructors, so a row that no longer satisfies the entity's rules comes
//! back as [`RepositoryError::Corrupted`] instead of an invalid entity.

mod customer;
mod order;
mod product;

use std::fmt::Display;

use domain::{Entity, RepositoryError};
use sqlx::PgPool;

pub use customer::PostgresCustomerRepository;
pub use order::PostgresOrderRepository;
pub use product::PostgresProductRepository;

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> crate::Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

pub(crate) fn storage(err: impl std::error::Error + Send + Sync + 'static) -> RepositoryError {
    RepositoryError::Storage(Box::new(err))
}

/// Maps an insert failure, turning a primary-key clash into `AlreadyExists`.
pub(crate) fn insert_error<E: Entity>(err: sqlx::Error, id: &E::Id) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.is_unique_violation()
    {
        return RepositoryError::already_exists::<E>(id);
    }
    storage(err)
}

pub(crate) fn corrupted<E: Entity>(id: impl Display, reason: impl Display) -> RepositoryError {
    RepositoryError::Corrupted {
        entity: E::NAME,
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
