//! Infrastructure for the e-commerce domain.
//!
//! - [`postgres`]: repository implementations backed by PostgreSQL (sqlx)
//! - [`config`]: environment-driven database and logging configuration
//! - [`telemetry`]: tracing subscriber setup

pub mod config;
pub mod error;
pub mod postgres;
pub mod telemetry;

pub use config::{Config, LogFormat};
pub use error::{InfrastructureError, Result};
pub use postgres::{
    PostgresCustomerRepository, PostgresOrderRepository, PostgresProductRepository,
    run_migrations,
};
pub use telemetry::init_tracing;
