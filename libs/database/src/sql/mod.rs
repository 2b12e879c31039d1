//! SQL connector over sea-orm.
//!
//! Pool configuration, connection with retry, entity-driven schema
//! bootstrap and health checks.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE_URL, SqlConfig};
pub use connector::{close, connect, connect_with_retry, create_table_if_missing};
pub use health::check_health;

pub use sea_orm::{DatabaseConnection, DbErr};
