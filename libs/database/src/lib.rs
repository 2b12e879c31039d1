//! Relational database plumbing shared by the catalog services.
//!
//! - [`sql`]: pool configuration, connect with retry, schema bootstrap and
//!   health checks over sea-orm (SQLite by default, Postgres by URL)
//! - [`common`]: error type and retry helpers
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::sql::{self, SqlConfig};
//!
//! let config = SqlConfig::from_env()?;
//! let db = sql::connect_with_retry(&config, None).await?;
//! sql::create_table_if_missing(&db, product::Entity).await?;
//! ```

pub mod common;
pub mod sql;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
