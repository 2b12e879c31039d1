//! In-memory SQLite test infrastructure
//!
//! Every `TestDatabase` is a private database that lives as long as its
//! pool. The pool is pinned to a single connection because each SQLite
//! `:memory:` connection sees its own database.

use database::sql::{self, SqlConfig};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Empty in-memory database.
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// # }
    /// ```
    pub async fn new() -> Self {
        let config = SqlConfig::new("sqlite::memory:").with_pool_size(1, 1);

        let connection = sql::connect(&config)
            .await
            .expect("Failed to open in-memory SQLite database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// In-memory database with the table for `entity` already created.
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example<E: sea_orm::EntityTrait + Default>() {
    /// let db = TestDatabase::with_entity(E::default()).await;
    /// let repo_connection = db.connection();
    /// # }
    /// ```
    pub async fn with_entity<E>(entity: E) -> Self
    where
        E: EntityTrait,
    {
        let db = Self::new().await;
        sql::create_table_if_missing(&db.connection, entity)
            .await
            .expect("Failed to create test table");
        db
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
