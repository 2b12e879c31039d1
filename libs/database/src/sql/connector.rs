use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName, EntityTrait, Schema,
};
use tracing::info;

use super::SqlConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a pool with the settings in `config`.
pub async fn connect(config: &SqlConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.connect_options()).await?;

    info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        "Connected to database"
    );

    Ok(db)
}

/// [`connect`] with exponential backoff, for startup against a database
/// that may still be coming up.
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_with_retry(
    config: &SqlConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry_config = retry_config.unwrap_or_default();
    let attempts = retry_config.max_retries + 1;

    retry_with_backoff(|| connect(config), retry_config)
        .await
        .map_err(|e| {
            DatabaseError::ConnectionFailed(format!("{} after {} attempt(s)", e, attempts))
        })
}

/// Issue `CREATE TABLE IF NOT EXISTS` for `entity`, derived from its model.
///
/// Column constraints (primary key, auto increment, unique, nullability)
/// come from the entity definition. This is a bootstrap step, not a
/// migration: an existing table is left as it is.
pub async fn create_table_if_missing<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;

    info!(table = entity.table_name(), "Schema ready");
    Ok(())
}

/// Close the pool, logging instead of failing.
///
/// Used from the shutdown path where there is nobody left to report to.
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("Database connections closed"),
        Err(e) => tracing::warn!("Error while closing database connections: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::entity::prelude::*;
    use sea_orm::{ActiveValue::Set, QueryOrder};

    mod widget {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "widgets")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            #[sea_orm(unique)]
            pub label: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn memory_config() -> SqlConfig {
        SqlConfig::new("sqlite::memory:").with_pool_size(1, 1)
    }

    #[tokio::test]
    async fn test_connect_and_bootstrap_in_memory() {
        let db = connect(&memory_config()).await.unwrap();
        create_table_if_missing(&db, widget::Entity).await.unwrap();
        // second run is a no-op
        create_table_if_missing(&db, widget::Entity).await.unwrap();

        widget::ActiveModel {
            label: Set("first".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let rows = widget::Entity::find()
            .order_by_asc(widget::Column::Id)
            .all(&db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "first");
    }

    #[tokio::test]
    async fn test_bootstrapped_unique_column_is_enforced() {
        let db = connect(&memory_config()).await.unwrap();
        create_table_if_missing(&db, widget::Entity).await.unwrap();

        let insert = |label: &str| widget::ActiveModel {
            label: Set(label.to_string()),
            ..Default::default()
        };

        insert("dup").insert(&db).await.unwrap();
        let err = insert("dup").insert(&db).await.unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_connect_with_retry_reports_attempts() {
        let mut config = SqlConfig::new("sqlite:///definitely/missing/dir/db.sqlite?mode=ro");
        config.connect_timeout_secs = 1;
        config.acquire_timeout_secs = 1;
        let retry = RetryConfig::new()
            .with_max_retries(1)
            .with_initial_delay(1)
            .without_jitter();

        let err = connect_with_retry(&config, Some(retry)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConnectionFailed(_)));
        assert!(err.to_string().contains("2 attempt(s)"));
    }

    #[tokio::test]
    async fn test_close_consumes_pool() {
        let db = connect(&memory_config()).await.unwrap();
        close(db).await;
    }
}
