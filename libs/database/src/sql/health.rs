use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Round-trip to the database through the pool.
///
/// Backs the `/ready` endpoint: a failure means requests touching the
/// store would fail too.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running database health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}
