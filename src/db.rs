//! Database connection pool management.
//!
//! The pool is shared by every in-flight request; sqlx hands each query its
//! own connection, so no further locking is needed in the service.

use sqlx::{Connection, Pool, Postgres};

use crate::{config::DatabaseSettings, error::AppError};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a PostgreSQL connection pool and make sure the backend answers.
///
/// The pool opens one connection eagerly and pings it before returning, so
/// an unreachable or misconfigured backend is reported here rather than on
/// the first request.
///
/// # Configuration
///
/// - Maximum connections: `settings.max_connections`
/// - Checkout deadline: `settings.acquire_timeout`; a request waiting longer
///   than this for a connection fails instead of blocking forever
///
/// # Errors
///
/// `AppError::Connection` if the connection string is invalid, the server
/// cannot be reached, authentication fails or the ping fails.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DbPool, AppError> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.url)
        .await
        .map_err(AppError::Connection)?;

    let mut conn = pool.acquire().await.map_err(AppError::Connection)?;
    conn.ping().await.map_err(AppError::Connection)?;

    Ok(pool)
}
