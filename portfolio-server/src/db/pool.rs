//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool connects
//! lazily, so an unreachable store shows up as a per-request failure rather
//! than a startup abort.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::StoreConfig;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the configured connection URL cannot be parsed.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&StoreConfig::default())?;
/// ```
pub fn create_pool(config: &StoreConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options))
}
