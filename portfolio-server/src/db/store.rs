//! Store trait and the Postgres implementation
//!
//! The trait is the seam between the service and persistence:
//! - `PgStore` runs statements over a sqlx pool
//! - `MemoryStore` (see `memory.rs`) emulates them in-process

use async_trait::async_trait;
use sqlx::PgPool;

use super::statement::ProjectStatement;
use crate::models::Project;

/// Any fault raised by the store. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Id could not be coerced to an integer (in-memory store only;
    /// Postgres reports this through `Sqlx`)
    #[error("invalid input syntax for type integer: \"{0}\"")]
    InvalidId(String),
}

/// Executes one statement and returns the rows it produced
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn execute(&self, statement: &ProjectStatement) -> Result<Vec<Project>, StoreError>;
}

/// Postgres-backed store over a shared pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn execute(&self, statement: &ProjectStatement) -> Result<Vec<Project>, StoreError> {
        let mut query = sqlx::query_as::<_, Project>(statement.sql());
        for arg in statement.args() {
            query = query.bind(arg);
        }

        // The pooled connection is released when the future completes,
        // on success or failure.
        let rows = query.fetch_all(&self.pool).await?;
        tracing::debug!(statement = statement.name(), rows = rows.len(), "statement executed");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::db::create_pool;
    use crate::models::ProjectFields;

    // Integration tests - run with DATABASE_URL set against a database that
    // has the projetos table.
    // cargo test -p portfolio-server -- --ignored

    fn store() -> PgStore {
        let config = StoreConfig {
            url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..StoreConfig::default()
        };
        PgStore::new(create_pool(&config).expect("pool creation failed"))
    }

    fn fields(title: &str) -> ProjectFields {
        ProjectFields {
            title: Some(title.into()),
            language: Some("Rust".into()),
            kind: Some("backend".into()),
            description: Some("integration".into()),
            image_url: None,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get() {
        let store = store();
        let inserted = store
            .execute(&ProjectStatement::Insert(fields("pg round trip")))
            .await
            .expect("insert failed");
        assert_eq!(inserted.len(), 1);
        let id = inserted[0].id.to_string();

        let fetched = store
            .execute(&ProjectStatement::Get { id: id.clone() })
            .await
            .expect("get failed");
        assert_eq!(fetched, inserted);

        store
            .execute(&ProjectStatement::Delete { id })
            .await
            .expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_row_returns_no_rows() {
        let rows = store()
            .execute(&ProjectStatement::Get {
                id: "2147483647".into(),
            })
            .await
            .expect("get failed");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn non_numeric_id_is_store_error() {
        let result = store()
            .execute(&ProjectStatement::Get { id: "abc".into() })
            .await;
        assert!(matches!(result, Err(StoreError::Sqlx(_))));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_ordered_by_id() {
        let rows = store()
            .execute(&ProjectStatement::List)
            .await
            .expect("list failed");
        assert!(rows.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_inserts_are_listed_in_order() {
        let store = store();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let rows = store
                        .execute(&ProjectStatement::Insert(fields(&format!("concurrent {i}"))))
                        .await
                        .expect("concurrent insert failed");
                    rows[0].id
                })
            })
            .collect();

        let mut inserted = Vec::new();
        for handle in handles {
            inserted.push(handle.await.expect("task panicked"));
        }

        let listed: Vec<i32> = store
            .execute(&ProjectStatement::List)
            .await
            .expect("list failed")
            .iter()
            .map(|project| project.id)
            .filter(|id| inserted.contains(id))
            .collect();
        inserted.sort_unstable();
        assert_eq!(listed, inserted);

        for id in inserted {
            store
                .execute(&ProjectStatement::Delete { id: id.to_string() })
                .await
                .expect("cleanup failed");
        }
    }
}
