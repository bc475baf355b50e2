//! In-process project table
//!
//! Runs the same statements as `PgStore` against a `BTreeMap`, with a
//! serial id sequence and integer coercion of path ids. Backs the CLI's
//! `--in-memory` mode and the service/router tests.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::statement::ProjectStatement;
use super::store::{ProjectStore, StoreError};
use crate::models::Project;

#[derive(Debug, Default)]
struct Table {
    /// Last id handed out, like a SERIAL sequence
    last_id: i32,
    rows: BTreeMap<i32, Project>,
}

/// `ProjectStore` kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Table> {
        // A panic mid-statement cannot leave a half-written row behind,
        // so a poisoned table is still consistent.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Mirror Postgres' text-to-integer cast (surrounding whitespace allowed).
fn parse_id(id: &str) -> Result<i32, StoreError> {
    id.trim()
        .parse()
        .map_err(|_| StoreError::InvalidId(id.to_owned()))
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn execute(&self, statement: &ProjectStatement) -> Result<Vec<Project>, StoreError> {
        let mut table = self.lock();

        let rows: Vec<Project> = match statement {
            ProjectStatement::List => table.rows.values().cloned().collect(),
            ProjectStatement::Get { id } => {
                let id = parse_id(id)?;
                table.rows.get(&id).cloned().into_iter().collect()
            }
            ProjectStatement::Insert(fields) => {
                table.last_id += 1;
                let project = Project::from_fields(table.last_id, fields.clone());
                table.rows.insert(project.id, project.clone());
                vec![project]
            }
            ProjectStatement::Update { id, fields } => {
                let id = parse_id(id)?;
                match table.rows.get_mut(&id) {
                    Some(row) => {
                        *row = Project::from_fields(id, fields.clone());
                        vec![row.clone()]
                    }
                    None => Vec::new(),
                }
            }
            ProjectStatement::Delete { id } => {
                let id = parse_id(id)?;
                table.rows.remove(&id).into_iter().collect()
            }
        };

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectFields;

    fn titled(title: &str) -> ProjectFields {
        ProjectFields {
            title: Some(title.into()),
            description: Some("d".into()),
            ..ProjectFields::default()
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let store = MemoryStore::new();
        let first = store.execute(&ProjectStatement::Insert(titled("a"))).await.unwrap();
        store
            .execute(&ProjectStatement::Delete { id: "1".into() })
            .await
            .unwrap();
        let second = store.execute(&ProjectStatement::Insert(titled("b"))).await.unwrap();

        assert_eq!(first[0].id, 1);
        assert_eq!(second[0].id, 2);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn non_numeric_id_fails_like_the_cast() {
        let store = MemoryStore::new();
        let result = store
            .execute(&ProjectStatement::Get { id: "abc".into() })
            .await;
        assert!(matches!(result, Err(StoreError::InvalidId(id)) if id == "abc"));
    }

    #[tokio::test]
    async fn padded_id_is_accepted() {
        let store = MemoryStore::new();
        store.execute(&ProjectStatement::Insert(titled("a"))).await.unwrap();
        let rows = store
            .execute(&ProjectStatement::Get { id: " 1 ".into() })
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn update_of_missing_row_returns_nothing() {
        let store = MemoryStore::new();
        let rows = store
            .execute(&ProjectStatement::Update {
                id: "5".into(),
                fields: titled("x"),
            })
            .await
            .unwrap();
        assert!(rows.is_empty());
        assert!(store.is_empty());
    }
}
