//! Project operations: validation, one store round trip, outcome mapping
//!
//! Transport-agnostic. Each operation returns `Result<_, ProjectError>`;
//! the HTTP layer maps that once onto status codes and envelopes.

use std::sync::Arc;

use crate::db::{ProjectStatement, ProjectStore, StoreError};
use crate::models::{Project, ProjectFields, ValidationError};

/// Outcome of a failed operation
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// Rejected before touching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The statement matched zero rows
    #[error("project not found")]
    NotFound,

    /// Any store fault; the cause is for logs only
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The five logical operations, used to pick log labels and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::List => "Projetos carregados com sucesso!",
            Self::Get => "Projeto encontrado!",
            Self::Create => "Projeto adicionado com sucesso!",
            Self::Update => "Projeto atualizado com sucesso!",
            Self::Delete => "Projeto excluído com sucesso!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::List => "Erro ao carregar projetos",
            Self::Get => "Erro ao buscar projeto",
            Self::Create => "Erro ao adicionar projeto",
            Self::Update => "Erro ao atualizar projeto",
            Self::Delete => "Erro ao excluir projeto",
        }
    }
}

/// Stateless façade over a `ProjectStore`
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// All projects, ascending by id.
    pub async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        Ok(self.store.execute(&ProjectStatement::List).await?)
    }

    /// The project with `id`. The id is not validated here; the store
    /// decides whether it is comparable.
    pub async fn get(&self, id: &str) -> Result<Project, ProjectError> {
        self.single(ProjectStatement::Get { id: id.to_owned() })
            .await
    }

    /// Insert a project. `title` and `description` must be non-empty.
    pub async fn create(&self, fields: ProjectFields) -> Result<Project, ProjectError> {
        fields.validate_new()?;
        self.single(ProjectStatement::Insert(fields)).await
    }

    /// Replace every writable column of `id`. Absent fields become null.
    ///
    /// Unlike `create`, no fields are required.
    pub async fn update(&self, id: &str, fields: ProjectFields) -> Result<Project, ProjectError> {
        self.single(ProjectStatement::Update {
            id: id.to_owned(),
            fields,
        })
        .await
    }

    /// Remove `id`, returning the row as it was.
    pub async fn delete(&self, id: &str) -> Result<Project, ProjectError> {
        self.single(ProjectStatement::Delete { id: id.to_owned() })
            .await
    }

    async fn single(&self, statement: ProjectStatement) -> Result<Project, ProjectError> {
        self.store
            .execute(&statement)
            .await?
            .into_iter()
            .next()
            .ok_or(ProjectError::NotFound)
    }
}
