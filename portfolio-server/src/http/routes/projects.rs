//! Project endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::ProjectBody;
use crate::http::server::AppState;
use crate::models::Project;
use crate::service::Operation;

type ProjectResponse = Result<Json<Envelope<Project>>, ApiError>;

/// GET /projetos - all projects, ascending by id
async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Project>>>, ApiError> {
    let op = Operation::List;
    let projects = state.projects.list().await.map_err(ApiError::during(op))?;
    Ok(Json(Envelope::success(op.success_message(), projects)))
}

/// GET /projetos/{id}
async fn get_project(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ProjectResponse {
    let op = Operation::Get;
    let project = state.projects.get(&id).await.map_err(ApiError::during(op))?;
    Ok(Json(Envelope::success(op.success_message(), project)))
}

/// POST /projetos - title and description required
async fn create_project(
    State(state): State<Arc<AppState>>,
    ProjectBody(fields): ProjectBody,
) -> ProjectResponse {
    let op = Operation::Create;
    let project = state.projects.create(fields).await.map_err(ApiError::during(op))?;
    tracing::info!(id = project.id, "project created");
    Ok(Json(Envelope::success(op.success_message(), project)))
}

/// PUT /projetos/{id} - replaces every writable column
async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ProjectBody(fields): ProjectBody,
) -> ProjectResponse {
    let op = Operation::Update;
    let project = state
        .projects
        .update(&id, fields)
        .await
        .map_err(ApiError::during(op))?;
    Ok(Json(Envelope::success(op.success_message(), project)))
}

/// DELETE /projetos/{id} - returns the deleted row
async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ProjectResponse {
    let op = Operation::Delete;
    let project = state.projects.delete(&id).await.map_err(ApiError::during(op))?;
    tracing::info!(id = project.id, "project deleted");
    Ok(Json(Envelope::success(op.success_message(), project)))
}

/// Project routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projetos", get(list_projects).post(create_project))
        .route(
            "/projetos/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}
