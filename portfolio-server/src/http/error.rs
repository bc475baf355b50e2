//! API error types with IntoResponse
//!
//! Errors are converted to error envelopes with appropriate status codes.
//! Store causes are logged here and never sent to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::envelope::Envelope;
use crate::db::StoreError;
use crate::models::ValidationError;
use crate::service::{Operation, ProjectError};

const NOT_FOUND_MESSAGE: &str = "Projeto não encontrado";
const MISSING_FIELDS_MESSAGE: &str = "Título e descrição são obrigatórios.";
const MALFORMED_BODY_MESSAGE: &str = "Corpo da requisição inválido.";
const TOO_LARGE_MESSAGE: &str = "Corpo da requisição excede o limite permitido.";
const NO_ROUTE_MESSAGE: &str = "Rota não encontrada";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Project not found (404)
    NotFound,

    /// Store fault (500, logged)
    Store {
        operation: Operation,
        source: StoreError,
    },

    /// Body over the configured limit (413)
    PayloadTooLarge,

    /// No route matched (404)
    NoRoute,
}

impl ApiError {
    /// Attach the operation a `ProjectError` came from.
    ///
    /// ```ignore
    /// service.get(&id).await.map_err(ApiError::during(Operation::Get))?;
    /// ```
    pub fn during(operation: Operation) -> impl Fn(ProjectError) -> Self {
        move |error| match error {
            ProjectError::Validation(e) => Self::Validation(e),
            ProjectError::NotFound => Self::NotFound,
            ProjectError::Store(source) => Self::Store { operation, source },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => {
                tracing::debug!(error = %e, "request rejected");
                let message = match e {
                    ValidationError::Missing { .. } => MISSING_FIELDS_MESSAGE,
                    ValidationError::MalformedBody { .. } => MALFORMED_BODY_MESSAGE,
                };
                (StatusCode::BAD_REQUEST, message)
            }
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            Self::Store { operation, source } => {
                // Log the actual error, return the operation's generic message
                tracing::error!(operation = operation.name(), error = %source, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, operation.failure_message())
            }
            Self::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE_MESSAGE),
            Self::NoRoute => (StatusCode::NOT_FOUND, NO_ROUTE_MESSAGE),
        };

        (status, Json(Envelope::error(message))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Missing {
            fields: vec!["title"],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], MISSING_FIELDS_MESSAGE);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn store_error_is_500_without_cause() {
        let err = ApiError::during(Operation::Delete)(ProjectError::Store(
            StoreError::InvalidId("secret-detail".into()),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Erro ao excluir projeto");
        assert!(!body.to_string().contains("secret-detail"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn payload_too_large_is_413() {
        let response = ApiError::PayloadTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
