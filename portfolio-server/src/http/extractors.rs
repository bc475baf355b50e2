//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use axum::Form;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{ProjectFields, ValidationError};

/// Project fields from a JSON or urlencoded body.
///
/// Any other content type (or none) yields all fields absent, so a bare
/// POST fails validation and a bare PUT nulls every column.
pub struct ProjectBody(pub ProjectFields);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else if content_type.starts_with("application/json") || content_type.contains("+json") {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

fn malformed(reason: impl Into<String>) -> ApiError {
    ApiError::Validation(ValidationError::MalformedBody {
        reason: reason.into(),
    })
}

impl<S> FromRequest<S> for ProjectBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(req.headers()) {
            BodyKind::Form => {
                let Form(fields) = Form::<ProjectFields>::from_request(req, state)
                    .await
                    .map_err(|e| match e.status() {
                        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
                        _ => malformed(e.body_text()),
                    })?;
                Ok(Self(fields))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| match e.status() {
                        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
                        _ => malformed(e.body_text()),
                    })?;

                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(ProjectFields::default()));
                }

                // Only an object carries named fields; arrays and scalars
                // decode to nothing, like a body of another content type.
                let value: Value =
                    serde_json::from_slice(&bytes).map_err(|e| malformed(e.to_string()))?;
                let fields = match value {
                    Value::Object(_) => {
                        serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?
                    }
                    _ => ProjectFields::default(),
                };
                Ok(Self(fields))
            }
            BodyKind::Other => Ok(Self(ProjectFields::default())),
        }
    }
}
