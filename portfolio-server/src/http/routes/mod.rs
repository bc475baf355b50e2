//! Route handlers organized by resource

pub mod projects;
pub mod root;

use super::error::ApiError;

/// Fallback for unmatched routes when no static directory is served
pub async fn no_route() -> ApiError {
    ApiError::NoRoute
}
