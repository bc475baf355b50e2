//! HTTP server layer
//!
//! Axum server with:
//! - Unrestricted CORS
//! - Request tracing
//! - 10 MiB body limit
//! - Graceful shutdown
//! - `{message, status, data?}` envelopes for every outcome

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use envelope::{Envelope, Status};
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
