//! portfolio-server: HTTP backend for the portfolio front-end
//!
//! Exposes CRUD over the `projetos` table:
//! - `service` validates input and maps store outcomes
//! - `db` runs one parameterized statement per operation
//! - `http` wraps every outcome in the `{message, status, data?}` envelope

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ServerConfig, StoreConfig};
pub use http::{build_router, run_server, AppState, ServerError};
pub use service::{Operation, ProjectError, ProjectService};
