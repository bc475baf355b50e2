//! Welcome endpoint

use axum::{routing::get, Json, Router};

use crate::http::envelope::Envelope;

const WELCOME_MESSAGE: &str = "Bem-vindo ao backend do meu portfólio!";

/// GET /
async fn welcome() -> Json<Envelope<()>> {
    Json(Envelope::message(WELCOME_MESSAGE))
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}
