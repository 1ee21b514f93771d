use axum::{routing::get, Router};

use super::handlers::companies;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(companies::closest).post(companies::ingest))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
