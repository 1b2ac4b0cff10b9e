//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! HTML pages and form posts live under `/contract-templates`; a read-only
//! JSON view of the same records lives under `/api/contract-templates`.

pub mod api;
pub mod contract_templates;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(contract_templates::root))
        .route(
            "/contract-templates",
            get(contract_templates::index).post(contract_templates::create),
        )
        .route("/contract-templates/new", get(contract_templates::new_form))
        .route("/contract-templates/{id}", post(contract_templates::update))
        .route("/contract-templates/{id}/edit", get(contract_templates::edit_form))
        .route("/contract-templates/{id}/delete", post(contract_templates::delete))
        .route("/api/contract-templates", get(api::list))
        .route("/api/contract-templates/options", get(api::options))
        .route("/api/contract-templates/{id}", get(api::get))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
