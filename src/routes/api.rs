//! Read-only JSON API over contract templates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use uuid::Uuid;

use super::contract_templates::template_error_to_status;
use crate::services::contract_template;
use crate::state::AppState;
use crate::template::{ContractTemplate, ContractType, RenewalFrequency};

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub types: Vec<&'static str>,
    pub renewal_frequencies: Vec<&'static str>,
}

/// `GET /api/contract-templates`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContractTemplate>>, StatusCode> {
    contract_template::list(state.store.as_ref())
        .await
        .map(Json)
        .map_err(template_error_to_status)
}

/// `GET /api/contract-templates/:id`
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<ContractTemplate>, StatusCode> {
    contract_template::get(state.store.as_ref(), id)
        .await
        .map(Json)
        .map_err(template_error_to_status)
}

/// `GET /api/contract-templates/options` — the dropdown option lists.
pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        types: ContractType::ALL.iter().map(|t| t.as_str()).collect(),
        renewal_frequencies: RenewalFrequency::ALL.iter().map(|f| f.as_str()).collect(),
    })
}
