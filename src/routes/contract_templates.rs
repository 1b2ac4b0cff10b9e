//! Contract template HTML routes: list page, modal forms, form posts.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use maud::Markup;
use uuid::Uuid;

use crate::services::contract_template::{self, ContractTemplateError, ContractTemplateForm, ValidationErrors};
use crate::state::AppState;
use crate::views::contract_template_form::{self, FormMode, LIST_HREF};
use crate::views::{contract_template_list, layout};

pub(crate) fn template_error_to_status(err: ContractTemplateError) -> StatusCode {
    match err {
        ContractTemplateError::NotFound(_) => StatusCode::NOT_FOUND,
        ContractTemplateError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContractTemplateError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn page(title: &str, content: Markup) -> Html<String> {
    Html(layout(title, content).into_string())
}

fn form_page(mode: FormMode, form: &ContractTemplateForm, errors: Option<&ValidationErrors>) -> Html<String> {
    page(mode.title(), contract_template_form::render(mode, form, errors))
}

/// Redirect on success; re-render the form with 422 on validation failure.
fn form_outcome(
    mode: FormMode,
    form: &ContractTemplateForm,
    result: Result<(), ContractTemplateError>,
) -> Result<Response, StatusCode> {
    match result {
        Ok(()) => Ok(Redirect::to(LIST_HREF).into_response()),
        Err(ContractTemplateError::Validation(errors)) => {
            Ok((StatusCode::UNPROCESSABLE_ENTITY, form_page(mode, form, Some(&errors))).into_response())
        }
        Err(e) => Err(template_error_to_status(e)),
    }
}

/// `GET /` — send visitors to the list.
pub async fn root() -> Redirect {
    Redirect::temporary(LIST_HREF)
}

/// `GET /contract-templates` — list page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let templates = contract_template::list(state.store.as_ref())
        .await
        .map_err(template_error_to_status)?;
    Ok(page("Contract Templates", contract_template_list::render(&templates)))
}

/// `GET /contract-templates/new` — empty create form.
pub async fn new_form() -> Html<String> {
    form_page(FormMode::Create, &ContractTemplateForm::default(), None)
}

/// `POST /contract-templates` — create from the posted form.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ContractTemplateForm>,
) -> Result<Response, StatusCode> {
    let result = contract_template::create(state.store.as_ref(), &form).await.map(|_| ());
    form_outcome(FormMode::Create, &form, result)
}

/// `GET /contract-templates/:id/edit` — form prefilled from the stored record.
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Html<String>, StatusCode> {
    let template = contract_template::get(state.store.as_ref(), id)
        .await
        .map_err(template_error_to_status)?;
    Ok(form_page(FormMode::Edit(id), &ContractTemplateForm::from_template(&template), None))
}

/// `POST /contract-templates/:id` — save the edit form.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ContractTemplateForm>,
) -> Result<Response, StatusCode> {
    let result = contract_template::update(state.store.as_ref(), id, &form).await.map(|_| ());
    form_outcome(FormMode::Edit(id), &form, result)
}

/// `POST /contract-templates/:id/delete`
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Redirect, StatusCode> {
    contract_template::delete(state.store.as_ref(), id)
        .await
        .map_err(template_error_to_status)?;
    Ok(Redirect::to(LIST_HREF))
}

#[cfg(test)]
#[path = "contract_templates_test.rs"]
mod tests;
