//! Contract template service — form validation and CRUD.
//!
//! DESIGN
//! ======
//! The browser enforces `required`, `maxlength` and numeric inputs, but
//! nothing stops a hand-built POST. `validate` is the authoritative check:
//! it turns the raw posted strings into a `NewContractTemplate` or reports
//! every offending field at once so the form can be re-rendered with all
//! messages in place.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are expected traffic and logged at debug. Database
//! errors are logged once here, then mapped to 500 by the route layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::store::ContractTemplateStore;
use crate::template::{ContractTemplate, ContractType, NewContractTemplate, RenewalFrequency, SHORT_TEXT_MAX, SlaHours};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContractTemplateError {
    #[error("contract template not found: {0}")]
    NotFound(Uuid),
    #[error("invalid contract template: {0}")]
    Validation(ValidationErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Field name → message, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field} {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Raw values exactly as posted by the form. Every field is optional so a
/// missing key and an empty input are handled the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContractTemplateForm {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub contract_type: Option<String>,
    pub renewal_frequency: Option<String>,
    pub sla_low_response_time: Option<String>,
    pub sla_low_resolution_time: Option<String>,
    pub sla_medium_response_time: Option<String>,
    pub sla_medium_resolution_time: Option<String>,
    pub sla_high_response_time: Option<String>,
    pub sla_high_resolution_time: Option<String>,
    pub rate_standard: Option<String>,
    pub rate_after_hours: Option<String>,
    pub support_hours: Option<String>,
    pub net_terms: Option<String>,
    pub details: Option<String>,
}

impl ContractTemplateForm {
    /// Prefill values for the edit form.
    #[must_use]
    pub fn from_template(template: &ContractTemplate) -> Self {
        let f = &template.fields;
        let hours = |v: Option<i32>| v.map(|h| h.to_string());
        Self {
            name: Some(f.name.clone()),
            description: Some(f.description.clone()),
            contract_type: Some(f.contract_type.as_str().to_owned()),
            renewal_frequency: f.renewal_frequency.map(|r| r.as_str().to_owned()),
            sla_low_response_time: hours(f.sla.low_response),
            sla_low_resolution_time: hours(f.sla.low_resolution),
            sla_medium_response_time: hours(f.sla.medium_response),
            sla_medium_resolution_time: hours(f.sla.medium_resolution),
            sla_high_response_time: hours(f.sla.high_response),
            sla_high_resolution_time: hours(f.sla.high_resolution),
            rate_standard: f.rate_standard.clone(),
            rate_after_hours: f.rate_after_hours.clone(),
            support_hours: f.support_hours.clone(),
            net_terms: f.net_terms.clone(),
            details: f.details.clone(),
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Trimmed value, or `None` when missing or blank.
fn present(raw: Option<&String>) -> Option<&str> {
    raw.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Postgres text columns cannot hold NUL.
fn check_chars(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.contains('\0') {
        errors.add(field, "contains invalid characters");
    }
}

fn check_length(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.chars().count() > SHORT_TEXT_MAX {
        errors.add(field, format!("must be at most {SHORT_TEXT_MAX} characters"));
    }
}

fn required_text(errors: &mut ValidationErrors, field: &'static str, raw: Option<&String>) -> String {
    let Some(value) = present(raw) else {
        errors.add(field, "is required");
        return String::new();
    };
    check_chars(errors, field, value);
    check_length(errors, field, value);
    value.to_owned()
}

fn optional_text(errors: &mut ValidationErrors, field: &'static str, raw: Option<&String>) -> Option<String> {
    let value = present(raw)?;
    check_chars(errors, field, value);
    check_length(errors, field, value);
    Some(value.to_owned())
}

/// Accepts what a `type="number" step="1"` input can submit for a whole
/// number: `24`, `+5`, `24.0`, `1e2`.
fn parse_hours(value: &str) -> Option<i32> {
    if let Ok(hours) = value.parse::<i32>() {
        return (hours >= 0).then_some(hours);
    }
    let hours = value.parse::<f64>().ok()?;
    if !hours.is_finite() || hours < 0.0 || hours.fract() > 0.0 || hours > f64::from(i32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let hours = hours as i32;
    Some(hours)
}

fn optional_hours(errors: &mut ValidationErrors, field: &'static str, raw: Option<&String>) -> Option<i32> {
    let value = present(raw)?;
    let hours = parse_hours(value);
    if hours.is_none() {
        errors.add(field, "must be a non-negative whole number of hours");
    }
    hours
}

/// Kept as submitted, surrounding whitespace included. Only a blank value
/// is dropped.
fn optional_details(errors: &mut ValidationErrors, raw: Option<&String>) -> Option<String> {
    let value = raw.filter(|v| !v.trim().is_empty())?;
    check_chars(errors, "details", value);
    Some(value.clone())
}

/// Validate a posted form.
///
/// # Errors
///
/// Returns every field-level problem found, keyed by form field name.
pub fn validate(form: &ContractTemplateForm) -> Result<NewContractTemplate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required_text(&mut errors, "name", form.name.as_ref());
    let description = required_text(&mut errors, "description", form.description.as_ref());

    let contract_type = match present(form.contract_type.as_ref()) {
        None => {
            errors.add("type", "is required");
            None
        }
        Some(raw) => {
            let parsed = ContractType::from_str(raw);
            if parsed.is_none() {
                errors.add("type", "is not a valid contract type");
            }
            parsed
        }
    };

    let renewal_frequency = present(form.renewal_frequency.as_ref()).and_then(|raw| {
        let parsed = RenewalFrequency::from_str(raw);
        if parsed.is_none() {
            errors.add("renewal_frequency", "is not a valid renewal frequency");
        }
        parsed
    });

    let sla = SlaHours {
        low_response: optional_hours(&mut errors, "sla_low_response_time", form.sla_low_response_time.as_ref()),
        low_resolution: optional_hours(&mut errors, "sla_low_resolution_time", form.sla_low_resolution_time.as_ref()),
        medium_response: optional_hours(&mut errors, "sla_medium_response_time", form.sla_medium_response_time.as_ref()),
        medium_resolution: optional_hours(
            &mut errors,
            "sla_medium_resolution_time",
            form.sla_medium_resolution_time.as_ref(),
        ),
        high_response: optional_hours(&mut errors, "sla_high_response_time", form.sla_high_response_time.as_ref()),
        high_resolution: optional_hours(&mut errors, "sla_high_resolution_time", form.sla_high_resolution_time.as_ref()),
    };

    let rate_standard = optional_text(&mut errors, "rate_standard", form.rate_standard.as_ref());
    let rate_after_hours = optional_text(&mut errors, "rate_after_hours", form.rate_after_hours.as_ref());
    let support_hours = optional_text(&mut errors, "support_hours", form.support_hours.as_ref());
    let net_terms = optional_text(&mut errors, "net_terms", form.net_terms.as_ref());
    let details = optional_details(&mut errors, form.details.as_ref());

    match contract_type {
        Some(contract_type) if errors.is_empty() => Ok(NewContractTemplate {
            name,
            description,
            contract_type,
            renewal_frequency,
            sla,
            rate_standard,
            rate_after_hours,
            support_hours,
            net_terms,
            details,
        }),
        _ => Err(errors),
    }
}

// =============================================================================
// CRUD
// =============================================================================

fn log_failure(op: &'static str, err: &ContractTemplateError) {
    match err {
        ContractTemplateError::Database(e) => error!(op, error = %e, "contract template store failed"),
        ContractTemplateError::NotFound(id) => debug!(op, %id, "contract template not found"),
        ContractTemplateError::Validation(errors) => {
            debug!(op, invalid_fields = errors.len(), %errors, "contract template rejected");
        }
    }
}

/// Validate and insert a new template.
///
/// # Errors
///
/// Returns `Validation` for a bad form, or a database error.
pub async fn create(
    store: &dyn ContractTemplateStore,
    form: &ContractTemplateForm,
) -> Result<ContractTemplate, ContractTemplateError> {
    let result = match validate(form) {
        Ok(fields) => store.create(fields).await,
        Err(errors) => Err(ContractTemplateError::Validation(errors)),
    };
    match &result {
        Ok(record) => info!(id = %record.id, name = %record.fields.name, "contract template created"),
        Err(e) => log_failure("create", e),
    }
    result
}

/// Validate and overwrite an existing template.
///
/// # Errors
///
/// Returns `Validation` for a bad form, `NotFound` for an unknown id, or a
/// database error.
pub async fn update(
    store: &dyn ContractTemplateStore,
    id: Uuid,
    form: &ContractTemplateForm,
) -> Result<ContractTemplate, ContractTemplateError> {
    let result = match validate(form) {
        Ok(fields) => store.update(id, fields).await,
        Err(errors) => Err(ContractTemplateError::Validation(errors)),
    };
    match &result {
        Ok(record) => info!(id = %record.id, name = %record.fields.name, "contract template updated"),
        Err(e) => log_failure("update", e),
    }
    result
}

/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list(store: &dyn ContractTemplateStore) -> Result<Vec<ContractTemplate>, ContractTemplateError> {
    store.list().await.inspect_err(|e| log_failure("list", e))
}

/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn get(store: &dyn ContractTemplateStore, id: Uuid) -> Result<ContractTemplate, ContractTemplateError> {
    store.get(id).await.inspect_err(|e| log_failure("get", e))
}

/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn delete(store: &dyn ContractTemplateStore, id: Uuid) -> Result<(), ContractTemplateError> {
    let result = store.delete(id).await;
    match &result {
        Ok(()) => info!(%id, "contract template deleted"),
        Err(e) => log_failure("delete", e),
    }
    result
}

#[cfg(test)]
#[path = "contract_template_test.rs"]
mod tests;
