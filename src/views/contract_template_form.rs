//! The contract template modal form (create and edit).
//!
//! Four tab panes: General Info, SLA, Rates & Support, Details. Field names
//! match `ContractTemplateForm` one to one. After a rejected submission the
//! same markup is rendered with the posted values kept and each error shown
//! under its field.

use maud::{Markup, html};
use uuid::Uuid;

use super::modal::{Tab, modal_footer, modal_header, tab_nav};
use crate::services::contract_template::{ContractTemplateForm, ValidationErrors};
use crate::template::{ContractType, RenewalFrequency, SHORT_TEXT_MAX};

pub const LIST_HREF: &str = "/contract-templates";

const TABS: [Tab; 4] = [
    Tab { id: "general", label: "General Info" },
    Tab { id: "sla", label: "SLA" },
    Tab { id: "rates", label: "Rates & Support" },
    Tab { id: "details", label: "Details" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

impl FormMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "New Contract Template",
            Self::Edit(_) => "Edit Contract Template",
        }
    }

    fn action(self) -> String {
        match self {
            Self::Create => LIST_HREF.to_owned(),
            Self::Edit(id) => format!("{LIST_HREF}/{id}"),
        }
    }

    fn submit(self) -> (&'static str, &'static str) {
        match self {
            Self::Create => ("add_contract_template", "Create Template"),
            Self::Edit(_) => ("edit_contract_template", "Save Template"),
        }
    }
}

type FieldGetter = fn(&ContractTemplateForm) -> Option<&String>;

struct SlaField {
    name: &'static str,
    label: &'static str,
    icon: &'static str,
    placeholder: &'static str,
    value: FieldGetter,
}

const SLA_ROWS: [[SlaField; 2]; 3] = [
    [
        SlaField {
            name: "sla_low_response_time",
            label: "Low Priority Response (hrs)",
            icon: "fa-clock",
            placeholder: "e.g., 24",
            value: |f| f.sla_low_response_time.as_ref(),
        },
        SlaField {
            name: "sla_low_resolution_time",
            label: "Low Priority Resolution (hrs)",
            icon: "fa-hourglass-half",
            placeholder: "e.g., 48",
            value: |f| f.sla_low_resolution_time.as_ref(),
        },
    ],
    [
        SlaField {
            name: "sla_medium_response_time",
            label: "Medium Priority Response (hrs)",
            icon: "fa-clock",
            placeholder: "e.g., 12",
            value: |f| f.sla_medium_response_time.as_ref(),
        },
        SlaField {
            name: "sla_medium_resolution_time",
            label: "Medium Priority Resolution (hrs)",
            icon: "fa-hourglass-half",
            placeholder: "e.g., 24",
            value: |f| f.sla_medium_resolution_time.as_ref(),
        },
    ],
    [
        SlaField {
            name: "sla_high_response_time",
            label: "High Priority Response (hrs)",
            icon: "fa-bolt",
            placeholder: "e.g., 1",
            value: |f| f.sla_high_response_time.as_ref(),
        },
        SlaField {
            name: "sla_high_resolution_time",
            label: "High Priority Resolution (hrs)",
            icon: "fa-stopwatch",
            placeholder: "e.g., 4",
            value: |f| f.sla_high_resolution_time.as_ref(),
        },
    ],
];

struct TextField {
    name: &'static str,
    label: &'static str,
    icon: &'static str,
    placeholder: &'static str,
    value: FieldGetter,
}

const RATE_FIELDS: [TextField; 4] = [
    TextField {
        name: "rate_standard",
        label: "Standard Hourly Rate",
        icon: "fa-dollar-sign",
        placeholder: "e.g., 100",
        value: |f| f.rate_standard.as_ref(),
    },
    TextField {
        name: "rate_after_hours",
        label: "After Hours Hourly Rate",
        icon: "fa-moon",
        placeholder: "e.g., 150",
        value: |f| f.rate_after_hours.as_ref(),
    },
    TextField {
        name: "support_hours",
        label: "Support Hours",
        icon: "fa-calendar",
        placeholder: "e.g., Mon-Fri 9am-5pm",
        value: |f| f.support_hours.as_ref(),
    },
    TextField {
        name: "net_terms",
        label: "Net Terms",
        icon: "fa-file-invoice-dollar",
        placeholder: "e.g., Net 30",
        value: |f| f.net_terms.as_ref(),
    },
];

// =============================================================================
// PIECES
// =============================================================================

fn required_mark() -> Markup {
    html! { " " strong.text-danger { "*" } }
}

fn prepend_icon(icon: &str) -> Markup {
    html! {
        div.input-group-prepend {
            span.input-group-text { i class={ "fa fa-fw " (icon) } {} }
        }
    }
}

fn control_class(errors: Option<&ValidationErrors>, name: &str) -> &'static str {
    if errors.and_then(|e| e.get(name)).is_some() {
        "form-control is-invalid"
    } else {
        "form-control"
    }
}

fn field_error(errors: Option<&ValidationErrors>, name: &str) -> Markup {
    html! {
        @if let Some(message) = errors.and_then(|e| e.get(name)) {
            div.invalid-feedback."d-block" data-field=(name) { (message) }
        }
    }
}

fn select_options(placeholder: &str, options: &[&'static str], current: Option<&String>) -> Markup {
    let current = current.map(|v| v.trim());
    html! {
        option value="" { (placeholder) }
        @for value in options {
            option selected[current == Some(*value)] { (value) }
        }
    }
}

// =============================================================================
// TABS
// =============================================================================

fn general_tab(form: &ContractTemplateForm, errors: Option<&ValidationErrors>) -> Markup {
    let types = ContractType::ALL.map(ContractType::as_str);
    let frequencies = RenewalFrequency::ALL.map(RenewalFrequency::as_str);
    html! {
        div.tab-pane.fade.show.active #general role="tabpanel" {
            div.form-group {
                label { "Template Name" (required_mark()) }
                div.input-group {
                    (prepend_icon("fa-file-contract"))
                    input type="text" class=(control_class(errors, "name")) name="name"
                        placeholder="Contract Template Name" maxlength=(SHORT_TEXT_MAX)
                        value=[form.name.as_ref()] required autofocus;
                }
                (field_error(errors, "name"))
            }
            div.form-group {
                label { "Template Description" (required_mark()) }
                div.input-group {
                    (prepend_icon("fa-align-left"))
                    input type="text" class=(control_class(errors, "description")) name="description"
                        placeholder="Contract Template Description" maxlength=(SHORT_TEXT_MAX)
                        value=[form.description.as_ref()] required;
                }
                (field_error(errors, "description"))
            }
            div.form-group {
                label { "Contract Type" (required_mark()) }
                div.input-group {
                    (prepend_icon("fa-list"))
                    select class={ (control_class(errors, "type")) " select2" } name="type" required {
                        (select_options("- Select Type -", &types, form.contract_type.as_ref()))
                    }
                }
                (field_error(errors, "type"))
            }
            div.form-group {
                label { "Renewal Frequency" }
                div.input-group {
                    (prepend_icon("fa-sync-alt"))
                    select class={ (control_class(errors, "renewal_frequency")) " select2" } name="renewal_frequency" {
                        (select_options("- Select Frequency -", &frequencies, form.renewal_frequency.as_ref()))
                    }
                }
                (field_error(errors, "renewal_frequency"))
            }
        }
    }
}

fn sla_tab(form: &ContractTemplateForm, errors: Option<&ValidationErrors>) -> Markup {
    html! {
        div.tab-pane.fade #sla role="tabpanel" {
            @for row in &SLA_ROWS {
                div.form-row {
                    @for field in row {
                        div.form-group."col-md-6" {
                            label { (field.label) }
                            div.input-group {
                                (prepend_icon(field.icon))
                                input type="number" min="0" step="1" class=(control_class(errors, field.name))
                                    name=(field.name) placeholder=(field.placeholder)
                                    value=[(field.value)(form)];
                            }
                            (field_error(errors, field.name))
                        }
                    }
                }
            }
        }
    }
}

fn rates_tab(form: &ContractTemplateForm, errors: Option<&ValidationErrors>) -> Markup {
    html! {
        div.tab-pane.fade #rates role="tabpanel" {
            @for field in &RATE_FIELDS {
                div.form-group {
                    label { (field.label) }
                    div.input-group {
                        (prepend_icon(field.icon))
                        input type="text" class=(control_class(errors, field.name)) name=(field.name)
                            placeholder=(field.placeholder) maxlength=(SHORT_TEXT_MAX)
                            value=[(field.value)(form)];
                    }
                    (field_error(errors, field.name))
                }
            }
        }
    }
}

fn details_tab(form: &ContractTemplateForm, errors: Option<&ValidationErrors>) -> Markup {
    html! {
        div.tab-pane.fade #details role="tabpanel" {
            div.form-group {
                textarea class={ (control_class(errors, "details")) " tinymce" } rows="6" name="details"
                    placeholder="Enter Contract Details" {
                    @if let Some(details) = &form.details { (details) }
                }
                (field_error(errors, "details"))
            }
        }
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Render the modal. `errors` is `Some` only when re-rendering a rejected
/// submission.
#[must_use]
pub fn render(mode: FormMode, form: &ContractTemplateForm, errors: Option<&ValidationErrors>) -> Markup {
    let (submit_name, submit_label) = mode.submit();
    html! {
        div.modal-content {
            (modal_header(mode.title(), "fa-file-contract", LIST_HREF))
            (tab_nav(&TABS))
            form action=(mode.action()) method="post" autocomplete="off" {
                div.modal-body {
                    @if errors.is_some_and(|e| !e.is_empty()) {
                        div.alert.alert-danger role="alert" { "Please correct the highlighted fields." }
                    }
                    div.tab-content #contractTemplateTabContent {
                        (general_tab(form, errors))
                        (sla_tab(form, errors))
                        (rates_tab(form, errors))
                        (details_tab(form, errors))
                    }
                }
                (modal_footer(submit_name, submit_label, LIST_HREF))
            }
        }
    }
}

#[cfg(test)]
#[path = "contract_template_form_test.rs"]
mod tests;
