//! Contract template index page.

use maud::{Markup, html};

use super::contract_template_form::LIST_HREF;
use crate::template::{ContractTemplate, SlaHours};

fn hours(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_owned(), |h| format!("{h}h"))
}

/// "response / resolution" per tier, e.g. `24h / 48h`.
fn sla_summary(sla: &SlaHours) -> Markup {
    html! {
        small {
            "Low " (hours(sla.low_response)) " / " (hours(sla.low_resolution)) br;
            "Med " (hours(sla.medium_response)) " / " (hours(sla.medium_resolution)) br;
            "High " (hours(sla.high_response)) " / " (hours(sla.high_resolution))
        }
    }
}

#[must_use]
pub fn render(templates: &[ContractTemplate]) -> Markup {
    html! {
        div.card.card-dark {
            div.card-header."py-2".d-flex.justify-content-between.align-items-center {
                h3.card-title."mt-2" { i.fa.fa-fw.fa-file-contract."mr-2" {} "Contract Templates" }
                a.btn.btn-primary href={ (LIST_HREF) "/new" } {
                    i.fas.fa-plus."mr-2" {} "New Template"
                }
            }
            div.card-body {
                @if templates.is_empty() {
                    p.text-muted #empty-state { "No contract templates yet." }
                } @else {
                    table.table.table-striped.table-borderless.table-hover {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Renewal" }
                                th { "SLA (response / resolution)" }
                                th { "Rates" }
                                th { "Net Terms" }
                                th.text-center { "Action" }
                            }
                        }
                        tbody {
                            @for t in templates {
                                @let id = t.id.to_string();
                                tr data-id=(id) {
                                    td {
                                        a.text-bold href={ (LIST_HREF) "/" (id) "/edit" } { (t.fields.name) }
                                        div.text-secondary { (t.fields.description) }
                                    }
                                    td { (t.fields.contract_type.as_str()) }
                                    td { (t.fields.renewal_frequency.map_or("-", |r| r.as_str())) }
                                    td { (sla_summary(&t.fields.sla)) }
                                    td {
                                        (t.fields.rate_standard.as_deref().unwrap_or("-"))
                                        @if let Some(after) = &t.fields.rate_after_hours {
                                            br; small.text-secondary { "After hours: " (after) }
                                        }
                                    }
                                    td { (t.fields.net_terms.as_deref().unwrap_or("-")) }
                                    td.text-center {
                                        a.btn.btn-sm.btn-secondary href={ (LIST_HREF) "/" (id) "/edit" } { "Edit" }
                                        " "
                                        form.d-inline action={ (LIST_HREF) "/" (id) "/delete" } method="post" {
                                            button.btn.btn-sm.btn-danger type="submit" name="delete_contract_template" { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
