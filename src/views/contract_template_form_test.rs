use super::*;
use crate::services::contract_template::validate;

fn rendered(mode: FormMode, form: &ContractTemplateForm, errors: Option<&ValidationErrors>) -> String {
    render(mode, form, errors).into_string()
}

#[test]
fn create_form_posts_to_collection_with_add_button() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    assert!(html.contains(r#"<form action="/contract-templates" method="post" autocomplete="off">"#));
    assert!(html.contains(r#"name="add_contract_template""#));
    assert!(html.contains("Create Template"));
    assert!(html.contains("New Contract Template"));
}

#[test]
fn edit_form_posts_to_record() {
    let id = Uuid::new_v4();
    let html = rendered(FormMode::Edit(id), &ContractTemplateForm::default(), None);
    assert!(html.contains(&format!(r#"action="/contract-templates/{id}""#)));
    assert!(html.contains(r#"name="edit_contract_template""#));
}

#[test]
fn renders_all_four_tabs_with_general_active() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    for (id, label) in [("general", "General Info"), ("sla", "SLA"), ("rates", "Rates &amp; Support"), ("details", "Details")] {
        assert!(html.contains(&format!(r##"href="#{id}""##)), "missing tab link {id}");
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing pane {id}");
        assert!(html.contains(label), "missing label {label}");
    }
    assert!(html.contains(r#"class="tab-pane fade show active" id="general""#));
    assert!(html.contains(r#"class="nav-link active" id="general-tab""#));
    assert!(html.contains(r#"class="nav-link" id="sla-tab""#));
}

#[test]
fn every_field_name_is_present() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    for name in [
        "name",
        "description",
        "type",
        "renewal_frequency",
        "sla_low_response_time",
        "sla_low_resolution_time",
        "sla_medium_response_time",
        "sla_medium_resolution_time",
        "sla_high_response_time",
        "sla_high_resolution_time",
        "rate_standard",
        "rate_after_hours",
        "support_hours",
        "net_terms",
        "details",
    ] {
        assert!(html.contains(&format!(r#"name="{name}""#)), "missing field {name}");
    }
}

#[test]
fn required_fields_carry_client_side_constraints() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    assert!(html.contains(r#"name="name" placeholder="Contract Template Name" maxlength="200" required autofocus>"#));
    assert!(html.contains(r#"name="description" placeholder="Contract Template Description" maxlength="200" required>"#));
    assert!(html.contains(r#"name="type" required>"#));
    assert!(!html.contains(r#"name="renewal_frequency" required"#));
}

#[test]
fn type_select_offers_only_the_three_contract_types() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    let start = html.find(r#"name="type""#).unwrap();
    let end = start + html[start..].find("</select>").unwrap();
    let select = &html[start..end];

    assert_eq!(select.matches("<option").count(), 4);
    assert!(select.contains(r#"<option value="">- Select Type -</option>"#));
    assert!(select.contains("<option>Fully Managed</option>"));
    assert!(select.contains("<option>Partialy Managed</option>"));
    assert!(select.contains("<option>Break/Fix</option>"));
}

#[test]
fn renewal_select_defaults_to_placeholder() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    let start = html.find(r#"name="renewal_frequency""#).unwrap();
    let end = start + html[start..].find("</select>").unwrap();
    let select = &html[start..end];

    assert_eq!(select.matches("<option").count(), 7);
    assert!(select.contains(r#"<option value="">- Select Frequency -</option>"#));
    assert!(!select.contains("selected"));
}

#[test]
fn sla_inputs_are_numeric_and_non_negative() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    assert_eq!(html.matches(r#"type="number" min="0" step="1""#).count(), 6);
    assert!(html.contains(r#"name="sla_high_response_time" placeholder="e.g., 1""#));
}

#[test]
fn rate_inputs_are_free_text() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    assert!(html.contains(r#"type="text" class="form-control" name="rate_standard" placeholder="e.g., 100""#));
    assert!(html.contains(r#"placeholder="e.g., Mon-Fri 9am-5pm""#));
}

#[test]
fn cancel_is_not_a_submit_control() {
    let html = rendered(FormMode::Create, &ContractTemplateForm::default(), None);
    assert_eq!(html.matches(r#"type="submit""#).count(), 1);
    assert!(html.contains(r#"<a class="btn btn-light" href="/contract-templates" role="button" data-dismiss="modal">"#));
}

#[test]
fn rerender_keeps_values_and_shows_errors() {
    let form = ContractTemplateForm {
        name: None,
        description: Some("Keeps <me>".into()),
        contract_type: Some("Break/Fix".into()),
        sla_low_response_time: Some("-4".into()),
        details: Some("<p>notes</p>".into()),
        ..ContractTemplateForm::default()
    };
    let errors = validate(&form).unwrap_err();
    let html = rendered(FormMode::Create, &form, Some(&errors));

    assert!(html.contains("Please correct the highlighted fields."));
    assert!(html.contains(r#"value="Keeps &lt;me&gt;""#));
    assert!(html.contains("<option selected>Break/Fix</option>"));
    assert!(html.contains(r#"value="-4""#));
    assert!(html.contains("&lt;p&gt;notes&lt;/p&gt;</textarea>"));
    assert!(html.contains(r#"class="form-control is-invalid" name="name""#));
    assert!(html.contains(r#"data-field="name">is required</div>"#));
    assert!(html.contains(r#"data-field="sla_low_response_time">must be a non-negative whole number of hours</div>"#));
    assert!(!html.contains(r#"data-field="description""#));
}
