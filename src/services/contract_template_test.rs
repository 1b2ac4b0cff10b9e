use super::*;
use crate::store::MemoryContractTemplateStore;

fn minimal_form() -> ContractTemplateForm {
    ContractTemplateForm {
        name: Some("Managed Basic".into()),
        description: Some("Entry-level managed services".into()),
        contract_type: Some("Fully Managed".into()),
        ..ContractTemplateForm::default()
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn minimal_form_validates_with_everything_else_absent() {
    let fields = validate(&minimal_form()).unwrap();
    assert_eq!(fields.name, "Managed Basic");
    assert_eq!(fields.description, "Entry-level managed services");
    assert_eq!(fields.contract_type, ContractType::FullyManaged);
    assert_eq!(fields.renewal_frequency, None);
    assert_eq!(fields.sla, SlaHours::default());
    assert!(fields.rate_standard.is_none());
    assert!(fields.rate_after_hours.is_none());
    assert!(fields.support_hours.is_none());
    assert!(fields.net_terms.is_none());
    assert!(fields.details.is_none());
}

#[test]
fn empty_strings_from_unfilled_inputs_are_absent() {
    let form = ContractTemplateForm {
        renewal_frequency: Some(String::new()),
        sla_low_response_time: Some(String::new()),
        rate_standard: Some("   ".into()),
        details: Some(String::new()),
        ..minimal_form()
    };
    let fields = validate(&form).unwrap();
    assert_eq!(fields.renewal_frequency, None);
    assert_eq!(fields.sla.low_response, None);
    assert_eq!(fields.rate_standard, None);
    assert_eq!(fields.details, None);
}

#[test]
fn full_form_validates_and_trims() {
    let form = ContractTemplateForm {
        name: Some("  Gold  ".into()),
        renewal_frequency: Some("3 Year".into()),
        sla_low_response_time: Some("24".into()),
        sla_low_resolution_time: Some("48".into()),
        sla_medium_response_time: Some("12".into()),
        sla_medium_resolution_time: Some("24".into()),
        sla_high_response_time: Some("1".into()),
        sla_high_resolution_time: Some("0".into()),
        rate_standard: Some("$100/hr".into()),
        rate_after_hours: Some("150".into()),
        support_hours: Some("Mon-Fri 9am-5pm".into()),
        net_terms: Some("Net 30".into()),
        details: Some("<p>Patching included</p>".into()),
        ..minimal_form()
    };
    let fields = validate(&form).unwrap();
    assert_eq!(fields.name, "Gold");
    assert_eq!(fields.renewal_frequency, Some(RenewalFrequency::ThreeYear));
    assert_eq!(
        fields.sla,
        SlaHours {
            low_response: Some(24),
            low_resolution: Some(48),
            medium_response: Some(12),
            medium_resolution: Some(24),
            high_response: Some(1),
            high_resolution: Some(0),
        }
    );
    assert_eq!(fields.rate_standard.as_deref(), Some("$100/hr"));
    assert_eq!(fields.details.as_deref(), Some("<p>Patching included</p>"));
}

#[test]
fn missing_required_fields_are_all_reported() {
    let errors = validate(&ContractTemplateForm::default()).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("name"), Some("is required"));
    assert_eq!(errors.get("description"), Some("is required"));
    assert_eq!(errors.get("type"), Some("is required"));
}

#[test]
fn blank_name_is_rejected() {
    let form = ContractTemplateForm { name: Some("   ".into()), ..minimal_form() };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.get("name"), Some("is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn name_length_limit_counts_characters() {
    let at_limit = ContractTemplateForm { name: Some("é".repeat(200)), ..minimal_form() };
    assert!(validate(&at_limit).is_ok());

    let over = ContractTemplateForm { description: Some("x".repeat(201)), ..minimal_form() };
    let errors = validate(&over).unwrap_err();
    assert_eq!(errors.get("description"), Some("must be at most 200 characters"));
}

#[test]
fn unknown_contract_type_is_rejected() {
    let form = ContractTemplateForm { contract_type: Some("Partially Managed".into()), ..minimal_form() };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.get("type"), Some("is not a valid contract type"));
}

#[test]
fn unknown_renewal_frequency_is_rejected() {
    let form = ContractTemplateForm { renewal_frequency: Some("Weekly".into()), ..minimal_form() };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.get("renewal_frequency"), Some("is not a valid renewal frequency"));
}

#[test]
fn sla_hours_reject_negative_fractional_and_text() {
    let form = ContractTemplateForm {
        sla_low_response_time: Some("-1".into()),
        sla_medium_response_time: Some("1.5".into()),
        sla_high_response_time: Some("soon".into()),
        ..minimal_form()
    };
    let errors = validate(&form).unwrap_err();
    let msg = "must be a non-negative whole number of hours";
    assert_eq!(errors.get("sla_low_response_time"), Some(msg));
    assert_eq!(errors.get("sla_medium_response_time"), Some(msg));
    assert_eq!(errors.get("sla_high_response_time"), Some(msg));
    assert_eq!(errors.len(), 3);
}

#[test]
fn sla_hours_accept_integral_number_input_forms() {
    let form = ContractTemplateForm {
        sla_low_response_time: Some("24.0".into()),
        sla_low_resolution_time: Some("1e2".into()),
        sla_medium_response_time: Some("+5".into()),
        sla_medium_resolution_time: Some("0".into()),
        ..minimal_form()
    };
    let fields = validate(&form).unwrap();
    assert_eq!(fields.sla.low_response, Some(24));
    assert_eq!(fields.sla.low_resolution, Some(100));
    assert_eq!(fields.sla.medium_response, Some(5));
    assert_eq!(fields.sla.medium_resolution, Some(0));
}

#[test]
fn sla_hours_reject_non_finite_and_out_of_range() {
    let form = ContractTemplateForm {
        sla_low_response_time: Some("inf".into()),
        sla_low_resolution_time: Some("NaN".into()),
        sla_high_response_time: Some("1e10".into()),
        sla_high_resolution_time: Some("-2.0".into()),
        ..minimal_form()
    };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.len(), 4);
}

#[test]
fn optional_text_fields_are_capped_at_200_characters() {
    type Setter = fn(&mut ContractTemplateForm, String);
    let fields: [(&str, Setter); 4] = [
        ("rate_standard", |f, v| f.rate_standard = Some(v)),
        ("rate_after_hours", |f, v| f.rate_after_hours = Some(v)),
        ("support_hours", |f, v| f.support_hours = Some(v)),
        ("net_terms", |f, v| f.net_terms = Some(v)),
    ];
    for (field, set) in fields {
        let mut at_limit = minimal_form();
        set(&mut at_limit, "x".repeat(200));
        assert!(validate(&at_limit).is_ok(), "{field} at 200 should pass");

        let mut over = minimal_form();
        set(&mut over, "x".repeat(201));
        let errors = validate(&over).unwrap_err();
        assert_eq!(errors.get(field), Some("must be at most 200 characters"), "{field}");
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn nul_characters_are_rejected_in_every_text_field() {
    let form = ContractTemplateForm {
        name: Some("Gold\0Tier".into()),
        description: Some("a\0b".into()),
        rate_standard: Some("100\0".into()),
        rate_after_hours: Some("\0150".into()),
        support_hours: Some("Mon\0Fri".into()),
        net_terms: Some("Net\030".into()),
        details: Some("<p>\0</p>".into()),
        ..minimal_form()
    };
    let errors = validate(&form).unwrap_err();
    for field in [
        "name",
        "description",
        "rate_standard",
        "rate_after_hours",
        "support_hours",
        "net_terms",
        "details",
    ] {
        assert_eq!(errors.get(field), Some("contains invalid characters"), "{field}");
    }
    assert_eq!(errors.len(), 7);

    let bad_type = ContractTemplateForm { contract_type: Some("Fully\0Managed".into()), ..minimal_form() };
    assert_eq!(validate(&bad_type).unwrap_err().get("type"), Some("is not a valid contract type"));
}

#[test]
fn details_keep_surrounding_whitespace_and_blank_details_are_absent() {
    let form = ContractTemplateForm { details: Some("\n  <p>Patching</p>\n".into()), ..minimal_form() };
    let fields = validate(&form).unwrap();
    assert_eq!(fields.details.as_deref(), Some("\n  <p>Patching</p>\n"));

    let blank = ContractTemplateForm { details: Some(" \n\t".into()), ..minimal_form() };
    assert_eq!(validate(&blank).unwrap().details, None);
}

#[test]
fn rates_accept_free_text() {
    let form = ContractTemplateForm {
        rate_standard: Some("call for quote".into()),
        rate_after_hours: Some("1.5x standard".into()),
        ..minimal_form()
    };
    let fields = validate(&form).unwrap();
    assert_eq!(fields.rate_standard.as_deref(), Some("call for quote"));
    assert_eq!(fields.rate_after_hours.as_deref(), Some("1.5x standard"));
}

#[test]
fn validation_errors_display_lists_fields_in_order() {
    let errors = validate(&ContractTemplateForm::default()).unwrap_err();
    assert_eq!(errors.to_string(), "description is required; name is required; type is required");
}

#[test]
fn form_from_template_round_trips_through_validate() {
    let fields = validate(&ContractTemplateForm {
        renewal_frequency: Some("Annually".into()),
        sla_high_response_time: Some("2".into()),
        net_terms: Some("Net 15".into()),
        ..minimal_form()
    })
    .unwrap();
    let record = ContractTemplate::new(Uuid::new_v4(), fields.clone(), time::OffsetDateTime::now_utc());

    let prefilled = ContractTemplateForm::from_template(&record);
    assert_eq!(prefilled.sla_high_response_time.as_deref(), Some("2"));
    assert_eq!(prefilled.sla_low_response_time, None);
    assert_eq!(validate(&prefilled).unwrap(), fields);
}

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn create_persists_valid_form() {
    let store = MemoryContractTemplateStore::new();
    let record = create(&store, &minimal_form()).await.unwrap();

    let listed = list(&store).await.unwrap();
    assert_eq!(listed, vec![record]);
}

#[tokio::test]
async fn create_rejects_invalid_form_without_writing() {
    let store = MemoryContractTemplateStore::new();
    let form = ContractTemplateForm { name: None, ..minimal_form() };

    let err = create(&store, &form).await.unwrap_err();
    assert!(matches!(err, ContractTemplateError::Validation(ref e) if e.get("name").is_some()));
    assert!(list(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_validates_before_touching_store() {
    let store = MemoryContractTemplateStore::new();
    let record = create(&store, &minimal_form()).await.unwrap();

    let bad = ContractTemplateForm { contract_type: Some("Retainer".into()), ..minimal_form() };
    assert!(matches!(update(&store, record.id, &bad).await, Err(ContractTemplateError::Validation(_))));
    assert_eq!(get(&store, record.id).await.unwrap(), record);

    let good = ContractTemplateForm { contract_type: Some("Break/Fix".into()), ..minimal_form() };
    let updated = update(&store, record.id, &good).await.unwrap();
    assert_eq!(updated.fields.contract_type, ContractType::BreakFix);
}

#[tokio::test]
async fn update_and_delete_unknown_id_are_not_found() {
    let store = MemoryContractTemplateStore::new();
    let id = Uuid::new_v4();
    assert!(matches!(update(&store, id, &minimal_form()).await, Err(ContractTemplateError::NotFound(_))));
    assert!(matches!(delete(&store, id).await, Err(ContractTemplateError::NotFound(_))));
}
