//! Integration specifications for the template analysis workflow.
//!
//! Walks the path a template takes through the system: placeholder scanning,
//! variable inference, form-value validation, and finally standard-variable
//! preparation with a rendered document body.

use chrono::NaiveDate;
use docmint::workflows::templates::standard::{
    standard_variables, CompanySnapshot, ContactSnapshot, ProjectSnapshot,
};
use docmint::workflows::templates::{
    analyze_template, infer_variable_configs, replace_placeholders, validate_variable_value,
    VariableType,
};

const QUOTE_TEMPLATE: &str = "\
Quotation {{quotation_number}}
Project: {{project_name}} ({{status}})
Client: {{company_name}} / {{contact_info}}
Delivery: {{delivery_date}}
Total: {{price}} (tax {{tax_amount}})
Remarks: {{internal_notes}}
";

#[test]
fn scanned_variables_infer_expected_field_kinds() {
    let names = ["project_name", "email", "price", "date"];
    let configs = infer_variable_configs(&names);

    let kinds: Vec<VariableType> = configs.iter().map(|config| config.kind).collect();
    assert_eq!(
        kinds,
        vec![
            VariableType::Text,
            VariableType::Email,
            VariableType::Number,
            VariableType::Date,
        ]
    );

    assert_eq!(configs[0].label, "Project Name");
    assert!(configs.iter().all(|config| config.default_value.is_empty()));
}

#[test]
fn template_analysis_flags_only_extra_variables_for_input() {
    let analysis = analyze_template(QUOTE_TEMPLATE);

    assert_eq!(
        analysis.extra,
        vec!["delivery_date", "internal_notes", "status"]
    );
    assert!(analysis
        .standard
        .iter()
        .all(|name| !analysis.extra.contains(name)));

    let configs = analysis.configs();
    let by_name = |name: &str| {
        configs
            .iter()
            .find(|config| config.name == name)
            .unwrap_or_else(|| panic!("config for {name}"))
    };

    assert_eq!(by_name("delivery_date").kind, VariableType::Date);
    assert_eq!(by_name("internal_notes").kind, VariableType::Textarea);
    assert_eq!(by_name("status").kind, VariableType::Select);
    assert!(by_name("status").required);
}

#[test]
fn collected_values_validate_against_inferred_configs() {
    let analysis = analyze_template(QUOTE_TEMPLATE);
    let configs = analysis.configs();

    let status = configs
        .iter()
        .find(|config| config.name == "status")
        .expect("status config");
    assert!(validate_variable_value("in_progress", status).valid);
    assert!(!validate_variable_value("", status).valid);
    assert!(!validate_variable_value("archived", status).valid);

    let delivery = configs
        .iter()
        .find(|config| config.name == "delivery_date")
        .expect("delivery config");
    assert!(validate_variable_value("2025-11-03", delivery).valid);
    assert!(!validate_variable_value("03.11.2025", delivery).valid);
}

#[test]
fn standard_variables_render_into_the_template() {
    let project = ProjectSnapshot {
        name: "Office Fit-Out".to_string(),
        price: 84_000.0,
        date: NaiveDate::from_ymd_opt(2025, 10, 27).expect("valid date"),
    };
    let company = CompanySnapshot {
        name: "Northgate Ltd".to_string(),
        address: "22 Harbor Rd".to_string(),
    };
    let contact = ContactSnapshot {
        name: "Chen Yu".to_string(),
        email: "chen.yu@example.com".to_string(),
        phone: Some("0912-345-678".to_string()),
    };
    let generated_at = NaiveDate::from_ymd_opt(2025, 10, 27)
        .expect("valid date")
        .and_hms_opt(14, 0, 0)
        .expect("valid time");

    let values = standard_variables(&project, &company, &contact, 2, 0.05, generated_at)
        .expect("standard variables build");
    let rendered = replace_placeholders(QUOTE_TEMPLATE, &values);

    assert!(rendered.contains("Quotation HIYES25JBA002"));
    assert!(rendered.contains("Project: Office Fit-Out"));
    assert!(rendered.contains("Chen Yu (0912-345-678)"));
    // Extra variables were not supplied, so their placeholders survive.
    assert!(rendered.contains("{{status}}"));
    assert!(rendered.contains("{{delivery_date}}"));
    assert!(rendered.contains("{{internal_notes}}"));
}
