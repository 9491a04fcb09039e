//! Template analysis workflow: placeholder scanning, variable inference,
//! value validation, and standard-variable preparation.

pub mod inference;
pub mod placeholders;
mod rules;
pub mod standard;
pub mod validation;

pub use inference::{
    generate_label, infer_variable_config, infer_variable_configs, VariableConfig, VariableType,
};
pub use placeholders::{extract_placeholders, replace_placeholders};
pub use validation::{validate_variable_value, ValidationOutcome};

use serde::Serialize;
use tracing::debug;

/// Variables the document generator always provides, so templates using them
/// need no extra form input.
pub const STANDARD_VARIABLES: &[&str] = &[
    "project_name",
    "company_name",
    "contact_name",
    "price",
    "price_before_tax",
    "tax_amount",
    "date",
    "year",
    "month",
    "day",
    "roc_year",
    "roc_date",
    "document_number",
    "quotation_number",
    "contract_number",
    "invoice_number",
    "contact_info",
    "contact_email",
    "contact_phone",
    "company_address",
    "created_at",
    "updated_at",
];

/// Placeholders found in a template, split by whether the document generator
/// supplies them automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateAnalysis {
    pub standard: Vec<String>,
    pub extra: Vec<String>,
    pub all: Vec<String>,
}

impl TemplateAnalysis {
    /// Inferred field configurations for every placeholder, standard ones
    /// included.
    pub fn configs(&self) -> Vec<VariableConfig> {
        infer_variable_configs(&self.all)
    }
}

/// Scan template content for `{{variable}}` placeholders and categorize them
/// against the standard set. Each list comes back sorted.
pub fn analyze_template(content: &str) -> TemplateAnalysis {
    let found = extract_placeholders(content);

    let mut standard = Vec::new();
    let mut extra = Vec::new();
    for name in &found {
        if STANDARD_VARIABLES.contains(&name.as_str()) {
            standard.push(name.clone());
        } else {
            extra.push(name.clone());
        }
    }

    let mut all = found;
    standard.sort();
    extra.sort();
    all.sort();

    debug!(
        total = all.len(),
        extra = extra.len(),
        "template analysis complete"
    );

    TemplateAnalysis {
        standard,
        extra,
        all,
    }
}
