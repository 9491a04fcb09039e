//! Validation of submitted values against inferred field configurations.
//!
//! Failures are reported as data, never as errors, so callers can aggregate
//! the outcome for every field of a form in one pass.

use super::inference::{VariableConfig, VariableType};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));
static TEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s()+-]+$").expect("tel pattern is valid"));

const TEXT_MAX_CHARS: usize = 255;
const TEXTAREA_MAX_CHARS: usize = 2000;

/// Result of validating one field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Check a submitted value against its field configuration.
///
/// Required fields reject blank values; optional blank values pass without
/// any type check. Range limits beyond the ones here are a UI concern.
pub fn validate_variable_value(value: &str, config: &VariableConfig) -> ValidationOutcome {
    if value.trim().is_empty() {
        if config.required {
            return ValidationOutcome::invalid(format!("{} is required", config.label));
        }
        return ValidationOutcome::ok();
    }

    match config.kind {
        VariableType::Email => {
            if !EMAIL_PATTERN.is_match(value) {
                return ValidationOutcome::invalid("Invalid email format");
            }
        }
        VariableType::Number => {
            let parsed = value.trim().parse::<f64>();
            if !parsed.map(f64::is_finite).unwrap_or(false) {
                return ValidationOutcome::invalid("Must be a valid number");
            }
        }
        VariableType::Date => {
            if !DATE_PATTERN.is_match(value) {
                return ValidationOutcome::invalid("Date must be in YYYY-MM-DD format");
            }
            if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                return ValidationOutcome::invalid("Invalid date");
            }
        }
        VariableType::Tel => {
            if !TEL_PATTERN.is_match(value) {
                return ValidationOutcome::invalid("Invalid phone number format");
            }
        }
        VariableType::Select => {
            if let Some(options) = &config.options {
                if !options.iter().any(|option| option == value) {
                    return ValidationOutcome::invalid("Invalid selection");
                }
            }
        }
        VariableType::Text => {
            if value.chars().count() > TEXT_MAX_CHARS {
                return ValidationOutcome::invalid(format!(
                    "Maximum {TEXT_MAX_CHARS} characters allowed"
                ));
            }
        }
        VariableType::Textarea => {
            if value.chars().count() > TEXTAREA_MAX_CHARS {
                return ValidationOutcome::invalid(format!(
                    "Maximum {TEXTAREA_MAX_CHARS} characters allowed"
                ));
            }
        }
    }

    ValidationOutcome::ok()
}
