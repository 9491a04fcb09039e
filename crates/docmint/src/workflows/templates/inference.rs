//! Rule-based classification of template variable names.
//!
//! Classification is a pure function of the name: the ordered table in
//! [`super::rules`] is walked top to bottom and the first matching rule
//! supplies the type and metadata. Names nothing matches fall back to a plain
//! text field, so inference is total and never fails.

use super::rules::inference_rules;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("word-start pattern is valid"));

/// Closed set of semantic field kinds a template variable can take. Kept
/// closed on purpose: a new kind must be wired through validation, the HTML
/// input mapping, and the icon mapping before it compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    Text,
    Number,
    Date,
    Email,
    Tel,
    Select,
    Textarea,
}

impl VariableType {
    /// The `type` attribute for an HTML input element. `select` and
    /// `textarea` map to themselves as markers for the caller to render a
    /// different widget.
    pub const fn html_input_type(self) -> &'static str {
        match self {
            VariableType::Text => "text",
            VariableType::Number => "number",
            VariableType::Date => "date",
            VariableType::Email => "email",
            VariableType::Tel => "tel",
            VariableType::Select => "select",
            VariableType::Textarea => "textarea",
        }
    }

    /// Icon name used by form renderers.
    pub const fn icon(self) -> &'static str {
        match self {
            VariableType::Text => "Type",
            VariableType::Number => "Hash",
            VariableType::Date => "Calendar",
            VariableType::Email => "Mail",
            VariableType::Tel => "Phone",
            VariableType::Select => "List",
            VariableType::Textarea => "AlignLeft",
        }
    }
}

/// The inferred shape of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VariableType,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Derive a display label from a raw variable name: underscores and hyphens
/// become spaces, then the first character of each word is uppercased. The
/// rest of each word keeps its original case.
pub fn generate_label(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    WORD_START
        .replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Classify a variable name into a field configuration. First match wins.
pub fn infer_variable_config(name: &str) -> VariableConfig {
    let label = generate_label(name);

    for rule in inference_rules() {
        if rule.pattern.is_match(name) {
            return VariableConfig {
                name: name.to_string(),
                kind: rule.kind,
                label,
                required: rule.required,
                default_value: String::new(),
                options: rule
                    .options
                    .map(|options| options.iter().map(|option| option.to_string()).collect()),
                placeholder: rule.placeholder.map(str::to_string),
                help_text: rule.help_text.map(str::to_string),
            };
        }
    }

    let placeholder = format!("Enter {}", label.to_lowercase());
    VariableConfig {
        name: name.to_string(),
        kind: VariableType::Text,
        label,
        required: false,
        default_value: String::new(),
        options: None,
        placeholder: Some(placeholder),
        help_text: None,
    }
}

/// Classify many names at once, preserving order. Duplicates are kept.
pub fn infer_variable_configs<S: AsRef<str>>(names: &[S]) -> Vec<VariableConfig> {
    names
        .iter()
        .map(|name| infer_variable_config(name.as_ref()))
        .collect()
}
