//! `{{variable}}` placeholder scanning and substitution over template text.

use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid")
});

/// Collect every placeholder name in the content, in first-occurrence order
/// and without duplicates.
pub fn extract_placeholders(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for captures in PLACEHOLDER_PATTERN.captures_iter(content) {
        let name = &captures[1];
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    names
}

/// Substitute `{{key}}` occurrences with their values. Placeholders with no
/// entry in `values` are left as-is so a later pass can still find them.
pub fn replace_placeholders(content: &str, values: &BTreeMap<String, String>) -> String {
    let mut output = content.to_string();
    for (key, value) in values {
        let placeholder = format!("{{{{{key}}}}}");
        if output.contains(&placeholder) {
            output = output.replace(&placeholder, value);
        }
    }
    output
}
