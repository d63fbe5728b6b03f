//! Endpoint path templates
//!
//! Resource paths such as `changes/{{ change_id }}/notes` name the key
//! columns whose values select the parent object. Rendering substitutes the
//! supplied qualifier values.

use crate::error::{Error, Result};
use crate::types::Quals;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ column_name }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("template regex is valid")
});

/// Render a path template with qualifier values
///
/// Every variable must be supplied; all missing names are reported together.
pub fn render(template: &str, quals: &Quals) -> Result<String> {
    let mut missing = Vec::new();

    let rendered = TEMPLATE_REGEX.replace_all(template, |caps: &regex::Captures<'_>| {
        let name = &caps[1];
        match quals.get(name) {
            Some(value) => value.to_string(),
            None => {
                missing.push(name.to_string());
                String::new()
            }
        }
    });

    if missing.is_empty() {
        Ok(rendered.into_owned())
    } else {
        Err(Error::undefined_var(missing.join(", ")))
    }
}

/// Names of the variables a template refers to, in order of appearance
pub fn variables(template: &str) -> Vec<&str> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}
