//! `{$name}` placeholder resolution.
//!
//! Names are collected once each in order of first appearance, a value is
//! requested for each, and only when every value is known is the template
//! rewritten. Cancelling any prompt leaves nothing substituted.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::debug;

use crate::error::{Result, SnippetError};
use crate::handlers::prompts::{Prompter, non_blank};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\$([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"));

/// Distinct placeholder names in order of first occurrence
pub fn placeholder_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace every `{$name}` whose name has a value. The template is scanned
/// once, so text inside a value is never treated as a placeholder, unlike a
/// name-by-name replace where a later name could match inside an earlier value.
pub fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Prompt for each placeholder and return the fully resolved text
pub fn resolve_placeholders(template: &str, prompter: &mut dyn Prompter) -> Result<String> {
    let names = placeholder_names(template);
    if names.is_empty() {
        return Ok(template.to_string());
    }

    let mut values = HashMap::with_capacity(names.len());
    for name in names {
        let label = format!("Value for {}", name);
        match prompter.prompt(&name, &label, &non_blank)? {
            Some(value) => {
                values.insert(name, value);
            }
            None => {
                debug!(placeholder = %name, "Placeholder prompt cancelled");
                return Err(SnippetError::Cancelled);
            }
        }
    }

    Ok(substitute(template, &values))
}
