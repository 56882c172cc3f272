//! Placeholder substitution for Gradle-style `${name}` and `$name` tokens

use crate::domain::VariableMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// ${name} or $name; group 1 is the braced name, group 2 the bare name
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([a-zA-Z0-9_]+)\}|\$([a-zA-Z0-9_]+)").unwrap());

/// Returns true if the input contains a `$name` or `${name}` token
pub fn has_placeholder(input: &str) -> bool {
    PLACEHOLDER.is_match(input)
}

/// Substitute placeholders in `input` with values from `variables`
///
/// Braced and bare tokens are both replaced in a single left-to-right scan of
/// the original text, so a substituted value is never scanned again and
/// resolution stays one level deep even for cyclic definitions. Unknown
/// names are left verbatim.
pub fn resolve_version(input: &str, variables: &VariableMap) -> String {
    PLACEHOLDER
        .replace_all(input, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or("");
            match variables.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
