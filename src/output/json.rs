//! JSON output formatter for machine processing

use crate::orchestrator::LookupResult;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a lookup
#[derive(Serialize)]
struct JsonOutput<'a> {
    group: &'a str,
    artifact: &'a str,
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_version: Option<&'a str>,
    syntax: crate::domain::DeclarationSyntax,
    url: &'a str,
    opened: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        result: &LookupResult,
        opened: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            group: result.dependency.group(),
            artifact: result.dependency.artifact(),
            version: result.dependency.version(),
            raw_version: result.raw_version.as_deref(),
            syntax: result.syntax,
            url: &result.url,
            opened,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeclarationSyntax, Dependency};

    #[test]
    fn test_json_schema() {
        let result = LookupResult {
            dependency: Dependency::new("g", "a", None).unwrap(),
            syntax: DeclarationSyntax::ShortForm,
            raw_version: None,
            url: "https://mvnrepository.com/artifact/g/a".to_string(),
        };
        let mut buf = Vec::new();
        JsonFormatter::new().format(&result, false, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["group"], "g");
        assert_eq!(value["artifact"], "a");
        assert!(value["version"].is_null());
        assert!(value.get("raw_version").is_none());
        assert_eq!(value["syntax"], "short-form");
        assert_eq!(value["url"], "https://mvnrepository.com/artifact/g/a");
        assert_eq!(value["opened"], false);
    }

    #[test]
    fn test_json_raw_version() {
        let result = LookupResult {
            dependency: Dependency::new("g", "a", Some("2".to_string())).unwrap(),
            syntax: DeclarationSyntax::FunctionCall,
            raw_version: Some("$v".to_string()),
            url: "u".to_string(),
        };
        let mut buf = Vec::new();
        JsonFormatter::new().format(&result, true, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["version"], "2");
        assert_eq!(value["raw_version"], "$v");
        assert_eq!(value["opened"], true);
    }
}
