//! Text output formatter for human-readable display

use crate::orchestrator::LookupResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for terminal output
pub struct TextFormatter {
    verbosity: Verbosity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(
        &self,
        result: &LookupResult,
        opened: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Verbose {
            let dep = &result.dependency;
            writeln!(writer, "{} {}", "Group:".bold(), dep.group())?;
            writeln!(writer, "{} {}", "Artifact:".bold(), dep.artifact())?;
            match (dep.version(), &result.raw_version) {
                (Some(version), Some(raw)) => {
                    writeln!(writer, "{} {} (from {})", "Version:".bold(), version.green(), raw)?
                }
                (Some(version), None) => writeln!(writer, "{} {}", "Version:".bold(), version.green())?,
                (None, _) => writeln!(writer, "{} {}", "Version:".bold(), "(any)".dimmed())?,
            }
            writeln!(writer, "{} {}", "Matched:".bold(), result.syntax)?;
            if opened {
                writeln!(writer, "{}", "Opened in browser".cyan())?;
            }
        }

        writeln!(writer, "{}", result.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeclarationSyntax, Dependency};

    fn sample_result() -> LookupResult {
        LookupResult {
            dependency: Dependency::new("org.example", "lib", Some("1.2.0".to_string())).unwrap(),
            syntax: DeclarationSyntax::FunctionCall,
            raw_version: Some("${libVersion}".to_string()),
            url: "https://mvnrepository.com/artifact/org.example/lib/1.2.0".to_string(),
        }
    }

    fn render(formatter: &TextFormatter, result: &LookupResult, opened: bool) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        formatter.format(result, opened, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_normal_prints_url_only() {
        let out = render(&TextFormatter::new(Verbosity::Normal), &sample_result(), true);
        assert_eq!(out, "https://mvnrepository.com/artifact/org.example/lib/1.2.0\n");
    }

    #[test]
    fn test_verbose_prints_details() {
        let out = render(&TextFormatter::new(Verbosity::Verbose), &sample_result(), true);
        assert!(out.contains("Group: org.example"));
        assert!(out.contains("Artifact: lib"));
        assert!(out.contains("Version: 1.2.0 (from ${libVersion})"));
        assert!(out.contains("Matched: function call"));
        assert!(out.contains("Opened in browser"));
        assert!(out.ends_with("https://mvnrepository.com/artifact/org.example/lib/1.2.0\n"));
    }

    #[test]
    fn test_verbose_without_version() {
        let result = LookupResult {
            dependency: Dependency::new("g", "a", None).unwrap(),
            syntax: DeclarationSyntax::PomBlock,
            raw_version: None,
            url: "https://mvnrepository.com/artifact/g/a".to_string(),
        };
        let out = render(&TextFormatter::new(Verbosity::Verbose), &result, false);
        assert!(out.contains("Version: (any)"));
        assert!(!out.contains("Opened in browser"));
    }
}
