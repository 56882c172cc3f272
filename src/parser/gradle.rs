//! Gradle dependency declaration recognizer
//!
//! Handles:
//! - Function-call notation: implementation("group:name:version")
//! - String notation: implementation 'group:name:version'
//! - Map notation: implementation group: 'x', name: 'y', version: 'z'
//! - Placeholder versions in function-call notation ($version, ${version})

use crate::domain::{DeclarationSyntax, Dependency, VariableMap};
use crate::parser::variables::{has_placeholder, resolve_version};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Function-call notation: implementation("group:name[:version]")
// The version may be a literal or a $name / ${name} placeholder.
static DEP_FUNCTION_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([a-zA-Z0-9_]+)\("([a-zA-Z0-9_.-]+):([a-zA-Z0-9_.-]+)(?::([a-zA-Z0-9_.-]+|\$\{?[a-zA-Z0-9_]+\}?)?)?"\)"#,
    )
    .unwrap()
});

// String notation: implementation 'group:name:version'
// Note: Uses non-backreference pattern (accepts either quote type)
static DEP_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([a-zA-Z0-9_]+)\s*['"]([a-zA-Z0-9_.-]+):([a-zA-Z0-9_.-]+):([a-zA-Z0-9_.-]+)['"]"#,
    )
    .unwrap()
});

// Map notation: implementation group: 'x', name: 'y', version: 'z'
static DEP_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([a-zA-Z0-9_]+)\s*group:\s*['"]([a-zA-Z0-9_.-]+)['"],\s*name:\s*['"]([a-zA-Z0-9_.-]+)['"],\s*version:\s*['"]([a-zA-Z0-9_.-]+)['"]"#,
    )
    .unwrap()
});

/// A dependency recognized on a single line, with the syntax that matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The grammar that produced this declaration
    pub syntax: DeclarationSyntax,
    /// Extracted coordinate; the version is still raw (unresolved)
    pub dependency: Dependency,
}

impl Declaration {
    /// Returns true if the version needs placeholder resolution
    pub fn has_placeholder(&self) -> bool {
        self.syntax.resolves_placeholders()
            && self.dependency.version().is_some_and(has_placeholder)
    }

    /// Resolve placeholders in the version against `variables`
    ///
    /// Only function-call declarations are resolved; the other syntaxes only
    /// admit literal versions and are returned unchanged. A version that
    /// resolves to an empty string becomes absent.
    pub fn resolve(self, variables: &VariableMap) -> Self {
        if !self.syntax.resolves_placeholders() {
            return self;
        }

        let resolved = self
            .dependency
            .version()
            .map(|raw| resolve_version(raw, variables));
        Self {
            syntax: self.syntax,
            dependency: self.dependency.with_version(resolved),
        }
    }
}

/// Returns the line pattern for a syntax (None for block syntaxes)
fn pattern_for(syntax: DeclarationSyntax) -> Option<&'static Regex> {
    match syntax {
        DeclarationSyntax::FunctionCall => Some(&*DEP_FUNCTION_CALL),
        DeclarationSyntax::ShortForm => Some(&*DEP_STRING),
        DeclarationSyntax::NamedArguments => Some(&*DEP_MAP),
        DeclarationSyntax::PomBlock => None,
    }
}

/// Try a single syntax against a line
pub fn match_syntax(syntax: DeclarationSyntax, line: &str) -> Option<Declaration> {
    let caps = pattern_for(syntax)?.captures(line)?;

    let group = caps.get(2).map(|m| m.as_str())?;
    let artifact = caps.get(3).map(|m| m.as_str())?;
    let version = caps.get(4).map(|m| m.as_str().to_string());

    let dependency = Dependency::new(group, artifact, version)?;
    Some(Declaration { syntax, dependency })
}

/// Classify a line and extract the dependency it declares
///
/// Syntaxes are tried in [`DeclarationSyntax::LINE_PRIORITY`] order and the
/// first one that matches anywhere in the line wins.
pub fn parse_declaration(line: &str) -> Option<Declaration> {
    let declaration = DeclarationSyntax::LINE_PRIORITY
        .iter()
        .find_map(|syntax| match_syntax(*syntax, line));

    match &declaration {
        Some(decl) => debug!(syntax = %decl.syntax, dependency = %decl.dependency, "matched declaration"),
        None => debug!(line, "no declaration syntax matched"),
    }
    declaration
}

/// Extract the dependency declared on a line, with a raw version
pub fn parse_dependency(line: &str) -> Option<Dependency> {
    parse_declaration(line).map(|decl| decl.dependency)
}

/// Returns true if any line syntax matches
pub fn matches_any(line: &str) -> bool {
    DeclarationSyntax::LINE_PRIORITY
        .iter()
        .filter_map(|syntax| pattern_for(*syntax))
        .any(|regex| regex.is_match(line))
}
