//! Declaration syntaxes a dependency can be recognized from

use serde::{Deserialize, Serialize};
use std::fmt;

/// The grammar a dependency was extracted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationSyntax {
    /// `implementation("group:artifact:version")`
    FunctionCall,
    /// `implementation 'group:artifact:version'`
    ShortForm,
    /// `implementation group: 'g', name: 'a', version: 'v'`
    NamedArguments,
    /// `<dependency>...</dependency>` block in a POM
    PomBlock,
}

impl DeclarationSyntax {
    /// Single-line syntaxes in the order they are tried. First match wins.
    pub const LINE_PRIORITY: [DeclarationSyntax; 3] = [
        DeclarationSyntax::FunctionCall,
        DeclarationSyntax::ShortForm,
        DeclarationSyntax::NamedArguments,
    ];

    /// Returns the display name for this syntax
    pub fn display_name(&self) -> &'static str {
        match self {
            DeclarationSyntax::FunctionCall => "function call",
            DeclarationSyntax::ShortForm => "short form",
            DeclarationSyntax::NamedArguments => "named arguments",
            DeclarationSyntax::PomBlock => "POM dependency block",
        }
    }

    /// Whether versions in this syntax may contain placeholders to resolve
    pub fn resolves_placeholders(&self) -> bool {
        matches!(self, DeclarationSyntax::FunctionCall)
    }
}

impl fmt::Display for DeclarationSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
