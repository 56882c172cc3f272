//! Core domain models for mvnlink
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency coordinates (group, artifact, optional version)
//! - Build file kinds that are in scope
//! - Declaration syntaxes a dependency was recognized from
//! - The variable map used for placeholder resolution

mod build_file;
mod dependency;
mod syntax;

pub use build_file::BuildFileKind;
pub use dependency::Dependency;
pub use syntax::DeclarationSyntax;

use std::collections::HashMap;

/// Variable name to value, built once per lookup
pub type VariableMap = HashMap<String, String>;
