//! Dependency declaration parsers
//!
//! This module provides:
//! - Gradle line recognizers tried in a fixed priority order
//! - Maven POM `<dependency>` block extraction around a cursor line
//! - Gradle-style placeholder resolution for versions

mod gradle;
mod pom;
mod variables;

pub use gradle::{match_syntax, matches_any, parse_declaration, parse_dependency, Declaration};
pub use pom::{extract_pom_dependency, find_dependency_block};
pub use variables::{has_placeholder, resolve_version};
