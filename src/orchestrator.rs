//! Lookup orchestrator for coordinating a single dependency lookup
//!
//! This module provides:
//! - Workflow coordination: gate → parse → resolve → fall back to POM → URL
//! - Lazy property loading, only when a placeholder needs resolving
//! - The enable check used to decide whether a lookup applies at all

use crate::domain::{BuildFileKind, DeclarationSyntax, Dependency, VariableMap};
use crate::editor::EditorContext;
use crate::error::LookupError;
use crate::parser::{extract_pom_dependency, matches_any, parse_declaration};
use crate::properties::{load_variables, PropertySource};
use crate::registry::RegistryUrlBuilder;
use serde::Serialize;
use tracing::debug;

/// Configuration for the orchestrator
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    /// URL builder for the target registry
    pub registry: RegistryUrlBuilder,
    /// Variables applied on top of the loaded properties
    pub overrides: VariableMap,
}

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// The resolved dependency
    pub dependency: Dependency,
    /// The syntax that matched
    pub syntax: DeclarationSyntax,
    /// The version as written, when it differed after resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_version: Option<String>,
    /// Registry lookup URL
    pub url: String,
}

/// Orchestrator for coordinating a lookup
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(config: OrchestratorConfig) -> Self {
        Self { config }
    }

    /// Determine the build file kind of the active document
    pub fn build_file_kind<C: EditorContext + ?Sized>(
        &self,
        ctx: &C,
    ) -> Result<BuildFileKind, LookupError> {
        let name = ctx
            .active_file_name()
            .ok_or_else(|| LookupError::no_context("no active file"))?;
        BuildFileKind::from_file_name(&name).ok_or_else(|| LookupError::unsupported_file(name))
    }

    /// Run a lookup against the editor context
    pub async fn lookup<C: EditorContext + ?Sized>(
        &self,
        ctx: &C,
        properties: &dyn PropertySource,
    ) -> Result<LookupResult, LookupError> {
        let kind = self.build_file_kind(ctx)?;
        let line = ctx
            .current_selection_text()
            .ok_or_else(|| LookupError::no_context("no line under the cursor"))?;
        debug!(kind = %kind, line = %line, "looking up dependency");

        if let Some(declaration) = parse_declaration(&line) {
            let raw_version = declaration.dependency.version().map(String::from);
            let declaration = if declaration.has_placeholder() {
                let variables = self.variables(properties).await;
                declaration.resolve(&variables)
            } else {
                declaration
            };

            let raw_version =
                raw_version.filter(|raw| Some(raw.as_str()) != declaration.dependency.version());
            return Ok(self.finish(
                declaration.dependency,
                declaration.syntax,
                raw_version,
            ));
        }

        if kind == BuildFileKind::MavenPom {
            if let Some(dependency) = self.pom_dependency(ctx) {
                return Ok(self.finish(dependency, DeclarationSyntax::PomBlock, None));
            }
        }

        Err(LookupError::NoDependency)
    }

    /// Check whether a lookup would find something, without running Gradle
    ///
    /// Tries the same sources in the same order as [`Orchestrator::lookup`].
    pub fn check<C: EditorContext + ?Sized>(&self, ctx: &C) -> bool {
        let Ok(kind) = self.build_file_kind(ctx) else {
            return false;
        };
        let Some(line) = ctx.current_selection_text() else {
            return false;
        };

        matches_any(&line)
            || (kind == BuildFileKind::MavenPom && self.pom_dependency(ctx).is_some())
    }

    fn pom_dependency<C: EditorContext + ?Sized>(&self, ctx: &C) -> Option<Dependency> {
        let total = ctx.line_count();
        if total == 0 {
            return None;
        }
        let lines = ctx.line_range(0, total - 1);
        extract_pom_dependency(&lines, ctx.cursor_line())
    }

    async fn variables(&self, properties: &dyn PropertySource) -> VariableMap {
        let mut variables = load_variables(properties).await;
        variables.extend(
            self.config
                .overrides
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        variables
    }

    fn finish(
        &self,
        dependency: Dependency,
        syntax: DeclarationSyntax,
        raw_version: Option<String>,
    ) -> LookupResult {
        let url = self.config.registry.build_url(&dependency);
        LookupResult {
            dependency,
            syntax,
            raw_version,
            url,
        }
    }
}
