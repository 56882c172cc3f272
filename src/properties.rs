//! Gradle project properties used to resolve version placeholders
//!
//! This module provides:
//! - Running `gradlew -q properties` with a bounded timeout
//! - Parsing `key: value` lines from its output
//! - Graceful fallback to an empty variable map on any failure

use crate::domain::VariableMap;
use crate::error::PropertyError;
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Default time allowed for the property listing to finish
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Gradle wrapper script name for the current platform
#[cfg(windows)]
const WRAPPER_SCRIPT: &str = "gradlew.bat";
#[cfg(not(windows))]
const WRAPPER_SCRIPT: &str = "gradlew";

// key: value
static PROPERTY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+):\s+(.*)").unwrap());

/// Trait for sources of project variables
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Get a short name for logging
    fn name(&self) -> &'static str;

    /// Load the variable map
    async fn load(&self) -> Result<VariableMap, PropertyError>;
}

/// Lists properties through the project's Gradle wrapper
#[derive(Debug, Clone)]
pub struct GradlewPropertySource {
    project_root: PathBuf,
    timeout: Duration,
}

impl GradlewPropertySource {
    /// Create a property source for the given project root
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the timeout for the property listing
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the project root
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the wrapper script path
    pub fn script_path(&self) -> PathBuf {
        self.project_root.join(WRAPPER_SCRIPT)
    }
}

#[async_trait]
impl PropertySource for GradlewPropertySource {
    fn name(&self) -> &'static str {
        "gradlew"
    }

    async fn load(&self) -> Result<VariableMap, PropertyError> {
        let script = self.script_path();
        if !script.exists() {
            return Err(PropertyError::script_not_found(script));
        }

        let command_str = format!("{} -q properties", script.display());
        debug!(command = %command_str, root = %self.project_root.display(), "listing gradle properties");

        let mut command = Command::new(&script);
        command
            .args(["-q", "properties"])
            .current_dir(&self.project_root)
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(PropertyError::SpawnFailed {
                    command: command_str,
                    source,
                })
            }
            Err(_) => return Err(PropertyError::timeout(command_str, self.timeout)),
        };

        if !output.status.success() {
            return Err(PropertyError::NonZeroExit {
                command: command_str,
                code: output.status.code(),
            });
        }

        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push('\n');
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(parse_properties_output(&text))
    }
}

/// A fixed set of variables
#[derive(Debug, Clone, Default)]
pub struct StaticPropertySource {
    variables: VariableMap,
}

impl StaticPropertySource {
    /// Create a source that always returns `variables`
    pub fn new(variables: VariableMap) -> Self {
        Self { variables }
    }

    /// Create a source with no variables
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertySource for StaticPropertySource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn load(&self) -> Result<VariableMap, PropertyError> {
        Ok(self.variables.clone())
    }
}

/// Parse `key: value` lines from property listing output
///
/// Later occurrences of a key overwrite earlier ones. Values are trimmed.
pub fn parse_properties_output(output: &str) -> VariableMap {
    let mut variables = VariableMap::new();
    for line in output.lines() {
        if let Some(caps) = PROPERTY_LINE.captures(line) {
            let key = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let value = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            variables.insert(key.to_string(), value.trim().to_string());
        }
    }
    variables
}

/// Load variables, falling back to an empty map on any failure
pub async fn load_variables(source: &dyn PropertySource) -> VariableMap {
    match source.load().await {
        Ok(variables) => {
            debug!(source = source.name(), count = variables.len(), "loaded variables");
            variables
        }
        Err(e) => {
            warn!(source = source.name(), error = %e, "could not load variables, placeholders stay unresolved");
            VariableMap::new()
        }
    }
}
