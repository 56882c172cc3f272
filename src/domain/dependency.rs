//! Dependency coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Maven coordinate: group, artifact and optional version
///
/// Group and artifact are always non-empty. The version is either a
/// concrete string or absent, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    group: String,
    artifact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl Dependency {
    /// Creates a new dependency
    ///
    /// Returns `None` when group or artifact is empty. An empty version is
    /// normalized to `None`.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<String>,
    ) -> Option<Self> {
        let group = group.into();
        let artifact = artifact.into();
        if group.is_empty() || artifact.is_empty() {
            return None;
        }

        Some(Self {
            group,
            artifact,
            version: version.filter(|v| !v.is_empty()),
        })
    }

    /// Returns the group identifier
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the artifact identifier
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Returns the version, if pinned
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns a copy with the version replaced (builder pattern)
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version.filter(|v| !v.is_empty());
        self
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.artifact, version),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}
