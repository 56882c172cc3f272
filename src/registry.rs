//! Maven repository URL construction
//!
//! URL format: {base}/{group}/{artifact}[/{version}]

use crate::domain::Dependency;

/// mvnrepository.com artifact base URL
pub const MVNREPOSITORY_BASE_URL: &str = "https://mvnrepository.com/artifact";

/// Builds registry lookup URLs for dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryUrlBuilder {
    base_url: String,
}

impl Default for RegistryUrlBuilder {
    fn default() -> Self {
        Self::new(MVNREPOSITORY_BASE_URL)
    }
}

impl RegistryUrlBuilder {
    /// Create a builder for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the lookup URL; the version segment is added only when present
    pub fn build_url(&self, dependency: &Dependency) -> String {
        let mut url = format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(dependency.group()),
            urlencoding::encode(dependency.artifact())
        );
        if let Some(version) = dependency.version() {
            url.push('/');
            url.push_str(&urlencoding::encode(version));
        }
        url
    }
}
