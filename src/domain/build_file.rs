//! Build file kinds that can carry dependency declarations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported build file flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildFileKind {
    /// Gradle Groovy DSL (build.gradle)
    GradleGroovy,
    /// Gradle Kotlin DSL (build.gradle.kts)
    GradleKotlin,
    /// Maven POM or any other XML file
    MavenPom,
}

impl BuildFileKind {
    /// Determine the kind from a file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        // .gradle.kts must be checked before .gradle
        if name.ends_with(".gradle.kts") {
            Some(BuildFileKind::GradleKotlin)
        } else if name.ends_with(".gradle") {
            Some(BuildFileKind::GradleGroovy)
        } else if name.ends_with(".xml") {
            Some(BuildFileKind::MavenPom)
        } else {
            None
        }
    }

    /// Returns the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildFileKind::GradleGroovy => "Gradle (Groovy)",
            BuildFileKind::GradleKotlin => "Gradle (Kotlin)",
            BuildFileKind::MavenPom => "Maven POM",
        }
    }

    /// Returns true for Gradle build scripts
    pub fn is_gradle(&self) -> bool {
        matches!(
            self,
            BuildFileKind::GradleGroovy | BuildFileKind::GradleKotlin
        )
    }

}

impl fmt::Display for BuildFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_name() {
        assert_eq!(
            BuildFileKind::from_file_name("build.gradle"),
            Some(BuildFileKind::GradleGroovy)
        );
        assert_eq!(
            BuildFileKind::from_file_name("build.gradle.kts"),
            Some(BuildFileKind::GradleKotlin)
        );
        assert_eq!(
            BuildFileKind::from_file_name("pom.xml"),
            Some(BuildFileKind::MavenPom)
        );
        assert_eq!(BuildFileKind::from_file_name("Cargo.toml"), None);
        assert_eq!(BuildFileKind::from_file_name("gradle"), None);
    }

    #[test]
    fn test_is_gradle() {
        assert!(BuildFileKind::GradleGroovy.is_gradle());
        assert!(BuildFileKind::GradleKotlin.is_gradle());
        assert!(!BuildFileKind::MavenPom.is_gradle());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BuildFileKind::MavenPom), "Maven POM");
    }

    #[test]
    fn test_serde_kind() {
        let json = serde_json::to_string(&BuildFileKind::GradleKotlin).unwrap();
        assert_eq!(json, "\"gradle-kotlin\"");
    }
}
