//! Project root detection for build files
//!
//! The project root is where the Gradle wrapper lives and is used as the
//! working directory for property listing.

use std::path::{Path, PathBuf};

/// Files that mark a Gradle project root, in order of preference
const ROOT_MARKERS: [&str; 4] = [
    "gradlew",
    "gradlew.bat",
    "settings.gradle",
    "settings.gradle.kts",
];

/// Find the project root for a build file
///
/// Walks up from the file's directory to the nearest ancestor containing a
/// Gradle wrapper or settings script. Falls back to the file's directory.
pub fn find_project_root(file: &Path) -> PathBuf {
    let start = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    start
        .ancestors()
        .find(|dir| is_project_root(dir))
        .unwrap_or(start)
        .to_path_buf()
}

/// Check if a directory looks like a Gradle project root
pub fn is_project_root(dir: &Path) -> bool {
    ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists())
}
