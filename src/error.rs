//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LookupError: No usable context or no recognizable dependency
//! - PropertyError: Gradle property listing failures (never user-visible)
//! - BrowserError: Failures launching the system browser
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that end a lookup with a message to the user
#[derive(Error, Debug)]
pub enum LookupError {
    /// No editor, file or cursor line to work with
    #[error("no editor or project found: {message}")]
    NoContext { message: String },

    /// The active file is not a Gradle or Maven build file
    #[error("unsupported file '{name}': expected a .gradle, .gradle.kts or .xml file")]
    UnsupportedFile { name: String },

    /// Nothing on the cursor line (or around it) looks like a dependency
    #[error("no valid dependency found on the selected line")]
    NoDependency,

    /// The build file could not be read
    #[error("failed to read build file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested cursor line does not exist
    #[error("line {line} is out of range: {path} has {total} lines")]
    LineOutOfRange {
        path: PathBuf,
        line: usize,
        total: usize,
    },
}

/// Errors while listing Gradle project properties
#[derive(Error, Debug)]
pub enum PropertyError {
    /// Wrapper script is missing
    #[error("gradle wrapper not found: {path}")]
    ScriptNotFound { path: PathBuf },

    /// The process could not be started
    #[error("failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited unsuccessfully
    #[error("'{command}' exited with status {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    NonZeroExit { command: String, code: Option<i32> },

    /// The process did not finish in time
    #[error("'{command}' timed out after {}ms", .timeout.as_millis())]
    Timeout { command: String, timeout: Duration },
}

/// Errors launching the system browser
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The opener could not be started or reported failure
    #[error("failed to open browser for {url}: {message}")]
    LaunchFailed { url: String, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid -D definition
    #[error("invalid variable definition '{value}': expected format 'name=value'")]
    InvalidDefine { value: String },

    /// Invalid duration format
    #[error("invalid duration format '{value}': expected format like '500ms', '5s', '2m'")]
    InvalidDuration { value: String },

    /// Invalid line number
    #[error("invalid line number '{value}': expected a positive integer")]
    InvalidLine { value: String },
}

impl LookupError {
    /// Creates a new NoContext error
    pub fn no_context(message: impl Into<String>) -> Self {
        LookupError::NoContext {
            message: message.into(),
        }
    }

    /// Creates a new UnsupportedFile error
    pub fn unsupported_file(name: impl Into<String>) -> Self {
        LookupError::UnsupportedFile { name: name.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LookupError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl PropertyError {
    /// Creates a new ScriptNotFound error
    pub fn script_not_found(path: impl Into<PathBuf>) -> Self {
        PropertyError::ScriptNotFound { path: path.into() }
    }

    /// Creates a new Timeout error
    pub fn timeout(command: impl Into<String>, timeout: Duration) -> Self {
        PropertyError::Timeout {
            command: command.into(),
            timeout,
        }
    }
}

impl BrowserError {
    /// Creates a new LaunchFailed error
    pub fn launch_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        BrowserError::LaunchFailed {
            url: url.into(),
            message: message.into(),
        }
    }
}
