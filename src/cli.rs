//! CLI argument parsing module for mvnlink

use crate::domain::VariableMap;
use crate::error::ConfigError;
use crate::registry::MVNREPOSITORY_BASE_URL;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Parse duration string in format: Nms (milliseconds), Ns (seconds), Nm (minutes) or N
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }
    let invalid = || {
        ConfigError::InvalidDuration {
            value: s.to_string(),
        }
        .to_string()
    };

    let (num_str, millis_per_unit) = if let Some(n) = s.strip_suffix("ms") {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1_000)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60_000)
    } else {
        (s, 1_000)
    };

    let num: u64 = num_str.parse().map_err(|_| invalid())?;
    let millis = num.checked_mul(millis_per_unit).ok_or_else(invalid)?;
    if millis == 0 {
        return Err(invalid());
    }

    Ok(Duration::from_millis(millis))
}

/// Parse a 1-based line number
fn parse_line_number(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidLine {
            value: s.to_string(),
        }
        .to_string()),
    }
}

/// Parse a `name=value` variable definition
fn parse_define(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidDefine {
            value: s.to_string(),
        }
        .to_string()),
    }
}

/// Open the Maven repository page for a dependency declaration
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mvnlink",
    version,
    about = "Open the Maven repository page for a dependency declaration"
)]
pub struct CliArgs {
    /// Build file (build.gradle, build.gradle.kts or pom.xml)
    pub file: PathBuf,

    /// Cursor line (1-based)
    #[arg(short, long, value_parser = parse_line_number)]
    pub line: usize,

    // Actions
    /// Open the URL in the default browser
    #[arg(short, long)]
    pub open: bool,

    /// Only check whether the line declares a dependency (exit code 0 or 1)
    #[arg(long, conflicts_with_all = ["open", "json"])]
    pub check: bool,

    // Output options
    /// Output the result in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    // Variable resolution
    /// Gradle project root (default: nearest directory with a wrapper or settings file)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Do not run the Gradle wrapper to resolve version placeholders
    #[arg(long)]
    pub no_properties: bool,

    /// Define or override a variable (can be specified multiple times)
    #[arg(short = 'D', long = "define", value_parser = parse_define, action = ArgAction::Append)]
    pub defines: Vec<(String, String)>,

    /// Time allowed for `gradlew -q properties` (e.g., 500ms, 5s, 1m)
    #[arg(
        long,
        value_parser = parse_duration,
        default_value = "5s",
        env = "MVNLINK_PROPERTIES_TIMEOUT"
    )]
    pub properties_timeout: Duration,

    // Registry
    /// Base URL of the artifact pages
    #[arg(long, default_value = MVNREPOSITORY_BASE_URL, env = "MVNLINK_REGISTRY_URL")]
    pub registry_url: String,
}

impl CliArgs {
    /// Collect `-D` definitions into a variable map (later ones win)
    pub fn overrides(&self) -> VariableMap {
        self.defines.iter().cloned().collect()
    }
}
