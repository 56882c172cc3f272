//! Opening URLs with the operating system's default handler

use crate::error::BrowserError;
use std::process::{Command, Output};
use tracing::debug;

/// Trait for launching a browser
pub trait BrowserLauncher {
    /// Open `url` in the user's browser
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Launches the platform opener (`open`, `cmd /C start`, `xdg-open`)
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    /// Create a new system browser launcher
    pub fn new() -> Self {
        Self
    }

    /// Get the opener command for the current platform
    fn opener_command(&self, url: &str) -> Vec<String> {
        if cfg!(target_os = "macos") {
            vec!["open".to_string(), url.to_string()]
        } else if cfg!(windows) {
            vec![
                "cmd".to_string(),
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ]
        } else {
            vec!["xdg-open".to_string(), url.to_string()]
        }
    }

    /// Run a command and capture output
    fn run_command(&self, command: &[String]) -> std::io::Result<Output> {
        if command.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Empty command",
            ));
        }

        Command::new(&command[0]).args(&command[1..]).output()
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        let command = self.opener_command(url);
        debug!(opener = %command[0], url, "opening browser");

        match self.run_command(&command) {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                let message = if stderr.is_empty() {
                    format!("{} exited with {}", command[0], output.status)
                } else {
                    stderr
                };
                Err(BrowserError::launch_failed(url, message))
            }
            Err(e) => Err(BrowserError::launch_failed(
                url,
                format!("failed to execute {}: {}", command[0], e),
            )),
        }
    }
}
