//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default external OCR command
pub const DEFAULT_COMMAND: &str = "ocrmypdf";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// External OCR command to execute
    pub command: Option<String>,
    /// Whether completion dialogs are also shown as desktop notifications
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            command: Some(DEFAULT_COMMAND.to_string()),
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            command: other.command.or(self.command),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get the OCR command, or the default if not set
    pub fn command_or_default(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_COMMAND)
    }

    /// Get the notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}
