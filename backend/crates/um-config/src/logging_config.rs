use crate::{DEFAULT_LOG_COLORED, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names on stdout (ignored when logging to a file)
    pub colored: bool,
    /// Log file path; stdout when unset
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}
