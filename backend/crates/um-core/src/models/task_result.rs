//! Uniform result envelope returned by every user API operation.

use serde::{Deserialize, Serialize};

/// Outcome of a remote operation.
///
/// A received envelope with `success == false` is a structural failure; the
/// request itself completed. `message` is mostly populated on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct TaskResult<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub model: Option<T>,
}

impl<T> TaskResult<T> {
    /// Successful envelope carrying a payload
    pub fn ok(model: T) -> Self {
        Self {
            success: true,
            message: None,
            model: Some(model),
        }
    }

    /// Failed envelope with an explanation
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            model: None,
        }
    }

    /// Failure message, or an empty string when the server sent none.
    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
