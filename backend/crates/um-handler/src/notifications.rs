//! Texts shown to the user, plus a log-backed [`Notifier`].

use log::info;
use um_core::{CoreError, Notifier};

/// Component name used in transport diagnostics
pub const COMPONENT: &str = "UsersHandler";

pub const USER_REGISTERED: &str = "New user registered";
pub const ACCOUNT_UPDATED: &str = "Account updated";
pub const USER_DELETED: &str = "Deleted";

pub fn load_failed(message: &str) -> String {
    format!("Data was not loaded. {message}")
}

pub fn lookup_failed(message: &str) -> String {
    format!("User was not loaded. {message}")
}

pub fn create_failed(message: &str) -> String {
    format!("User was not registered. {message}")
}

pub fn update_failed(message: &str) -> String {
    format!("Account was not updated. {message}")
}

pub fn delete_failed(message: &str) -> String {
    format!("User was not deleted. {message}")
}

/// Component and method that raised a diagnostic
pub fn origin(operation: &str) -> String {
    format!("Component: {COMPONENT}, method: {operation}")
}

/// Notification for a request that never completed normally
pub fn transport_failure(operation: &str, err: &CoreError) -> String {
    format!(
        "No connection to the database or the session token expired. {}. Name: {}. Message: {}",
        origin(operation),
        err.name(),
        err.message()
    )
}

/// Sends every notification to the `log` facade at info level.
///
/// Useful for headless sessions where no snackbar exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("[notification] {}", message);
    }
}
