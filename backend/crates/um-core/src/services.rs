//! Collaborators the users handler talks to.

use crate::{RegisterUser, Result as CoreErrorResult, TaskResult, User};

use async_trait::async_trait;
use uuid::Uuid;

/// Remote user administration API.
///
/// `Ok` means an envelope was received (which may still report failure);
/// `Err` means the request never completed normally.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch every user
    async fn list(&self) -> CoreErrorResult<TaskResult<Vec<User>>>;

    /// Fetch one user by email address
    async fn get_by_email(&self, email: &str) -> CoreErrorResult<TaskResult<User>>;

    /// Register a new account
    async fn create(&self, payload: RegisterUser) -> CoreErrorResult<TaskResult<RegisterUser>>;

    /// Replace the stored record for `id`
    async fn update(&self, id: &str, user: User) -> CoreErrorResult<TaskResult<User>>;

    /// Delete the account with `id`
    async fn remove(&self, id: &str) -> CoreErrorResult<TaskResult<bool>>;
}

/// Fire-and-forget sink for short user-facing messages (snackbar, toast).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Source of identifiers for newly registered users.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// Random v4 UUIDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
