pub mod error;
pub mod models;
pub mod services;

pub use error::{CoreError, Result};
pub use models::date_of_birth::normalize_date_of_birth;
pub use models::register_user::RegisterUser;
pub use models::task_result::TaskResult;
pub use models::user::User;
pub use services::{IdGenerator, Notifier, UserService, UuidGenerator};

#[cfg(test)]
mod tests;
