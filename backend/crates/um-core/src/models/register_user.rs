use serde::{Deserialize, Serialize};

/// Payload submitted when registering a new account.
///
/// Unlike [`crate::User`] it carries the initial password and a role name
/// instead of a role identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date_of_birth: String,
    pub phone: String,
    pub role_name: String,
}
