//! User record as served by the user administration API.

use serde::{Deserialize, Serialize};

/// Separator placed between field values when a record is flattened for
/// free-text filtering.
const FILTER_FIELD_SEPARATOR: char = '◬';

/// An application user.
///
/// `id` is issued by the client when the account is registered and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub date_of_birth: String,
    pub phone: String,
    pub role_id: String,
}

impl User {
    /// Every field value joined into one lowercase string, used by the table
    /// filter.
    pub fn filter_text(&self) -> String {
        let fields = [
            &self.id,
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.street,
            &self.street_number,
            &self.city,
            &self.postal_code,
            &self.country,
            &self.date_of_birth,
            &self.phone,
            &self.role_id,
        ];

        let mut text = String::new();
        for field in fields {
            text.push_str(field);
            text.push(FILTER_FIELD_SEPARATOR);
        }
        text.to_lowercase()
    }
}
