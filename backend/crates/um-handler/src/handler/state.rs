use crate::form::form_control::FormControl;
use crate::table::user_table::UserTable;

use std::collections::HashMap;

use um_core::User;

/// Mutable state of one users screen session.
///
/// The record set lives in the table; `emails_by_id` is derived from it and
/// rebuilt together with it in [`HandlerState::replace_users`].
#[derive(Debug, Clone)]
pub(crate) struct HandlerState {
    pub(crate) table: UserTable,
    pub(crate) emails_by_id: HashMap<String, String>,
    pub(crate) selected_user: Option<User>,
    pub(crate) search: FormControl,
    /// A create, edit or delete request is in flight
    pub(crate) loading: bool,
    /// Preloader shown until the first successful list load
    pub(crate) list_loading: bool,
    pub(crate) empty: bool,
    pub(crate) filtered_empty: bool,
}

impl Default for HandlerState {
    fn default() -> Self {
        Self {
            table: UserTable::new(),
            emails_by_id: HashMap::new(),
            selected_user: None,
            search: FormControl::default(),
            loading: false,
            list_loading: true,
            empty: false,
            filtered_empty: false,
        }
    }
}

impl HandlerState {
    /// Swap in a freshly loaded record set and rebuild everything derived
    /// from it. Callers hold the write lock for the whole call.
    pub(crate) fn replace_users(&mut self, users: Vec<User>) {
        self.emails_by_id.clear();
        self.emails_by_id.extend(
            users
                .iter()
                .map(|user| (user.id.clone(), user.email.clone())),
        );

        self.empty = users.is_empty();
        self.list_loading = false;
        self.table.set_data(users);
    }
}
