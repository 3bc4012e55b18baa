//! um-handler
//!
//! State and orchestration for the user administration screen: loads the
//! user list into a filterable, sortable, paged table, and wraps register,
//! edit and delete requests, reporting every outcome through a [`Notifier`].
//!
//! [`Notifier`]: um_core::Notifier

pub mod error;
pub mod form;
pub mod handler;
pub mod logger;
pub mod notifications;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{HandlerError, HandlerResult};
pub use form::form_control::FormControl;
pub use form::form_group::FormGroup;
pub use form::user_field::{CREATE_FIELDS, EDIT_FIELDS, EDIT_VALIDATED_FIELDS, UserField};
pub use form::user_forms::{create_form, edit_form};
pub use form::validator::Validator;
pub use handler::users_handler::UsersHandler;
pub use handler::view_state::UsersViewState;
pub use notifications::LogNotifier;
pub use table::paginator::Paginator;
pub use table::sort::{SortDirection, SortState};
pub use table::user_column::{DISPLAYED_COLUMNS, UserColumn};
pub use table::user_table::UserTable;
