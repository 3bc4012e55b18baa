//! Orchestration behind the user administration screen.
//!
//! Every request-issuing method takes `&self`, so several requests can be in
//! flight at once. State is only locked between awaits; whichever request
//! completes last decides the final state.

use crate::form::form_group::FormGroup;
use crate::form::user_field::{CREATE_FIELDS, EDIT_VALIDATED_FIELDS, UserField};
use crate::handler::state::HandlerState;
use crate::handler::view_state::UsersViewState;
use crate::notifications;
use crate::table::paginator::Paginator;
use crate::table::sort::SortState;
use crate::table::user_column::{DISPLAYED_COLUMNS, UserColumn};
use crate::HandlerResult;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use um_client::Client;
use um_config::Config;
use um_core::{
    CoreError, IdGenerator, Notifier, RegisterUser, TaskResult, User, UserService, UuidGenerator,
    normalize_date_of_birth,
};

pub struct UsersHandler {
    service: Arc<dyn UserService>,
    notifier: Arc<dyn Notifier>,
    ids: Arc<dyn IdGenerator>,
    state: RwLock<HandlerState>,
}

impl UsersHandler {
    pub fn new(
        service: Arc<dyn UserService>,
        notifier: Arc<dyn Notifier>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            service,
            notifier,
            ids,
            state: RwLock::new(HandlerState::default()),
        }
    }

    /// Handler backed by the HTTP client described in `config.api`, issuing
    /// v4 UUIDs for new users.
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> HandlerResult<Self> {
        let client = Client::from_config(&config.api)?;
        Ok(Self::new(Arc::new(client), notifier, Arc::new(UuidGenerator)))
    }

    fn read(&self) -> RwLockReadGuard<'_, HandlerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HandlerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    fn set_loading(&self, loading: bool) {
        self.write().loading = loading;
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Bind the table controls, drop a search left over from an earlier
    /// visit and load the user list.
    pub async fn initialize(&self, paginator: Paginator, sort: SortState) {
        {
            let mut state = self.write();
            state.table.bind_paginator(paginator);
            state.table.bind_sort(sort);

            if state.search.dirty() {
                state.table.set_filter("");
                state.search.reset();
            }

            state.filtered_empty = false;
        }

        self.load_all().await;
    }

    /// Forget everything, as at the end of a session
    pub fn reset(&self) {
        *self.write() = HandlerState::default();
        debug!("Users handler state reset");
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Fetch every user and rebuild the table and the id -> email lookup.
    ///
    /// Returns the envelope when the load succeeded; failures are notified
    /// and leave the previous records in place.
    pub async fn load_all(&self) -> Option<TaskResult<Vec<User>>> {
        debug!("load_all: requesting user list");

        match self.service.list().await {
            Ok(result) if result.success => {
                let users = result.model.clone().unwrap_or_default();
                let count = users.len();
                self.write().replace_users(users);
                info!("load_all: {} users loaded", count);
                Some(result)
            }
            Ok(result) => {
                warn!("load_all: rejected: {}", result.message_or_empty());
                self.notify(&notifications::load_failed(result.message_or_empty()));
                None
            }
            Err(e) => {
                warn!("load_all: {}", e);
                self.notify(&notifications::transport_failure("load_all", &e));
                None
            }
        }
    }

    /// Fetch one user into the selected-user slot and return the slot.
    ///
    /// On failure the slot keeps its previous value, which is what gets
    /// returned.
    pub async fn lookup_by_email(&self, email: &str) -> Option<User> {
        debug!("lookup_by_email: {}", email);

        match self.service.get_by_email(email).await {
            Ok(result) if result.success => {
                self.write().selected_user = result.model;
            }
            Ok(result) => {
                warn!("lookup_by_email: rejected: {}", result.message_or_empty());
                self.notify(&notifications::lookup_failed(result.message_or_empty()));
            }
            Err(e) => {
                warn!("lookup_by_email: {}", e);
                self.notify(&notifications::transport_failure("lookup_by_email", &e));
            }
        }

        self.selected_user()
    }

    /// Register a new user from the registration form.
    ///
    /// The form is reset on success and left untouched otherwise.
    pub async fn create(&self, form: &mut FormGroup) {
        let payload = match self.register_payload(form) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("create: {}", e);
                self.notify(&notifications::create_failed(&e.message()));
                return;
            }
        };

        debug!("create: registering {}", payload.user_id);
        self.set_loading(true);

        match self.service.create(payload).await {
            Ok(result) if result.success => {
                info!("create: user registered");
                self.notify(notifications::USER_REGISTERED);
                self.set_loading(false);
                form.reset();
            }
            Ok(result) => {
                warn!("create: rejected: {}", result.message_or_empty());
                self.notify(&notifications::create_failed(result.message_or_empty()));
                self.set_loading(false);
            }
            Err(e) => {
                warn!("create: {}", e);
                self.notify(&notifications::transport_failure("create", &e));
                self.set_loading(false);
            }
        }
    }

    /// Submit the edit form as the new record for `id`
    pub async fn edit(&self, id: &str, form: &FormGroup) {
        let user = match Self::require_id(id).and_then(|()| Self::edited_user(id, form)) {
            Ok(user) => user,
            Err(e) => {
                warn!("edit: {}", e);
                self.notify(&notifications::update_failed(&e.message()));
                return;
            }
        };

        debug!("edit: updating {}", id);
        self.set_loading(true);

        match self.service.update(id, user).await {
            Ok(result) if result.success => {
                info!("edit: user {} updated", id);
                self.notify(notifications::ACCOUNT_UPDATED);
                self.set_loading(false);
            }
            Ok(result) => {
                warn!("edit: rejected: {}", result.message_or_empty());
                self.notify(&notifications::update_failed(result.message_or_empty()));
                self.set_loading(false);
            }
            Err(e) => {
                warn!("edit: {}", e);
                self.notify(&notifications::transport_failure("edit", &e));
                self.set_loading(false);
            }
        }
    }

    /// Delete the user and reload the list
    pub async fn delete(&self, id: &str) {
        if let Err(e) = Self::require_id(id) {
            warn!("delete: {}", e);
            self.notify(&notifications::delete_failed(&e.message()));
            return;
        }

        debug!("delete: removing {}", id);
        self.set_loading(true);

        match self.service.remove(id).await {
            Ok(result) if result.success => {
                info!("delete: user {} removed", id);
                self.load_all().await;
                self.notify(notifications::USER_DELETED);
                self.set_loading(false);
            }
            Ok(result) => {
                warn!("delete: rejected: {}", result.message_or_empty());
                self.notify(&notifications::delete_failed(result.message_or_empty()));
                self.set_loading(false);
            }
            Err(e) => {
                warn!("delete: {}", e);
                self.notify(&notifications::transport_failure("delete", &e));
                self.set_loading(false);
            }
        }
    }

    #[track_caller]
    fn require_id(id: &str) -> HandlerResult<()> {
        if id.trim().is_empty() {
            return Err(CoreError::validation("user id is empty").into());
        }
        Ok(())
    }

    fn register_payload(&self, form: &FormGroup) -> HandlerResult<RegisterUser> {
        let date_of_birth = normalize_date_of_birth(form.value(UserField::DateOfBirth)?)?;

        Ok(RegisterUser {
            user_id: self.ids.new_id(),
            email: form.value(UserField::RegisterEmail)?.to_string(),
            password: form.value(UserField::RegisterPassword)?.to_string(),
            first_name: form.value(UserField::FirstName)?.to_string(),
            last_name: form.value(UserField::LastName)?.to_string(),
            street: form.value(UserField::Street)?.to_string(),
            street_number: form.value(UserField::StreetNumber)?.to_string(),
            city: form.value(UserField::City)?.to_string(),
            postal_code: form.value(UserField::PostalCode)?.to_string(),
            country: form.value(UserField::Country)?.to_string(),
            date_of_birth,
            phone: form.value(UserField::Phone)?.to_string(),
            role_name: form.value(UserField::RoleName)?.to_string(),
        })
    }

    fn edited_user(id: &str, form: &FormGroup) -> HandlerResult<User> {
        Ok(User {
            id: id.to_string(),
            email: form.value(UserField::Email)?.to_string(),
            first_name: form.value(UserField::FirstName)?.to_string(),
            last_name: form.value(UserField::LastName)?.to_string(),
            street: form.value(UserField::Street)?.to_string(),
            street_number: form.value(UserField::StreetNumber)?.to_string(),
            city: form.value(UserField::City)?.to_string(),
            postal_code: form.value(UserField::PostalCode)?.to_string(),
            country: form.value(UserField::Country)?.to_string(),
            date_of_birth: form.value(UserField::DateOfBirth)?.to_string(),
            phone: form.value(UserField::Phone)?.to_string(),
            role_id: form.value(UserField::RoleId)?.to_string(),
        })
    }

    // =========================================================================
    // Local queries
    // =========================================================================

    /// Email for `id` from the lookup built at the last load; empty when
    /// unknown.
    pub fn lookup_email_by_id_cached(&self, id: &str) -> String {
        if id.is_empty() {
            return String::new();
        }

        self.read().emails_by_id.get(id).cloned().unwrap_or_default()
    }

    /// Filter the table by free text and go back to the first page
    pub fn apply_filter(&self, raw: &str) {
        let filter = raw.trim().to_lowercase();

        let mut state = self.write();
        state.search.input(raw);
        state.table.set_filter(&filter);

        if let Some(paginator) = state.table.paginator_mut() {
            paginator.first_page();
        }

        state.filtered_empty =
            !state.table.data().is_empty() && state.table.filtered_len() == 0;

        debug!(
            "apply_filter: '{}' -> {} rows",
            filter,
            state.table.filtered_len()
        );
    }

    /// `false` when the registration form is ready to submit: every tracked
    /// field touched, dirty and valid. `true` otherwise.
    pub fn is_create_form_complete(&self, form: &FormGroup) -> bool {
        !form.all_satisfy(&CREATE_FIELDS, |c| c.touched() && c.dirty() && c.is_valid())
    }

    /// `false` when every validated edit field is valid, `true` otherwise.
    pub fn is_edit_form_complete(&self, form: &FormGroup) -> bool {
        !form.all_satisfy(&EDIT_VALIDATED_FIELDS, |c| c.is_valid())
    }

    // =========================================================================
    // Table controls
    // =========================================================================

    pub fn displayed_columns(&self) -> &'static [UserColumn] {
        &DISPLAYED_COLUMNS
    }

    /// Move to page `index`, clamped to the filtered row count
    pub fn go_to_page(&self, index: usize) {
        let mut state = self.write();
        let total = state.table.filtered_len();
        if let Some(paginator) = state.table.paginator_mut() {
            paginator.go_to(index, total);
        }
    }

    /// Header click on `column`
    pub fn toggle_sort(&self, column: UserColumn) {
        if let Some(sort) = self.write().table.sort_mut() {
            sort.toggle(column);
        }
    }

    // =========================================================================
    // Observable state
    // =========================================================================

    pub fn users(&self) -> Vec<User> {
        self.read().table.data().to_vec()
    }

    pub fn visible_rows(&self) -> Vec<User> {
        self.read().table.visible_rows()
    }

    pub fn email_lookup(&self) -> HashMap<String, String> {
        self.read().emails_by_id.clone()
    }

    pub fn selected_user(&self) -> Option<User> {
        self.read().selected_user.clone()
    }

    pub fn search_text(&self) -> String {
        self.read().search.value().to_string()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn is_list_loading(&self) -> bool {
        self.read().list_loading
    }

    pub fn is_empty(&self) -> bool {
        self.read().empty
    }

    pub fn is_filtered_empty(&self) -> bool {
        self.read().filtered_empty
    }

    pub fn snapshot(&self) -> UsersViewState {
        let state = self.read();

        UsersViewState {
            rows: state.table.visible_rows(),
            total_count: state.table.data().len(),
            filtered_count: state.table.filtered_len(),
            filter: state.table.filter().to_string(),
            search_text: state.search.value().to_string(),
            page_index: state
                .table
                .paginator()
                .map(Paginator::page_index)
                .unwrap_or_default(),
            page_size: state.table.paginator().map(Paginator::page_size),
            loading: state.loading,
            list_loading: state.list_loading,
            empty: state.empty,
            filtered_empty: state.filtered_empty,
            selected_user: state.selected_user.clone(),
        }
    }
}
