use um_core::User;

/// Everything the users screen renders, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsersViewState {
    /// Rows on the current page after filter and sort
    pub rows: Vec<User>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub filter: String,
    pub search_text: String,
    pub page_index: usize,
    pub page_size: Option<usize>,
    pub loading: bool,
    pub list_loading: bool,
    pub empty: bool,
    pub filtered_empty: bool,
    pub selected_user: Option<User>,
}
