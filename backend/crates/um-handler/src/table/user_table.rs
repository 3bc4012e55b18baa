//! Client-side data source behind the users table.

use crate::table::paginator::Paginator;
use crate::table::sort::SortState;

use um_core::User;

/// Rows plus the filter, sort and paging applied to them.
///
/// Filtering matches the lowercase filter as a substring of
/// [`User::filter_text`]; an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct UserTable {
    data: Vec<User>,
    filter: String,
    paginator: Option<Paginator>,
    sort: Option<SortState>,
}

impl UserTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_paginator(&mut self, paginator: Paginator) {
        self.paginator = Some(paginator);
        self.clamp_page();
    }

    pub fn bind_sort(&mut self, sort: SortState) {
        self.sort = Some(sort);
    }

    pub fn paginator(&self) -> Option<&Paginator> {
        self.paginator.as_ref()
    }

    pub fn paginator_mut(&mut self) -> Option<&mut Paginator> {
        self.paginator.as_mut()
    }

    pub fn sort_mut(&mut self) -> Option<&mut SortState> {
        self.sort.as_mut()
    }

    pub fn data(&self) -> &[User] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<User>) {
        self.data = data;
        self.clamp_page();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.clamp_page();
    }

    fn filtered(&self) -> impl Iterator<Item = &User> {
        let needle = self.filter.trim().to_lowercase();
        self.data
            .iter()
            .filter(move |u| needle.is_empty() || u.filter_text().contains(&needle))
    }

    /// Rows passing the filter, in data order, ignoring sort and paging
    pub fn filtered_data(&self) -> Vec<&User> {
        self.filtered().collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    /// Filtered rows, sorted, cut to the current page
    pub fn visible_rows(&self) -> Vec<User> {
        let mut rows = self.filtered_data();

        if let Some(sort) = self.sort.filter(SortState::is_active) {
            rows.sort_by(|a, b| sort.compare(a, b));
        }

        let range = match self.paginator {
            Some(paginator) => paginator.range(rows.len()),
            None => 0..rows.len(),
        };

        rows[range].iter().map(|u| User::clone(u)).collect()
    }

    fn clamp_page(&mut self) {
        let total = self.filtered_len();
        if let Some(paginator) = self.paginator.as_mut() {
            paginator.clamp(total);
        }
    }
}
