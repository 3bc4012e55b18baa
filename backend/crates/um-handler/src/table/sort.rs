use crate::table::user_column::UserColumn;

use std::cmp::Ordering;

use um_core::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

/// Active sort of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<UserColumn>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: UserColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Header click: a new column starts ascending, the same column cycles
    /// asc -> desc -> unsorted. Non-sortable columns are ignored.
    pub fn toggle(&mut self, column: UserColumn) {
        if !column.is_sortable() {
            return;
        }

        if self.column != Some(column) {
            self.column = Some(column);
            self.direction = SortDirection::Asc;
            return;
        }

        self.direction = match self.direction {
            SortDirection::None => SortDirection::Asc,
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::None,
        };
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some_and(|c| c.is_sortable()) && self.direction != SortDirection::None
    }

    /// Case-insensitive comparison on the active column
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let Some(column) = self.column else {
            return Ordering::Equal;
        };

        let left = column.sort_value(a).map(str::to_lowercase);
        let right = column.sort_value(b).map(str::to_lowercase);
        let ordering = left.cmp(&right);

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
            SortDirection::None => Ordering::Equal,
        }
    }
}
