use std::ops::Range;

use um_config::TableConfig;

/// Zero-based page position over a row count supplied by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
}

impl Paginator {
    /// A page size of zero is treated as one
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.page_size)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page_index + 1 < self.page_count(total) {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Jump to `index`, clamped to the last page
    pub fn go_to(&mut self, index: usize, total: usize) {
        self.page_index = index;
        self.clamp(total);
    }

    /// Pull the index back onto the last page after the row count shrank
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page_index = self.page_index.min(last);
    }

    /// Row indices shown on the current page
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}
