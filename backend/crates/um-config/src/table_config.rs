use crate::{ConfigError, ConfigErrorResult, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

use serde::Deserialize;

/// Users table presentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::table(format!(
                "table.page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
            )));
        }

        Ok(())
    }
}
