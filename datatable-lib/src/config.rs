//! Table configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of records shown on each page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Default artificial delay of the mock data source.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(2000);

/// What a repeated sort on the active column does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortToggle {
    /// Reverse whatever order the filtered rows currently have.
    #[default]
    Reverse,
    /// Re-sort by the column with the opposite direction.
    Descending,
}

/// Configuration for a [`TableView`](crate::TableView) and its data source.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use datatable_lib::{SortToggle, TableConfig};
///
/// let config = TableConfig::default()
///     .with_page_size(10)
///     .with_fetch_delay(Duration::from_millis(250))
///     .with_sort_toggle(SortToggle::Descending);
///
/// assert_eq!(config.page_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Records per page. Never less than 1.
    ///
    /// Default: 25
    pub page_size: usize,

    /// Delay before the mock source delivers its fixture.
    ///
    /// Default: 2 seconds
    pub fetch_delay: Duration,

    /// Behavior of a repeated sort on the same column.
    ///
    /// Default: [`SortToggle::Reverse`]
    pub sort_toggle: SortToggle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fetch_delay: DEFAULT_FETCH_DELAY,
            sort_toggle: SortToggle::default(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. Zero is raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the fetch delay.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Sets the repeated-sort behavior.
    pub fn with_sort_toggle(mut self, toggle: SortToggle) -> Self {
        self.sort_toggle = toggle;
        self
    }

    /// Config with no fetch delay, for tests and scripted use.
    pub fn immediate() -> Self {
        Self::default().with_fetch_delay(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.fetch_delay, Duration::from_secs(2));
        assert_eq!(config.sort_toggle, SortToggle::Reverse);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        assert_eq!(TableConfig::new().with_page_size(0).page_size, 1);
    }
}
