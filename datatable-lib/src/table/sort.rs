//! Column sorting.

use std::cmp::Ordering;

use crate::model::{Column, Record};

/// Sort direction of the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// A-Z.
    Ascending,
    /// Z-A.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator for this direction.
    pub fn arrow(self) -> char {
        match self {
            Self::Ascending => '▲',
            Self::Descending => '▼',
        }
    }
}

/// Compare two records by a column, lexicographically.
pub fn compare(a: &Record, b: &Record, column: Column) -> Ordering {
    column.value(a).cmp(column.value(b))
}

/// Stable in-place sort by a column.
pub fn sort_by_column(records: &mut [Record], column: Column, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| compare(a, b, column)),
        SortDirection::Descending => records.sort_by(|a, b| compare(b, a, column)),
    }
}
