//! Name search.

use crate::model::Record;

/// Case-insensitive substring match against the record name only.
pub fn name_matches(record: &Record, query: &str) -> bool {
    record.name.to_lowercase().contains(&query.to_lowercase())
}

/// Records whose name contains `query`, in their original order.
///
/// An empty query keeps every record.
pub fn filter_by_name(records: &[Record], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| name_matches(r, query))
        .cloned()
        .collect()
}
