//! Row selection keyed by email.

use crate::error::Result;
use crate::model::Record;

/// Selected records in the order they were selected.
///
/// At most one entry exists per email.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    records: Vec<Record>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.records.iter().position(|r| r.email == email)
    }

    /// Add a record. An existing entry with the same email is replaced in place.
    pub fn select(&mut self, record: &Record) {
        match self.position(&record.email) {
            Some(i) => self.records[i] = record.clone(),
            None => self.records.push(record.clone()),
        }
    }

    /// Remove the record with this email. Returns true if one was removed.
    pub fn deselect(&mut self, email: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.email != email);
        self.records.len() != before
    }

    /// Flip membership. Returns true if the record is now selected.
    pub fn toggle(&mut self, record: &Record) -> bool {
        if self.deselect(&record.email) {
            false
        } else {
            self.records.push(record.clone());
            true
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        self.position(email).is_some()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Selected records as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }
}
