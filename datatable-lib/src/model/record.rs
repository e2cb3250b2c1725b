//! Record type

use serde::{Deserialize, Serialize};

/// One contact row.
///
/// All fields are plain strings. `email` is treated as the unique key for
/// selection and row identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Returns the unique key of this record.
    pub fn key(&self) -> &str {
        &self.email
    }
}
