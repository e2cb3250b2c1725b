//! Table columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Record;
use crate::error::Error;

/// A sortable column of the contact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Name,
    Phone,
    Email,
    Address,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 4] = [Column::Name, Column::Phone, Column::Email, Column::Address];

    /// Header label shown in the table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }

    /// Field key as used in serialized records.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    /// Reads this column's value from a record.
    pub fn value(self, record: &Record) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Phone => &record.phone,
            Self::Email => &record.email,
            Self::Address => &record.address,
        }
    }

    /// Position of this column in [`Column::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Phone => 1,
            Self::Email => 2,
            Self::Address => 3,
        }
    }

    /// Column at a display position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidColumn(s.to_string()))
    }
}
