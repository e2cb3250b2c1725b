//! Embedded contact fixture.

use crate::error::Result;
use crate::model::Record;

const RECORDS_JSON: &str = include_str!("../../fixtures/records.json");

/// Parse the embedded fixture.
pub fn records() -> Result<Vec<Record>> {
    parse(RECORDS_JSON)
}

/// Parse a JSON array of records.
pub fn parse(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of records from raw bytes. Invalid UTF-8 is an error.
pub fn parse_slice(bytes: &[u8]) -> Result<Vec<Record>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_fixture_parses() {
        let records = records().unwrap();
        assert_eq!(records.len(), 60);
    }

    #[test]
    fn test_fixture_emails_are_unique() {
        let records = records().unwrap();
        let emails: HashSet<_> = records.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails.len(), records.len());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_parse_slice_matches_parse() {
        assert_eq!(parse_slice(RECORDS_JSON.as_bytes()).unwrap(), records().unwrap());
    }
}
