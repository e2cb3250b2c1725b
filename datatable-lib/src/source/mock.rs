//! Mock source returning the embedded fixture after a delay.

use std::time::Duration;

use async_trait::async_trait;

use super::{fixture, DataSource};
use crate::config::{TableConfig, DEFAULT_FETCH_DELAY};
use crate::error::Result;
use crate::model::Record;

/// Simulated slow backend.
///
/// Waits for a fixed delay, then returns a static record set. Without
/// explicit records it serves the embedded fixture.
#[derive(Debug, Clone)]
pub struct MockSource {
    delay: Duration,
    records: Option<Vec<Record>>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self {
            delay: DEFAULT_FETCH_DELAY,
            records: None,
        }
    }
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock source using the delay from a table config.
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new().with_delay(config.fetch_delay)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Serve these records instead of the embedded fixture.
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = Some(records);
        self
    }
}

#[async_trait]
impl DataSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<Record>> {
        tokio::time::sleep(self.delay).await;
        match &self.records {
            Some(records) => Ok(records.clone()),
            None => fixture::records(),
        }
    }
}
