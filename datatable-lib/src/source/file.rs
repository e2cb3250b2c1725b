//! JSON file source.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use super::{fixture, DataSource};
use crate::error::Result;
use crate::model::Record;

/// Reads a JSON array of records from disk, optionally after a delay.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    delay: Duration,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<Record>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let bytes = tokio::fs::read(&self.path).await?;
        fixture::parse_slice(&bytes)
    }
}
