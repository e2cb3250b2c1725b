//! In-memory settings backend.

use async_trait::async_trait;
use dashmap::DashMap;
use datatable_lib::TableConfig;

use super::{SettingsBackend, SettingsError};

/// Volatile settings storage, used when no data directory is available
/// and in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    profiles: DashMap<String, TableConfig>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn load(&self, profile: &str) -> Result<Option<TableConfig>, SettingsError> {
        Ok(self.profiles.get(profile).map(|c| c.clone()))
    }

    async fn store(&self, profile: &str, config: &TableConfig) -> Result<(), SettingsError> {
        self.profiles.insert(profile.to_string(), config.clone());
        Ok(())
    }

    async fn remove(&self, profile: &str) -> Result<(), SettingsError> {
        self.profiles.remove(profile);
        Ok(())
    }
}
