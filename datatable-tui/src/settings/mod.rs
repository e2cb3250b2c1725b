//! Persisted preferences.

mod backend;
mod memory;
mod sqlite;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use datatable_lib::TableConfig;
use thiserror::Error;

/// Profile under which the table configuration is stored.
const TABLE_CONFIG_KEY: &str = "table.config";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("corrupt preferences: {0}")]
    Corrupt(String),
}

/// Saved table preferences over a [`SettingsBackend`].
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Provider backed by memory only.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Saved table configuration, if any.
    pub async fn table_config(&self) -> Result<Option<TableConfig>, SettingsError> {
        self.backend.load(TABLE_CONFIG_KEY).await
    }

    pub async fn save_table_config(&self, config: &TableConfig) -> Result<(), SettingsError> {
        self.backend.store(TABLE_CONFIG_KEY, config).await
    }

    /// Forget the saved table configuration.
    pub async fn reset_table_config(&self) -> Result<(), SettingsError> {
        self.backend.remove(TABLE_CONFIG_KEY).await
    }
}
