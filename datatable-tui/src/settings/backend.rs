//! Settings backend trait.

use async_trait::async_trait;
use datatable_lib::TableConfig;

use super::SettingsError;

/// Storage for saved table preferences, one entry per profile name.
///
/// [`SettingsProvider`](super::SettingsProvider) picks the profile.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    async fn load(&self, profile: &str) -> Result<Option<TableConfig>, SettingsError>;

    async fn store(&self, profile: &str, config: &TableConfig) -> Result<(), SettingsError>;

    async fn remove(&self, profile: &str) -> Result<(), SettingsError>;
}
