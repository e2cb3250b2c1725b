//! SQLite settings backend.
//!
//! Each profile is one row of `table_preferences` with a column per
//! [`TableConfig`] field, so the file stays readable with the `sqlite3`
//! shell.

use std::path::Path;
use std::time::Duration;

use async_sqlite::Client;
use async_trait::async_trait;
use datatable_lib::{SortToggle, TableConfig};
use log::debug;
use rusqlite::OptionalExtension;

use super::{SettingsBackend, SettingsError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS table_preferences (
    profile        TEXT PRIMARY KEY,
    page_size      INTEGER NOT NULL,
    fetch_delay_ms INTEGER NOT NULL,
    sort_toggle    TEXT NOT NULL,
    saved_at       TEXT NOT NULL
)";

/// Raw column values of one `table_preferences` row.
struct PreferenceRow {
    page_size: i64,
    fetch_delay_ms: i64,
    sort_toggle: String,
    saved_at: String,
}

impl PreferenceRow {
    fn from_config(config: &TableConfig) -> Self {
        Self {
            page_size: i64::try_from(config.page_size).unwrap_or(i64::MAX),
            fetch_delay_ms: i64::try_from(config.fetch_delay.as_millis()).unwrap_or(i64::MAX),
            sort_toggle: toggle_name(config.sort_toggle).to_string(),
            saved_at: chrono::Local::now().to_rfc3339(),
        }
    }

    fn into_config(self) -> Result<TableConfig, SettingsError> {
        let page_size = usize::try_from(self.page_size)
            .map_err(|_| SettingsError::Corrupt(format!("page_size {}", self.page_size)))?;
        let delay_ms = u64::try_from(self.fetch_delay_ms)
            .map_err(|_| SettingsError::Corrupt(format!("fetch_delay_ms {}", self.fetch_delay_ms)))?;
        let toggle = parse_toggle(&self.sort_toggle)
            .ok_or_else(|| SettingsError::Corrupt(format!("sort_toggle '{}'", self.sort_toggle)))?;

        Ok(TableConfig::new()
            .with_page_size(page_size)
            .with_fetch_delay(Duration::from_millis(delay_ms))
            .with_sort_toggle(toggle))
    }
}

fn toggle_name(toggle: SortToggle) -> &'static str {
    match toggle {
        SortToggle::Reverse => "reverse",
        SortToggle::Descending => "descending",
    }
}

fn parse_toggle(name: &str) -> Option<SortToggle> {
    match name {
        "reverse" => Some(SortToggle::Reverse),
        "descending" => Some(SortToggle::Descending),
        _ => None,
    }
}

/// Table preferences in a SQLite file.
pub struct SqliteBackend {
    client: Client,
}

impl SqliteBackend {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;
        client.conn(|conn| conn.execute(SCHEMA, [])).await?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SettingsBackend for SqliteBackend {
    async fn load(&self, profile: &str) -> Result<Option<TableConfig>, SettingsError> {
        let profile = profile.to_string();
        let row = self
            .client
            .conn(move |conn| {
                conn.query_row(
                    "SELECT page_size, fetch_delay_ms, sort_toggle, saved_at
                     FROM table_preferences WHERE profile = ?1",
                    [&profile],
                    |row| {
                        Ok(PreferenceRow {
                            page_size: row.get(0)?,
                            fetch_delay_ms: row.get(1)?,
                            sort_toggle: row.get(2)?,
                            saved_at: row.get(3)?,
                        })
                    },
                )
                .optional()
            })
            .await?;

        match row {
            Some(row) => {
                debug!("Preferences last saved at {}", row.saved_at);
                row.into_config().map(Some)
            }
            None => Ok(None),
        }
    }

    async fn store(&self, profile: &str, config: &TableConfig) -> Result<(), SettingsError> {
        let profile = profile.to_string();
        let row = PreferenceRow::from_config(config);
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO table_preferences
                         (profile, page_size, fetch_delay_ms, sort_toggle, saved_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(profile) DO UPDATE SET
                         page_size = excluded.page_size,
                         fetch_delay_ms = excluded.fetch_delay_ms,
                         sort_toggle = excluded.sort_toggle,
                         saved_at = excluded.saved_at",
                    rusqlite::params![
                        profile,
                        row.page_size,
                        row.fetch_delay_ms,
                        row.sort_toggle,
                        row.saved_at
                    ],
                )
            })
            .await?;
        Ok(())
    }

    async fn remove(&self, profile: &str) -> Result<(), SettingsError> {
        let profile = profile.to_string();
        self.client
            .conn(move |conn| {
                conn.execute("DELETE FROM table_preferences WHERE profile = ?1", [&profile])
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_names() {
        for toggle in [SortToggle::Reverse, SortToggle::Descending] {
            assert_eq!(parse_toggle(toggle_name(toggle)), Some(toggle));
        }
        assert_eq!(parse_toggle("sideways"), None);
    }

    #[test]
    fn test_negative_delay_is_corrupt() {
        let row = PreferenceRow {
            page_size: 10,
            fetch_delay_ms: -5,
            sort_toggle: "reverse".into(),
            saved_at: String::new(),
        };
        assert!(matches!(row.into_config(), Err(SettingsError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_unknown_toggle_in_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.db");
        let backend = SqliteBackend::open(&path).await.unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO table_preferences VALUES ('table', 10, 0, 'sideways', '')",
            [],
        )
        .unwrap();

        assert!(matches!(
            backend.load("table").await,
            Err(SettingsError::Corrupt(_))
        ));
    }
}
