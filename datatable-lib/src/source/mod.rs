//! Data sources that feed the table.

mod file;
pub mod fixture;
mod mock;

pub use file::FileSource;
pub use mock::MockSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Record;

/// A source of table records.
///
/// Implementations are driven by [`spawn_fetch`](crate::spawn_fetch), which
/// runs them on a background task.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Fetch the full record set.
    async fn fetch(&self) -> Result<Vec<Record>>;
}
