//! Background data fetch with an observable loading flag.
//!
//! [`spawn_fetch`] starts a source on its own task and returns a
//! [`FetchHandle`] that publishes [`FetchState`] snapshots. Dropping the
//! handle cancels the task, so no update is delivered after the consumer is
//! gone.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::model::Record;
use crate::source::DataSource;

/// Snapshot of a fetch in progress or completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    /// True until the source has returned.
    pub loading: bool,
    /// Records delivered by the source. Empty while loading.
    pub records: Vec<Record>,
    /// Error message if the source failed.
    pub error: Option<String>,
}

impl FetchState {
    fn pending() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    fn loaded(records: Vec<Record>) -> Self {
        Self {
            loading: false,
            records,
            error: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            loading: false,
            records: Vec::new(),
            error: Some(message),
        }
    }
}

/// Handle to a running fetch.
#[derive(Debug)]
pub struct FetchHandle {
    rx: watch::Receiver<FetchState>,
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// Start fetching from `source` on a background task.
///
/// The returned handle reports `loading = true` immediately. Must be called
/// from within a tokio runtime.
pub fn spawn_fetch(source: Arc<dyn DataSource>) -> FetchHandle {
    let (tx, rx) = watch::channel(FetchState::pending());
    let token = CancellationToken::new();
    let child = token.child_token();

    let task = tokio::spawn(async move {
        debug!("Fetch started: source={}", source.name());
        tokio::select! {
            _ = child.cancelled() => {
                debug!("Fetch cancelled: source={}", source.name());
            }
            result = source.fetch() => {
                match result {
                    Ok(records) => {
                        info!("Fetched {} records from {}", records.len(), source.name());
                        tx.send_replace(FetchState::loaded(records));
                    }
                    Err(e) => {
                        warn!("Fetch from {} failed: {}", source.name(), e);
                        tx.send_replace(FetchState::failed(e.to_string()));
                    }
                }
            }
        }
    });

    FetchHandle { rx, token, task }
}

impl FetchHandle {
    /// Current snapshot.
    pub fn state(&self) -> FetchState {
        self.rx.borrow().clone()
    }

    /// True while the source has not returned.
    pub fn is_loading(&self) -> bool {
        self.rx.borrow().loading
    }

    /// True once the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the next state change.
    ///
    /// Returns [`Error::Cancelled`] once the task has exited and every
    /// update has been observed.
    pub async fn changed(&mut self) -> Result<FetchState> {
        self.rx.changed().await.map_err(|_| Error::Cancelled)?;
        Ok(self.rx.borrow_and_update().clone())
    }

    /// Wait until loading has finished and return the final state.
    pub async fn wait(&mut self) -> Result<FetchState> {
        loop {
            {
                let state = self.rx.borrow_and_update();
                if !state.loading {
                    return Ok(state.clone());
                }
            }
            self.changed().await?;
        }
    }

    /// Abort the pending fetch. The state is left as it was.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
