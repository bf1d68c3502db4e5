//! Screen-facing state holders.
//!
//! # Responsibility
//! - Hold observable draft/list/detail values for presentation layers.
//! - Dispatch writes onto the runtime without blocking the caller.
//!
//! # Invariants
//! - Subscriptions live exactly as long as their owning state.
//! - Dropping a [`PendingWrite`] never cancels the write.

pub mod detail;
pub mod editor;
pub mod home;
pub mod observable;
pub mod theme;

use crate::repo::note_store::{RepoError, RepoResult};
use log::error;
use std::future::Future;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Handle to a write dispatched in the background.
///
/// Awaiting it is optional; the write completes either way.
#[derive(Debug)]
pub struct PendingWrite<T> {
    handle: JoinHandle<RepoResult<T>>,
}

impl<T> PendingWrite<T> {
    /// Waits for the write and returns its outcome.
    pub async fn wait(self) -> RepoResult<T> {
        self.handle
            .await
            .map_err(|err| RepoError::Worker(err.to_string()))?
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

pub(crate) fn dispatch_write<T, Fut>(
    runtime: &Handle,
    event: &'static str,
    write: Fut,
) -> PendingWrite<T>
where
    T: Send + 'static,
    Fut: Future<Output = RepoResult<T>> + Send + 'static,
{
    let handle = runtime.spawn(async move {
        let result = write.await;
        if let Err(err) = &result {
            error!("event={event} module=state status=error error={err}");
        }
        result
    });
    PendingWrite { handle }
}
