//! Live "all notes" subscription.
//!
//! # Invariants
//! - Every delivered value is the complete list, ordered by id descending.
//! - A new subscriber receives the current list on its first `next()`.
//! - Subscribers are independent; a slow one only skips to the latest list.

use crate::model::note::Note;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable full-list snapshot shared between subscribers.
pub type NoteSnapshot = Arc<Vec<Note>>;

/// One subscriber's view of the replacing note-list sequence.
#[derive(Debug)]
pub struct NoteListFeed {
    rx: watch::Receiver<NoteSnapshot>,
    delivered_initial: bool,
}

impl NoteListFeed {
    pub(crate) fn new(rx: watch::Receiver<NoteSnapshot>) -> Self {
        Self {
            rx,
            delivered_initial: false,
        }
    }

    /// Waits for the next full snapshot.
    ///
    /// Returns `None` once the store has been dropped and no unseen snapshot
    /// remains.
    pub async fn next(&mut self) -> Option<NoteSnapshot> {
        if !self.delivered_initial {
            self.delivered_initial = true;
            return Some(Arc::clone(&self.rx.borrow_and_update()));
        }

        match self.rx.changed().await {
            Ok(()) => Some(Arc::clone(&self.rx.borrow_and_update())),
            Err(_) => None,
        }
    }
}
