//! Shared, live note store.
//!
//! # Responsibility
//! - Own the single connection and serialize access to it.
//! - Run store work off the async executor via `spawn_blocking`.
//! - Republish the full note list after every successful mutation.
//!
//! # Invariants
//! - Snapshots are published while the connection lock is held, so their
//!   order matches the order of writes.
//! - A failed mutation publishes nothing.

use crate::model::note::{Note, NoteId};
use crate::repo::feed::{NoteListFeed, NoteSnapshot};
use crate::repo::note_store::{NoteStore, RepoError, RepoResult, SqliteNoteStore};
use log::{debug, error, info};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::sync::watch;

struct Inner {
    conn: Mutex<Connection>,
    snapshots: watch::Sender<NoteSnapshot>,
}

/// Cloneable handle to the one store of a running application.
#[derive(Clone)]
pub struct LiveNoteStore {
    inner: Arc<Inner>,
}

impl LiveNoteStore {
    /// Takes ownership of a migrated connection and loads the first snapshot.
    pub fn new(conn: Connection) -> RepoResult<Self> {
        let initial = SqliteNoteStore::try_new(&conn)?.list_notes()?;
        info!(
            "event=store_open module=store status=ok note_count={}",
            initial.len()
        );
        let (snapshots, _) = watch::channel(Arc::new(initial));
        Ok(Self {
            inner: Arc::new(Inner {
                conn: Mutex::new(conn),
                snapshots,
            }),
        })
    }

    /// Subscribes to the live, replacing note-list sequence.
    pub fn get_all_notes(&self) -> NoteListFeed {
        NoteListFeed::new(self.inner.snapshots.subscribe())
    }

    /// Last published snapshot.
    pub fn snapshot(&self) -> NoteSnapshot {
        self.inner.snapshots.borrow().clone()
    }

    pub async fn insert(&self, note: Note) -> RepoResult<NoteId> {
        let id = self
            .mutate("note_insert", move |store| store.insert_note(&note))
            .await?;
        debug!("event=note_insert module=store status=assigned note_id={id}");
        Ok(id)
    }

    /// Returns `false` when no row matched `note.id`.
    pub async fn update(&self, note: Note) -> RepoResult<bool> {
        let id = note.id;
        let found = self
            .mutate("note_update", move |store| store.update_note(&note))
            .await?;
        if !found {
            debug!("event=note_update module=store status=noop note_id={id}");
        }
        Ok(found)
    }

    /// Returns `false` when no row matched `note.id`.
    pub async fn delete(&self, note: Note) -> RepoResult<bool> {
        let id = note.id;
        let found = self
            .mutate("note_delete", move |store| store.delete_note(&note))
            .await?;
        if !found {
            debug!("event=note_delete module=store status=noop note_id={id}");
        }
        Ok(found)
    }

    pub async fn get_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || {
            let conn = inner.conn.lock().map_err(|_| RepoError::LockPoisoned)?;
            let store = SqliteNoteStore::new(&conn);
            store.get_note_by_id(id)
        })
        .await
    }

    async fn mutate<T, F>(&self, event: &'static str, op: F) -> RepoResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteNoteStore<'_>) -> RepoResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let started_at = Instant::now();
        let result = run_blocking(move || {
            let conn = inner.conn.lock().map_err(|_| RepoError::LockPoisoned)?;
            let store = SqliteNoteStore::new(&conn);
            let output = op(&store)?;
            let notes = store.list_notes()?;
            inner.snapshots.send_replace(Arc::new(notes));
            Ok(output)
        })
        .await;

        match &result {
            Ok(_) => info!(
                "event={} module=store status=ok duration_ms={}",
                event,
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={} module=store status=error duration_ms={} error={}",
                event,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

async fn run_blocking<T, F>(op: F) -> RepoResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> RepoResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|err| RepoError::Worker(err.to_string()))?
}
