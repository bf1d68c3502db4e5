//! Note repository facade.
//!
//! # Responsibility
//! - Be the only entry point screen states use to reach the store.
//! - Resolve delete-by-id into lookup-then-delete.
//!
//! # Invariants
//! - Adds no business rules beyond delete-by-id resolution.
//! - A delete-by-id miss is a silent no-op, never an error.

use crate::model::note::{Note, NoteId};
use crate::repo::feed::{NoteListFeed, NoteSnapshot};
use crate::repo::live_store::LiveNoteStore;
use crate::repo::note_store::RepoResult;
use log::debug;

/// Cloneable facade over the application's [`LiveNoteStore`].
#[derive(Clone)]
pub struct NoteRepository {
    store: LiveNoteStore,
}

impl NoteRepository {
    pub fn new(store: LiveNoteStore) -> Self {
        Self { store }
    }

    /// Live sequence of full note lists, unmodified from the store.
    pub fn get_notes(&self) -> NoteListFeed {
        self.store.get_all_notes()
    }

    /// Current full list without subscribing.
    pub fn snapshot(&self) -> NoteSnapshot {
        self.store.snapshot()
    }

    /// Inserts a note and returns its store-assigned id.
    pub async fn add_note(&self, note: Note) -> RepoResult<NoteId> {
        self.store.insert(note).await
    }

    /// Returns `false` when the note no longer exists.
    pub async fn update_note(&self, note: Note) -> RepoResult<bool> {
        self.store.update(note).await
    }

    pub async fn delete_note(&self, note: Note) -> RepoResult<bool> {
        self.store.delete(note).await
    }

    /// Deletes the note with `id` if it exists.
    ///
    /// Returns whether a note was removed.
    pub async fn delete_note_by_id(&self, id: NoteId) -> RepoResult<bool> {
        match self.store.get_by_id(id).await? {
            Some(note) => self.store.delete(note).await,
            None => {
                debug!("event=note_delete_by_id module=repo status=not_found note_id={id}");
                Ok(false)
            }
        }
    }

    pub async fn get_note_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.store.get_by_id(id).await
    }
}
