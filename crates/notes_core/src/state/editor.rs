//! Create/edit draft state.
//!
//! # Responsibility
//! - Hold the draft fields independently of persistence.
//! - Decide between create and update at save time and stamp timestamps.
//!
//! # Invariants
//! - Field setters never touch the store.
//! - An update-save keeps the loaded note's original `created_at`.
//! - Saving an id that no longer exists changes nothing.

use crate::model::color::NoteColor;
use crate::model::note::{is_new_note_id, Note, NoteId};
use crate::model::timestamp::{format_timestamp, Clock};
use crate::repo::note_repo::NoteRepository;
use crate::repo::note_store::RepoResult;
use crate::state::observable::Observable;
use crate::state::{dispatch_write, PendingWrite};
use log::debug;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Result of a dispatched save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(NoteId),
    /// `found == false` means the note was deleted elsewhere; nothing was written.
    Updated { id: NoteId, found: bool },
}

pub type SaveHandle = PendingWrite<SaveOutcome>;

/// Draft state for the add/edit screen.
pub struct EditorState {
    repository: NoteRepository,
    clock: Arc<dyn Clock>,
    runtime: Handle,
    title: Observable<String>,
    content: Observable<String>,
    color: Observable<NoteColor>,
    created_at: Observable<String>,
    updated_at: Observable<String>,
    loaded_id: Observable<Option<NoteId>>,
}

impl EditorState {
    pub fn new(repository: NoteRepository, clock: Arc<dyn Clock>, runtime: Handle) -> Self {
        Self {
            repository,
            clock,
            runtime,
            title: Observable::new(String::new()),
            content: Observable::new(String::new()),
            color: Observable::new(NoteColor::default()),
            created_at: Observable::new(String::new()),
            updated_at: Observable::new(String::new()),
            loaded_id: Observable::new(None),
        }
    }

    pub fn update_title(&self, text: impl Into<String>) {
        self.title.set(text.into());
    }

    pub fn update_content(&self, text: impl Into<String>) {
        self.content.set(text.into());
    }

    pub fn update_color(&self, color: NoteColor) {
        self.color.set(color);
    }

    pub fn title(&self) -> &Observable<String> {
        &self.title
    }

    pub fn content(&self) -> &Observable<String> {
        &self.content
    }

    pub fn color(&self) -> &Observable<NoteColor> {
        &self.color
    }

    pub fn updated_at(&self) -> &Observable<String> {
        &self.updated_at
    }

    pub fn created_at(&self) -> &Observable<String> {
        &self.created_at
    }

    /// Id of the note last populated by [`EditorState::load_by_id`].
    pub fn loaded_id(&self) -> Option<NoteId> {
        self.loaded_id.get()
    }

    /// Populates the draft from the stored note with `id`.
    ///
    /// Point-in-time: later store changes do not overwrite the draft. A miss
    /// leaves every field untouched and returns `Ok(false)`.
    pub async fn load_by_id(&self, id: NoteId) -> RepoResult<bool> {
        let Some(note) = self.repository.get_note_by_id(id).await? else {
            debug!("event=editor_load module=state status=not_found note_id={id}");
            return Ok(false);
        };

        self.title.set(note.title);
        self.content.set(note.content);
        self.color.set(note.color);
        self.created_at.set(note.created_at);
        self.updated_at.set(note.updated_at);
        self.loaded_id.set(Some(note.id));
        Ok(true)
    }

    /// Persists the current draft without waiting for the store.
    ///
    /// `None`, [`crate::NEW_NOTE_ID`] and [`crate::UNSAVED_NOTE_ID`] create a
    /// new note; any other id updates that note.
    pub fn save(&self, id: Option<NoteId>) -> SaveHandle {
        let now = format_timestamp(self.clock.now());
        let repository = self.repository.clone();

        if is_new_note_id(id) {
            let note = Note::new(self.title.get(), self.content.get(), self.color.get(), now);
            self.created_at.set(note.created_at.clone());
            self.updated_at.set(note.updated_at.clone());
            return dispatch_write(&self.runtime, "editor_save_create", async move {
                repository.add_note(note).await.map(SaveOutcome::Created)
            });
        }

        let id = id.unwrap_or_default();
        let note = Note {
            id,
            title: self.title.get(),
            content: self.content.get(),
            created_at: self.original_created_at(id, &now),
            updated_at: now,
            color: self.color.get(),
        };
        self.updated_at.set(note.updated_at.clone());
        dispatch_write(&self.runtime, "editor_save_update", async move {
            repository
                .update_note(note)
                .await
                .map(|found| SaveOutcome::Updated { id, found })
        })
    }

    fn original_created_at(&self, id: NoteId, now: &str) -> String {
        let created_at = self.created_at.get();
        if self.loaded_id.get() == Some(id) && !created_at.is_empty() {
            created_at
        } else {
            // The store keeps the persisted value regardless.
            now.to_string()
        }
    }
}
