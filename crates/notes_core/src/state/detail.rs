//! Read-only live projection of one note.
//!
//! # Invariants
//! - The projected value only ever comes from a full-list snapshot.
//! - When the note disappears the last known value is retained.

use crate::model::color::NoteColor;
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::state::observable::Observable;
use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Detail screen state; unsubscribes from the feed on drop.
pub struct DetailState {
    note_id: NoteId,
    note: Observable<Option<Note>>,
    subscription: JoinHandle<()>,
}

impl DetailState {
    pub fn new(repository: &NoteRepository, runtime: &Handle, note_id: NoteId) -> Self {
        let seeded = repository
            .snapshot()
            .iter()
            .find(|candidate| candidate.id == note_id)
            .cloned();
        let note = Observable::new(seeded);
        let target = note.clone();
        let mut feed = repository.get_notes();
        let subscription = runtime.spawn(async move {
            while let Some(snapshot) = feed.next().await {
                if let Some(found) = snapshot.iter().find(|candidate| candidate.id == note_id) {
                    target.set(Some(found.clone()));
                }
            }
            debug!("event=detail_feed module=state status=closed note_id={note_id}");
        });

        Self {
            note_id,
            note,
            subscription,
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// `None` until the note has been seen in a snapshot.
    pub fn note(&self) -> &Observable<Option<Note>> {
        &self.note
    }

    pub fn current(&self) -> Option<Note> {
        self.note.get()
    }

    /// Tint to render with; light gray until the note resolves.
    pub fn display_color(&self) -> NoteColor {
        self.note
            .get()
            .map_or(NoteColor::LIGHT_GRAY, |note| note.color)
    }
}

impl Drop for DetailState {
    fn drop(&mut self) {
        self.subscription.abort();
    }
}
