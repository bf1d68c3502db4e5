//! Note domain model.
//!
//! # Invariants
//! - `id` is assigned by the store; [`UNSAVED_NOTE_ID`] marks a transient note.
//! - `created_at` never changes after first persistence.
//! - `updated_at >= created_at` under the stored timestamp format.

use crate::model::color::NoteColor;
use serde::{Deserialize, Serialize};

/// Store-assigned, never reused note identifier.
pub type NoteId = i64;

/// Id carried by a note that has not been persisted yet.
pub const UNSAVED_NOTE_ID: NoteId = 0;

/// Id used by navigation and the editor to request a brand-new note.
pub const NEW_NOTE_ID: NoteId = -1;

/// One short text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Stored timestamp string, see [`crate::model::timestamp`].
    pub created_at: String,
    pub updated_at: String,
    pub color: NoteColor,
}

impl Note {
    /// Creates a transient note whose timestamps are both `now`.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        color: NoteColor,
        now: impl Into<String>,
    ) -> Self {
        let now = now.into();
        Self {
            id: UNSAVED_NOTE_ID,
            title: title.into(),
            content: content.into(),
            created_at: now.clone(),
            updated_at: now,
            color,
        }
    }
}

/// Returns whether `id` asks for a new note rather than an existing one.
pub fn is_new_note_id(id: Option<NoteId>) -> bool {
    match id {
        None => true,
        Some(value) => value == NEW_NOTE_ID || value == UNSAVED_NOTE_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_is_transient_with_equal_timestamps() {
        let note = Note::new("A", "hi", NoteColor::RED, "2026-01-01T00:00:00.000Z");
        assert_eq!(note.id, UNSAVED_NOTE_ID);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn new_note_id_sentinels() {
        assert!(is_new_note_id(None));
        assert!(is_new_note_id(Some(NEW_NOTE_ID)));
        assert!(is_new_note_id(Some(UNSAVED_NOTE_ID)));
        assert!(!is_new_note_id(Some(7)));
    }
}
