//! Note persistence and state-synchronization core.
//!
//! A single local SQLite store feeds full-list snapshots to any number of
//! screen states; editors and listings write through one repository facade.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod nav;
pub mod repo;
pub mod state;

pub use app::{CoreError, CoreResult, NotesApp};
pub use config::{ConfigError, CoreConfig};
pub use db::SchemaPolicy;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::color::NoteColor;
pub use model::filter::NoteFilter;
pub use model::note::{Note, NoteId, NEW_NOTE_ID, UNSAVED_NOTE_ID};
pub use model::timestamp::{display_timestamp, format_timestamp, Clock, SystemClock};
pub use nav::{parse_note_id_arg, Route};
pub use repo::feed::{NoteListFeed, NoteSnapshot};
pub use repo::live_store::LiveNoteStore;
pub use repo::note_repo::NoteRepository;
pub use repo::note_store::{NoteStore, RepoError, RepoResult, SqliteNoteStore};
pub use state::detail::DetailState;
pub use state::editor::{EditorState, SaveHandle, SaveOutcome};
pub use state::home::HomeState;
pub use state::observable::Observable;
pub use state::theme::{ThemeMode, ThemePreference};
pub use state::PendingWrite;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
