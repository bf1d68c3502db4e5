//! Persistence layer: the note store, its live feed and the repository facade.
//!
//! # Responsibility
//! - Isolate SQLite query details from screen states.
//! - Deliver full-list snapshots to every subscriber after each mutation.
//!
//! # Invariants
//! - Exactly one [`live_store::LiveNoteStore`] exists per open database.
//! - Not-found lookups are values (`None`/`false`), never errors.

pub mod feed;
pub mod live_store;
pub mod note_repo;
pub mod note_store;
