//! Domain model for notes.
//!
//! # Responsibility
//! - Define the note record and its value types (color, timestamps).
//! - Provide listing filters shared by screen states.
//!
//! # Invariants
//! - Every persisted note is identified by a store-assigned `NoteId`.
//! - Deletion removes the row; no tombstone is kept.

pub mod color;
pub mod filter;
pub mod note;
pub mod timestamp;
