//! Note store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD primitives over the `notes` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Ids come from `AUTOINCREMENT` and are never reused.
//! - `update_note` never rewrites `created_at`.
//! - Listing order is `id DESC` (newest created first).
//! - Updates/deletes of a missing id change nothing and are not errors.

use crate::db::DbError;
use crate::model::color::NoteColor;
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at,
    color
FROM notes";

const NOTE_COLUMNS: [&str; 6] = [
    "id",
    "title",
    "content",
    "created_at",
    "updated_at",
    "color",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// A previous holder of the connection panicked.
    LockPoisoned,
    /// The background worker running the operation failed.
    Worker(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
            Self::LockPoisoned => write!(f, "note store connection lock poisoned"),
            Self::Worker(message) => write!(f, "note store worker failed: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable CRUD over note records.
pub trait NoteStore {
    /// Inserts a note, replacing any row with the same id.
    ///
    /// A note carrying [`crate::UNSAVED_NOTE_ID`] (or any non-positive id)
    /// gets a fresh id. Returns the id of the stored row.
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId>;
    /// Overwrites mutable fields of the row matching `note.id`.
    ///
    /// Returns `false` when no such row exists.
    fn update_note(&self, note: &Note) -> RepoResult<bool>;
    /// Removes the row matching `note.id`. Returns `false` when absent.
    fn delete_note(&self, note: &Note) -> RepoResult<bool>;
    /// Point-in-time lookup by id.
    fn get_note_by_id(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Full note list ordered by id descending.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
}

/// SQLite-backed note store borrowing a migrated connection.
pub struct SqliteNoteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteStore<'conn> {
    /// Wraps a connection already checked by [`SqliteNoteStore::try_new`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Constructs a store after verifying the `notes` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_notes_table_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteStore for SqliteNoteStore<'_> {
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId> {
        let explicit_id = if note.id > 0 { Some(note.id) } else { None };
        self.conn.execute(
            "INSERT OR REPLACE INTO notes (
                id,
                title,
                content,
                created_at,
                updated_at,
                color
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                explicit_id,
                note.title.as_str(),
                note.content.as_str(),
                note.created_at.as_str(),
                note.updated_at.as_str(),
                i64::from(note.color.argb()),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_note(&self, note: &Note) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?2,
                content = ?3,
                updated_at = ?4,
                color = ?5
             WHERE id = ?1;",
            params![
                note.id,
                note.title.as_str(),
                note.content.as_str(),
                note.updated_at.as_str(),
                i64::from(note.color.argb()),
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_note(&self, note: &Note) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [note.id])?;
        Ok(changed > 0)
    }

    fn get_note_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let raw = stmt.query_row([id], read_raw_row).optional()?;
        raw.map(RawNoteRow::into_note).transpose()
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(read_raw_row(row)?.into_note()?);
        }
        Ok(notes)
    }
}

struct RawNoteRow {
    id: NoteId,
    title: String,
    content: String,
    created_at: String,
    updated_at: String,
    color: i64,
}

impl RawNoteRow {
    fn into_note(self) -> RepoResult<Note> {
        Ok(Note {
            id: self.id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            color: parse_color(self.id, self.color)?,
        })
    }
}

fn read_raw_row(row: &Row<'_>) -> rusqlite::Result<RawNoteRow> {
    Ok(RawNoteRow {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        color: row.get("color")?,
    })
}

/// Accepts both the unsigned ARGB form and the signed 32-bit legacy form.
fn parse_color(id: NoteId, value: i64) -> RepoResult<NoteColor> {
    if let Ok(unsigned) = u32::try_from(value) {
        return Ok(NoteColor(unsigned));
    }
    if let Ok(signed) = i32::try_from(value) {
        return Ok(NoteColor::from_signed(signed));
    }
    Err(RepoError::InvalidData(format!(
        "invalid color value `{value}` in notes.color for id {id}"
    )))
}

fn ensure_notes_table_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "notes")? {
        return Err(RepoError::MissingRequiredTable("notes"));
    }

    for column in NOTE_COLUMNS {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::parse_color;
    use crate::model::color::NoteColor;

    #[test]
    fn parse_color_accepts_unsigned_and_signed_forms() {
        assert_eq!(parse_color(1, 0xFFFF_0000).unwrap(), NoteColor::RED);
        assert_eq!(
            parse_color(1, i64::from(NoteColor::RED.to_signed())).unwrap(),
            NoteColor::RED
        );
    }

    #[test]
    fn parse_color_rejects_out_of_range_values() {
        assert!(parse_color(1, 1 << 40).is_err());
    }
}
