use notes_core::db::migrations::latest_version;
use notes_core::db::{open_db, open_db_in_memory, open_db_with_policy, DbError, SchemaPolicy};
use notes_core::{NoteStore, RepoError, SqliteNoteStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "notes");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "notes");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE keep_me (value TEXT);
         INSERT INTO keep_me (value) VALUES ('precious');
         PRAGMA user_version = 999;",
    )
    .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_table_exists(&conn, "keep_me");
}

#[test]
fn recreate_policy_wipes_incompatible_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);
         INSERT INTO notes (body) VALUES ('old shape');
         PRAGMA user_version = 7;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db_with_policy(&path, SchemaPolicy::RecreateOnMismatch).unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let store = SqliteNoteStore::try_new(&conn).unwrap();
    assert!(store.list_notes().unwrap().is_empty());
}

#[test]
fn recreate_policy_drops_tables_linked_by_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linked.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);
         CREATE TABLE note_tags (
             note_id INTEGER NOT NULL REFERENCES notes(id),
             tag TEXT NOT NULL
         );
         INSERT INTO notes (id, body) VALUES (1, 'tagged');
         INSERT INTO note_tags (note_id, tag) VALUES (1, 'work');
         PRAGMA user_version = 9;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db_with_policy(&path, SchemaPolicy::RecreateOnMismatch).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_table_missing(&conn, "note_tags");

    let fk_enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk_enabled, 1);

    let store = SqliteNoteStore::try_new(&conn).unwrap();
    assert!(store.list_notes().unwrap().is_empty());
}

#[test]
fn store_rejects_connection_without_notes_table() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteNoteStore::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("notes")));
}

#[test]
fn store_rejects_notes_table_missing_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, title TEXT);")
        .unwrap();
    let err = SqliteNoteStore::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::MissingRequiredColumn {
            table: "notes",
            column: "content"
        }
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

fn assert_table_missing(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 0, "table {table_name} still exists");
}
