//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
///
/// `id` is an identity column: `AUTOINCREMENT` keeps assigned values strictly
/// increasing and never reused, the store's insert never names the column,
/// and the trigger refuses to rewrite it afterwards.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS persons (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL
);

CREATE TRIGGER IF NOT EXISTS persons_id_generated_always
BEFORE UPDATE OF id ON persons
BEGIN
    SELECT RAISE(ABORT, 'persons.id is generated always');
END;

PRAGMA user_version = 1;
";
