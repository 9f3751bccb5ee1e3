//! SQL schema for the names SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS people (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    name   TEXT NOT NULL,    -- uniqueness is the uploader's job, not the schema's
    descr  TEXT,
    source TEXT,
    gender TEXT,
    ref    TEXT              -- reference URL
);

CREATE TABLE IF NOT EXISTS people_names (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id INTEGER NOT NULL REFERENCES people(id),
    name      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS people_tags (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id INTEGER NOT NULL REFERENCES people(id),
    tag       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS people_names_person_idx ON people_names(person_id);
CREATE INDEX IF NOT EXISTS people_tags_person_idx  ON people_tags(person_id);

PRAGMA user_version = 1;
";
