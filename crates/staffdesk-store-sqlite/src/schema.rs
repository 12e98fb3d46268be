//! SQL schema for the Staffdesk SQLite session file.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per slot key. The session store uses a single well-known key.
CREATE TABLE IF NOT EXISTS session_slots (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,   -- opaque payload (JSON user record)
    written_at  TEXT NOT NULL    -- ISO 8601 UTC
);

PRAGMA user_version = 1;
";
