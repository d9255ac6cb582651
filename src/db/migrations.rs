//! Versioned schema for the local store.
//!
//! Each entry of [`MIGRATIONS`] is a numbered batch of SQL. Opening the store
//! applies every batch newer than the recorded schema version inside one
//! transaction and records it in `schema_migrations`, so a file is either at
//! the old version or fully at the new one.
//!
//! ```rust,ignore
//! use artikel::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 2);
//! ```

use crate::libs::error::AppResult;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// One schema step. Released steps are never edited.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_record_tables",
        sql: "
CREATE TABLE IF NOT EXISTS words (
    id TEXT NOT NULL PRIMARY KEY,
    german TEXT NOT NULL,
    english TEXT NOT NULL,
    article TEXT,
    image_url TEXT,
    difficulty TEXT NOT NULL DEFAULT 'medium',
    times_practiced INTEGER NOT NULL DEFAULT 0,
    last_practiced TEXT,
    mastered BOOLEAN NOT NULL DEFAULT FALSE
);
CREATE TABLE IF NOT EXISTS settings (
    id TEXT NOT NULL PRIMARY KEY,
    theme TEXT NOT NULL,
    sound_enabled BOOLEAN NOT NULL,
    notifications_enabled BOOLEAN NOT NULL,
    practice_goal INTEGER NOT NULL,
    difficulty TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS user (
    id TEXT NOT NULL PRIMARY KEY,
    uid TEXT NOT NULL,
    display_name TEXT NOT NULL,
    email TEXT,
    photo_url TEXT,
    created_at TEXT NOT NULL,
    last_login TEXT NOT NULL
);
-- streak_dates holds a JSON array of YYYY-MM-DD strings
CREATE TABLE IF NOT EXISTS progress (
    id TEXT NOT NULL PRIMARY KEY,
    words_learned INTEGER NOT NULL DEFAULT 0,
    streak INTEGER NOT NULL DEFAULT 0,
    last_practiced TEXT,
    streak_dates TEXT NOT NULL DEFAULT '[]'
);",
    },
    Migration {
        version: 2,
        name: "add_word_indices",
        sql: "
CREATE INDEX IF NOT EXISTS idx_words_german ON words(german);
CREATE INDEX IF NOT EXISTS idx_words_difficulty ON words(difficulty);
CREATE INDEX IF NOT EXISTS idx_words_mastered ON words(mastered);",
    },
];

/// A row of `schema_migrations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub version: u32,
    pub name: String,
    pub applied_at: String,
}

pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Applies all pending migrations. Returns how many ran.
pub fn init_with_migrations(conn: &mut Connection) -> AppResult<usize> {
    conn.execute(SCHEMA_MIGRATIONS_TABLE, [])?;

    let current = get_db_version(conn)?;
    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();
    if pending.is_empty() {
        msg_debug!(Message::DatabaseUpToDate);
        return Ok(0);
    }
    msg_debug!(Message::MigrationsFound(pending.len()));

    let tx = conn.transaction()?;
    for migration in &pending {
        msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));
        if let Err(e) = tx.execute_batch(migration.sql) {
            msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
            return Err(e.into());
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
            params![migration.version, migration.name],
        )?;
        msg_debug!(Message::MigrationCompleted(migration.version));
    }
    tx.commit()?;

    msg_debug!(Message::AllMigrationsCompleted);
    Ok(pending.len())
}

/// Highest applied version, or 0 for a store that was never migrated.
pub fn get_db_version(conn: &Connection) -> AppResult<u32> {
    let has_table = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations'",
            [],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if !has_table {
        return Ok(0);
    }

    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

pub fn needs_migration(conn: &Connection) -> AppResult<bool> {
    Ok(get_db_version(conn)? < latest_version())
}

pub fn get_migration_history(conn: &Connection) -> AppResult<Vec<AppliedMigration>> {
    let mut stmt = conn.prepare("SELECT version, name, applied_at FROM schema_migrations ORDER BY version")?;
    let rows = stmt.query_map([], |row| {
        Ok(AppliedMigration {
            version: row.get(0)?,
            name: row.get(1)?,
            applied_at: row.get(2)?,
        })
    })?;

    let mut history = Vec::new();
    for row in rows {
        history.push(row?);
    }
    Ok(history)
}
