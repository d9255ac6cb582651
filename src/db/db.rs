use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "artikel.db";

const CLEAR_TABLES: [&str; 4] = ["DELETE FROM words", "DELETE FROM settings", "DELETE FROM user", "DELETE FROM progress"];

/// The single local store connection.
///
/// Opened once at startup and handed to every store and service by
/// reference. Opening applies pending migrations, so the four tables always
/// exist afterwards.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> AppResult<Db> {
        let db_file_path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Self::open(db_file_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Db> {
        let conn = Connection::open(path).map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Self::with_connection(conn)
    }

    /// In-memory store. Nothing survives the process.
    pub fn open_in_memory() -> AppResult<Db> {
        let conn = Connection::open_in_memory().map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(mut conn: Connection) -> AppResult<Db> {
        init_with_migrations(&mut conn).map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Ok(Db { conn })
    }

    /// Wipes every table. Used only by reset flows.
    pub fn clear_all(&mut self) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        for statement in CLEAR_TABLES {
            tx.execute(statement, [])?;
        }
        tx.commit()?;
        tracing::info!("cleared all local tables");
        Ok(())
    }
}
