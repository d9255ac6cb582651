//! Local persistence layer for artikel.
//!
//! A single SQLite file holds four logical tables, each addressed by a string
//! key:
//!
//! - **words**: one row per vocabulary entry, keyed by the derived word id
//! - **settings**: preferences singleton under key `default`
//! - **user**: signed-in user singleton under key `current`
//! - **progress**: streak and counters singleton under key `current`
//!
//! There are no joins and no foreign keys between tables. Every write is a
//! single statement, so an interrupted write leaves either the old row or the
//! new one.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use artikel::db::{db::Db, words::Words};
//! use artikel::libs::word::{Difficulty, Word};
//!
//! let db = Db::new()?;
//! let words = Words::new(&db);
//! words.add(&Word::new("Apfel", "Apple", Difficulty::Easy))?;
//! ```

/// Connection ownership, opening and whole-store reset.
pub mod db;

/// Versioned schema migrations applied on open.
pub mod migrations;

pub mod progress;
pub mod settings;
pub mod users;

/// Word records: add, get, scan, upsert and delete.
pub mod words;
