//! Core library modules for artikel.
//!
//! Services borrow a [`Db`](crate::db::db::Db) handle and return
//! [`AppResult`](error::AppResult). Presentation and interactive setup live
//! here too, next to the message catalog they print from.
//!
//! ```rust,ignore
//! use artikel::db::db::Db;
//! use artikel::libs::{initializer::DatabaseInitializer, word_service::WordService};
//!
//! let db = Db::new()?;
//! DatabaseInitializer::new(&db).initialize()?;
//! let next = WordService::new(&db).next_word()?;
//! ```

pub mod auth;
pub mod cache;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod initializer;
pub mod logging;
pub mod messages;
pub mod progress;
pub mod settings;
pub mod view;
pub mod word;
pub mod word_service;
