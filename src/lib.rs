//! # artikel
//!
//! Practice German noun articles (der, die, das) from the terminal.
//!
//! Vocabulary, settings, progress and the signed-in user live in a local
//! SQLite database. A practice session draws words that still need practice,
//! optionally asks a content generation service for the article and an
//! illustration, and tracks a daily streak.
//!
//! ```rust,ignore
//! use artikel::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
