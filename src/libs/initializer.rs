//! First-run seeding of the local store.
//!
//! [`DatabaseInitializer::initialize`] is safe to call on every start. It
//! materializes the settings and progress singletons when they are missing
//! and inserts the seed vocabulary only while the word table is empty.

use crate::db::db::Db;
use crate::db::progress::{Progress, ProgressStore};
use crate::db::settings::{Settings, SettingsStore};
use crate::db::words::Words;
use crate::libs::error::{AppError, AppResult};
use crate::libs::word::{Article, Difficulty, Word};

/// One entry of the built-in vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SeedWord {
    pub german: &'static str,
    pub english: &'static str,
    pub article: Article,
    pub difficulty: Difficulty,
}

const fn seed(german: &'static str, english: &'static str, article: Article, difficulty: Difficulty) -> SeedWord {
    SeedWord {
        german,
        english,
        article,
        difficulty,
    }
}

pub const SEED_WORDS: [SeedWord; 15] = [
    seed("Apfel", "Apple", Article::Der, Difficulty::Easy),
    seed("Banane", "Banana", Article::Die, Difficulty::Easy),
    seed("Haus", "House", Article::Das, Difficulty::Easy),
    seed("Auto", "Car", Article::Das, Difficulty::Easy),
    seed("Buch", "Book", Article::Das, Difficulty::Easy),
    seed("Stuhl", "Chair", Article::Der, Difficulty::Easy),
    seed("Tisch", "Table", Article::Der, Difficulty::Easy),
    seed("Fenster", "Window", Article::Das, Difficulty::Medium),
    seed("Blume", "Flower", Article::Die, Difficulty::Medium),
    seed("Sonne", "Sun", Article::Die, Difficulty::Medium),
    seed("Mond", "Moon", Article::Der, Difficulty::Medium),
    seed("Stern", "Star", Article::Der, Difficulty::Medium),
    seed("Katze", "Cat", Article::Die, Difficulty::Easy),
    seed("Hund", "Dog", Article::Der, Difficulty::Easy),
    seed("Wasser", "Water", Article::Das, Difficulty::Medium),
];

impl SeedWord {
    pub fn to_word(&self) -> Word {
        Word::new(self.german, self.english, self.difficulty).with_article(self.article)
    }
}

pub struct DatabaseInitializer<'a> {
    db: &'a Db,
}

impl<'a> DatabaseInitializer<'a> {
    pub fn new(db: &'a Db) -> Self {
        DatabaseInitializer { db }
    }

    /// Ensures the singletons exist and seeds words into an empty table.
    ///
    /// Returns the number of words inserted, which is zero on every run after
    /// the first.
    pub fn initialize(&self) -> AppResult<usize> {
        self.ensure_default_records()?;

        let words = Words::new(self.db);
        let existing = words.count()?;
        if existing > 0 {
            tracing::info!(existing, "database already contains words, skipping seed");
            return Ok(0);
        }

        tracing::info!(count = SEED_WORDS.len(), "adding initial words to database");
        let mut inserted = 0;
        for entry in SEED_WORDS.iter() {
            match words.add(&entry.to_word()) {
                Ok(()) => inserted += 1,
                // Two seed entries normalizing to one id keep the first.
                Err(AppError::DuplicateKey(id)) => tracing::warn!(%id, "seed word already present"),
                Err(e) => return Err(e),
            }
        }

        tracing::info!(inserted, "seeded initial vocabulary");
        Ok(inserted)
    }

    fn ensure_default_records(&self) -> AppResult<()> {
        let settings = SettingsStore::new(self.db);
        if settings.get()?.is_none() {
            settings.save(&Settings::default())?;
            tracing::debug!("created default settings");
        }

        let progress = ProgressStore::new(self.db);
        if progress.get()?.is_none() {
            progress.save(&Progress::default())?;
            tracing::debug!("created default progress");
        }
        Ok(())
    }

    /// Adds a user-supplied word.
    ///
    /// Fails with [`AppError::DuplicateKey`] when a word with the same
    /// normalized German text exists.
    pub fn add_new_word(&self, german: &str, english: &str, difficulty: Difficulty) -> AppResult<Word> {
        if german.trim().is_empty() || english.trim().is_empty() {
            return Err(AppError::InvalidArgument("german and english text must not be empty".to_string()));
        }

        let word = Word::new(german, english, difficulty);
        let words = Words::new(self.db);
        if words.get(&word.id)?.is_some() {
            return Err(AppError::DuplicateKey(word.id));
        }
        words.add(&word)?;
        Ok(word)
    }
}
