use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of practices after which a correct answer marks a word as mastered.
pub const MASTERY_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Article {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "der" => Ok(Article::Der),
            "die" => Ok(Article::Die),
            "das" => Ok(Article::Das),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(other.to_string()),
        }
    }
}

/// A vocabulary entry as persisted in the `words` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub german: String,
    pub english: String,
    pub article: Option<Article>,
    pub image_url: Option<String>,
    pub difficulty: Difficulty,
    pub times_practiced: u32,
    pub last_practiced: Option<DateTime<Utc>>,
    pub mastered: bool,
}

impl Word {
    pub fn new(german: &str, english: &str, difficulty: Difficulty) -> Self {
        Word {
            id: word_id(german),
            german: german.trim().to_string(),
            english: english.trim().to_string(),
            article: None,
            image_url: None,
            difficulty,
            times_practiced: 0,
            last_practiced: None,
            mastered: false,
        }
    }

    pub fn with_article(mut self, article: Article) -> Self {
        self.article = Some(article);
        self
    }

    /// Not mastered and practiced fewer than [`MASTERY_THRESHOLD`] times.
    pub fn needs_practice(&self) -> bool {
        !self.mastered && self.times_practiced < MASTERY_THRESHOLD
    }
}

/// Derives the stable word id from its German text.
///
/// The text is lowercased and every whitespace run becomes a single `_`, so
/// `"Haus"`, `"haus"` and `" Haus "` all map to `word_haus`.
pub fn word_id(german: &str) -> String {
    let normalized = german.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("_");
    format!("word_{}", normalized)
}

/// Partial update applied through `WordService::update_word_data`.
#[derive(Debug, Clone, Default)]
pub struct WordUpdate {
    pub article: Option<Article>,
    pub image_url: Option<String>,
    pub difficulty: Option<Difficulty>,
}

/// What a flashcard shows for a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCard {
    pub article: Article,
    pub german_word: String,
    pub english_word: String,
    pub image_url: String,
}

impl From<&Word> for WordCard {
    fn from(word: &Word) -> Self {
        WordCard {
            article: word.article.unwrap_or(Article::Der),
            german_word: word.german.clone(),
            english_word: word.english.clone(),
            image_url: word.image_url.clone().unwrap_or_default(),
        }
    }
}
