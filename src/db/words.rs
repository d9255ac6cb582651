use crate::db::db::Db;
use crate::libs::error::{AppError, AppResult};
use crate::libs::word::{Article, Difficulty, Word};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

const INSERT_WORD: &str = "INSERT INTO words (id, german, english, article, image_url, difficulty, times_practiced, last_practiced, mastered)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPSERT_WORD: &str = "INSERT INTO words (id, german, english, article, image_url, difficulty, times_practiced, last_practiced, mastered)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
    ON CONFLICT(id) DO UPDATE SET german = excluded.german, english = excluded.english, article = excluded.article,
        image_url = excluded.image_url, difficulty = excluded.difficulty, times_practiced = excluded.times_practiced,
        last_practiced = excluded.last_practiced, mastered = excluded.mastered";
const SELECT_COLUMNS: &str = "SELECT id, german, english, article, image_url, difficulty, times_practiced, last_practiced, mastered FROM words";
const DELETE_WORD: &str = "DELETE FROM words WHERE id = ?1";
const COUNT_WORDS: &str = "SELECT COUNT(*) FROM words";

/// CRUD over the `words` table.
pub struct Words<'a> {
    conn: &'a Connection,
}

impl<'a> Words<'a> {
    pub fn new(db: &'a Db) -> Self {
        Words { conn: &db.conn }
    }

    /// Inserts a new word. Fails with [`AppError::DuplicateKey`] if the id is taken.
    pub fn add(&self, word: &Word) -> AppResult<()> {
        let last_practiced = word.last_practiced.map(|ts| ts.to_rfc3339());
        let result = self.conn.execute(
            INSERT_WORD,
            params![
                word.id,
                word.german,
                word.english,
                word.article.map(|a| a.as_str()),
                word.image_url,
                word.difficulty.as_str(),
                word.times_practiced,
                last_practiced,
                word.mastered
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => {
                Err(AppError::DuplicateKey(word.id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Word>> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let word = self.conn.query_row(&sql, params![id], row_to_word).optional()?;
        Ok(word)
    }

    pub fn get_all(&self) -> AppResult<Vec<Word>> {
        let sql = format!("{} ORDER BY rowid", SELECT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let word_iter = stmt.query_map([], row_to_word)?;

        let mut words = Vec::new();
        for word in word_iter {
            words.push(word?);
        }
        Ok(words)
    }

    /// Overwrites the whole record by id.
    ///
    /// Existence is not checked here, so updating an unknown id inserts it.
    pub fn update(&self, word: &Word) -> AppResult<()> {
        let last_practiced = word.last_practiced.map(|ts| ts.to_rfc3339());
        self.conn.execute(
            UPSERT_WORD,
            params![
                word.id,
                word.german,
                word.english,
                word.article.map(|a| a.as_str()),
                word.image_url,
                word.difficulty.as_str(),
                word.times_practiced,
                last_practiced,
                word.mastered
            ],
        )?;
        Ok(())
    }

    /// Returns `true` when a row was removed.
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let affected = self.conn.execute(DELETE_WORD, params![id])?;
        Ok(affected > 0)
    }

    pub fn count(&self) -> AppResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_WORDS, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_word(row: &Row<'_>) -> rusqlite::Result<Word> {
    let article: Option<String> = row.get(3)?;
    let difficulty: String = row.get(5)?;
    let last_practiced: Option<String> = row.get(7)?;

    Ok(Word {
        id: row.get(0)?,
        german: row.get(1)?,
        english: row.get(2)?,
        article: article.and_then(|a| a.parse::<Article>().ok()),
        image_url: row.get(4)?,
        difficulty: difficulty.parse::<Difficulty>().unwrap_or_default(),
        times_practiced: row.get(6)?,
        last_practiced: last_practiced
            .and_then(|ts| DateTime::parse_from_rfc3339(&ts).ok())
            .map(|ts| ts.with_timezone(&Utc)),
        mastered: row.get(8)?,
    })
}
