//! Word selection, practice recording and derived statistics.
//!
//! ## Selection policy
//!
//! A word *needs practice* when it is not mastered and has been practiced
//! fewer than three times. The next card is drawn uniformly from the words
//! that need practice. Once none are left, it is drawn uniformly from all
//! words. Only an empty table yields no card.
//!
//! ## Mastery
//!
//! Recording a correct answer masters a word only if it had already been
//! practiced at least three times *before* this attempt. A word therefore
//! becomes mastered on its fourth practice at the earliest. An incorrect
//! answer clears the flag and never resets the counter.

use crate::db::db::Db;
use crate::db::words::Words;
use crate::libs::error::{AppError, AppResult};
use crate::libs::initializer::DatabaseInitializer;
use crate::libs::word::{Difficulty, Word, WordUpdate, MASTERY_THRESHOLD};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeStats {
    pub total_words: usize,
    pub mastered_words: usize,
    /// Not mastered but practiced at least once.
    pub words_in_progress: usize,
    /// Mean of `times_practiced`, rounded to two decimals.
    pub average_practice_count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub total_words: usize,
    pub words_needing_practice: usize,
    pub mastered_words: usize,
    pub next_word_suggestion: String,
}

pub struct WordService<'a> {
    db: &'a Db,
}

impl<'a> WordService<'a> {
    pub fn new(db: &'a Db) -> Self {
        WordService { db }
    }

    fn words(&self) -> Words<'a> {
        Words::new(self.db)
    }

    pub fn get_all_words(&self) -> AppResult<Vec<Word>> {
        self.words().get_all()
    }

    pub fn get_word(&self, id: &str) -> AppResult<Option<Word>> {
        self.words().get(id)
    }

    pub fn get_words_by_difficulty(&self, difficulty: Difficulty) -> AppResult<Vec<Word>> {
        Ok(self.get_all_words()?.into_iter().filter(|w| w.difficulty == difficulty).collect())
    }

    pub fn get_mastered_words(&self) -> AppResult<Vec<Word>> {
        Ok(self.get_all_words()?.into_iter().filter(|w| w.mastered).collect())
    }

    pub fn get_words_needing_practice(&self) -> AppResult<Vec<Word>> {
        Ok(self.get_all_words()?.into_iter().filter(Word::needs_practice).collect())
    }

    pub fn add_word(&self, german: &str, english: &str, difficulty: Difficulty) -> AppResult<Word> {
        DatabaseInitializer::new(self.db).add_new_word(german, english, difficulty)
    }

    pub fn delete_word(&self, id: &str) -> AppResult<()> {
        if !self.words().delete(id)? {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Records one practice attempt and returns the updated word.
    pub fn record_word_practice(&self, id: &str, correct: bool) -> AppResult<Word> {
        let words = self.words();
        let mut word = words.get(id)?.ok_or_else(|| AppError::NotFound(id.to_string()))?;

        let previous = word.times_practiced;
        word.times_practiced = previous + 1;
        word.last_practiced = Some(Utc::now());
        word.mastered = correct && previous >= MASTERY_THRESHOLD;

        words.update(&word)?;
        tracing::debug!(id, correct, times_practiced = word.times_practiced, mastered = word.mastered, "recorded practice");
        Ok(word)
    }

    /// Applies generated content or a difficulty change to a stored word.
    pub fn update_word_data(&self, id: &str, update: WordUpdate) -> AppResult<Word> {
        let words = self.words();
        let mut word = words.get(id)?.ok_or_else(|| AppError::NotFound(id.to_string()))?;

        if let Some(article) = update.article {
            word.article = Some(article);
        }
        if let Some(image_url) = update.image_url {
            word.image_url = Some(image_url);
        }
        if let Some(difficulty) = update.difficulty {
            word.difficulty = difficulty;
        }

        words.update(&word)?;
        Ok(word)
    }

    pub fn get_next_word_for_practice<R: Rng + ?Sized>(&self, rng: &mut R) -> AppResult<Option<Word>> {
        let words = self.get_all_words()?;
        Ok(select_next(&words, rng).cloned())
    }

    /// [`Self::get_next_word_for_practice`] with the thread-local RNG.
    pub fn next_word(&self) -> AppResult<Option<Word>> {
        self.get_next_word_for_practice(&mut rand::thread_rng())
    }

    /// Up to `count` distinct words in random order.
    pub fn get_random_words<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> AppResult<Vec<Word>> {
        let mut words = self.get_all_words()?;
        words.shuffle(rng);
        words.truncate(count.min(words.len()));
        Ok(words)
    }

    pub fn get_practice_stats(&self) -> AppResult<PracticeStats> {
        Ok(practice_stats(&self.get_all_words()?))
    }

    pub fn get_session_stats(&self) -> AppResult<SessionStats> {
        Ok(session_stats(&self.get_all_words()?))
    }

    /// Clears practice history on every word. Returns how many were reset.
    pub fn reset_progress(&self) -> AppResult<usize> {
        let words = self.words();
        let all = words.get_all()?;
        for mut word in all.iter().cloned() {
            word.times_practiced = 0;
            word.mastered = false;
            word.last_practiced = None;
            words.update(&word)?;
        }
        tracing::info!(count = all.len(), "reset word progress");
        Ok(all.len())
    }
}

/// The two-tier selection over an in-memory word list.
pub fn select_next<'w, R: Rng + ?Sized>(words: &'w [Word], rng: &mut R) -> Option<&'w Word> {
    let needing: Vec<&Word> = words.iter().filter(|w| w.needs_practice()).collect();
    if let Some(word) = needing.choose(rng) {
        return Some(*word);
    }
    words.choose(rng)
}

pub fn practice_stats(words: &[Word]) -> PracticeStats {
    let mastered_words = words.iter().filter(|w| w.mastered).count();
    let words_in_progress = words.iter().filter(|w| !w.mastered && w.times_practiced > 0).count();
    let total_practice: u64 = words.iter().map(|w| w.times_practiced as u64).sum();
    let average = if words.is_empty() {
        0.0
    } else {
        total_practice as f64 / words.len() as f64
    };

    PracticeStats {
        total_words: words.len(),
        mastered_words,
        words_in_progress,
        average_practice_count: (average * 100.0).round() / 100.0,
    }
}

pub fn session_stats(words: &[Word]) -> SessionStats {
    let words_needing_practice = words.iter().filter(|w| w.needs_practice()).count();
    let mastered_words = words.iter().filter(|w| w.mastered).count();

    let next_word_suggestion = if words_needing_practice > 0 {
        format!("{} words need more practice", words_needing_practice)
    } else if !words.is_empty() {
        "Keep practicing to maintain your skills!".to_string()
    } else {
        "All words mastered! Great job!".to_string()
    };

    SessionStats {
        total_words: words.len(),
        words_needing_practice,
        mastered_words,
        next_word_suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(german: &str, times: u32, mastered: bool) -> Word {
        let mut w = Word::new(german, german, Difficulty::Easy);
        w.times_practiced = times;
        w.mastered = mastered;
        w
    }

    #[test]
    fn select_prefers_words_needing_practice() {
        let words = vec![word("A", 5, true), word("B", 1, false), word("C", 4, false)];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(select_next(&words, &mut rng).unwrap().german, "B");
        }
    }

    #[test]
    fn select_falls_back_to_all_words() {
        let words = vec![word("A", 5, true), word("B", 4, true)];
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(select_next(&words, &mut rng).unwrap().german.clone());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn select_on_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_next(&[], &mut rng).is_none());
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let words = vec![word("A", 1, false), word("B", 1, false), word("C", 0, false)];
        let stats = practice_stats(&words);
        assert_eq!(stats.average_practice_count, 0.67);
        assert_eq!(stats.words_in_progress, 2);
    }

    #[test]
    fn session_suggestion_texts() {
        assert_eq!(session_stats(&[]).next_word_suggestion, "All words mastered! Great job!");
        assert_eq!(session_stats(&[word("A", 0, false)]).next_word_suggestion, "1 words need more practice");
        assert_eq!(
            session_stats(&[word("A", 4, true)]).next_word_suggestion,
            "Keep practicing to maintain your skills!"
        );
    }
}
