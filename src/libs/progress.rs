//! Learning progress: the word counter and the daily streak.
//!
//! The streak counts consecutive calendar days with at least one learned
//! word. Recording several words on one day moves the counter every time
//! but the streak only once.

use crate::db::db::Db;
use crate::db::progress::{Progress, ProgressStore};
use crate::libs::error::AppResult;
use crate::libs::word::MASTERY_THRESHOLD;
use chrono::{Local, NaiveDate};

/// Words per level shown on the progress screen.
pub const WORDS_PER_LEVEL: u32 = 10;

impl Progress {
    /// Applies one day of practice to the streak.
    ///
    /// Returns `true` when the streak changed.
    pub fn advance_streak(&mut self, today: NaiveDate) -> bool {
        if self.last_practiced == Some(today) {
            return false;
        }

        let continues = self.last_practiced.and_then(|last| last.succ_opt()) == Some(today);
        self.streak = if continues { self.streak + 1 } else { 1 };
        self.last_practiced = Some(today);
        self.streak_dates.insert(today);
        true
    }

    pub fn articles_mastered(&self) -> u32 {
        self.words_learned / MASTERY_THRESHOLD
    }

    pub fn level(&self) -> u32 {
        self.words_learned / WORDS_PER_LEVEL + 1
    }

    pub fn practiced_on(&self, date: NaiveDate) -> bool {
        self.streak_dates.contains(&date)
    }
}

pub struct ProgressService<'a> {
    store: ProgressStore<'a>,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a Db) -> Self {
        ProgressService {
            store: ProgressStore::new(db),
        }
    }

    pub fn record_word_learned(&self) -> AppResult<Progress> {
        self.record_word_learned_on(Local::now().date_naive())
    }

    pub fn record_word_learned_on(&self, today: NaiveDate) -> AppResult<Progress> {
        let mut progress = self.store.get()?.unwrap_or_default();
        progress.words_learned += 1;
        if progress.advance_streak(today) {
            tracing::debug!(streak = progress.streak, %today, "streak advanced");
        }
        self.store.save(&progress)?;
        Ok(progress)
    }

    /// Current progress. Read failures degrade to the empty record.
    pub fn get_progress_data(&self) -> Progress {
        match self.store.get() {
            Ok(progress) => progress.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read progress, using defaults");
                Progress::default()
            }
        }
    }

    pub fn reset(&self) -> AppResult<()> {
        self.store.save(&Progress::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn progress_on(last: &str, streak: u32) -> Progress {
        let mut progress = Progress {
            streak,
            last_practiced: Some(date(last)),
            ..Progress::default()
        };
        progress.streak_dates.insert(date(last));
        progress
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let mut progress = progress_on("2024-01-01", 3);
        assert!(progress.advance_streak(date("2024-01-02")));
        assert_eq!(progress.streak, 4);
        assert!(progress.practiced_on(date("2024-01-02")));
        assert_eq!(progress.last_practiced, Some(date("2024-01-02")));
    }

    #[test]
    fn gap_restarts_streak() {
        let mut progress = progress_on("2024-01-01", 3);
        progress.advance_streak(date("2024-01-05"));
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.streak_dates.len(), 2);
    }

    #[test]
    fn same_day_is_noop() {
        let mut progress = progress_on("2024-01-01", 3);
        assert!(!progress.advance_streak(date("2024-01-01")));
        assert_eq!(progress.streak, 3);
        assert_eq!(progress.streak_dates.len(), 1);
    }

    #[test]
    fn first_practice_starts_at_one() {
        let mut progress = Progress::default();
        progress.advance_streak(date("2024-02-29"));
        assert_eq!(progress.streak, 1);
    }

    #[test]
    fn derived_counters() {
        let progress = Progress {
            words_learned: 23,
            ..Progress::default()
        };
        assert_eq!(progress.articles_mastered(), 7);
        assert_eq!(progress.level(), 3);
    }
}
