use crate::db::db::Db;
use crate::libs::error::AppResult;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const PROGRESS_KEY: &str = "current";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_PROGRESS: &str = "SELECT words_learned, streak, last_practiced, streak_dates FROM progress WHERE id = ?1";
const UPSERT_PROGRESS: &str = "INSERT OR REPLACE INTO progress (id, words_learned, streak, last_practiced, streak_dates)
    VALUES (?1, ?2, ?3, ?4, ?5)";

/// Learning progress singleton.
///
/// `streak_dates` is a set, so a day is never recorded twice and iteration
/// is always ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub words_learned: u32,
    pub streak: u32,
    pub last_practiced: Option<NaiveDate>,
    pub streak_dates: BTreeSet<NaiveDate>,
}

/// Access to the `progress` singleton row.
pub struct ProgressStore<'a> {
    conn: &'a Connection,
}

impl<'a> ProgressStore<'a> {
    pub fn new(db: &'a Db) -> Self {
        ProgressStore { conn: &db.conn }
    }

    pub fn get(&self) -> AppResult<Option<Progress>> {
        let row = self
            .conn
            .query_row(SELECT_PROGRESS, params![PROGRESS_KEY], |row| {
                Ok((
                    row.get::<_, u32>(0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .optional()?;

        let Some((words_learned, streak, last_practiced, streak_dates)) = row else {
            return Ok(None);
        };

        let dates: Vec<String> = serde_json::from_str(&streak_dates)?;
        Ok(Some(Progress {
            words_learned,
            streak,
            last_practiced: last_practiced.and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok()),
            streak_dates: dates
                .iter()
                .filter_map(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
                .collect(),
        }))
    }

    pub fn save(&self, progress: &Progress) -> AppResult<()> {
        let dates: Vec<String> = progress.streak_dates.iter().map(|d| d.format(DATE_FORMAT).to_string()).collect();
        self.conn.execute(
            UPSERT_PROGRESS,
            params![
                PROGRESS_KEY,
                progress.words_learned,
                progress.streak,
                progress.last_practiced.map(|d| d.format(DATE_FORMAT).to_string()),
                serde_json::to_string(&dates)?
            ],
        )?;
        Ok(())
    }
}
