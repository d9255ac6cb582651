use crate::db::db::Db;
use crate::libs::error::AppResult;
use crate::libs::word::Difficulty;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SETTINGS_KEY: &str = "default";

const SELECT_SETTINGS: &str =
    "SELECT theme, sound_enabled, notifications_enabled, practice_goal, difficulty FROM settings WHERE id = ?1";
const UPSERT_SETTINGS: &str = "INSERT OR REPLACE INTO settings (id, theme, sound_enabled, notifications_enabled, practice_goal, difficulty)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub sound_enabled: bool,
    pub notifications_enabled: bool,
    /// Words per day, 1 to 100.
    pub practice_goal: u32,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: Theme::Light,
            sound_enabled: true,
            notifications_enabled: true,
            practice_goal: 10,
            difficulty: Difficulty::Medium,
        }
    }
}

/// Access to the `settings` singleton row.
pub struct SettingsStore<'a> {
    conn: &'a Connection,
}

impl<'a> SettingsStore<'a> {
    pub fn new(db: &'a Db) -> Self {
        SettingsStore { conn: &db.conn }
    }

    pub fn get(&self) -> AppResult<Option<Settings>> {
        let settings = self
            .conn
            .query_row(SELECT_SETTINGS, params![SETTINGS_KEY], |row| {
                let theme: String = row.get(0)?;
                let difficulty: String = row.get(4)?;
                Ok(Settings {
                    theme: theme.parse().unwrap_or_default(),
                    sound_enabled: row.get(1)?,
                    notifications_enabled: row.get(2)?,
                    practice_goal: row.get(3)?,
                    difficulty: difficulty.parse().unwrap_or_default(),
                })
            })
            .optional()?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> AppResult<()> {
        self.conn.execute(
            UPSERT_SETTINGS,
            params![
                SETTINGS_KEY,
                settings.theme.as_str(),
                settings.sound_enabled,
                settings.notifications_enabled,
                settings.practice_goal,
                settings.difficulty.as_str()
            ],
        )?;
        Ok(())
    }
}
