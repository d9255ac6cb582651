use crate::db::db::Db;
use crate::db::settings::{Settings, SettingsStore, Theme};
use crate::libs::error::{AppError, AppResult};
use crate::libs::word::Difficulty;
use std::ops::RangeInclusive;

pub const PRACTICE_GOAL_RANGE: RangeInclusive<u32> = 1..=100;

/// Partial update applied by [`SettingsService::update_settings`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub sound_enabled: Option<bool>,
    pub notifications_enabled: Option<bool>,
    pub practice_goal: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

impl SettingsPatch {
    fn apply(self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(sound) = self.sound_enabled {
            settings.sound_enabled = sound;
        }
        if let Some(notifications) = self.notifications_enabled {
            settings.notifications_enabled = notifications;
        }
        if let Some(goal) = self.practice_goal {
            settings.practice_goal = goal;
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
    }
}

pub struct SettingsService<'a> {
    store: SettingsStore<'a>,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Db) -> Self {
        SettingsService {
            store: SettingsStore::new(db),
        }
    }

    /// Stored settings, writing the defaults first if none exist.
    pub fn get_settings(&self) -> AppResult<Settings> {
        if let Some(settings) = self.store.get()? {
            return Ok(settings);
        }
        let settings = Settings::default();
        self.store.save(&settings)?;
        tracing::debug!("materialized default settings");
        Ok(settings)
    }

    /// Merges `patch` into the stored record. Nothing is written when the
    /// result fails validation.
    pub fn update_settings(&self, patch: SettingsPatch) -> AppResult<Settings> {
        let mut settings = self.get_settings()?;
        patch.apply(&mut settings);
        validate(&settings)?;
        self.store.save(&settings)?;
        Ok(settings)
    }

    pub fn set_theme(&self, theme: Theme) -> AppResult<Settings> {
        self.update_settings(SettingsPatch {
            theme: Some(theme),
            ..SettingsPatch::default()
        })
    }

    pub fn toggle_sound(&self) -> AppResult<Settings> {
        let current = self.get_settings()?;
        self.update_settings(SettingsPatch {
            sound_enabled: Some(!current.sound_enabled),
            ..SettingsPatch::default()
        })
    }

    pub fn toggle_notifications(&self) -> AppResult<Settings> {
        let current = self.get_settings()?;
        self.update_settings(SettingsPatch {
            notifications_enabled: Some(!current.notifications_enabled),
            ..SettingsPatch::default()
        })
    }

    pub fn set_practice_goal(&self, goal: u32) -> AppResult<Settings> {
        self.update_settings(SettingsPatch {
            practice_goal: Some(goal),
            ..SettingsPatch::default()
        })
    }

    pub fn set_difficulty(&self, difficulty: Difficulty) -> AppResult<Settings> {
        self.update_settings(SettingsPatch {
            difficulty: Some(difficulty),
            ..SettingsPatch::default()
        })
    }

    pub fn reset_to_defaults(&self) -> AppResult<Settings> {
        let settings = Settings::default();
        self.store.save(&settings)?;
        Ok(settings)
    }
}

fn validate(settings: &Settings) -> AppResult<()> {
    if !PRACTICE_GOAL_RANGE.contains(&settings.practice_goal) {
        return Err(AppError::InvalidArgument(format!(
            "practice goal must be between {} and {}, got {}",
            PRACTICE_GOAL_RANGE.start(),
            PRACTICE_GOAL_RANGE.end(),
            settings.practice_goal
        )));
    }
    Ok(())
}
