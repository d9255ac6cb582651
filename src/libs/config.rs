//! Application configuration stored as `config.json` in the data directory.
//!
//! Every section is optional. A missing file reads as the default config, so
//! artikel runs without any setup and simply practices offline.
//!
//! ```rust,ignore
//! use artikel::libs::config::Config;
//!
//! let config = Config::init()?;
//! config.save()?;
//! ```

use super::data_storage::DataStorage;
use crate::api::gemini::GeminiConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Local identity used by the offline sign-in provider.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ProfileConfig {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl ProfileConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "profile".to_string(),
            name: "Profile".to_string(),
        }
    }

    pub fn init(config: &Option<ProfileConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleProfile);

        let display_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDisplayName.to_string())
            .default(config.display_name)
            .interact_text()?;
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .default(config.email.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let photo_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPhotoUrl.to_string())
            .default(config.photo_url.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            display_name: display_name.trim().to_string(),
            email: non_empty(email),
            photo_url: non_empty(photo_url),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.display_name.trim().is_empty()
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive wizard over the selected sections, seeded with the
    /// current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![GeminiConfig::module(), ProfileConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfigSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "gemini" => config.gemini = Some(GeminiConfig::init(&config.gemini)?),
                "profile" => config.profile = Some(ProfileConfig::init(&config.profile)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
