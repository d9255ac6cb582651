use super::open_db;
use crate::db::settings::Theme;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::settings::SettingsService;
use crate::libs::view::View;
use crate::libs::word::Difficulty;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,
    /// Set the color theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
    /// Toggle sound effects
    Sound,
    /// Toggle notifications
    Notifications,
    /// Set the daily practice goal (1-100 words)
    Goal { goal: u32 },
    /// Set the preferred difficulty
    Difficulty {
        #[arg(value_enum)]
        difficulty: Difficulty,
    },
    /// Restore default settings
    Reset,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let db = open_db()?;
    let service = SettingsService::new(&db);

    let result = match args.command.unwrap_or(SettingsCommand::Show) {
        SettingsCommand::Show => {
            msg_print!(Message::SettingsHeader, true);
            View::settings(&service.get_settings()?);
            return Ok(());
        }
        SettingsCommand::Reset => {
            let settings = service.reset_to_defaults()?;
            msg_success!(Message::SettingsResetToDefaults);
            View::settings(&settings);
            return Ok(());
        }
        SettingsCommand::Theme { theme } => service.set_theme(theme),
        SettingsCommand::Sound => service.toggle_sound(),
        SettingsCommand::Notifications => service.toggle_notifications(),
        SettingsCommand::Goal { goal } => service.set_practice_goal(goal),
        SettingsCommand::Difficulty { difficulty } => service.set_difficulty(difficulty),
    };

    match result {
        Ok(settings) => {
            msg_success!(Message::SettingsSaved);
            View::settings(&settings);
        }
        Err(AppError::InvalidArgument(reason)) => msg_error!(reason),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
