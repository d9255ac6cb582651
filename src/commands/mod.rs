pub mod auth;
pub mod init;
pub mod practice;
pub mod progress;
pub mod settings;
pub mod words;

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize the local database and optionally the configuration")]
    Init(init::InitArgs),
    #[command(about = "Start an interactive practice session")]
    Practice(practice::PracticeArgs),
    #[command(about = "Manage the vocabulary")]
    Words(words::WordsArgs),
    #[command(about = "Show learning progress and the streak calendar")]
    Progress(progress::ProgressArgs),
    #[command(about = "Show or change settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Sign in with the configured profile")]
    Login,
    #[command(about = "Sign out")]
    Logout,
    #[command(about = "Show the signed-in user")]
    Whoami,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Practice(args) => practice::cmd(args).await,
            Commands::Words(args) => words::cmd(args),
            Commands::Progress(args) => progress::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Login => auth::login().await,
            Commands::Logout => auth::logout().await,
            Commands::Whoami => auth::whoami(),
        }
    }
}

/// Opens the local store, reporting failure as a storage error.
pub(crate) fn open_db() -> Result<Db> {
    Db::new().map_err(|e| msg_error_anyhow!(Message::StorageUnavailable(e.to_string())))
}
