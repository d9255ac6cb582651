use super::open_db;
use crate::db::words::Words;
use crate::libs::config::Config;
use crate::libs::initializer::DatabaseInitializer;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Clear all local data before seeding
    #[arg(short, long)]
    reset: bool,
    /// Run the configuration wizard
    #[arg(short, long)]
    config: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    if args.config {
        Config::init()?.save()?;
        msg_success!(Message::ConfigSaved);
    }

    let mut db = open_db()?;
    if args.reset {
        db.clear_all()?;
        msg_info!(Message::DatabaseReset);
    }

    let inserted = DatabaseInitializer::new(&db).initialize()?;
    if inserted > 0 {
        msg_success!(Message::DatabaseSeeded(inserted));
    } else {
        let existing = Words::new(&db).count()?;
        msg_info!(Message::DatabaseAlreadySeeded(existing));
    }
    Ok(())
}
