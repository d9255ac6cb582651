use super::open_db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::word::Difficulty;
use crate::libs::word_service::WordService;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct WordsArgs {
    #[command(subcommand)]
    command: Option<WordsCommand>,
}

#[derive(Debug, Subcommand)]
enum WordsCommand {
    /// List words
    List {
        /// Only words of this difficulty
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Only mastered words
        #[arg(short, long, conflicts_with = "needs_practice")]
        mastered: bool,
        /// Only words that still need practice
        #[arg(short, long)]
        needs_practice: bool,
    },
    /// Add a word
    Add {
        /// German noun without article
        german: String,
        /// English translation
        english: String,
        #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
    },
    /// Delete a word by id
    Delete { id: String },
    /// Show practice statistics
    Stats,
    /// Reset practice progress for all words
    Reset,
}

pub fn cmd(args: WordsArgs) -> Result<()> {
    match args.command {
        Some(WordsCommand::List {
            difficulty,
            mastered,
            needs_practice,
        }) => handle_list(difficulty, mastered, needs_practice),
        Some(WordsCommand::Add {
            german,
            english,
            difficulty,
        }) => handle_add(german, english, difficulty),
        Some(WordsCommand::Delete { id }) => handle_delete(id),
        Some(WordsCommand::Stats) => handle_stats(),
        Some(WordsCommand::Reset) => handle_reset(),
        None => handle_list(None, false, false),
    }
}

fn handle_list(difficulty: Option<Difficulty>, mastered: bool, needs_practice: bool) -> Result<()> {
    let db = open_db()?;
    let service = WordService::new(&db);

    let mut words = if mastered {
        service.get_mastered_words()?
    } else if needs_practice {
        service.get_words_needing_practice()?
    } else {
        service.get_all_words()?
    };
    if let Some(difficulty) = difficulty {
        words.retain(|w| w.difficulty == difficulty);
    }

    if words.is_empty() {
        msg_info!(Message::NoWordsFound);
        return Ok(());
    }

    msg_print!(Message::WordsHeader, true);
    View::words(&words);
    Ok(())
}

fn handle_add(german: String, english: String, difficulty: Difficulty) -> Result<()> {
    let db = open_db()?;
    match WordService::new(&db).add_word(&german, &english, difficulty) {
        Ok(word) => msg_success!(Message::WordAdded(word.german)),
        Err(AppError::DuplicateKey(_)) => msg_error!(Message::WordAlreadyExists(german)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn handle_delete(id: String) -> Result<()> {
    let db = open_db()?;
    match WordService::new(&db).delete_word(&id) {
        Ok(()) => msg_success!(Message::WordDeleted(id)),
        Err(AppError::NotFound(_)) => msg_error!(Message::WordNotFound(id)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn handle_stats() -> Result<()> {
    let db = open_db()?;
    let service = WordService::new(&db);
    let practice = service.get_practice_stats()?;
    let session = service.get_session_stats()?;

    msg_print!(Message::WordStatsHeader, true);
    View::word_stats(&practice, &session);
    msg_info!(Message::SessionSuggestion(session.next_word_suggestion));
    Ok(())
}

fn handle_reset() -> Result<()> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmResetWordProgress.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let db = open_db()?;
    let count = WordService::new(&db).reset_progress()?;
    msg_success!(Message::WordProgressReset(count));
    Ok(())
}
