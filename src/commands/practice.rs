use super::open_db;
use crate::api::gemini::{GeminiClient, GeminiConfig};
use crate::api::{resolve_card, CachedGenerator};
use crate::libs::config::Config;
use crate::libs::initializer::DatabaseInitializer;
use crate::libs::messages::Message;
use crate::libs::progress::ProgressService;
use crate::libs::settings::SettingsService;
use crate::libs::view::View;
use crate::libs::word::{Word, WordCard, WordUpdate};
use crate::libs::word_service::WordService;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct PracticeArgs {
    /// Number of cards, defaults to the daily practice goal
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Skip content generation and show stored articles only
    #[arg(long)]
    offline: bool,
}

enum Choice {
    Next,
    Skip,
    Quit,
}

pub async fn cmd(args: PracticeArgs) -> Result<()> {
    let db = open_db()?;
    DatabaseInitializer::new(&db).initialize()?;

    let words = WordService::new(&db);
    let progress = ProgressService::new(&db);
    let total = match args.count {
        Some(count) => count,
        None => SettingsService::new(&db).get_settings()?.practice_goal as usize,
    };

    let generator = if args.offline {
        None
    } else {
        match GeminiConfig::resolve(&Config::read()?) {
            Some(gemini) => Some(CachedGenerator::new(GeminiClient::new(&gemini)?)),
            None => {
                msg_warning!(Message::ContentNotConfigured);
                None
            }
        }
    };

    msg_print!(Message::PracticeStarting(total), true);

    let (mut practiced, mut skipped) = (0, 0);
    for position in 1..=total {
        let Some(word) = words.next_word()? else {
            msg_info!(Message::PracticeNoWords);
            break;
        };

        let card = match &generator {
            Some(generator) => {
                let (card, error) = resolve_card(generator, &word).await;
                match error {
                    Some(e) => msg_warning!(Message::ContentFallback(word.german.clone(), e.to_string())),
                    None => remember_content(&words, &word, &card)?,
                }
                card
            }
            None => WordCard::from(&word),
        };

        msg_print!(Message::PracticeCard(position, total));
        View::card(&card);
        if card.image_url.is_empty() {
            msg_print!(Message::ImageUnavailable);
        } else {
            msg_print!(Message::ImageAttached(card.image_url.len()));
        }

        match prompt_choice()? {
            Choice::Next => {
                let updated = words.record_word_practice(&word.id, true)?;
                if updated.mastered && !word.mastered {
                    msg_success!(Message::WordMastered(word.german.clone()));
                }
                let current = progress.record_word_learned()?;
                msg_info!(Message::StreakUpdated(current.streak));
                practiced += 1;
            }
            Choice::Skip => {
                words.record_word_practice(&word.id, false)?;
                skipped += 1;
            }
            Choice::Quit => break,
        }
    }

    msg_success!(Message::PracticeFinished(practiced, skipped));
    let session = words.get_session_stats()?;
    msg_info!(Message::SessionSuggestion(session.next_word_suggestion));
    Ok(())
}

/// Stores generated content on words that have none yet.
fn remember_content(words: &WordService, word: &Word, card: &WordCard) -> Result<()> {
    let update = WordUpdate {
        article: word.article.is_none().then_some(card.article),
        image_url: (word.image_url.is_none() && !card.image_url.is_empty()).then(|| card.image_url.clone()),
        difficulty: None,
    };
    if update.article.is_some() || update.image_url.is_some() {
        words.update_word_data(&word.id, update)?;
    }
    Ok(())
}

fn prompt_choice() -> Result<Choice> {
    let items = [
        Message::PracticeChoiceNext.to_string(),
        Message::PracticeChoiceSkip.to_string(),
        Message::PracticeChoiceQuit.to_string(),
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PracticeChoice.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Choice::Next,
        1 => Choice::Skip,
        _ => Choice::Quit,
    })
}
