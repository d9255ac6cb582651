//! Display implementation for artikel application messages.
//!
//! All user-facing text lives here so wording stays consistent between
//! commands. Messages carrying parameters interpolate them in place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DatabaseSeeded(count) => format!("Added {} initial words to the database", count),
            Message::DatabaseAlreadySeeded(count) => format!("Database already contains {} words", count),
            Message::DatabaseReset => "All local data has been cleared.".to_string(),
            Message::StorageUnavailable(error) => format!("Local storage is unavailable: {}", error),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === WORD MESSAGES ===
            Message::WordAdded(german) => format!("Word '{}' added", german),
            Message::WordAlreadyExists(german) => format!("Word '{}' already exists in the database", german),
            Message::WordDeleted(id) => format!("Word '{}' deleted", id),
            Message::WordNotFound(id) => format!("Word '{}' not found", id),
            Message::NoWordsFound => "No words found.".to_string(),
            Message::WordsHeader => "Words:".to_string(),
            Message::WordStatsHeader => "Practice statistics".to_string(),
            Message::ConfirmResetWordProgress => "Reset practice progress for ALL words?".to_string(),
            Message::WordProgressReset(count) => format!("Practice progress reset for {} word(s)", count),
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === PRACTICE MESSAGES ===
            Message::PracticeStarting(count) => format!("Practice session: up to {} word(s)", count),
            Message::PracticeCard(position, total) => format!("Card {}/{}", position, total),
            Message::PracticeChoice => "What next?".to_string(),
            Message::PracticeChoiceNext => "Next (I knew it)".to_string(),
            Message::PracticeChoiceSkip => "Skip".to_string(),
            Message::PracticeChoiceQuit => "Quit session".to_string(),
            Message::PracticeFinished(practiced, skipped) => {
                format!("Session finished: {} practiced, {} skipped", practiced, skipped)
            }
            Message::PracticeNoWords => "There are no words to practice. Run 'artikel init' first.".to_string(),
            Message::WordMastered(german) => format!("'{}' is now mastered!", german),
            Message::SessionSuggestion(text) => text.clone(),
            Message::ContentFallback(german, error) => {
                format!("Could not generate content for '{}' ({}). Showing the stored article instead.", german, error)
            }
            Message::ContentNotConfigured => {
                "Content generation is not configured. Images are disabled and stored articles are used.".to_string()
            }
            Message::ImageUnavailable => "(no image)".to_string(),
            Message::ImageAttached(len) => format!("(image attached, {} bytes of data URL)", len),

            // === PROGRESS MESSAGES ===
            Message::ProgressHeader => "Your progress".to_string(),
            Message::StreakCalendarHeader(month) => format!("Streak calendar for {}", month),
            Message::StreakUpdated(streak) => format!("Daily streak: {} day(s)", streak),
            Message::InvalidMonth(value) => format!("Invalid month '{}'. Expected YYYY-MM.", value),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Settings".to_string(),
            Message::SettingsSaved => "Settings saved".to_string(),
            Message::SettingsResetToDefaults => "Settings reset to defaults".to_string(),

            // === AUTH MESSAGES ===
            Message::SignedIn(name) => format!("Signed in as {}", name),
            Message::SignedOut => "Signed out".to_string(),
            Message::NotSignedIn => "You are not signed in.".to_string(),
            Message::CurrentUser(name, uid) => format!("Signed in as {} ({})", name, uid),
            Message::SignInFailed(reason) => format!("Sign-in failed: {}", reason),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleGemini => "Content generation (Gemini) settings".to_string(),
            Message::ConfigModuleProfile => "Local profile settings".to_string(),
            Message::ConfigSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptDisplayName => "Enter your display name".to_string(),
            Message::PromptEmail => "Enter your email (optional)".to_string(),
            Message::PromptPhotoUrl => "Enter a profile photo URL (optional)".to_string(),
            Message::PromptGeminiApiKey => "Enter your Gemini API key".to_string(),
            Message::PromptGeminiApiUrl => "Enter the Gemini API base URL".to_string(),
            Message::PromptArticleModel => "Model used for article lookup".to_string(),
            Message::PromptImageModel => "Model used for image generation".to_string(),
        };

        write!(f, "{}", text)
    }
}
