#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DatabaseSeeded(usize),         // words inserted
    DatabaseAlreadySeeded(usize),  // existing word count
    DatabaseReset,
    StorageUnavailable(String),    // error
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,

    // === WORD MESSAGES ===
    WordAdded(String),         // german
    WordAlreadyExists(String), // german
    WordDeleted(String),       // id
    WordNotFound(String),      // id
    NoWordsFound,
    WordsHeader,
    WordStatsHeader,
    ConfirmResetWordProgress,
    WordProgressReset(usize),  // words reset
    OperationCancelled,

    // === PRACTICE MESSAGES ===
    PracticeStarting(usize),          // planned cards
    PracticeCard(usize, usize),       // position, total
    PracticeChoice,
    PracticeChoiceNext,
    PracticeChoiceSkip,
    PracticeChoiceQuit,
    PracticeFinished(usize, usize),   // practiced, skipped
    PracticeNoWords,
    WordMastered(String),             // german
    SessionSuggestion(String),
    ContentFallback(String, String),  // german, error
    ContentNotConfigured,
    ImageUnavailable,
    ImageAttached(usize),             // payload length

    // === PROGRESS MESSAGES ===
    ProgressHeader,
    StreakCalendarHeader(String),     // month label
    StreakUpdated(u32),
    InvalidMonth(String),

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingsSaved,
    SettingsResetToDefaults,

    // === AUTH MESSAGES ===
    SignedIn(String),                 // display name
    SignedOut,
    NotSignedIn,
    CurrentUser(String, String),      // display name, uid
    SignInFailed(String),             // human readable reason

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleGemini,
    ConfigModuleProfile,
    ConfigSelectModules,
    PromptDisplayName,
    PromptEmail,
    PromptPhotoUrl,
    PromptGeminiApiKey,
    PromptGeminiApiUrl,
    PromptArticleModel,
    PromptImageModel,
}
