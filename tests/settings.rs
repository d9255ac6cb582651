#[cfg(test)]
mod tests {
    use artikel::db::db::Db;
    use artikel::db::settings::{Settings, SettingsStore, Theme};
    use artikel::libs::error::AppError;
    use artikel::libs::settings::{SettingsPatch, SettingsService};
    use artikel::libs::word::Difficulty;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SettingsTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for SettingsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("artikel.db")).unwrap();
            SettingsTestContext { db, _temp_dir: temp_dir }
        }
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_get_materializes_defaults(ctx: &mut SettingsTestContext) {
        assert!(SettingsStore::new(&ctx.db).get().unwrap().is_none());

        let settings = SettingsService::new(&ctx.db).get_settings().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.practice_goal, 10);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(SettingsStore::new(&ctx.db).get().unwrap(), Some(settings));
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_partial_update_merges(ctx: &mut SettingsTestContext) {
        let service = SettingsService::new(&ctx.db);
        let updated = service
            .update_settings(SettingsPatch {
                theme: Some(Theme::Dark),
                practice_goal: Some(25),
                ..SettingsPatch::default()
            })
            .unwrap();

        assert_eq!(updated.theme, Theme::Dark);
        assert_eq!(updated.practice_goal, 25);
        assert!(updated.sound_enabled);
        assert_eq!(service.get_settings().unwrap(), updated);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_goal_out_of_range_is_rejected(ctx: &mut SettingsTestContext) {
        let service = SettingsService::new(&ctx.db);
        service.set_practice_goal(40).unwrap();

        assert!(matches!(service.set_practice_goal(0), Err(AppError::InvalidArgument(_))));
        assert!(matches!(service.set_practice_goal(101), Err(AppError::InvalidArgument(_))));
        assert_eq!(service.get_settings().unwrap().practice_goal, 40);

        assert_eq!(service.set_practice_goal(1).unwrap().practice_goal, 1);
        assert_eq!(service.set_practice_goal(100).unwrap().practice_goal, 100);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_toggles_and_reset(ctx: &mut SettingsTestContext) {
        let service = SettingsService::new(&ctx.db);

        assert!(!service.toggle_sound().unwrap().sound_enabled);
        assert!(service.toggle_sound().unwrap().sound_enabled);
        assert!(!service.toggle_notifications().unwrap().notifications_enabled);
        assert_eq!(service.set_difficulty(Difficulty::Hard).unwrap().difficulty, Difficulty::Hard);
        assert_eq!(service.set_theme(Theme::Auto).unwrap().theme, Theme::Auto);

        assert_eq!(service.reset_to_defaults().unwrap(), Settings::default());
        assert_eq!(service.get_settings().unwrap(), Settings::default());
    }
}
