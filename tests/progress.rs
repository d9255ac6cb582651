#[cfg(test)]
mod tests {
    use artikel::db::db::Db;
    use artikel::db::progress::{Progress, ProgressStore};
    use artikel::libs::progress::ProgressService;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ProgressTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for ProgressTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("artikel.db")).unwrap();
            ProgressTestContext { db, _temp_dir: temp_dir }
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn store(db: &Db, words_learned: u32, streak: u32, last: &str) {
        let mut progress = Progress {
            words_learned,
            streak,
            last_practiced: Some(date(last)),
            ..Progress::default()
        };
        progress.streak_dates.insert(date(last));
        ProgressStore::new(db).save(&progress).unwrap();
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_missing_record_reads_as_default(ctx: &mut ProgressTestContext) {
        let progress = ProgressService::new(&ctx.db).get_progress_data();
        assert_eq!(progress, Progress::default());
        assert_eq!(progress.level(), 1);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_consecutive_day_extends_streak(ctx: &mut ProgressTestContext) {
        store(&ctx.db, 5, 3, "2024-01-01");
        let service = ProgressService::new(&ctx.db);

        let progress = service.record_word_learned_on(date("2024-01-02")).unwrap();
        assert_eq!(progress.streak, 4);
        assert_eq!(progress.words_learned, 6);
        assert!(progress.streak_dates.contains(&date("2024-01-02")));
        assert_eq!(service.get_progress_data(), progress);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_gap_resets_streak(ctx: &mut ProgressTestContext) {
        store(&ctx.db, 5, 3, "2024-01-01");
        let progress = ProgressService::new(&ctx.db).record_word_learned_on(date("2024-01-05")).unwrap();
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.last_practiced, Some(date("2024-01-05")));
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_same_day_counts_words_but_not_streak(ctx: &mut ProgressTestContext) {
        let service = ProgressService::new(&ctx.db);
        let first = service.record_word_learned_on(date("2024-03-10")).unwrap();
        let second = service.record_word_learned_on(date("2024-03-10")).unwrap();

        assert_eq!(first.words_learned, 1);
        assert_eq!(second.words_learned, 2);
        assert_eq!(first.streak, 1);
        assert_eq!(second.streak, 1);
        assert_eq!(second.streak_dates.len(), 1);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_articles_mastered_tracks_words_learned(ctx: &mut ProgressTestContext) {
        let service = ProgressService::new(&ctx.db);
        let start = date("2024-05-01");
        for day in 0..10u64 {
            let today = start + chrono::Days::new(day);
            let progress = service.record_word_learned_on(today).unwrap();
            assert_eq!(progress.articles_mastered(), progress.words_learned / 3);
        }

        let progress = service.get_progress_data();
        assert_eq!(progress.words_learned, 10);
        assert_eq!(progress.articles_mastered(), 3);
        assert_eq!(progress.streak, 10);
        assert_eq!(progress.level(), 2);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_reset(ctx: &mut ProgressTestContext) {
        store(&ctx.db, 12, 4, "2024-01-01");
        let service = ProgressService::new(&ctx.db);
        service.reset().unwrap();
        assert_eq!(service.get_progress_data(), Progress::default());
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_corrupt_record_degrades_to_default(ctx: &mut ProgressTestContext) {
        ctx.db
            .conn
            .execute(
                "INSERT INTO progress (id, words_learned, streak, last_practiced, streak_dates) VALUES ('current', 1, 1, NULL, 'not json')",
                [],
            )
            .unwrap();
        assert_eq!(ProgressService::new(&ctx.db).get_progress_data(), Progress::default());
    }
}
