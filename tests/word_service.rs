#[cfg(test)]
mod tests {
    use artikel::db::db::Db;
    use artikel::db::words::Words;
    use artikel::libs::error::AppError;
    use artikel::libs::initializer::DatabaseInitializer;
    use artikel::libs::word::{Article, Difficulty, Word, WordUpdate};
    use artikel::libs::word_service::WordService;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ServiceTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for ServiceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("artikel.db")).unwrap();
            ServiceTestContext { db, _temp_dir: temp_dir }
        }
    }

    fn store_practiced(db: &Db, german: &str, times: u32, mastered: bool) {
        let mut word = Word::new(german, german, Difficulty::Medium);
        word.times_practiced = times;
        word.mastered = mastered;
        Words::new(db).add(&word).unwrap();
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_mastery_requires_three_prior_practices(ctx: &mut ServiceTestContext) {
        store_practiced(&ctx.db, "Apfel", 3, false);
        let service = WordService::new(&ctx.db);

        let word = service.record_word_practice("word_apfel", true).unwrap();
        assert!(word.mastered);
        assert_eq!(word.times_practiced, 4);
        assert!(word.last_practiced.is_some());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_incorrect_answer_clears_mastery(ctx: &mut ServiceTestContext) {
        store_practiced(&ctx.db, "Apfel", 3, true);
        let service = WordService::new(&ctx.db);

        let word = service.record_word_practice("word_apfel", false).unwrap();
        assert!(!word.mastered);
        assert_eq!(word.times_practiced, 4);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_third_correct_practice_does_not_master(ctx: &mut ServiceTestContext) {
        store_practiced(&ctx.db, "Apfel", 2, false);
        let word = WordService::new(&ctx.db).record_word_practice("word_apfel", true).unwrap();
        assert!(!word.mastered);
        assert_eq!(word.times_practiced, 3);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_record_unknown_word(ctx: &mut ServiceTestContext) {
        let err = WordService::new(&ctx.db).record_word_practice("word_nichts", true).unwrap_err();
        assert!(matches!(err, AppError::NotFound(id) if id == "word_nichts"));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_next_word_prefers_words_needing_practice(ctx: &mut ServiceTestContext) {
        store_practiced(&ctx.db, "Apfel", 5, true);
        store_practiced(&ctx.db, "Haus", 4, false);
        store_practiced(&ctx.db, "Buch", 1, false);
        let service = WordService::new(&ctx.db);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let word = service.get_next_word_for_practice(&mut rng).unwrap().unwrap();
            assert_eq!(word.id, "word_buch");
        }
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_next_word_over_mastered_set(ctx: &mut ServiceTestContext) {
        store_practiced(&ctx.db, "Apfel", 5, true);
        store_practiced(&ctx.db, "Haus", 6, true);
        let service = WordService::new(&ctx.db);
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = HashSet::new();
        for _ in 0..100 {
            seen.insert(service.get_next_word_for_practice(&mut rng).unwrap().unwrap().id);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_next_word_on_empty_table(ctx: &mut ServiceTestContext) {
        let service = WordService::new(&ctx.db);
        assert!(service.next_word().unwrap().is_none());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_random_words_are_distinct_and_bounded(ctx: &mut ServiceTestContext) {
        DatabaseInitializer::new(&ctx.db).initialize().unwrap();
        let service = WordService::new(&ctx.db);
        let mut rng = StdRng::seed_from_u64(9);

        let five = service.get_random_words(5, &mut rng).unwrap();
        let ids: HashSet<_> = five.iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids.len(), 5);

        assert_eq!(service.get_random_words(100, &mut rng).unwrap().len(), 15);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_stats_and_reset(ctx: &mut ServiceTestContext) {
        store_practiced(&ctx.db, "Apfel", 4, true);
        store_practiced(&ctx.db, "Haus", 1, false);
        store_practiced(&ctx.db, "Buch", 0, false);
        let service = WordService::new(&ctx.db);

        let stats = service.get_practice_stats().unwrap();
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.mastered_words, 1);
        assert_eq!(stats.words_in_progress, 1);
        assert_eq!(stats.average_practice_count, 1.67);

        let session = service.get_session_stats().unwrap();
        assert_eq!(session.words_needing_practice, 2);
        assert_eq!(session.next_word_suggestion, "2 words need more practice");

        assert_eq!(service.reset_progress().unwrap(), 3);
        for word in service.get_all_words().unwrap() {
            assert_eq!(word.times_practiced, 0);
            assert!(!word.mastered);
            assert!(word.last_practiced.is_none());
        }
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_filters(ctx: &mut ServiceTestContext) {
        DatabaseInitializer::new(&ctx.db).initialize().unwrap();
        let service = WordService::new(&ctx.db);

        let easy = service.get_words_by_difficulty(Difficulty::Easy).unwrap();
        assert!(easy.iter().all(|w| w.difficulty == Difficulty::Easy));
        assert!(service.get_words_by_difficulty(Difficulty::Hard).unwrap().is_empty());
        assert!(service.get_mastered_words().unwrap().is_empty());
        assert_eq!(service.get_words_needing_practice().unwrap().len(), 15);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_add_update_delete(ctx: &mut ServiceTestContext) {
        let service = WordService::new(&ctx.db);
        let word = service.add_word("Zug", "Train", Difficulty::Hard).unwrap();
        assert_eq!(word.id, "word_zug");

        let updated = service
            .update_word_data(
                "word_zug",
                WordUpdate {
                    article: Some(Article::Der),
                    image_url: Some("data:image/jpeg;base64,AAAA".to_string()),
                    difficulty: None,
                },
            )
            .unwrap();
        assert_eq!(updated.article, Some(Article::Der));
        assert_eq!(updated.difficulty, Difficulty::Hard);
        assert_eq!(service.get_word("word_zug").unwrap(), Some(updated));

        service.delete_word("word_zug").unwrap();
        assert!(matches!(service.delete_word("word_zug"), Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update_word_data("word_zug", WordUpdate::default()),
            Err(AppError::NotFound(_))
        ));
    }
}
