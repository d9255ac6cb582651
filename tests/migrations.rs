#[cfg(test)]
mod tests {
    use artikel::db::db::Db;
    use artikel::db::migrations::{get_db_version, get_migration_history, init_with_migrations, latest_version, needs_migration};
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.temp_dir.path().join("artikel.db")).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_keeps_history(ctx: &mut MigrationTestContext) {
        let path = ctx.temp_dir.path().join("artikel.db");
        drop(Db::open(&path).unwrap());
        let db = Db::open(&path).unwrap();

        let history = get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len() as u32, latest_version());
        for (i, applied) in history.iter().enumerate() {
            assert_eq!(applied.version as usize, i + 1);
            assert!(!applied.applied_at.is_empty());
        }
        assert_eq!(history[0].name, "create_record_tables");
    }

    #[test]
    fn test_fresh_connection_needs_migration() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());

        init_with_migrations(&mut conn).unwrap();
        assert!(!needs_migration(&conn).unwrap());

        for table in ["words", "settings", "user", "progress"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }
    }
}
