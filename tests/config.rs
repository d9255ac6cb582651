#[cfg(test)]
mod tests {
    use artikel::api::gemini::{GeminiConfig, DEFAULT_API_URL, DEFAULT_ARTICLE_MODEL, DEFAULT_IMAGE_MODEL};
    use artikel::libs::config::{Config, ProfileConfig, CONFIG_FILE_NAME};
    use artikel::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path().join("artikel"))
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_config_is_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.gemini.is_none());
        assert!(config.profile.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            gemini: Some(GeminiConfig::with_key("secret")),
            profile: Some(ProfileConfig {
                display_name: "Jonas".to_string(),
                email: None,
                photo_url: Some("https://example.com/jonas.png".to_string()),
            }),
        };
        config.save_to(&ctx.storage()).unwrap();

        assert!(ctx.storage().get_path(CONFIG_FILE_NAME).unwrap().exists());
        assert_eq!(Config::read_from(&ctx.storage()).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_gemini_defaults_fill_missing_fields(ctx: &mut ConfigTestContext) {
        let path = ctx.storage().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "gemini": { "api_key": "k" } }"#).unwrap();

        let gemini = Config::read_from(&ctx.storage()).unwrap().gemini.unwrap();
        assert_eq!(gemini.api_url, DEFAULT_API_URL);
        assert_eq!(gemini.article_model, DEFAULT_ARTICLE_MODEL);
        assert_eq!(gemini.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(gemini.timeout_secs, 30);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.storage()).is_err());
    }

    #[test]
    fn test_resolve_prefers_configured_key() {
        let config = Config {
            gemini: Some(GeminiConfig::with_key("from-file")),
            profile: None,
        };
        assert_eq!(GeminiConfig::resolve(&config).unwrap().api_key, "from-file");
    }

    #[test]
    fn test_profile_requires_display_name() {
        assert!(!ProfileConfig::default().is_configured());
        assert!(ProfileConfig {
            display_name: "Lena".to_string(),
            ..ProfileConfig::default()
        }
        .is_configured());
    }
}
