#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;
    use task_timer::libs::config::{Config, MIN_REFRESH_INTERVAL_MS};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the home/appdata directory at a temporary folder.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tasks_file, None);
        assert_eq!(config.refresh_interval_ms, 1000);
        assert!(config.confirm_destructive);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "refresh_interval_ms": 250 }"#).unwrap();
        assert_eq!(config.refresh_interval_ms, 250);
        assert!(config.confirm_destructive);
        assert_eq!(config.tasks_file, None);

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unset_tasks_file_is_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("tasks_file"));
    }

    #[test]
    fn test_refresh_interval_is_clamped() {
        let config = Config {
            refresh_interval_ms: 5,
            ..Config::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_millis(MIN_REFRESH_INTERVAL_MS));

        let config = Config {
            refresh_interval_ms: 2500,
            ..Config::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_millis(2500));
    }

    // The only test here that touches the environment, so parallel test
    // threads never race on HOME.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_save_delete_cycle(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());
        assert!(!Config::delete().unwrap());

        let config = Config {
            tasks_file: Some(PathBuf::from("/tmp/custom-tasks.csv")),
            refresh_interval_ms: 500,
            confirm_destructive: false,
        };
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
