use crate::tests::{EnvGuard, setup_config_dir};
use crate::{CONFIG_FILENAME, Config, ConfigError, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(DEFAULT_API_BASE_URL));
    assert!(config.api.bearer_token.is_none());
    assert_that!(config.table.page_size, eq(DEFAULT_PAGE_SIZE));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("um");
    let _guard = EnvGuard::set("UM_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(CONFIG_FILENAME),
        r#"
            [api]
            base_url = "https://cms.example.com"
            timeout_secs = 10

            [logging]
            level = "debug"
            colored = false

            [table]
            page_size = 25
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://cms.example.com"));
    assert_that!(config.api.timeout_secs, eq(10));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.table.page_size, eq(25));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[table]\npage_size = 25").unwrap();
    let _page = EnvGuard::set("UM_TABLE_PAGE_SIZE", "50");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.table.page_size, eq(50));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("UM_API_BASE_URL", "https://api.example.com");
    let _token = EnvGuard::set("UM_API_BEARER_TOKEN", "secret-token");
    let _timeout = EnvGuard::set("UM_API_TIMEOUT_SECS", "5");
    let _level = EnvGuard::set("UM_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("UM_LOG_COLORED", "0");
    let _file = EnvGuard::set("UM_LOG_FILE", "um.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://api.example.com"));
    assert_that!(config.api.bearer_token.as_deref(), some(eq("secret-token")));
    assert_that!(config.api.timeout_secs, eq(5));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("um.log")));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _page = EnvGuard::set("UM_TABLE_PAGE_SIZE", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.table.page_size, eq(DEFAULT_PAGE_SIZE));
}

#[test]
#[serial]
fn given_relative_log_file_when_resolved_then_joined_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("UM_LOG_FILE", "logs/um.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("logs/um.log")));
}

#[test]
#[serial]
fn given_no_log_file_when_resolved_then_none() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.log_file_path().unwrap().is_none());
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result.unwrap_err(), ConfigError::Toml { .. }));
}

#[test]
#[serial]
fn given_invalid_table_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _page = EnvGuard::set("UM_TABLE_PAGE_SIZE", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
