use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ENV_PREFIX,
    DEFAULT_CONFIG_DIR, LoggingConfig, TableConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub table: TableConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for UM_CONFIG_DIR env var, else use ./.um/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply UM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UM_CONFIG_DIR env var > ./.um/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.table.validate()?;

        Ok(())
    }

    /// Log file path, resolved against the config directory when relative.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = self.logging.file.as_deref() else {
            return Ok(None);
        };

        let path = Path::new(file);
        if path.is_absolute() {
            return Ok(Some(path.to_path_buf()));
        }

        Ok(Some(Self::config_dir()?.join(path)))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s, auth: {})",
            self.api.base_url,
            self.api.timeout_secs,
            if self.api.bearer_token.is_some() {
                "bearer"
            } else {
                "none"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  table: page_size={}", self.table.page_size);
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = env_value("API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(token) = env_value("API_BEARER_TOKEN") {
            self.api.bearer_token = Some(token);
        }
        if let Some(secs) = env_value("API_TIMEOUT_SECS") {
            self.api.timeout_secs = secs;
        }

        if let Some(level) = env_value("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(colored) = env_value::<String>("LOG_COLORED") {
            self.logging.colored = matches!(colored.as_str(), "true" | "1");
        }
        if let Some(file) = env_value("LOG_FILE") {
            self.logging.file = Some(file);
        }

        if let Some(page_size) = env_value("TABLE_PAGE_SIZE") {
            self.table.page_size = page_size;
        }
    }
}

/// `UM_{suffix}` parsed as `T`; unset or unparseable values are ignored.
fn env_value<T: FromStr>(suffix: &str) -> Option<T> {
    std::env::var(format!("{ENV_PREFIX}{suffix}"))
        .ok()
        .and_then(|raw| raw.parse().ok())
}
