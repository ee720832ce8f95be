//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

const DEFAULT_PORT: u16 = 8084;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every variable has a default, so a bare environment yields a usable
    /// development configuration. Unparseable numbers fall back to their default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "feedback-service".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info,services=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/feedback.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_or_default("PORT", DEFAULT_PORT),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{key}={raw:?} is not valid, falling back to {default}");
            default
        }),
        Err(_) => default,
    }
}

// --- Free accessors, used throughout the workspace as `config::host()` etc. ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}
