use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_APP_ENV: &str = "development";
const PRODUCTION_APP_ENV: &str = "production";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_FILE_PREFIX: &str = "Admin_server";

pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,

    pub port: u16,
    pub app_env: String,

    /// Directory receiving the daily log files, created on first write.
    pub log_dir: String,
    pub log_file_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a fixed map.
    pub fn from_source<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_uri: required("MONGO_URI")?,
            db_name: required("DB_NAME")?,
            port,
            app_env: var("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            log_dir: var("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
            log_file_prefix: var("LOG_FILE_PREFIX")
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PREFIX.to_string()),
        })
    }

    /// Production runs log at `info`, every other environment at `debug`.
    pub fn default_log_level(&self) -> &'static str {
        if self.app_env == PRODUCTION_APP_ENV {
            "info"
        } else {
            "debug"
        }
    }
}
