//! Environment configuration.

use std::path::PathBuf;

use crate::error::AppError;

/// Directory used when `UNDERCOVER_DATA_DIR` is unset.
const DEFAULT_DATA_DIR: &str = ".undercover";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the usage history lives.
    pub data_dir: PathBuf,
    /// Override dataset; `None` uses the bundled vocabulary.
    pub vocabulary_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of
    /// the named variable if set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable has an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let data_dir = lookup("UNDERCOVER_DATA_DIR")
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let vocabulary_path = lookup("UNDERCOVER_VOCABULARY")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let log_format = match lookup("UNDERCOVER_LOG_FORMAT").as_deref() {
            None | Some("" | "text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "UNDERCOVER_LOG_FORMAT must be \"text\" or \"json\", got {other:?}"
                )));
            }
        };

        Ok(Self {
            data_dir,
            vocabulary_path,
            log_format,
        })
    }
}
