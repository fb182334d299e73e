use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod check; // missing-field detection and completion for old config files

/// Key under which the attendance map is stored.
pub const DEFAULT_STATE_KEY: &str = "viradaAttendingState";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Path of the schedule dataset; the bundled schedule is used when absent.
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default = "default_state_key")]
    pub state_key: String,
    #[serde(default = "default_refresh_secs")]
    pub happening_refresh_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_state_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}
fn default_refresh_secs() -> u64 {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            dataset: None,
            state_key: default_state_key(),
            happening_refresh_secs: default_refresh_secs(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("virada")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".virada")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("virada.conf")
    }

    /// Return the full path of the SQLite database holding the persisted state
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("virada.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }

    /// Refresh cadence of the "happening now" indicator.
    pub fn refresh_interval(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.happening_refresh_secs.max(1) as i64)
    }
}
