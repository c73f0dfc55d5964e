use crate::errors::{AppError, AppResult};
use crate::models::break_state::BreakPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_workday_minutes")]
    pub workday_minutes: i64,
    #[serde(default = "default_lunch_minutes")]
    pub default_lunch_minutes: i64,
    #[serde(default = "default_date_key_format")]
    pub date_key_format: String,
    #[serde(default)]
    pub break_policy: BreakPolicy,
    #[serde(default)]
    pub deduct_breaks: bool,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_workday_minutes() -> i64 {
    7 * 60
}
fn default_lunch_minutes() -> i64 {
    60
}
fn default_date_key_format() -> String {
    "%-m/%-d/%Y".to_string()
}
fn default_refresh_interval() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            workday_minutes: default_workday_minutes(),
            default_lunch_minutes: default_lunch_minutes(),
            date_key_format: default_date_key_format(),
            break_policy: BreakPolicy::default(),
            deduct_breaks: false,
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worktrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worktrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worktrack.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    /// Workday length and default lunch must be positive for the countdown to make sense.
    pub fn validate(&self) -> AppResult<()> {
        if self.workday_minutes <= 0 {
            return Err(AppError::Config(format!(
                "workday_minutes must be positive (got {})",
                self.workday_minutes
            )));
        }
        if self.default_lunch_minutes < 0 {
            return Err(AppError::Config(format!(
                "default_lunch_minutes cannot be negative (got {})",
                self.default_lunch_minutes
            )));
        }
        if self.refresh_interval_secs == 0 {
            return Err(AppError::Config(
                "refresh_interval_secs must be at least 1".into(),
            ));
        }
        crate::utils::date::validate_key_format(&self.date_key_format)
    }
}
