//! Config management use case

use crate::domain::HeaderPattern;
use crate::error::{EnjourError, Result};
use crate::infrastructure::config::{parse_weekly_day, validate_date_format};
use crate::infrastructure::{Config, FileSystemNoteStore};

const KEYS: &str =
    "date_format, daily_template, weekly_template, weekly_day, header_pattern, stats_file";

/// Service for managing notebook configuration
pub struct ConfigService {
    store: FileSystemNoteStore,
}

impl ConfigService {
    pub fn new(store: FileSystemNoteStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        let value = match key {
            "date_format" => config.date_format,
            "daily_template" => config.daily_template,
            "weekly_template" => config.weekly_template,
            "weekly_day" => config.weekly_day,
            "header_pattern" => config.header_pattern,
            "stats_file" => config.stats_file,
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a config value after validating it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "date_format" => {
                validate_date_format(value)?;
                config.date_format = value.to_string();
            }
            "daily_template" => config.daily_template = value.to_string(),
            "weekly_template" => config.weekly_template = value.to_string(),
            "weekly_day" => {
                parse_weekly_day(value)?;
                config.weekly_day = value.trim().to_lowercase();
            }
            "header_pattern" => {
                HeaderPattern::new(value)?;
                config.header_pattern = value.to_string();
            }
            "stats_file" => config.stats_file = value.to_string(),
            _ => return Err(unknown_key(key)),
        }

        self.store.save_config(&config)
    }

    /// Load the full configuration
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}

fn unknown_key(key: &str) -> EnjourError {
    EnjourError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, KEYS
    ))
}
