//! Notebook configuration

use crate::domain::section::STANDARD_HEADER_PATTERN;
use crate::domain::{parse_weekday, Composer, HeaderPattern, ReplacementMapping};
use crate::error::{EnjourError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".enjour";
const CONFIG_FILE: &str = "config.toml";

fn default_date_format() -> String {
    "%m/%d(%a)".to_string()
}

fn default_daily_template() -> String {
    "Daily Template".to_string()
}

fn default_weekly_template() -> String {
    "Weekly Template".to_string()
}

fn default_weekly_day() -> String {
    "sunday".to_string()
}

fn default_header_pattern() -> String {
    STANDARD_HEADER_PATTERN.to_string()
}

fn default_stats_file() -> String {
    "stats.csv".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// chrono format string used to title entries
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_daily_template")]
    pub daily_template: String,
    #[serde(default = "default_weekly_template")]
    pub weekly_template: String,
    /// Day of the week whose entry gets the weekly review
    #[serde(default = "default_weekly_day")]
    pub weekly_day: String,
    #[serde(default = "default_header_pattern")]
    pub header_pattern: String,
    /// Path of the statistics CSV, relative to the notebook root
    #[serde(default = "default_stats_file")]
    pub stats_file: String,
    #[serde(default = "ReplacementMapping::daily_default")]
    pub daily_mapping: ReplacementMapping,
    #[serde(default = "ReplacementMapping::weekly_default")]
    pub weekly_mapping: ReplacementMapping,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_format: default_date_format(),
            daily_template: default_daily_template(),
            weekly_template: default_weekly_template(),
            weekly_day: default_weekly_day(),
            header_pattern: default_header_pattern(),
            stats_file: default_stats_file(),
            daily_mapping: ReplacementMapping::daily_default(),
            weekly_mapping: ReplacementMapping::weekly_default(),
        }
    }
}

impl Config {
    /// Load config from .enjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EnjourError::NotEnjourDirectory(path.to_path_buf())
            } else {
                EnjourError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| EnjourError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .enjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Title of the entry for `date`
    pub fn entry_title(&self, date: NaiveDate) -> Result<String> {
        validate_date_format(&self.date_format)?;
        let mut title = String::new();
        write!(title, "{}", date.format(&self.date_format))
            .map_err(|_| invalid_date_format(&self.date_format))?;
        Ok(title)
    }

    pub fn weekly_weekday(&self) -> Result<Weekday> {
        parse_weekly_day(&self.weekly_day)
    }

    /// Build a composer from the configured pattern and mappings
    pub fn composer(&self) -> Result<Composer> {
        let pattern = HeaderPattern::new(&self.header_pattern)?;
        Ok(Composer::new(
            pattern,
            self.daily_mapping.clone(),
            self.weekly_mapping.clone(),
        ))
    }
}

/// Parse the `weekly_day` setting ("sunday", "Sun", ...)
pub fn parse_weekly_day(value: &str) -> Result<Weekday> {
    parse_weekday(value).ok_or_else(|| {
        EnjourError::Config(format!(
            "Invalid weekly_day: '{}'. Expected a weekday name such as 'sunday'",
            value
        ))
    })
}

/// Reject empty formats and unknown strftime specifiers
pub fn validate_date_format(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EnjourError::Config(
            "date_format must not be empty".to_string(),
        ));
    }
    if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
        return Err(invalid_date_format(value));
    }
    Ok(())
}

fn invalid_date_format(value: &str) -> EnjourError {
    EnjourError::Config(format!(
        "Invalid date_format: '{}'. Expected a strftime format such as '%m/%d(%a)'",
        value
    ))
}
