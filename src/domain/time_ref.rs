//! Time reference parsing for choosing which entry to work on

use crate::error::{EnjourError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date relative to "today", or an absolute date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            "tomorrow" => Ok(TimeReference::Tomorrow),
            _ => {
                if let Some(day) = normalized.strip_prefix("last ") {
                    return parse_weekday(day)
                        .map(TimeReference::LastWeekday)
                        .ok_or_else(|| EnjourError::InvalidTimeReference(input.to_string()));
                }
                if let Some(weekday) = parse_weekday(&normalized) {
                    return Ok(TimeReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| EnjourError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve against `base_date` (normally today)
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Tomorrow => base_date + Duration::days(1),
            TimeReference::Weekday(target) => {
                base_date - Duration::days(days_back(base_date, *target))
            }
            TimeReference::LastWeekday(target) => {
                let back = match days_back(base_date, *target) {
                    0 => 7,
                    n => n,
                };
                base_date - Duration::days(back)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

fn days_back(base_date: NaiveDate, target: Weekday) -> i64 {
    let current = base_date.weekday().num_days_from_monday();
    ((current + 7 - target.num_days_from_monday()) % 7) as i64
}

/// Weekday name, full or abbreviated, in any case ("sunday", "Sun")
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    name.trim().parse::<Weekday>().ok()
}
