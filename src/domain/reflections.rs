//! Reflection statistics embedded in journal entries
//!
//! Entries may carry tracked values as sections such as
//! `<div>#$ Mood</div><div>7</div>`. A `$` after the header marker marks a
//! stat; `#` marks a regular internal subsection and is skipped.

use crate::domain::section::{extract_sections, HeaderPattern};
use crate::error::Result;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::io::Write;
use std::sync::OnceLock;

const STAT_HEADER_PATTERN: &str = "<div>#([#$] .+?)</div>";

fn stat_pattern() -> &'static HeaderPattern {
    static PATTERN: OnceLock<HeaderPattern> = OnceLock::new();
    PATTERN.get_or_init(|| HeaderPattern::new(STAT_HEADER_PATTERN).unwrap())
}

fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// One tracked value from one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRecord {
    #[serde(serialize_with = "serialize_stat_date")]
    pub date: NaiveDate,
    pub label: String,
    pub value: String,
}

fn serialize_stat_date<S>(
    date: &NaiveDate,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format("%Y/%m/%d"))
}

/// Write records as headerless `YYYY/MM/DD,label,value` rows
pub fn write_stats<W: Write>(records: &[StatRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Collect every `$` stat section from an entry body
pub fn collect_stats(body: &str, date: NaiveDate) -> Vec<StatRecord> {
    extract_sections(body, stat_pattern())
        .into_iter()
        .filter_map(|section| {
            let label = section.title.strip_prefix('$')?.trim();
            let value = markup_regex().replace_all(section.body, " ");
            Some(StatRecord {
                date,
                label: label.to_string(),
                value: value.split_whitespace().collect::<Vec<_>>().join(" "),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    #[test]
    fn test_collect_dollar_sections() {
        let body = "<div># Goals</div><div>x</div>\
                    <div>#$ Mood</div><div>7</div>\
                    <div>## Notes</div><div>skip</div>\
                    <div>#$ Sleep</div><div><b>6.5</b> hours</div>";

        let stats = collect_stats(body, date());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].label, "Mood");
        assert_eq!(stats[0].value, "7");
        assert_eq!(stats[1].label, "Sleep");
        assert_eq!(stats[1].value, "6.5 hours");
    }

    #[test]
    fn test_no_stats() {
        let stats = collect_stats("<div># Goals</div><div>x</div>", date());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_stat_value_stops_at_next_header() {
        let body = "<div>#$ Mood</div><div>5</div><div>## Other</div><div>9</div>";
        let stats = collect_stats(body, date());
        assert_eq!(stats[0].value, "5");
    }

    fn written(records: &[StatRecord]) -> String {
        let mut out = Vec::new();
        write_stats(records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_stats_rows() {
        let records = collect_stats(
            "<div>#$ Mood</div><div>7</div><div>#$ Sleep</div><div>8</div>",
            date(),
        );
        assert_eq!(written(&records), "2025/01/17,Mood,7\n2025/01/17,Sleep,8\n");
    }

    #[test]
    fn test_write_stats_quotes_commas_and_quotes() {
        let record = StatRecord {
            date: date(),
            label: "Highlights".to_string(),
            value: "walk, \"read\"".to_string(),
        };
        assert_eq!(
            written(&[record]),
            "2025/01/17,Highlights,\"walk, \"\"read\"\"\"\n"
        );
    }

    #[test]
    fn test_write_stats_quotes_embedded_newline() {
        let record = StatRecord {
            date: date(),
            label: "Note".to_string(),
            value: "line one\nline two".to_string(),
        };
        assert_eq!(written(&[record]), "2025/01/17,Note,\"line one\nline two\"\n");
    }

    #[test]
    fn test_write_stats_empty() {
        assert_eq!(written(&[]), "");
    }
}
