//! Output formatting utilities

use crate::application::EntryOutcome;
use crate::infrastructure::{Config, NoteEntry};

/// Format a list of notes for display
pub fn format_note_list(notes: &[NoteEntry]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for entry in notes {
        output.push_str(&entry.title);
        output.push('\n');
    }
    output
}

/// Describe a created entry
pub fn format_outcome(outcome: &EntryOutcome) -> String {
    match outcome {
        EntryOutcome::TemplateOnly { title } => {
            format!("Journal for {} created from the template (no previous entry)", title)
        }
        EntryOutcome::Daily { title } => format!("Journal for {} successfully created", title),
        EntryOutcome::Weekly { title } => {
            format!("Journal for {} successfully created with weekly review", title)
        }
    }
}

/// Render the scalar configuration values as `key = value` lines
pub fn format_config(config: &Config) -> String {
    let mut output = format!(
        "date_format = {}\n\
         daily_template = {}\n\
         weekly_template = {}\n\
         weekly_day = {}\n\
         header_pattern = {}\n\
         stats_file = {}\n",
        config.date_format,
        config.daily_template,
        config.weekly_template,
        config.weekly_day,
        config.header_pattern,
        config.stats_file
    );

    for (name, mapping) in [
        ("daily_mapping", &config.daily_mapping),
        ("weekly_mapping", &config.weekly_mapping),
    ] {
        for rule in mapping.iter() {
            output.push_str(&format!("{}: {} <- {}\n", name, rule.template, rule.source));
        }
    }
    output
}
