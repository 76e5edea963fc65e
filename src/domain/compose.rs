//! Daily and weekly journal composition

use crate::domain::envelope::{assemble, split_envelope, DocumentRole};
use crate::domain::mapping::ReplacementMapping;
use crate::domain::merge::merge;
use crate::domain::section::HeaderPattern;
use crate::error::Result;

/// Builds new journal entries from templates and the previous entry
#[derive(Debug, Clone)]
pub struct Composer {
    pattern: HeaderPattern,
    daily: ReplacementMapping,
    weekly: ReplacementMapping,
}

impl Default for Composer {
    fn default() -> Self {
        Composer {
            pattern: HeaderPattern::standard(),
            daily: ReplacementMapping::daily_default(),
            weekly: ReplacementMapping::weekly_default(),
        }
    }
}

impl Composer {
    pub fn new(
        pattern: HeaderPattern,
        daily: ReplacementMapping,
        weekly: ReplacementMapping,
    ) -> Self {
        Composer {
            pattern,
            daily,
            weekly,
        }
    }

    pub fn pattern(&self) -> &HeaderPattern {
        &self.pattern
    }

    /// Compose a daily entry: the template with the daily mapping's
    /// sections filled from the previous entry.
    pub fn compose_daily(&self, template_doc: &str, previous_doc: &str) -> Result<String> {
        let template = split_envelope(template_doc, DocumentRole::DailyTemplate)?;
        let previous = split_envelope(previous_doc, DocumentRole::PreviousNote)?;

        let body = merge(template.body, previous.body, &self.daily, &self.pattern);
        Ok(template.assemble(&body))
    }

    /// Compose a weekly entry: the daily entry followed by the weekly
    /// template, whose mapped sections are filled from the daily body.
    ///
    /// The result keeps the daily entry's envelope header.
    pub fn compose_weekly(
        &self,
        template_doc: &str,
        weekly_template_doc: &str,
        previous_doc: &str,
    ) -> Result<String> {
        let daily = self.compose_daily(template_doc, previous_doc)?;

        let daily_envelope = split_envelope(&daily, DocumentRole::DailyResult)?;
        let weekly_envelope = split_envelope(weekly_template_doc, DocumentRole::WeeklyTemplate)?;

        let review = merge(
            weekly_envelope.body,
            daily_envelope.body,
            &self.weekly,
            &self.pattern,
        );

        let mut body = String::with_capacity(daily_envelope.body.len() + review.len());
        body.push_str(daily_envelope.body);
        body.push_str(&review);

        Ok(assemble(daily_envelope.header, &body))
    }
}

/// Compose a daily entry with the standard pattern and default mapping
pub fn compose_daily(template_doc: &str, previous_doc: &str) -> Result<String> {
    Composer::default().compose_daily(template_doc, previous_doc)
}

/// Compose a weekly entry with the standard pattern and default mappings
pub fn compose_weekly(
    template_doc: &str,
    weekly_template_doc: &str,
    previous_doc: &str,
) -> Result<String> {
    Composer::default().compose_weekly(template_doc, weekly_template_doc, previous_doc)
}
