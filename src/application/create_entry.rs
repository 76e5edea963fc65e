//! Create journal entry use case

use crate::error::{EnjourError, Result};
use crate::infrastructure::{Config, NoteStore};
use chrono::{Datelike, Duration, NaiveDate};

/// How a new entry was built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// No previous entry: the daily template was copied as is
    TemplateOnly { title: String },
    /// Daily template merged with the previous entry
    Daily { title: String },
    /// Daily entry plus the weekly review
    Weekly { title: String },
}

impl EntryOutcome {
    pub fn title(&self) -> &str {
        match self {
            EntryOutcome::TemplateOnly { title }
            | EntryOutcome::Daily { title }
            | EntryOutcome::Weekly { title } => title,
        }
    }
}

/// Service for creating the journal entry of a given day
pub struct CreateEntryService<S: NoteStore> {
    store: S,
    config: Config,
}

impl<S: NoteStore> CreateEntryService<S> {
    pub fn new(store: S, config: Config) -> Self {
        CreateEntryService { store, config }
    }

    /// Create the entry for `date` from the templates and the previous day's entry
    pub fn execute(&self, date: NaiveDate) -> Result<EntryOutcome> {
        // Validate configuration before touching the store
        let composer = self.config.composer()?;
        let weekly_day = self.config.weekly_weekday()?;

        let title = self.config.entry_title(date)?;
        if self.store.find_note(&title)?.is_some() {
            return Err(EnjourError::EntryExists(title));
        }

        let template = self
            .store
            .find_note(&self.config.daily_template)?
            .ok_or_else(|| EnjourError::NoteNotFound(self.config.daily_template.clone()))?;

        let previous_title = self.config.entry_title(date - Duration::days(1))?;
        let Some(previous) = self.store.find_note(&previous_title)? else {
            tracing::info!(
                previous = %previous_title,
                "no previous entry, using the daily template as is"
            );
            self.store.create_note(&title, &template)?;
            return Ok(EntryOutcome::TemplateOnly { title });
        };

        let outcome = if date.weekday() == weekly_day {
            let weekly_template = self
                .store
                .find_note(&self.config.weekly_template)?
                .ok_or_else(|| EnjourError::NoteNotFound(self.config.weekly_template.clone()))?;

            tracing::debug!(%title, "composing weekly entry");
            let content = composer.compose_weekly(&template, &weekly_template, &previous)?;
            self.store.create_note(&title, &content)?;
            EntryOutcome::Weekly { title }
        } else {
            tracing::debug!(%title, "composing daily entry");
            let content = composer.compose_daily(&template, &previous)?;
            self.store.create_note(&title, &content)?;
            EntryOutcome::Daily { title }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocumentRole;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        notes: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn with(self, title: &str, content: &str) -> Self {
            self.notes
                .borrow_mut()
                .insert(title.to_string(), content.to_string());
            self
        }

        fn get(&self, title: &str) -> Option<String> {
            self.notes.borrow().get(title).cloned()
        }
    }

    impl NoteStore for &MemoryStore {
        fn find_note(&self, title: &str) -> Result<Option<String>> {
            Ok(self.get(title))
        }

        fn create_note(&self, title: &str, content: &str) -> Result<()> {
            let mut notes = self.notes.borrow_mut();
            if notes.contains_key(title) {
                return Err(EnjourError::NoteExists(title.to_string()));
            }
            notes.insert(title.to_string(), content.to_string());
            Ok(())
        }
    }

    const DAILY: &str = "<en-note><div># Daily Goal Checklist</div><div>empty</div>\
                         <div># Goals For Tomorrow</div><div></div></en-note>";
    const WEEKLY: &str = "<en-note><div># Weekly Review</div><div>?</div></en-note>";
    const PREVIOUS: &str = "<en-note><div># Daily Goal Checklist</div><div>done</div>\
                            <div># Goals For Tomorrow</div><div>plan</div></en-note>";

    // Friday
    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 19).unwrap()
    }

    #[test]
    fn test_creates_daily_entry() {
        let store = MemoryStore::default()
            .with("Daily Template", DAILY)
            .with("01/16(Thu)", PREVIOUS);
        let service = CreateEntryService::new(&store, Config::default());

        let outcome = service.execute(friday()).unwrap();
        assert_eq!(
            outcome,
            EntryOutcome::Daily {
                title: "01/17(Fri)".to_string()
            }
        );

        let created = store.get("01/17(Fri)").unwrap();
        assert!(created.contains("<div># Daily Goal Checklist</div><div>plan</div>"));
    }

    #[test]
    fn test_copies_template_without_previous_entry() {
        let store = MemoryStore::default().with("Daily Template", DAILY);
        let service = CreateEntryService::new(&store, Config::default());

        let outcome = service.execute(friday()).unwrap();
        assert!(matches!(outcome, EntryOutcome::TemplateOnly { .. }));
        assert_eq!(store.get("01/17(Fri)").as_deref(), Some(DAILY));
    }

    #[test]
    fn test_creates_weekly_entry_on_weekly_day() {
        let store = MemoryStore::default()
            .with("Daily Template", DAILY)
            .with("Weekly Template", WEEKLY)
            .with("01/18(Sat)", PREVIOUS);
        let service = CreateEntryService::new(&store, Config::default());

        let outcome = service.execute(sunday()).unwrap();
        assert_eq!(outcome.title(), "01/19(Sun)");
        assert!(matches!(outcome, EntryOutcome::Weekly { .. }));

        let created = store.get("01/19(Sun)").unwrap();
        assert!(created.contains("<div># Weekly Review</div><div>?</div>"));
        assert!(created.contains("<div>plan</div>"));
    }

    #[test]
    fn test_weekly_day_is_configurable() {
        let store = MemoryStore::default()
            .with("Daily Template", DAILY)
            .with("Weekly Template", WEEKLY)
            .with("01/16(Thu)", PREVIOUS);
        let config = Config {
            weekly_day: "friday".to_string(),
            ..Config::default()
        };
        let service = CreateEntryService::new(&store, config);

        let outcome = service.execute(friday()).unwrap();
        assert!(matches!(outcome, EntryOutcome::Weekly { .. }));
    }

    #[test]
    fn test_existing_entry_is_rejected() {
        let store = MemoryStore::default()
            .with("Daily Template", DAILY)
            .with("01/17(Fri)", "already here");
        let service = CreateEntryService::new(&store, Config::default());

        let err = service.execute(friday()).unwrap_err();
        assert!(matches!(err, EnjourError::EntryExists(ref t) if t == "01/17(Fri)"));
        assert_eq!(store.get("01/17(Fri)").as_deref(), Some("already here"));
    }

    #[test]
    fn test_missing_template() {
        let store = MemoryStore::default();
        let service = CreateEntryService::new(&store, Config::default());

        let err = service.execute(friday()).unwrap_err();
        assert!(matches!(err, EnjourError::NoteNotFound(ref t) if t == "Daily Template"));
    }

    #[test]
    fn test_missing_weekly_template() {
        let store = MemoryStore::default()
            .with("Daily Template", DAILY)
            .with("01/18(Sat)", PREVIOUS);
        let service = CreateEntryService::new(&store, Config::default());

        let err = service.execute(sunday()).unwrap_err();
        assert!(matches!(err, EnjourError::NoteNotFound(ref t) if t == "Weekly Template"));
        assert!(store.get("01/19(Sun)").is_none());
    }

    #[test]
    fn test_malformed_previous_entry_creates_nothing() {
        let store = MemoryStore::default()
            .with("Daily Template", DAILY)
            .with("01/16(Thu)", "<en-note>cut off");
        let service = CreateEntryService::new(&store, Config::default());

        let err = service.execute(friday()).unwrap_err();
        assert!(matches!(
            err,
            EnjourError::MalformedDocument {
                role: DocumentRole::PreviousNote,
                ..
            }
        ));
        assert!(store.get("01/17(Fri)").is_none());
    }

    #[test]
    fn test_invalid_pattern_is_reported_first() {
        let store = MemoryStore::default();
        let config = Config {
            header_pattern: "no group".to_string(),
            ..Config::default()
        };
        let service = CreateEntryService::new(&store, config);

        assert!(matches!(
            service.execute(friday()),
            Err(EnjourError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_bad_date_format_is_an_error() {
        let store = MemoryStore::default().with("Daily Template", DAILY);
        let config = Config {
            date_format: "%m/%Q".to_string(),
            ..Config::default()
        };
        let service = CreateEntryService::new(&store, config);

        assert!(matches!(
            service.execute(friday()),
            Err(EnjourError::Config(_))
        ));
        assert_eq!(store.notes.borrow().len(), 1);
    }
}
