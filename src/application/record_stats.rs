//! Record reflection statistics use case

use crate::domain::{collect_stats, split_envelope, write_stats, DocumentRole};
use crate::error::{EnjourError, Result};
use crate::infrastructure::{FileSystemNoteStore, NoteStore};
use chrono::NaiveDate;
use std::fs::OpenOptions;

/// Service appending an entry's stat sections to the notebook's CSV file
pub struct RecordStatsService {
    store: FileSystemNoteStore,
}

impl RecordStatsService {
    pub fn new(store: FileSystemNoteStore) -> Self {
        RecordStatsService { store }
    }

    /// Append the stats of the entry for `date`; returns how many were written
    pub fn execute(&self, date: NaiveDate) -> Result<usize> {
        let config = self.store.load_config()?;
        let title = config.entry_title(date)?;

        let note = self
            .store
            .find_note(&title)?
            .ok_or_else(|| EnjourError::NoteNotFound(title.clone()))?;
        let envelope = split_envelope(&note, DocumentRole::Note)?;

        let records = collect_stats(envelope.body, date);
        if records.is_empty() {
            tracing::info!(%title, "entry has no stat sections");
            return Ok(0);
        }

        let path = self.store.root().join(&config.stats_file);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        write_stats(&records, file)?;

        tracing::info!(
            %title,
            count = records.len(),
            path = %path.display(),
            "recorded stats"
        );
        Ok(records.len())
    }
}
