//! List notes use case

use crate::error::{EnjourError, Result};
use crate::infrastructure::{FileSystemNoteStore, NoteEntry};

/// List the notes in a notebook, sorted by title
pub fn list_notes(store: &FileSystemNoteStore) -> Result<Vec<NoteEntry>> {
    if !store.is_initialized() {
        return Err(EnjourError::NotEnjourDirectory(store.root().to_path_buf()));
    }
    Ok(store.list_notes())
}
