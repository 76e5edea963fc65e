//! Notebook storage
//!
//! A notebook is a directory holding one `.enml` file per note, named after
//! the note title. Configuration lives in `.enjour/` at the notebook root.

use crate::error::{EnjourError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

const NOTE_EXTENSION: &str = "enml";

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub title: String,
    pub path: PathBuf,
}

/// Where journal notes are fetched from and created in
pub trait NoteStore {
    /// Content of the note with this title, if any
    fn find_note(&self, title: &str) -> Result<Option<String>>;

    /// Create a new note; fails if one with this title exists
    fn create_note(&self, title: &str, content: &str) -> Result<()>;
}

/// Directory-backed notebook
#[derive(Debug, Clone)]
pub struct FileSystemNoteStore {
    pub root: PathBuf,
}

impl FileSystemNoteStore {
    pub fn new(root: PathBuf) -> Self {
        FileSystemNoteStore { root }
    }

    /// Locate the notebook: ENJOUR_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("ENJOUR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemNoteStore::new(path));
            }
            return Err(EnjourError::Config(format!(
                "ENJOUR_ROOT is set to '{}' but no .enjour directory found. \
                Run 'enjour init' in that directory or unset ENJOUR_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` looking for a directory containing .enjour
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_config_dir(dir))
            .map(|dir| FileSystemNoteStore::new(dir.to_path_buf()))
            .ok_or_else(|| EnjourError::NotEnjourDirectory(start.to_path_buf()))
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    /// Create the .enjour directory
    pub fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(EnjourError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&config_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// File name a note title is stored under
    ///
    /// Path separators become `-`, so the mapping is not reversible: titles
    /// `01/17(Fri)` and `01-17(Fri)` share a file, and `list` shows the
    /// file stem rather than the original title.
    pub fn file_name_for(title: &str) -> String {
        let stem: String = title
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
            .collect();
        format!("{}.{}", stem, NOTE_EXTENSION)
    }

    /// All note files in the notebook, skipping dot-directories
    fn note_files(&self) -> impl Iterator<Item = walkdir::DirEntry> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !name.starts_with('.'))
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry.path().extension().and_then(|e| e.to_str()) == Some(NOTE_EXTENSION)
            })
    }

    /// List every note, sorted by title
    pub fn list_notes(&self) -> Vec<NoteEntry> {
        let mut notes: Vec<NoteEntry> = self
            .note_files()
            .filter_map(|entry| {
                let title = entry.path().file_stem()?.to_str()?.to_string();
                Some(NoteEntry {
                    title,
                    path: entry.into_path(),
                })
            })
            .collect();

        notes.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.path.cmp(&b.path)));
        notes
    }

    /// Write `content` to a new file at `path`, never replacing an existing one
    fn write_new(&self, title: &str, path: &Path, content: &str) -> Result<()> {
        // Readers never see a partial note
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist_noclobber(path).map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                EnjourError::NoteExists(title.to_string())
            } else {
                EnjourError::Io(e.error)
            }
        })?;
        Ok(())
    }

    fn locate(&self, title: &str) -> Option<PathBuf> {
        let file_name = Self::file_name_for(title);
        self.note_files()
            .find(|entry| entry.file_name().to_str() == Some(file_name.as_str()))
            .map(walkdir::DirEntry::into_path)
    }
}

impl NoteStore for FileSystemNoteStore {
    fn find_note(&self, title: &str) -> Result<Option<String>> {
        match self.locate(title) {
            Some(path) => {
                tracing::debug!(title, path = %path.display(), "found note");
                Ok(Some(fs::read_to_string(path)?))
            }
            None => Ok(None),
        }
    }

    fn create_note(&self, title: &str, content: &str) -> Result<()> {
        if self.locate(title).is_some() {
            return Err(EnjourError::NoteExists(title.to_string()));
        }

        let path = self.root.join(Self::file_name_for(title));
        self.write_new(title, &path, content)?;

        tracing::info!(title, path = %path.display(), "created note");
        Ok(())
    }
}
