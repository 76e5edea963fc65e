//! Infrastructure layer - Configuration and note storage

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemNoteStore, NoteEntry, NoteStore};
