//! Error types for enjour

use crate::domain::DocumentRole;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enjour
#[derive(Debug, Error)]
pub enum EnjourError {
    #[error("Not an enjour notebook: {0}")]
    NotEnjourDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid header pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Malformed {role}: {reason}")]
    MalformedDocument { role: DocumentRole, reason: String },

    #[error("Journal entry already exists: {0}")]
    EntryExists(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Note already exists: {0}")]
    NoteExists(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EnjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EnjourError::NotEnjourDirectory(_) => 2,
            EnjourError::InvalidTimeReference(_) => 3,
            EnjourError::InvalidPattern { .. } => 4,
            EnjourError::MalformedDocument { .. } => 5,
            EnjourError::EntryExists(_) => 6,
            EnjourError::NoteNotFound(_) => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EnjourError::NotEnjourDirectory(path) => {
                format!(
                    "Not an enjour notebook: {}\n\n\
                    Suggestions:\n\
                    • Run 'enjour init' in this directory to create a notebook\n\
                    • Navigate to an existing notebook directory\n\
                    • Set ENJOUR_ROOT environment variable to your notebook path",
                    path.display()
                )
            }
            EnjourError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)",
                    ref_str
                )
            }
            EnjourError::InvalidPattern { .. } => {
                format!(
                    "{}\n\n\
                    The header pattern must be a regular expression with exactly one\n\
                    capturing group holding the section title.\n\
                    Example: enjour config header_pattern '<div># (.+?)</div>'",
                    self
                )
            }
            EnjourError::MalformedDocument { .. } => {
                format!(
                    "{}\n\n\
                    Notes must wrap their content in a single <en-note>...</en-note> element.",
                    self
                )
            }
            EnjourError::EntryExists(title) => {
                format!(
                    "The journal entry '{}' already exists.\n\n\
                    Suggestions:\n\
                    • Use 'enjour list' to see existing entries\n\
                    • Create an entry for another day: enjour new tomorrow",
                    title
                )
            }
            EnjourError::NoteNotFound(title) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'enjour list' to see available notes\n\
                    • Check the template titles: enjour config --list",
                    title
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using EnjourError
pub type Result<T> = std::result::Result<T, EnjourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enjour_directory_suggestion() {
        let err = EnjourError::NotEnjourDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("enjour init"));
        assert!(msg.contains("ENJOUR_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_pattern_message() {
        let err = EnjourError::InvalidPattern {
            pattern: "<div>".to_string(),
            reason: "expected exactly one capturing group, found 0".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'<div>'"));
        assert!(msg.contains("exactly one"));
        assert!(msg.contains("enjour config header_pattern"));
    }

    #[test]
    fn test_malformed_document_names_role() {
        let err = EnjourError::MalformedDocument {
            role: DocumentRole::PreviousNote,
            reason: "missing closing </en-note> fence".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed previous note: missing closing </en-note> fence"
        );
        assert!(err.display_with_suggestions().contains("<en-note>"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            EnjourError::NotEnjourDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(EnjourError::EntryExists("x".to_string()).exit_code(), 6);
        assert_eq!(EnjourError::NoteNotFound("x".to_string()).exit_code(), 7);
        assert_eq!(EnjourError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = EnjourError::Config("bad value".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Configuration error: bad value"
        );
    }
}
