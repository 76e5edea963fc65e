//! Application layer - Use cases and orchestration

pub mod compose_files;
pub mod create_entry;
pub mod init;
pub mod list_notes;
pub mod manage_config;
pub mod record_stats;

pub use compose_files::{compose_files, ComposeRequest};
pub use create_entry::{CreateEntryService, EntryOutcome};
pub use manage_config::ConfigService;
pub use record_stats::RecordStatsService;
