//! Domain layer - Section merging and journal composition

pub mod compose;
pub mod envelope;
pub mod mapping;
pub mod merge;
pub mod reflections;
pub mod section;
pub mod time_ref;

pub use compose::{compose_daily, compose_weekly, Composer};
pub use envelope::{assemble, split_envelope, DocumentRole, Envelope};
pub use mapping::{MappingRule, ReplacementMapping};
pub use merge::{merge, merge_fragments};
pub use reflections::{collect_stats, write_stats, StatRecord};
pub use section::{extract_sections, find_section, HeaderPattern, Section};
pub use time_ref::{parse_weekday, TimeReference};
