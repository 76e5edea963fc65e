//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ComposeKind};
pub use output::{format_config, format_note_list, format_outcome};
