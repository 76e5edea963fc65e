//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "enjour")]
#[command(about = "Journal entries built from note templates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notebook
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create the journal entry for a day
    New {
        /// Time reference (e.g., today, tomorrow, sunday, 2025-01-17)
        #[arg(value_name = "TIME_REF", default_value = "today")]
        time_ref: String,
    },

    /// Compose an entry from files without touching a notebook
    Compose {
        #[command(subcommand)]
        kind: ComposeKind,
    },

    /// Append an entry's reflection stats to the notebook's CSV file
    Stats {
        /// Time reference of the entry (default: yesterday)
        #[arg(value_name = "TIME_REF", default_value = "yesterday")]
        time_ref: String,
    },

    /// List notes in the notebook
    List,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ComposeKind {
    /// Merge the previous entry into the daily template
    Daily {
        #[arg(long)]
        template: PathBuf,

        #[arg(long)]
        previous: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Daily composition followed by the weekly review
    Weekly {
        #[arg(long)]
        template: PathBuf,

        #[arg(long)]
        weekly_template: PathBuf,

        #[arg(long)]
        previous: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
