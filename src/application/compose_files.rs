//! Compose entries from loose files, outside of a notebook

use crate::domain::Composer;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Input documents for an offline composition
#[derive(Debug, Clone)]
pub enum ComposeRequest {
    Daily {
        template: PathBuf,
        previous: PathBuf,
    },
    Weekly {
        template: PathBuf,
        weekly_template: PathBuf,
        previous: PathBuf,
    },
}

/// Read the requested documents and compose the new entry
pub fn compose_files(composer: &Composer, request: &ComposeRequest) -> Result<String> {
    match request {
        ComposeRequest::Daily { template, previous } => {
            let template = fs::read_to_string(template)?;
            let previous = fs::read_to_string(previous)?;
            composer.compose_daily(&template, &previous)
        }
        ComposeRequest::Weekly {
            template,
            weekly_template,
            previous,
        } => {
            let template = fs::read_to_string(template)?;
            let weekly_template = fs::read_to_string(weekly_template)?;
            let previous = fs::read_to_string(previous)?;
            composer.compose_weekly(&template, &weekly_template, &previous)
        }
    }
}
