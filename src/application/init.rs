//! Initialize notebook use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemNoteStore, NoteStore};
use std::fs;
use std::path::Path;

const ENML_PROLOGUE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<!DOCTYPE en-note SYSTEM \"http://xml.evernote.com/pub/enml2.dtd\">\n";

const DAILY_TEMPLATE_BODY: &str = "\n<div># Daily Goal Checklist</div>\n<div><br/></div>\n\
<div># Reflections</div>\n<div><br/></div>\n\
<div>#$ Mood</div>\n<div><br/></div>\n\
<div># Goals For Tomorrow</div>\n<div><br/></div>\n\
<div># Weekly Goal Checklist</div>\n<div><br/></div>\n";

const WEEKLY_TEMPLATE_BODY: &str = "\n<div># Weekly Review</div>\n<div><br/></div>\n\
<div># Weekly Goal Checklist</div>\n<div><br/></div>\n";

/// Seed content for the daily template note
pub fn default_daily_template() -> String {
    format!("{}<en-note>{}</en-note>\n", ENML_PROLOGUE, DAILY_TEMPLATE_BODY)
}

/// Seed content for the weekly template note
pub fn default_weekly_template() -> String {
    format!("{}<en-note>{}</en-note>\n", ENML_PROLOGUE, WEEKLY_TEMPLATE_BODY)
}

/// Initialize a new notebook at the specified path
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemNoteStore::new(path.to_path_buf());
    store.initialize()?;

    let config = Config::default();
    store.save_config(&config)?;

    for (title, content) in [
        (&config.daily_template, default_daily_template()),
        (&config.weekly_template, default_weekly_template()),
    ] {
        if store.find_note(title)?.is_none() {
            store.create_note(title, &content)?;
        }
    }

    println!("Initialized enjour notebook at {}", path.display());

    Ok(())
}
