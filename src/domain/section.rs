//! Section extraction from note bodies
//!
//! A note body is cut into sections at every match of a header pattern.
//! Each section keeps the exact header markup that opened it and the text
//! up to the next header, so sections can be re-emitted verbatim.

use crate::error::{EnjourError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Header used by journal notes: `<div># Title</div>`
pub const STANDARD_HEADER_PATTERN: &str = "<div># (.+?)</div>";

fn standard_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(STANDARD_HEADER_PATTERN).unwrap())
}

/// A compiled header pattern with exactly one capturing group (the title)
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
}

impl HeaderPattern {
    /// Compile a header pattern, rejecting patterns without exactly one capture group
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| EnjourError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        // captures_len includes the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(EnjourError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: format!("expected exactly one capturing group, found {}", groups),
            });
        }

        Ok(HeaderPattern { regex })
    }

    /// The `<div># Title</div>` pattern used by the journal templates
    pub fn standard() -> Self {
        HeaderPattern {
            regex: standard_regex().clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Default for HeaderPattern {
    fn default() -> Self {
        HeaderPattern::standard()
    }
}

impl FromStr for HeaderPattern {
    type Err = EnjourError;

    fn from_str(s: &str) -> Result<Self> {
        HeaderPattern::new(s)
    }
}

impl fmt::Display for HeaderPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One titled segment of a note body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Text captured by the pattern's group; empty if the group did not match
    pub title: &'a str,
    /// The matched header, exactly as it appears in the document
    pub header_markup: &'a str,
    /// Text between this header and the next one (or the end of the document)
    pub body: &'a str,
}

impl Section<'_> {
    /// Sections with an empty title are structural noise and never re-emitted
    pub fn is_substantive(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Split `text` into sections at every header match, in document order.
///
/// Text before the first header belongs to no section. Returns an empty
/// vector when the pattern never matches.
pub fn extract_sections<'a>(text: &'a str, pattern: &HeaderPattern) -> Vec<Section<'a>> {
    let headers: Vec<(usize, usize, &'a str)> = pattern
        .regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.get(1).map_or("", |m| m.as_str());
            Some((whole.start(), whole.end(), title))
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, &(start, end, title))| {
            let body_end = headers.get(i + 1).map_or(text.len(), |next| next.0);
            Section {
                title,
                header_markup: &text[start..end],
                body: &text[end..body_end],
            }
        })
        .collect()
}

/// Find the first section whose title equals `title` exactly
pub fn find_section<'s, 'a>(sections: &'s [Section<'a>], title: &str) -> Option<&'s Section<'a>> {
    sections.iter().find(|section| section.title == title)
}
