//! Note envelope handling
//!
//! Note content is ENML: an XML prologue followed by a single
//! `<en-note ...>...</en-note>` element. The prologue is the header, the
//! element's inner text is the mergeable body.

use crate::error::{EnjourError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const FENCE_OPEN: &str = "<en-note>";
const FENCE_CLOSE: &str = "</en-note>";

fn open_fence_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<en-note(?:\s[^>]*)?>").unwrap())
}

/// Which input a document plays in a composition, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    DailyTemplate,
    WeeklyTemplate,
    PreviousNote,
    DailyResult,
    Note,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentRole::DailyTemplate => "daily template",
            DocumentRole::WeeklyTemplate => "weekly template",
            DocumentRole::PreviousNote => "previous note",
            DocumentRole::DailyResult => "daily entry",
            DocumentRole::Note => "note",
        };
        f.write_str(name)
    }
}

/// A document split into its envelope header and fenced body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// Everything before the opening `<en-note>` tag
    pub header: &'a str,
    /// Text strictly inside the outermost `<en-note>` element
    pub body: &'a str,
}

impl Envelope<'_> {
    /// Rebuild a complete document around this header and a (possibly new) body
    pub fn assemble(&self, body: &str) -> String {
        assemble(self.header, body)
    }
}

/// Split a document at the first opening fence and the last closing fence
pub fn split_envelope(document: &str, role: DocumentRole) -> Result<Envelope<'_>> {
    let malformed = |reason: &str| EnjourError::MalformedDocument {
        role,
        reason: reason.to_string(),
    };

    let open = open_fence_regex()
        .find(document)
        .ok_or_else(|| malformed("missing opening <en-note> fence"))?;

    let close = document
        .rfind(FENCE_CLOSE)
        .ok_or_else(|| malformed("missing closing </en-note> fence"))?;

    if close < open.end() {
        return Err(malformed("closing </en-note> fence precedes the opening fence"));
    }

    Ok(Envelope {
        header: &document[..open.start()],
        body: &document[open.end()..close],
    })
}

/// Wrap `body` in a bare `<en-note>` element after `header`
pub fn assemble(header: &str, body: &str) -> String {
    let mut document =
        String::with_capacity(header.len() + FENCE_OPEN.len() + body.len() + FENCE_CLOSE.len());
    document.push_str(header);
    document.push_str(FENCE_OPEN);
    document.push_str(body);
    document.push_str(FENCE_CLOSE);
    document
}
