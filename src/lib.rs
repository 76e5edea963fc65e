//! enjour - Journal entries built from note templates
//!
//! Creates daily and weekly journal notes by merging sections of the
//! previous day's note into a template note.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::EnjourError;
