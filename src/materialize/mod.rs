//! Materializing registry items into a consumer project.
//!
//! - [`source`] - Where template bytes are read from
//! - [`copy`] - The copy policy: destinations, overwrite handling, `.example.` renames
//! - [`report`] - Per-file outcomes and non-fatal advisories

pub mod copy;
pub mod report;
pub mod source;

pub use copy::{destination_name, Materializer};
pub use report::{Advisory, CopyReport, FileOutcome};
pub use source::{DirectoryTemplates, EmbeddedTemplates, TemplateSource};
