//! Per-file outcomes and advisories.

use std::fmt;
use std::path::PathBuf;

/// A non-fatal problem. Reported to the user; the operation carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A requested item is not in the registry.
    ItemNotFound { name: String },

    /// An item declares a file that the template tree does not have.
    TemplateMissing { item: String, file: String },

    /// A file entry would be read or written outside its tree.
    UncontainedPath { item: String, file: String },

    /// The destination already exists and overwriting was not requested.
    AlreadyExists { item: String, path: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemNotFound { name } => write!(f, "Item not found: {}", name),
            Self::TemplateMissing { file, .. } => write!(f, "Template not found: {}", file),
            Self::UncontainedPath { file, .. } => {
                write!(f, "Refusing path outside the template tree: {}", file)
            }
            Self::AlreadyExists { path, .. } => write!(f, "File already exists: {}", path),
        }
    }
}

/// What happened to one declared file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was written.
    Copied {
        /// Path relative to the category's target directory.
        display: String,
        /// Absolute destination.
        destination: PathBuf,
        /// Whether an existing file was replaced.
        replaced: bool,
    },

    /// The file was left alone.
    Skipped(Advisory),
}

/// Result of materializing one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Item name.
    pub item: String,

    /// One outcome per file, in manifest order.
    pub outcomes: Vec<FileOutcome>,
}

impl CopyReport {
    pub(crate) fn new(item: &str) -> Self {
        Self {
            item: item.to_string(),
            outcomes: Vec::new(),
        }
    }

    /// Number of files written.
    pub fn copied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Copied { .. }))
            .count()
    }

    /// Advisories raised while copying.
    pub fn advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Skipped(advisory) => Some(advisory),
            FileOutcome::Copied { .. } => None,
        })
    }

    /// Whether every file was written.
    pub fn is_clean(&self) -> bool {
        self.advisories().next().is_none()
    }
}
