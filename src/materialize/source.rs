//! Where template bytes come from.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::registry::builtin::TEMPLATES_DIR;
use crate::registry::is_contained_path;

/// A read-only tree of template files addressed by relative path.
pub trait TemplateSource: fmt::Debug {
    /// Read a template file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    fn read(&self, relative: &str) -> io::Result<Option<Cow<'_, [u8]>>>;

    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn read(&self, relative: &str) -> io::Result<Option<Cow<'_, [u8]>>> {
        Ok(TEMPLATES_DIR
            .get_file(relative)
            .map(|f| Cow::Borrowed(f.contents())))
    }

    fn describe(&self) -> String {
        "built-in templates".to_string()
    }
}

/// Templates in a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    /// Use `root` as the template tree.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The template root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectoryTemplates {
    fn read(&self, relative: &str) -> io::Result<Option<Cow<'_, [u8]>>> {
        if !is_contained_path(relative) {
            return Ok(None);
        }
        let path = self.root.join(relative);
        if !path.is_file() {
            return Ok(None);
        }
        fs::read(&path).map(|bytes| Some(Cow::Owned(bytes)))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
