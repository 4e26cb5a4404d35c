//! Built-in registry embedded at compile time.

use include_dir::{include_dir, Dir};

use super::schema::Registry;
use super::validator::{parse, ManifestError};

/// Embedded templates directory, manifest included.
pub(crate) static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Manifest file name inside the templates directory.
pub const MANIFEST_FILE: &str = "registry.json";

/// Load and validate the built-in registry manifest.
pub fn load_registry() -> Result<Registry, ManifestError> {
    let content = TEMPLATES_DIR
        .get_file(MANIFEST_FILE)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| ManifestError::Read {
            path: format!("templates/{}", MANIFEST_FILE).into(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "embedded manifest is missing or not UTF-8",
            ),
        })?;

    parse(content)
}
