//! Loading and saving the project config file.
//!
//! Loading never fails: a missing file, unreadable content, invalid JSON
//! or a wrongly typed key all fall back to the compiled-in defaults, key
//! by key where possible.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;

use super::schema::Config;
use crate::error::Result;

/// Config file name, at the project root.
pub const CONFIG_FILE_NAME: &str = "my-ui.config.json";

impl Config {
    /// Path of the config file for a project.
    pub fn file_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Check whether a project already has a config file.
    pub fn exists(project_root: &Path) -> bool {
        Self::file_path(project_root).is_file()
    }

    /// Load the project config, merged over the defaults.
    pub fn load(project_root: &Path) -> Self {
        let path = Self::file_path(project_root);

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        let raw = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Self::merged_over_defaults(&value),
            Err(e) => {
                tracing::warn!("Invalid JSON in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    fn merged_over_defaults(value: &Value) -> Self {
        let mut config = Self::default();
        let Some(obj) = value.as_object() else {
            tracing::warn!("Config root is not an object; using defaults");
            return config;
        };

        let fields = [
            ("components", &mut config.components),
            ("hooks", &mut config.hooks),
            ("utils", &mut config.utils),
            ("tests", &mut config.tests),
        ];
        for (key, slot) in fields {
            match obj.get(key) {
                Some(Value::String(s)) => *slot = s.clone(),
                Some(other) => {
                    tracing::warn!("Ignoring non-string '{}' in config: {}", key, other)
                }
                None => {}
            }
        }

        config
    }

    /// Save the config to the project root.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::file_path(project_root);
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, format!("{}\n", content))?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}
