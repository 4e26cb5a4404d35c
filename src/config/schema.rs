//! Consumer project configuration.

use serde::{Deserialize, Serialize};

use crate::registry::Category;

/// Where each category of item is materialized, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination for UI components.
    pub components: String,

    /// Destination for hooks.
    pub hooks: String,

    /// Destination for utilities.
    pub utils: String,

    /// Destination for test runner configs.
    pub tests: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components: "src/components".to_string(),
            hooks: "src/hooks".to_string(),
            utils: "src/lib".to_string(),
            tests: ".".to_string(),
        }
    }
}

impl Config {
    /// Destination directory for items of a category.
    pub fn target_dir(&self, category: Category) -> &str {
        match category {
            Category::Ui => &self.components,
            Category::Hooks => &self.hooks,
            Category::Lib => &self.utils,
            Category::Test => &self.tests,
        }
    }
}
