//! Registry data model.
//!
//! These types are only ever produced by the validator, so every
//! [`Registry`] in memory already satisfies the manifest invariants:
//! unique names, dependency closure and bucket/category agreement.

use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use serde::Serialize;

/// Item category. Determines where an item's files are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Test runner configuration and setup files.
    Test,
    /// UI components.
    Ui,
    /// React hooks.
    Hooks,
    /// Utility modules.
    Lib,
}

impl Category {
    /// All categories, in manifest bucket order.
    pub const ALL: [Category; 4] = [Self::Test, Self::Ui, Self::Hooks, Self::Lib];

    /// The manifest spelling of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Ui => "ui",
            Self::Hooks => "hooks",
            Self::Lib => "lib",
        }
    }

    /// The bucket items of this category are stored under.
    pub fn bucket(&self) -> Bucket {
        match self {
            Self::Test => Bucket::TestConfigs,
            Self::Ui => Bucket::Components,
            Self::Hooks => Bucket::Hooks,
            Self::Lib => Bucket::Utils,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Self::Test),
            "ui" => Ok(Self::Ui),
            "hooks" => Ok(Self::Hooks),
            "lib" => Ok(Self::Lib),
            _ => Err(format!("unknown category: {}", s)),
        }
    }
}

/// One of the four item lists under the manifest's `items` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    TestConfigs,
    Components,
    Hooks,
    Utils,
}

impl Bucket {
    /// All buckets, in manifest order.
    pub const ALL: [Bucket; 4] = [
        Self::TestConfigs,
        Self::Components,
        Self::Hooks,
        Self::Utils,
    ];

    /// The JSON key of this bucket.
    pub fn key(&self) -> &'static str {
        match self {
            Self::TestConfigs => "test-configs",
            Self::Components => "components",
            Self::Hooks => "hooks",
            Self::Utils => "utils",
        }
    }

    /// The category every item in this bucket must declare.
    pub fn category(&self) -> Category {
        match self {
            Self::TestConfigs => Category::Test,
            Self::Components => Category::Ui,
            Self::Hooks => Category::Hooks,
            Self::Utils => Category::Lib,
        }
    }
}

/// Provenance and lifecycle notes. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemMeta {
    /// Registry version that introduced the item.
    pub since: String,

    /// Deprecation notice, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    /// Description of the last breaking change, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaking: Option<String>,
}

/// A distributable unit: a component, hook, utility or test config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryItem {
    /// Unique name, e.g. `ui/modal`.
    pub name: String,

    /// Human-readable summary.
    pub description: String,

    /// Item category.
    pub category: Category,

    /// Template-relative source files, in manifest order.
    pub files: Vec<String>,

    /// Names of the items this one needs.
    pub dependencies: Vec<String>,

    /// Lifecycle annotations.
    pub meta: ItemMeta,
}

impl RegistryItem {
    /// Whether any of this item's files is a test file.
    pub fn has_tests(&self) -> bool {
        self.files.iter().any(|f| f.contains(".test."))
    }

    /// Whether the item carries a deprecation notice.
    pub fn is_deprecated(&self) -> bool {
        self.meta.deprecated.is_some()
    }
}

/// Whether a manifest file entry stays inside the tree it is joined to.
///
/// Absolute paths, drive prefixes, `..` components and backslashes are
/// rejected.
pub fn is_contained_path(file: &str) -> bool {
    Path::new(file)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && !file.contains('\\')
}

/// Items of a registry, grouped by bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryItems {
    #[serde(rename = "test-configs")]
    pub test_configs: Vec<RegistryItem>,
    pub components: Vec<RegistryItem>,
    pub hooks: Vec<RegistryItem>,
    pub utils: Vec<RegistryItem>,
}

impl RegistryItems {
    /// Items stored under a bucket.
    pub fn bucket(&self, bucket: Bucket) -> &[RegistryItem] {
        match bucket {
            Bucket::TestConfigs => &self.test_configs,
            Bucket::Components => &self.components,
            Bucket::Hooks => &self.hooks,
            Bucket::Utils => &self.utils,
        }
    }
}

/// A validated, immutable registry.
#[derive(Debug, Clone, Serialize)]
pub struct Registry {
    /// Registry name.
    pub name: String,

    /// Registry version.
    pub version: String,

    items: RegistryItems,

    #[serde(skip)]
    index: HashMap<String, (Bucket, usize)>,
}

impl Registry {
    /// Assemble a registry from items that already passed validation.
    pub(crate) fn from_validated(name: String, version: String, items: RegistryItems) -> Self {
        let mut index = HashMap::new();
        for bucket in Bucket::ALL {
            for (position, item) in items.bucket(bucket).iter().enumerate() {
                index.insert(item.name.clone(), (bucket, position));
            }
        }

        Self {
            name,
            version,
            items,
            index,
        }
    }

    /// All items, grouped by bucket.
    pub fn items(&self) -> &RegistryItems {
        &self.items
    }

    /// Items stored under a bucket.
    pub fn bucket(&self, bucket: Bucket) -> &[RegistryItem] {
        self.items.bucket(bucket)
    }

    /// Every item in the registry, test configs included, in bucket order.
    pub fn all_items(&self) -> impl Iterator<Item = &RegistryItem> {
        Bucket::ALL.into_iter().flat_map(|b| self.bucket(b).iter())
    }

    /// Items offered by `add --all` and the interactive picker.
    ///
    /// Test configs are installed through `setup-tests` instead.
    pub fn installable_items(&self) -> Vec<&RegistryItem> {
        [Bucket::Components, Bucket::Hooks, Bucket::Utils]
            .into_iter()
            .flat_map(|b| self.bucket(b).iter())
            .collect()
    }

    /// Look up an item by name in any bucket.
    pub fn find(&self, name: &str) -> Option<&RegistryItem> {
        let (bucket, position) = self.index.get(name)?;
        self.bucket(*bucket).get(*position)
    }

    /// Check if an item exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the registry has no items.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
