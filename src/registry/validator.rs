//! Registry manifest validation.
//!
//! The manifest is validated eagerly and completely before anything else
//! touches it. Checks run in a fixed order and stop at the first failure:
//!
//! 1. Root keys (`name`, `version`, `items`)
//! 2. Bucket keys under `items`, each an array
//! 3. Item keys and field types
//! 4. `meta` keys and field types
//! 5. Item category against its bucket
//! 6. Name uniqueness across all buckets
//! 7. Dependency closure
//!
//! Every error names the offending location, e.g. `items.components[3].category`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use super::schema::{
    is_contained_path, Bucket, Category, ItemMeta, Registry, RegistryItem, RegistryItems,
};

const ROOT_KEYS: &[&str] = &["name", "version", "items"];
const ITEM_KEYS: &[&str] = &[
    "name",
    "description",
    "category",
    "files",
    "dependencies",
    "meta",
];
const META_KEYS: &[&str] = &["since", "deprecated", "breaking"];
const META_REQUIRED_KEYS: &[&str] = &["since"];

/// A structural violation in the registry manifest.
///
/// These are never recoverable: dependency resolution relies on the
/// invariants they protect.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An object carries a key outside its allowed set.
    #[error("unexpected key '{key}' in {path}")]
    UnexpectedKey { key: String, path: String },

    /// A required key is absent.
    #[error("missing key '{key}' in {path}")]
    MissingKey { key: String, path: String },

    /// A value that must be an object is something else.
    #[error("{path} must be an object")]
    NotAnObject { path: String },

    /// A value that must be an array is something else.
    #[error("{path} must be an array")]
    NotAnArray { path: String },

    /// A value that must be a non-empty string is something else.
    #[error("{path} must be a non-empty string")]
    NotAString { path: String },

    /// A category outside the known set.
    #[error("{path} has unknown category '{value}'")]
    UnknownCategory { path: String, value: String },

    /// A valid category stored under the wrong bucket.
    #[error("{path} must be '{expected}', found '{found}'")]
    CategoryMismatch {
        path: String,
        expected: Category,
        found: Category,
    },

    /// A file entry points outside the template tree.
    #[error("{path} must be a relative path inside the template tree, found '{value}'")]
    UncontainedFile { path: String, value: String },

    /// Two items share a name.
    #[error("duplicate name '{name}'")]
    DuplicateName { name: String },

    /// A dependency names an item that does not exist.
    #[error("dependency '{dependency}' not found (item: {item})")]
    DanglingDependency { item: String, dependency: String },
}

impl ManifestError {
    /// The manifest location this error points at, when it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::UnexpectedKey { path, .. }
            | Self::MissingKey { path, .. }
            | Self::NotAnObject { path }
            | Self::NotAnArray { path }
            | Self::NotAString { path }
            | Self::UnknownCategory { path, .. }
            | Self::CategoryMismatch { path, .. }
            | Self::UncontainedFile { path, .. } => Some(path),
            _ => None,
        }
    }
}

type Validated<T> = std::result::Result<T, ManifestError>;

impl Registry {
    /// Read and validate a manifest file.
    pub fn from_path(path: &Path) -> Validated<Self> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }
}

/// Parse and validate manifest text.
pub fn parse(content: &str) -> Validated<Registry> {
    let raw: Value = serde_json::from_str(content)?;
    validate(&raw)
}

/// Validate an untyped manifest and build the typed [`Registry`].
pub fn validate(raw: &Value) -> Validated<Registry> {
    let root = as_object(raw, "root")?;
    check_keys(root, ROOT_KEYS, ROOT_KEYS, "root")?;

    let name = as_string(&root["name"], "name")?;
    let version = as_string(&root["version"], "version")?;

    let raw_items = as_object(&root["items"], "items")?;
    let bucket_keys: Vec<&str> = Bucket::ALL.iter().map(|b| b.key()).collect();
    check_keys(raw_items, &bucket_keys, &bucket_keys, "items")?;

    // Type-check every bucket before descending into any of them.
    for bucket in Bucket::ALL {
        as_array(&raw_items[bucket.key()], &bucket_path(bucket))?;
    }

    let items = RegistryItems {
        test_configs: validate_bucket(raw_items, Bucket::TestConfigs)?,
        components: validate_bucket(raw_items, Bucket::Components)?,
        hooks: validate_bucket(raw_items, Bucket::Hooks)?,
        utils: validate_bucket(raw_items, Bucket::Utils)?,
    };

    let all: Vec<&RegistryItem> = Bucket::ALL
        .iter()
        .flat_map(|b| items.bucket(*b).iter())
        .collect();

    let mut names = HashSet::new();
    for item in &all {
        if !names.insert(item.name.as_str()) {
            return Err(ManifestError::DuplicateName {
                name: item.name.clone(),
            });
        }
    }

    for item in &all {
        for dependency in &item.dependencies {
            if !names.contains(dependency.as_str()) {
                return Err(ManifestError::DanglingDependency {
                    item: item.name.clone(),
                    dependency: dependency.clone(),
                });
            }
        }
    }

    tracing::debug!(
        "Validated registry '{}' v{} with {} items",
        name,
        version,
        all.len()
    );

    Ok(Registry::from_validated(name, version, items))
}

fn bucket_path(bucket: Bucket) -> String {
    format!("items.{}", bucket.key())
}

fn validate_bucket(raw_items: &Map<String, Value>, bucket: Bucket) -> Validated<Vec<RegistryItem>> {
    let list_path = bucket_path(bucket);
    as_array(&raw_items[bucket.key()], &list_path)?
        .iter()
        .enumerate()
        .map(|(index, value)| validate_item(value, &format!("{}[{}]", list_path, index), bucket))
        .collect()
}

fn validate_item(value: &Value, path: &str, bucket: Bucket) -> Validated<RegistryItem> {
    let obj = as_object(value, path)?;
    check_keys(obj, ITEM_KEYS, ITEM_KEYS, path)?;

    let name = as_string(&obj["name"], &format!("{}.name", path))?;
    let description = as_string(&obj["description"], &format!("{}.description", path))?;
    let category_path = format!("{}.category", path);
    let raw_category = as_string(&obj["category"], &category_path)?;
    let files = as_file_list(&obj["files"], &format!("{}.files", path))?;
    let dependencies = as_string_array(&obj["dependencies"], &format!("{}.dependencies", path))?;
    let meta = validate_meta(&obj["meta"], &format!("{}.meta", path))?;

    let category = raw_category
        .parse::<Category>()
        .map_err(|_| ManifestError::UnknownCategory {
            path: category_path.clone(),
            value: raw_category.clone(),
        })?;

    let expected = bucket.category();
    if category != expected {
        return Err(ManifestError::CategoryMismatch {
            path: category_path,
            expected,
            found: category,
        });
    }

    Ok(RegistryItem {
        name,
        description,
        category,
        files,
        dependencies,
        meta,
    })
}

fn validate_meta(value: &Value, path: &str) -> Validated<ItemMeta> {
    let obj = as_object(value, path)?;
    check_keys(obj, META_KEYS, META_REQUIRED_KEYS, path)?;

    let since = as_string(&obj["since"], &format!("{}.since", path))?;
    let deprecated = obj
        .get("deprecated")
        .map(|v| as_string(v, &format!("{}.deprecated", path)))
        .transpose()?;
    let breaking = obj
        .get("breaking")
        .map(|v| as_string(v, &format!("{}.breaking", path)))
        .transpose()?;

    Ok(ItemMeta {
        since,
        deprecated,
        breaking,
    })
}

/// Reject keys outside `allowed`, then require every key in `required`.
fn check_keys(
    obj: &Map<String, Value>,
    allowed: &[&str],
    required: &[&str],
    path: &str,
) -> Validated<()> {
    if let Some(key) = obj.keys().find(|k| !allowed.contains(&k.as_str())) {
        return Err(ManifestError::UnexpectedKey {
            key: key.clone(),
            path: path.to_string(),
        });
    }

    if let Some(key) = required.iter().find(|k| !obj.contains_key(**k)) {
        return Err(ManifestError::MissingKey {
            key: key.to_string(),
            path: path.to_string(),
        });
    }

    Ok(())
}

fn as_object<'v>(value: &'v Value, path: &str) -> Validated<&'v Map<String, Value>> {
    value.as_object().ok_or_else(|| ManifestError::NotAnObject {
        path: path.to_string(),
    })
}

fn as_array<'v>(value: &'v Value, path: &str) -> Validated<&'v Vec<Value>> {
    value.as_array().ok_or_else(|| ManifestError::NotAnArray {
        path: path.to_string(),
    })
}

fn as_string(value: &Value, path: &str) -> Validated<String> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ManifestError::NotAString {
            path: path.to_string(),
        }),
    }
}

fn as_string_array(value: &Value, path: &str) -> Validated<Vec<String>> {
    as_array(value, path)?
        .iter()
        .enumerate()
        .map(|(index, v)| as_string(v, &format!("{}[{}]", path, index)))
        .collect()
}

fn as_file_list(value: &Value, path: &str) -> Validated<Vec<String>> {
    let files = as_string_array(value, path)?;
    if let Some((index, file)) = files
        .iter()
        .enumerate()
        .find(|(_, f)| !is_contained_path(f))
    {
        return Err(ManifestError::UncontainedFile {
            path: format!("{}[{}]", path, index),
            value: file.clone(),
        });
    }
    Ok(files)
}
