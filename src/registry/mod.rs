//! Component registry.
//!
//! This module owns the registry manifest and everything derived from it:
//! - [`schema`] - Typed registry, items and categories
//! - [`validator`] - Manifest validation (fatal on any violation)
//! - [`resolver`] - Transitive dependency resolution and install plans
//! - [`builtin`] - The manifest and templates embedded in the binary
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use my_ui::registry::{load_registry, resolve_dependencies};
//!
//! let registry = load_registry().unwrap();
//! let modal = registry.find("ui/modal").unwrap();
//!
//! let deps = resolve_dependencies(&registry, modal, &mut HashSet::new());
//! assert_eq!(deps[0].name, "hooks/use-click-outside");
//! ```

pub mod builtin;
pub mod resolver;
pub mod schema;
pub mod validator;

// Re-exports
pub use builtin::{load_registry, MANIFEST_FILE};
pub use resolver::{plan_install, resolve_dependencies, PlannedItem};
pub use schema::{
    is_contained_path, Bucket, Category, ItemMeta, Registry, RegistryItem, RegistryItems,
};
pub use validator::{parse, validate, ManifestError};
