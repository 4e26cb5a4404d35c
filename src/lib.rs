//! my-ui - Copy UI components, hooks and utilities into a project.
//!
//! my-ui distributes source files rather than packages: a registry manifest
//! describes each item and its dependencies, and the CLI copies the item's
//! template files into the consumer project where they can be edited freely.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Consumer project configuration (`my-ui.config.json`)
//! - [`error`] - Error types and result aliases
//! - [`materialize`] - Copying template files into a project
//! - [`registry`] - Registry manifest, validation and dependency resolution
//! - [`testing`] - Test environment detection and setup
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use my_ui::registry::{load_registry, resolve_dependencies};
//!
//! let registry = load_registry().unwrap();
//! let button = registry.find("ui/button").unwrap();
//! let deps = resolve_dependencies(&registry, button, &mut HashSet::new());
//!
//! let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
//! assert_eq!(names, ["lib/cn"]);
//! ```
//!
//! For end-to-end behaviour, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod materialize;
pub mod registry;
pub mod testing;
pub mod ui;

pub use error::{MyUiError, Result};
