//! Consumer project configuration.
//!
//! A project's `my-ui.config.json` records where each category of item is
//! copied to. It is written by `my-ui init` and read by every other
//! command; when absent, the defaults apply.
//!
//! # Example
//!
//! ```
//! use my_ui::config::Config;
//! use my_ui::registry::Category;
//!
//! let config = Config::default();
//! assert_eq!(config.target_dir(Category::Ui), "src/components");
//! ```

pub mod loader;
pub mod schema;

pub use loader::CONFIG_FILE_NAME;
pub use schema::Config;
