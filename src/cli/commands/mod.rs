//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the shared
//! [`Workspace`], so registry and template overrides are resolved in one
//! place.

pub mod add;
pub mod completions;
pub mod dispatcher;
pub mod info;
pub mod init;
pub mod install;
pub mod list;
pub mod setup_tests;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use workspace::Workspace;
