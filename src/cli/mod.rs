//! Command-line interface for my-ui.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, Cli, Commands, CompletionsArgs, InfoArgs, InitArgs, ListArgs, SetupTestsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, Workspace};
