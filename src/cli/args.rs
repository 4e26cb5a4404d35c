//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::registry::Bucket;
use crate::testing::Framework;

/// my-ui - Copy UI components, hooks and utilities into your project.
#[derive(Debug, Parser)]
#[command(name = "my-ui")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Registry manifest to use instead of the built-in one
    #[arg(long, global = true, value_name = "FILE", env = "MY_UI_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Template directory to copy from instead of the built-in templates
    #[arg(long, global = true, value_name = "DIR", env = "MY_UI_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create my-ui.config.json for this project
    Init(InitArgs),

    /// List available items
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Add components, hooks or utilities to the project
    Add(AddArgs),

    /// Show details about an item
    Info(InfoArgs),

    /// Configure the test environment
    SetupTests(SetupTestsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Keep the current directories (or the defaults) without prompting
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only components
    #[arg(short, long)]
    pub components: bool,

    /// Only hooks
    #[arg(long)]
    pub hooks: bool,

    /// Only utilities
    #[arg(short, long)]
    pub utils: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Buckets selected by the filter flags; all installable ones when none is set.
    pub fn buckets(&self) -> Vec<Bucket> {
        let selected: Vec<Bucket> = [
            (self.components, Bucket::Components),
            (self.hooks, Bucket::Hooks),
            (self.utils, Bucket::Utils),
        ]
        .into_iter()
        .filter_map(|(on, bucket)| on.then_some(bucket))
        .collect();

        if selected.is_empty() {
            vec![Bucket::Components, Bucket::Hooks, Bucket::Utils]
        } else {
            selected
        }
    }
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Items to add (e.g. ui/button hooks/use-toggle)
    pub items: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Add every component, hook and utility
    #[arg(short, long, conflicts_with = "items")]
    pub all: bool,

    /// Replace files that already exist
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Item name (e.g. ui/modal)
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `setup-tests` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupTestsArgs {
    /// Test framework to configure
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
