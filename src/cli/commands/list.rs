//! List command implementation.
//!
//! The `my-ui list` command lists the registry's installable items.

use serde_json::{json, Map, Value};

use crate::cli::args::ListArgs;
use crate::error::{MyUiError, Result};
use crate::registry::{Bucket, Registry};
use crate::ui::theme::MyUiTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The list command implementation.
pub struct ListCommand<'a> {
    workspace: &'a Workspace,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(workspace: &'a Workspace, args: ListArgs) -> Self {
        Self { workspace, args }
    }

    fn heading(bucket: Bucket) -> &'static str {
        match bucket {
            Bucket::TestConfigs => "Test configs:",
            Bucket::Components => "Components:",
            Bucket::Hooks => "Hooks:",
            Bucket::Utils => "Utilities:",
        }
    }

    fn to_json(&self, registry: &Registry) -> Result<String> {
        let mut items = Map::new();
        for bucket in self.args.buckets() {
            let listed = serde_json::to_value(registry.bucket(bucket))
                .map_err(|e| MyUiError::Other(e.into()))?;
            items.insert(bucket.key().to_string(), listed);
        }
        let doc = json!({
            "name": registry.name,
            "version": registry.version,
            "items": Value::Object(items),
        });
        serde_json::to_string_pretty(&doc).map_err(|e| MyUiError::Other(e.into()))
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = self.workspace.load_registry()?;

        if self.args.json {
            ui.message(&self.to_json(&registry)?);
            return Ok(CommandResult::success());
        }

        let theme = MyUiTheme::new();
        ui.show_header(&format!("{} v{}", registry.name, registry.version));

        for bucket in self.args.buckets() {
            ui.message(&format!("{}", theme.key.apply_to(Self::heading(bucket))));
            for item in registry.bucket(bucket) {
                let mut line = format!("  {}", theme.format_item(&item.name, &item.description));
                if item.is_deprecated() {
                    line.push_str(&format!(" {}", theme.notice.apply_to("(deprecated)")));
                }
                ui.message(&line);
            }
            ui.message("");
        }

        ui.show_hint("Add items with: my-ui add <name>");
        Ok(CommandResult::success())
    }
}
