//! Info command implementation.
//!
//! The `my-ui info` command shows one item's details.

use crate::cli::args::InfoArgs;
use crate::error::{MyUiError, Result};
use crate::materialize::Advisory;
use crate::registry::RegistryItem;
use crate::ui::theme::MyUiTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The info command implementation.
pub struct InfoCommand<'a> {
    workspace: &'a Workspace,
    args: InfoArgs,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command.
    pub fn new(workspace: &'a Workspace, args: InfoArgs) -> Self {
        Self { workspace, args }
    }

    fn show(&self, item: &RegistryItem, ui: &mut dyn UserInterface) {
        let theme = MyUiTheme::new();
        let label = |text: &str| theme.key.apply_to(text).to_string();

        ui.show_header(&item.name);
        ui.message(&format!("{}", theme.dim.apply_to(&item.description)));
        ui.message("");
        ui.message(&format!("{} {}", label("Category:"), item.category));
        ui.message(&format!("{} {}", label("Since:"), item.meta.since));
        if let Some(deprecated) = &item.meta.deprecated {
            ui.warning(&format!("Deprecated: {}", deprecated));
        }
        if let Some(breaking) = &item.meta.breaking {
            ui.message(&format!(
                "{} {}",
                theme.notice.apply_to("Breaking:"),
                breaking
            ));
        }

        ui.message(&label("Files:"));
        for file in &item.files {
            ui.message(&format!("  • {}", file));
        }

        if !item.dependencies.is_empty() {
            ui.message(&label("Dependencies:"));
            for dep in &item.dependencies {
                ui.message(&format!("  • {}", dep));
            }
        }
    }
}

impl Command for InfoCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = self.workspace.load_registry()?;

        let Some(item) = registry.find(&self.args.name) else {
            ui.warning(
                &Advisory::ItemNotFound {
                    name: self.args.name.clone(),
                }
                .to_string(),
            );
            ui.show_hint("Run 'my-ui list' to see available items");
            return Ok(CommandResult::success());
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(item).map_err(|e| MyUiError::Other(e.into()))?;
            ui.message(&json);
        } else {
            self.show(item, ui);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(name: &str, json: bool) -> MockUI {
        console::set_colors_enabled(false);
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());
        let mut ui = MockUI::new();
        let args = InfoArgs {
            name: name.to_string(),
            json,
        };
        let result = InfoCommand::new(&ws, args).execute(&mut ui).unwrap();
        assert_eq!(result, CommandResult::success());
        ui
    }

    #[test]
    fn shows_item_details() {
        let ui = run("ui/modal", false);

        assert_eq!(ui.headers(), &["ui/modal"]);
        assert!(ui.has_message("Category: ui"));
        assert!(ui.has_message("Since:"));
        assert!(ui.has_message("Breaking:"));
        assert!(ui.has_message("• ui/modal/modal.tsx"));
        assert!(ui.has_message("• hooks/use-click-outside"));
    }

    #[test]
    fn deprecated_item_warns() {
        let ui = run("lib/helpers", false);
        assert!(ui.has_warning("Deprecated:"));
    }

    #[test]
    fn item_without_dependencies_omits_section() {
        let ui = run("ui/card", false);
        assert!(!ui.has_message("Dependencies:"));
    }

    #[test]
    fn test_configs_are_found() {
        let ui = run("test/vitest-config", false);
        assert!(ui.has_message("Category: test"));
    }

    #[test]
    fn unknown_item_warns_and_succeeds() {
        let ui = run("ui/nope", false);
        assert!(ui.has_warning("Item not found: ui/nope"));
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn json_output() {
        let ui = run("ui/button", true);
        let doc: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(doc["name"], "ui/button");
        assert_eq!(doc["category"], "ui");
        assert_eq!(doc["dependencies"][0], "lib/cn");
    }
}
