//! Add command implementation.
//!
//! The `my-ui add` command copies items and their dependencies into the
//! project.

use crate::cli::args::AddArgs;
use crate::error::Result;
use crate::materialize::Advisory;
use crate::registry::{plan_install, Registry, RegistryItem};
use crate::ui::theme::MyUiTheme;
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::install::install_items;
use super::setup_tests::offer_test_setup;
use super::workspace::Workspace;

/// The add command implementation.
pub struct AddCommand<'a> {
    workspace: &'a Workspace,
    args: AddArgs,
}

impl<'a> AddCommand<'a> {
    /// Create a new add command.
    pub fn new(workspace: &'a Workspace, args: AddArgs) -> Self {
        Self { workspace, args }
    }

    /// The items the user asked for, in request order.
    fn select<'r>(
        &self,
        registry: &'r Registry,
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<&'r RegistryItem>> {
        if self.args.all {
            return Ok(registry.installable_items());
        }

        let names = if self.args.items.is_empty() {
            self.pick(registry, ui)?
        } else {
            self.args.items.clone()
        };

        let mut selected: Vec<&RegistryItem> = Vec::new();
        for name in &names {
            match registry.find(name) {
                Some(item) if !selected.iter().any(|s| s.name == item.name) => selected.push(item),
                Some(_) => {}
                None => ui.warning(&Advisory::ItemNotFound { name: name.clone() }.to_string()),
            }
        }
        Ok(selected)
    }

    fn pick(&self, registry: &Registry, ui: &mut dyn UserInterface) -> Result<Vec<String>> {
        let options = registry
            .installable_items()
            .into_iter()
            .map(|item| PromptOption {
                label: format!("{} - {}", item.name, item.description),
                value: item.name.clone(),
            })
            .collect();

        let prompt = Prompt {
            key: "items".to_string(),
            question: "Select items to add (space to toggle, enter to confirm)".to_string(),
            prompt_type: PromptType::MultiSelect { options },
            default: None,
        };
        Ok(ui.prompt(&prompt)?.into_strings())
    }
}

impl Command for AddCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = self.workspace.load_registry()?;
        let config = self.workspace.config();

        let selected = self.select(&registry, ui)?;
        if selected.is_empty() {
            ui.warning("Nothing to add.");
            return Ok(CommandResult::success());
        }

        let plan = plan_install(&registry, &selected);

        let theme = MyUiTheme::new();
        ui.show_header("Will be added:");
        for planned in &plan {
            let label = if planned.requested {
                String::new()
            } else {
                format!(" {}", theme.dim.apply_to("(dependency)"))
            };
            ui.message(&format!("  • {}{}", planned.item.name, label));
        }
        for planned in plan.iter().filter(|p| p.item.is_deprecated()) {
            if let Some(note) = &planned.item.meta.deprecated {
                ui.warning(&format!("{} is deprecated: {}", planned.item.name, note));
            }
        }

        if !self.args.yes && !ui.confirm("proceed", "Continue?", true)? {
            ui.warning("Cancelled.");
            return Ok(CommandResult::success());
        }

        let items: Vec<&RegistryItem> = plan.iter().map(|p| p.item).collect();
        let has_tests = items.iter().any(|item| item.has_tests());

        ui.message("");
        let templates = self.workspace.templates();
        let materializer = self.workspace.materializer(&config, templates.as_ref());
        let summary = install_items(ui, &materializer, &items, self.args.overwrite)?;

        tracing::debug!("Add finished: {:?}", summary);
        ui.success(&format!(
            "Done! {} file(s) copied from {} item(s)",
            summary.copied, summary.items
        ));
        if summary.skipped > 0 && !self.args.overwrite {
            ui.show_hint("Use --overwrite to replace existing files");
        }

        if has_tests {
            offer_test_setup(self.workspace, &registry, &config, ui)?;
        }

        Ok(CommandResult::success())
    }
}
