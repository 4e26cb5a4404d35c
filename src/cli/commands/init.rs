//! Init command implementation.
//!
//! The `my-ui init` command writes `my-ui.config.json` for a project.

use crate::cli::args::InitArgs;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::Result;
use crate::testing::TestSetupStatus;
use crate::ui::{Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::setup_tests::install_missing_test_setup;
use super::workspace::Workspace;

/// The init command implementation.
pub struct InitCommand<'a> {
    workspace: &'a Workspace,
    args: InitArgs,
}

impl<'a> InitCommand<'a> {
    /// Create a new init command.
    pub fn new(workspace: &'a Workspace, args: InitArgs) -> Self {
        Self { workspace, args }
    }

    fn ask_dir(ui: &mut dyn UserInterface, key: &str, question: &str, default: &str) -> Result<String> {
        let prompt = Prompt {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: Some(default.to_string()),
        };
        Ok(ui.prompt(&prompt)?.as_string().trim().to_string())
    }

    /// Ask for each directory, offering `current` as the defaults.
    /// `None` when the user cleared the first answer.
    fn ask_config(ui: &mut dyn UserInterface, current: Config) -> Result<Option<Config>> {
        let defaults = current;

        let components = Self::ask_dir(ui, "components", "Components directory", &defaults.components)?;
        if components.is_empty() {
            return Ok(None);
        }
        let hooks = Self::ask_dir(ui, "hooks", "Hooks directory", &defaults.hooks)?;
        let utils = Self::ask_dir(ui, "utils", "Utilities directory", &defaults.utils)?;
        let tests = Self::ask_dir(ui, "tests", "Test config directory", &defaults.tests)?;

        let or_default = |answer: String, default: String| if answer.is_empty() { default } else { answer };
        Ok(Some(Config {
            components,
            hooks: or_default(hooks, defaults.hooks),
            utils: or_default(utils, defaults.utils),
            tests: or_default(tests, defaults.tests),
        }))
    }
}

impl Command for InitCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.workspace.project_root();

        // An existing config supplies the defaults.
        let current = Config::load(root);
        if Config::exists(root) {
            ui.message(&format!("Updating existing {}", CONFIG_FILE_NAME));
        }

        ui.show_header("my-ui setup");

        let config = if self.args.yes {
            current
        } else {
            match Self::ask_config(ui, current)? {
                Some(config) => config,
                None => {
                    ui.warning("Cancelled.");
                    return Ok(CommandResult::success());
                }
            }
        };

        config.save(root)?;
        ui.success(&format!("Configuration saved to {}", CONFIG_FILE_NAME));

        if self.args.yes {
            ui.show_hint("Run 'my-ui setup-tests' to configure the test environment");
            return Ok(CommandResult::success());
        }

        let default = ui.is_interactive();
        if ui.confirm("configure_tests", "Set up the test environment now?", default)? {
            let status = TestSetupStatus::detect(root, &config);
            if status.is_complete() {
                ui.success("Test environment is already configured");
            } else {
                let registry = self.workspace.load_registry()?;
                install_missing_test_setup(self.workspace, &registry, &config, &status, ui)?;
            }
        }

        Ok(CommandResult::success())
    }
}
