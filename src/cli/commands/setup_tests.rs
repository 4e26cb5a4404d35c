//! Setup-tests command implementation.
//!
//! The `my-ui setup-tests` command installs test runner configuration.
//! [`offer_test_setup`] is the softer path used after `add` and `init`.

use crate::cli::args::SetupTestsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::registry::Registry;
use crate::testing::{install_hint, setup_items, Framework, TestSetupStatus};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::install::install_items;
use super::workspace::Workspace;

/// Ask which framework to configure.
pub fn choose_framework(ui: &mut dyn UserInterface) -> Result<Framework> {
    let options = Framework::ALL
        .iter()
        .map(|f| PromptOption {
            label: f.label().to_string(),
            value: f.as_str().to_string(),
        })
        .collect();

    let prompt = Prompt {
        key: "framework".to_string(),
        question: "Choose a test framework".to_string(),
        prompt_type: PromptType::Select { options },
        default: Some(Framework::Vitest.as_str().to_string()),
    };
    let answer = ui.prompt(&prompt)?.as_string();

    match Framework::ALL.iter().find(|f| f.as_str() == answer) {
        Some(framework) => Ok(*framework),
        None => {
            ui.warning(&format!("Unknown framework '{}', using vitest", answer));
            Ok(Framework::Vitest)
        }
    }
}

fn show_install_hints(ui: &mut dyn UserInterface, framework: Framework) {
    ui.message("");
    ui.message("Install the dev dependencies:");
    for (runner, command) in install_hint(framework) {
        ui.message(&format!("  {}:", runner));
        ui.show_hint(&command);
    }
}

/// Offer to complete the test environment after items with tests were added.
///
/// Does nothing when the project already has a complete setup. Existing
/// files are never replaced.
pub fn offer_test_setup(
    workspace: &Workspace,
    registry: &Registry,
    config: &Config,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let status = TestSetupStatus::detect(workspace.project_root(), config);
    if status.is_complete() {
        tracing::debug!("Test environment already complete");
        return Ok(());
    }

    ui.message("");
    ui.message("These items ship tests, but the test environment is not configured.");

    // Only opt in by default when someone can answer.
    let default = ui.is_interactive();
    if !ui.confirm("setup_tests", "Install the test configuration?", default)? {
        ui.show_hint("Run 'my-ui setup-tests' to configure it later");
        return Ok(());
    }

    install_missing_test_setup(workspace, registry, config, &status, ui)
}

/// Install the test files a project is missing, keeping the ones it has.
pub fn install_missing_test_setup(
    workspace: &Workspace,
    registry: &Registry,
    config: &Config,
    status: &TestSetupStatus,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let framework = choose_framework(ui)?;
    let items = setup_items(registry, framework, Some(status));

    let templates = workspace.templates();
    let materializer = workspace.materializer(config, templates.as_ref());
    install_items(ui, &materializer, &items, false)?;

    ui.success("Test environment configured");
    show_install_hints(ui, framework);
    Ok(())
}

/// The setup-tests command implementation.
pub struct SetupTestsCommand<'a> {
    workspace: &'a Workspace,
    args: SetupTestsArgs,
}

impl<'a> SetupTestsCommand<'a> {
    /// Create a new setup-tests command.
    pub fn new(workspace: &'a Workspace, args: SetupTestsArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for SetupTestsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = self.workspace.load_registry()?;
        let config = self.workspace.config();

        let status = TestSetupStatus::detect(self.workspace.project_root(), &config);
        if status.is_complete() {
            ui.success("Test environment is already configured");
            if !self.args.yes && !ui.confirm("reinstall", "Reinstall the configuration?", false)? {
                return Ok(CommandResult::success());
            }
        }

        let framework = match self.args.framework {
            Some(framework) => framework,
            None => choose_framework(ui)?,
        };

        ui.show_header("Installing test configuration");
        let items = setup_items(&registry, framework, None);
        let templates = self.workspace.templates();
        let materializer = self.workspace.materializer(&config, templates.as_ref());
        install_items(ui, &materializer, &items, true)?;

        ui.success("Test environment configured");
        show_install_hints(ui, framework);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::load_registry;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(temp: &TempDir, args: SetupTestsArgs, ui: &mut MockUI) -> CommandResult {
        let ws = Workspace::new(temp.path());
        SetupTestsCommand::new(&ws, args).execute(ui).unwrap()
    }

    #[test]
    fn installs_chosen_framework() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = SetupTestsArgs {
            framework: Some(Framework::Jest),
            yes: true,
        };

        let result = run(&temp, args, &mut ui);

        assert!(result.success);
        assert!(temp.path().join("jest.config.js").exists());
        assert!(temp.path().join("test-setup.ts").exists());
        assert!(temp.path().join("test-globals.d.ts").exists());
        assert!(temp.path().join("css-modules.d.ts").exists());
        assert!(!temp.path().join("vitest.config.ts").exists());
        assert!(ui.has_hint("npm install -D jest"));
    }

    #[test]
    fn prompts_for_framework_when_not_given() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("framework", "rstest");

        run(&temp, SetupTestsArgs::default(), &mut ui);

        assert!(ui.prompts_shown().contains(&"framework".to_string()));
        assert!(temp.path().join("rstest.config.ts").exists());
    }

    #[test]
    fn all_installs_every_runner() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = SetupTestsArgs {
            framework: Some(Framework::All),
            yes: true,
        };

        run(&temp, args, &mut ui);

        for file in ["vitest.config.ts", "jest.config.js", "rstest.config.ts"] {
            assert!(temp.path().join(file).exists(), "{} missing", file);
        }
    }

    #[test]
    fn overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test-setup.ts"), "stale").unwrap();
        let mut ui = MockUI::new();
        let args = SetupTestsArgs {
            framework: Some(Framework::Vitest),
            yes: true,
        };

        run(&temp, args, &mut ui);

        let content = fs::read_to_string(temp.path().join("test-setup.ts")).unwrap();
        assert_ne!(content, "stale");
    }

    #[test]
    fn complete_setup_declines_reinstall() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vitest.config.ts"), "mine").unwrap();
        fs::write(temp.path().join("test-setup.ts"), "mine").unwrap();
        fs::write(temp.path().join("test-globals.d.ts"), "mine").unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, SetupTestsArgs::default(), &mut ui);

        assert!(result.success);
        assert!(ui.has_success("already configured"));
        assert_eq!(ui.prompts_shown(), &["reinstall"]);
        assert_eq!(
            fs::read_to_string(temp.path().join("vitest.config.ts")).unwrap(),
            "mine"
        );
    }

    #[test]
    fn offer_skips_complete_setup() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("jest.config.ts"), "").unwrap();
        fs::write(temp.path().join("test-setup.ts"), "").unwrap();
        fs::write(temp.path().join("test-globals.d.ts"), "").unwrap();
        let ws = Workspace::new(temp.path());
        let registry = load_registry().unwrap();
        let mut ui = MockUI::new();

        offer_test_setup(&ws, &registry, &Config::default(), &mut ui).unwrap();

        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn offer_declined_leaves_project_alone() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());
        let registry = load_registry().unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("setup_tests", "no");

        offer_test_setup(&ws, &registry, &Config::default(), &mut ui).unwrap();

        assert!(ui.has_hint("my-ui setup-tests"));
        assert!(!temp.path().join("test-setup.ts").exists());
    }

    #[test]
    fn offer_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test-setup.ts"), "mine").unwrap();
        let ws = Workspace::new(temp.path());
        let registry = load_registry().unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("setup_tests", "yes");
        ui.set_prompt_response("framework", "vitest");

        offer_test_setup(&ws, &registry, &Config::default(), &mut ui).unwrap();

        assert!(temp.path().join("vitest.config.ts").exists());
        assert!(temp.path().join("test-globals.d.ts").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("test-setup.ts")).unwrap(),
            "mine"
        );
        assert!(!ui.has_message("test/setup:"));
    }

    #[test]
    fn unknown_framework_answer_falls_back() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("framework", "mocha");
        assert_eq!(choose_framework(&mut ui).unwrap(), Framework::Vitest);
        assert!(ui.has_warning("mocha"));
    }
}
