//! Test environment setup for consumer projects.
//!
//! Items that ship `*.test.*` files need a test runner configured in the
//! consumer project. This module detects what is already there and picks
//! the `test/*` registry items needed to complete it.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

use crate::config::Config;
use crate::registry::{Registry, RegistryItem};

/// Test runner to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Framework {
    /// Vitest
    Vitest,
    /// Jest
    Jest,
    /// Rstest
    Rstest,
    /// All three runners
    All,
}

impl Framework {
    /// Every choice, in prompt order.
    pub const ALL: [Framework; 4] = [
        Framework::Vitest,
        Framework::Jest,
        Framework::Rstest,
        Framework::All,
    ];

    /// The concrete runners this choice covers.
    pub fn runners(&self) -> &'static [Framework] {
        match self {
            Framework::Vitest => &[Framework::Vitest],
            Framework::Jest => &[Framework::Jest],
            Framework::Rstest => &[Framework::Rstest],
            Framework::All => &[Framework::Vitest, Framework::Jest, Framework::Rstest],
        }
    }

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Vitest => "vitest",
            Framework::Jest => "jest",
            Framework::Rstest => "rstest",
            Framework::All => "all",
        }
    }

    /// Label shown in the framework picker.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Vitest => "Vitest (recommended), fast and modern",
            Framework::Jest => "Jest, mature and reliable",
            Framework::Rstest => "Rstest, from the Rspack team",
            Framework::All => "All three",
        }
    }

    /// Registry item holding this runner's config.
    fn config_item(&self) -> String {
        format!("test/{}-config", self.as_str())
    }

    fn display_name(&self) -> &'static str {
        match self {
            Framework::Vitest => "Vitest",
            Framework::Jest => "Jest",
            Framework::Rstest => "Rstest",
            Framework::All => "All",
        }
    }

    fn dev_dependencies(&self) -> &'static str {
        match self {
            Framework::Vitest => "vitest @vitejs/plugin-react @testing-library/react @testing-library/jest-dom @testing-library/user-event jsdom",
            Framework::Jest => "jest @types/jest @testing-library/react @testing-library/jest-dom @testing-library/user-event jest-environment-jsdom ts-jest",
            Framework::Rstest => "@rstest/core @vitejs/plugin-react @testing-library/react @testing-library/jest-dom @testing-library/user-event jsdom",
            Framework::All => "",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which test files a project already has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestSetupStatus {
    pub has_vitest: bool,
    pub has_jest: bool,
    pub has_rstest: bool,
    pub has_setup: bool,
    pub has_globals: bool,
}

impl TestSetupStatus {
    /// Inspect the configured tests directory of a project.
    pub fn detect(project_root: &Path, config: &Config) -> Self {
        let dir = project_root.join(&config.tests);
        let any = |stem: &str| {
            ["ts", "js"]
                .iter()
                .any(|ext| dir.join(format!("{}.{}", stem, ext)).is_file())
        };

        let status = Self {
            has_vitest: any("vitest.config"),
            has_jest: any("jest.config"),
            has_rstest: any("rstest.config"),
            has_setup: any("test-setup"),
            has_globals: dir.join("test-globals.d.ts").is_file(),
        };
        tracing::debug!("Test setup in {}: {:?}", dir.display(), status);
        status
    }

    /// Whether any runner config is present.
    pub fn has_any_config(&self) -> bool {
        self.has_vitest || self.has_jest || self.has_rstest
    }

    /// Whether a runner config, the setup file and the globals are all present.
    pub fn is_complete(&self) -> bool {
        self.has_any_config() && self.has_setup && self.has_globals
    }

    fn has_runner(&self, framework: Framework) -> bool {
        match framework {
            Framework::Vitest => self.has_vitest,
            Framework::Jest => self.has_jest,
            Framework::Rstest => self.has_rstest,
            Framework::All => self.has_vitest && self.has_jest && self.has_rstest,
        }
    }
}

/// Pick the `test/*` items to install for a framework.
///
/// With `skip_present`, items whose files the project already has are left
/// out. The CSS module declarations are always included. Names missing
/// from the registry are skipped.
pub fn setup_items<'r>(
    registry: &'r Registry,
    framework: Framework,
    skip_present: Option<&TestSetupStatus>,
) -> Vec<&'r RegistryItem> {
    let mut names = Vec::new();

    if !skip_present.is_some_and(|s| s.has_setup) {
        names.push("test/setup".to_string());
    }
    if !skip_present.is_some_and(|s| s.has_globals) {
        names.push("test/globals".to_string());
    }
    names.push("test/css-modules".to_string());

    for runner in framework.runners() {
        // An explicit single-runner choice is honoured even if present.
        let skip = framework == Framework::All && skip_present.is_some_and(|s| s.has_runner(*runner));
        if !skip {
            names.push(runner.config_item());
        }
    }

    names
        .iter()
        .filter_map(|name| {
            let item = registry.find(name);
            if item.is_none() {
                tracing::debug!("Registry has no {}, skipping", name);
            }
            item
        })
        .collect()
}

/// Dev-dependency install commands to print after setup, as
/// `(runner, command)` pairs.
pub fn install_hint(framework: Framework) -> Vec<(&'static str, String)> {
    framework
        .runners()
        .iter()
        .map(|runner| {
            (
                runner.display_name(),
                format!("npm install -D {}", runner.dev_dependencies()),
            )
        })
        .collect()
}
