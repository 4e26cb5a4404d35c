//! Copying an item's files into a project.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::registry::{is_contained_path, Category, RegistryItem};

use super::report::{Advisory, CopyReport, FileOutcome};
use super::source::TemplateSource;

/// Marker removed from test-config file names on install.
const EXAMPLE_MARKER: &str = ".example.";

/// Destination file name for a template file.
///
/// Test configs ship as `*.example.*` so they are inert inside the
/// template tree; installing one drops the marker.
pub fn destination_name(category: Category, file_name: &str) -> Cow<'_, str> {
    if category == Category::Test && file_name.contains(EXAMPLE_MARKER) {
        Cow::Owned(file_name.replacen(EXAMPLE_MARKER, ".", 1))
    } else {
        Cow::Borrowed(file_name)
    }
}

/// Copies registry items into a consumer project.
#[derive(Debug)]
pub struct Materializer<'a> {
    project_root: &'a Path,
    config: &'a Config,
    templates: &'a dyn TemplateSource,
}

impl<'a> Materializer<'a> {
    /// Create a materializer for a project.
    pub fn new(project_root: &'a Path, config: &'a Config, templates: &'a dyn TemplateSource) -> Self {
        Self {
            project_root,
            config,
            templates,
        }
    }

    /// Absolute target directory for a category.
    pub fn target_dir(&self, category: Category) -> PathBuf {
        self.project_root.join(self.config.target_dir(category))
    }

    /// Resolve where a declared file lands.
    ///
    /// Returns the path relative to the category's target directory (for
    /// display) and the absolute destination.
    pub fn destination(&self, item: &RegistryItem, file: &str) -> (String, PathBuf) {
        let (subdir, file_name) = file.rsplit_once('/').unwrap_or(("", file));
        let file_name = destination_name(item.category, file_name);

        let mut destination = self.target_dir(item.category);
        if subdir.is_empty() {
            destination.push(file_name.as_ref());
            (file_name.into_owned(), destination)
        } else {
            destination.push(subdir);
            destination.push(file_name.as_ref());
            (format!("{}/{}", subdir, file_name), destination)
        }
    }

    /// Copy every file of `item`.
    ///
    /// Missing templates and existing destinations (unless `overwrite`)
    /// are skipped with an advisory; the remaining files are still copied.
    /// Only genuine I/O failures return an error.
    pub fn copy_files(&self, item: &RegistryItem, overwrite: bool) -> Result<CopyReport> {
        let mut report = CopyReport::new(&item.name);

        for file in &item.files {
            let outcome = self.copy_file(item, file, overwrite)?;
            match &outcome {
                FileOutcome::Copied { destination, .. } => {
                    tracing::debug!("Copied {} -> {}", file, destination.display());
                }
                FileOutcome::Skipped(advisory) => {
                    tracing::debug!("{}: {}", item.name, advisory);
                }
            }
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn copy_file(&self, item: &RegistryItem, file: &str, overwrite: bool) -> Result<FileOutcome> {
        // Validated registries never get here; hand-built items might.
        if !is_contained_path(file) {
            return Ok(FileOutcome::Skipped(Advisory::UncontainedPath {
                item: item.name.clone(),
                file: file.to_string(),
            }));
        }

        let (display, destination) = self.destination(item, file);

        let Some(bytes) = self.templates.read(file)? else {
            return Ok(FileOutcome::Skipped(Advisory::TemplateMissing {
                item: item.name.clone(),
                file: file.to_string(),
            }));
        };

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        let exists = destination.exists();
        if exists && !overwrite {
            return Ok(FileOutcome::Skipped(Advisory::AlreadyExists {
                item: item.name.clone(),
                path: display,
            }));
        }

        fs::write(&destination, &bytes)?;

        Ok(FileOutcome::Copied {
            display,
            destination,
            replaced: exists,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::DirectoryTemplates;
    use crate::registry::ItemMeta;
    use tempfile::TempDir;

    struct Fixture {
        templates: TempDir,
        project: TempDir,
        config: Config,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                templates: TempDir::new().unwrap(),
                project: TempDir::new().unwrap(),
                config: Config::default(),
            }
        }

        fn template(&self, relative: &str, content: &str) {
            let path = self.templates.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn copy(&self, item: &RegistryItem, overwrite: bool) -> CopyReport {
            let source = DirectoryTemplates::new(self.templates.path());
            Materializer::new(self.project.path(), &self.config, &source)
                .copy_files(item, overwrite)
                .unwrap()
        }

        fn read(&self, relative: &str) -> String {
            fs::read_to_string(self.project.path().join(relative)).unwrap()
        }
    }

    fn item(name: &str, category: Category, files: &[&str]) -> RegistryItem {
        RegistryItem {
            name: name.to_string(),
            description: String::new(),
            category,
            files: files.iter().map(|s| s.to_string()).collect(),
            dependencies: vec![],
            meta: ItemMeta {
                since: "0.1.0".into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn destination_name_strips_example_for_tests_only() {
        assert_eq!(
            destination_name(Category::Test, "vitest.config.example.ts"),
            "vitest.config.ts"
        );
        assert_eq!(
            destination_name(Category::Ui, "button.example.tsx"),
            "button.example.tsx"
        );
        assert_eq!(destination_name(Category::Test, "test-setup.ts"), "test-setup.ts");
    }

    #[test]
    fn copies_into_category_directory_with_subdirs() {
        let fx = Fixture::new();
        fx.template("ui/card/card.tsx", "export const Card = 1\n");
        let card = item("ui/card", Category::Ui, &["ui/card/card.tsx"]);

        let report = fx.copy(&card, false);

        assert!(report.is_clean());
        assert_eq!(
            fx.read("src/components/ui/card/card.tsx"),
            "export const Card = 1\n"
        );
        match &report.outcomes[0] {
            FileOutcome::Copied {
                display, replaced, ..
            } => {
                assert_eq!(display, "ui/card/card.tsx");
                assert!(!replaced);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn categories_use_their_configured_directories() {
        let mut fx = Fixture::new();
        fx.config.hooks = "app/hooks".into();
        fx.config.utils = "app/lib".into();
        fx.template("hooks/use-toggle/use-toggle.ts", "hook");
        fx.template("lib/cn/cn.ts", "util");

        fx.copy(
            &item("hooks/use-toggle", Category::Hooks, &["hooks/use-toggle/use-toggle.ts"]),
            false,
        );
        fx.copy(&item("lib/cn", Category::Lib, &["lib/cn/cn.ts"]), false);

        assert_eq!(fx.read("app/hooks/hooks/use-toggle/use-toggle.ts"), "hook");
        assert_eq!(fx.read("app/lib/lib/cn/cn.ts"), "util");
    }

    #[test]
    fn existing_file_is_kept_without_overwrite() {
        let fx = Fixture::new();
        fx.template("lib/cn/cn.ts", "fresh");
        let target = fx.project.path().join("src/lib/lib/cn/cn.ts");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "consumer edits").unwrap();

        let report = fx.copy(&item("lib/cn", Category::Lib, &["lib/cn/cn.ts"]), false);

        assert_eq!(fs::read_to_string(&target).unwrap(), "consumer edits");
        assert_eq!(
            report.advisories().collect::<Vec<_>>(),
            vec![&Advisory::AlreadyExists {
                item: "lib/cn".into(),
                path: "lib/cn/cn.ts".into()
            }]
        );
    }

    #[test]
    fn existing_file_is_replaced_with_overwrite() {
        let fx = Fixture::new();
        fx.template("test-setup.ts", "fresh setup");
        let target = fx.project.path().join("test-setup.ts");
        fs::write(&target, "stale").unwrap();

        let report = fx.copy(&item("test/setup", Category::Test, &["test-setup.ts"]), true);

        assert_eq!(fs::read_to_string(&target).unwrap(), "fresh setup");
        assert!(matches!(
            report.outcomes[0],
            FileOutcome::Copied { replaced: true, .. }
        ));
    }

    #[test]
    fn test_config_loses_example_marker() {
        let fx = Fixture::new();
        fx.template("vitest.config.example.ts", "export default {}");

        fx.copy(
            &item("test/vitest-config", Category::Test, &["vitest.config.example.ts"]),
            false,
        );

        assert_eq!(fx.read("vitest.config.ts"), "export default {}");
        assert!(!fx.project.path().join("vitest.config.example.ts").exists());
    }

    #[test]
    fn non_test_file_keeps_example_marker() {
        let fx = Fixture::new();
        fx.template("ui/demo/demo.example.tsx", "demo");

        fx.copy(
            &item("ui/demo", Category::Ui, &["ui/demo/demo.example.tsx"]),
            false,
        );

        assert_eq!(fx.read("src/components/ui/demo/demo.example.tsx"), "demo");
    }

    #[test]
    fn missing_template_is_skipped_and_rest_copied() {
        let fx = Fixture::new();
        fx.template("ui/card/card.tsx", "card");
        let card = item(
            "ui/card",
            Category::Ui,
            &["ui/card/card.css", "ui/card/card.tsx"],
        );

        let report = fx.copy(&card, false);

        assert_eq!(report.copied_count(), 1);
        assert_eq!(
            report.advisories().next(),
            Some(&Advisory::TemplateMissing {
                item: "ui/card".into(),
                file: "ui/card/card.css".into()
            })
        );
        assert_eq!(fx.read("src/components/ui/card/card.tsx"), "card");
    }

    #[test]
    fn uncontained_file_is_never_touched() {
        let fx = Fixture::new();
        let outside = TempDir::new().unwrap();
        let victim = outside.path().join("victim.ts");
        fs::write(&victim, "untouched").unwrap();
        let victim_entry = victim.display().to_string();
        let rogue = item(
            "ui/rogue",
            Category::Ui,
            &[victim_entry.as_str(), "../escape.ts"],
        );

        let report = fx.copy(&rogue, true);

        assert_eq!(report.copied_count(), 0);
        assert!(report
            .advisories()
            .all(|a| matches!(a, Advisory::UncontainedPath { .. })));
        assert_eq!(fs::read_to_string(&victim).unwrap(), "untouched");
        assert!(!fx.project.path().join("src").exists());
    }

    #[test]
    fn copy_is_byte_for_byte() {
        let fx = Fixture::new();
        let bytes: &[u8] = b"const a = \"${name}\"\r\n\x00\xff";
        let path = fx.templates.path().join("lib/raw/raw.ts");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, bytes).unwrap();

        fx.copy(&item("lib/raw", Category::Lib, &["lib/raw/raw.ts"]), false);

        let copied = fs::read(fx.project.path().join("src/lib/lib/raw/raw.ts")).unwrap();
        assert_eq!(copied, bytes);
    }

    #[test]
    fn reinstall_is_idempotent() {
        let fx = Fixture::new();
        fx.template("lib/cn/cn.ts", "cn");
        let cn = item("lib/cn", Category::Lib, &["lib/cn/cn.ts"]);

        let first = fx.copy(&cn, false);
        let second = fx.copy(&cn, false);

        assert!(first.is_clean());
        assert_eq!(second.copied_count(), 0);
        assert_eq!(fx.read("src/lib/lib/cn/cn.ts"), "cn");
    }

    #[test]
    fn embedded_templates_materialize() {
        let project = TempDir::new().unwrap();
        let config = Config::default();
        let source = crate::materialize::EmbeddedTemplates;
        let registry = crate::registry::load_registry().unwrap();
        let globals = registry.find("test/globals").unwrap();

        let report = Materializer::new(project.path(), &config, &source)
            .copy_files(globals, false)
            .unwrap();

        assert!(report.is_clean());
        assert!(project.path().join("test-globals.d.ts").exists());
    }
}
