//! Paths and sources shared by every command.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::materialize::{DirectoryTemplates, EmbeddedTemplates, Materializer, TemplateSource};
use crate::registry::{self, Registry};

/// Where a command reads its registry and templates from, and where it writes.
#[derive(Debug, Clone)]
pub struct Workspace {
    project_root: PathBuf,
    registry_path: Option<PathBuf>,
    templates_dir: Option<PathBuf>,
}

impl Workspace {
    /// A workspace using the built-in registry and templates.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            registry_path: None,
            templates_dir: None,
        }
    }

    /// Use a registry manifest on disk.
    pub fn with_registry(mut self, path: Option<PathBuf>) -> Self {
        self.registry_path = path;
        self
    }

    /// Use a template directory on disk.
    pub fn with_templates(mut self, dir: Option<PathBuf>) -> Self {
        self.templates_dir = dir;
        self
    }

    /// The consumer project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the registry.
    pub fn load_registry(&self) -> Result<Registry> {
        let registry = match &self.registry_path {
            Some(path) => Registry::from_path(path)?,
            None => registry::load_registry()?,
        };
        tracing::debug!(
            "Loaded registry {} v{} ({} items)",
            registry.name,
            registry.version,
            registry.len()
        );
        Ok(registry)
    }

    /// The template tree to copy from.
    ///
    /// An explicit `--templates` wins; otherwise a manifest given with
    /// `--registry` reads templates from its own directory.
    pub fn templates(&self) -> Box<dyn TemplateSource> {
        let dir = self.templates_dir.clone().or_else(|| {
            self.registry_path
                .as_ref()
                .map(|p| match p.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                })
        });
        match dir {
            Some(dir) => Box::new(DirectoryTemplates::new(dir)),
            None => Box::new(EmbeddedTemplates),
        }
    }

    /// The project config, or defaults.
    pub fn config(&self) -> Config {
        Config::load(&self.project_root)
    }

    /// A materializer writing into this workspace.
    pub fn materializer<'a>(
        &'a self,
        config: &'a Config,
        templates: &'a dyn TemplateSource,
    ) -> Materializer<'a> {
        Materializer::new(&self.project_root, config, templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_sources_by_default() {
        let ws = Workspace::new("/tmp/app");
        assert_eq!(ws.templates().describe(), "built-in templates");
        assert!(ws.load_registry().unwrap().contains("ui/button"));
    }

    #[test]
    fn registry_dir_is_template_root() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("registry.json");
        fs::write(
            &manifest,
            r#"{"name":"t","version":"1","items":{"test-configs":[],"components":[],"hooks":[],"utils":[]}}"#,
        )
        .unwrap();

        let ws = Workspace::new(temp.path()).with_registry(Some(manifest));
        assert_eq!(
            ws.templates().describe(),
            temp.path().display().to_string()
        );
        assert!(ws.load_registry().unwrap().is_empty());
    }

    #[test]
    fn explicit_templates_win() {
        let ws = Workspace::new("/tmp/app")
            .with_registry(Some(PathBuf::from("/r/registry.json")))
            .with_templates(Some(PathBuf::from("/t")));
        assert_eq!(ws.templates().describe(), "/t");
    }

    #[test]
    fn invalid_registry_is_fatal() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("registry.json");
        fs::write(&manifest, r#"{"name":"t"}"#).unwrap();

        let ws = Workspace::new(temp.path()).with_registry(Some(manifest));
        assert!(matches!(
            ws.load_registry(),
            Err(crate::error::MyUiError::Manifest(_))
        ));
    }
}
