//! Scaffold planning
//!
//! Turns a kit manifest into the list of files and npm packages a new
//! repository needs. Nothing is written here; the plan is handed to
//! whatever owns the filesystem and the package manifest.

use kit_modules::ModuleRegistry;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::manifest::KitManifest;
use crate::{Error, Result};

/// One generated config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    /// Id of the module that produced the file
    pub module: String,
    /// Path relative to the project root
    pub path: String,
    pub contents: String,
}

/// Everything needed to scaffold a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Files in module registration order
    pub files: Vec<PlannedFile>,
    pub dependencies: BTreeSet<String>,
    pub dev_dependencies: BTreeSet<String>,
}

impl ScaffoldPlan {
    /// Look up a planned file by path.
    pub fn file(&self, path: &str) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Planned file paths, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Plans scaffolds from kit manifests against a module registry
pub struct Scaffolder {
    registry: ModuleRegistry,
}

impl Scaffolder {
    pub fn new(registry: ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Scaffolder over the built-in config modules.
    pub fn with_builtins() -> Self {
        Self::new(ModuleRegistry::with_builtins())
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Layer `manifests` in order, later ones on top, with this
    /// scaffolder's modules merging their own inputs.
    pub fn layer(&self, manifests: &[KitManifest]) -> Result<KitManifest> {
        let mut layered = KitManifest::empty();
        for manifest in manifests {
            layered.merge_with(manifest, &self.registry)?;
        }
        Ok(layered)
    }

    /// Build the scaffold plan for `manifest`.
    ///
    /// Enabled modules are rendered in registry order with their manifest
    /// input. Dependencies are collected across modules; a package needed
    /// both at runtime and in development is listed as a runtime
    /// dependency only.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownModule`] if the manifest has an entry for a module
    ///   the registry does not know
    /// - [`Error::Module`] if a module rejects its input
    ///
    /// # Example
    ///
    /// ```
    /// use kit_core::{KitManifest, Scaffolder};
    ///
    /// let manifest = KitManifest::parse("[modules]\neslint = false\n")?;
    /// let plan = Scaffolder::with_builtins().plan(&manifest)?;
    ///
    /// assert!(plan.file("eslint.config.mjs").is_none());
    /// assert!(plan.dev_dependencies.contains("typescript"));
    /// # Ok::<(), kit_core::Error>(())
    /// ```
    pub fn plan(&self, manifest: &KitManifest) -> Result<ScaffoldPlan> {
        if let Some(id) = manifest
            .modules
            .keys()
            .find(|id| !self.registry.contains(id))
        {
            return Err(Error::UnknownModule { id: id.clone() });
        }

        let mut plan = ScaffoldPlan {
            project: manifest.project.name.clone(),
            ..ScaffoldPlan::default()
        };

        for module in self.registry.iter() {
            if !manifest.is_enabled(module.id()) {
                tracing::debug!(module = module.id(), "Module disabled, skipping");
                continue;
            }

            let input = manifest.input(module.id());
            let contents = module.render(input.as_ref())?;
            tracing::debug!(
                module = module.id(),
                path = %module.meta().filename,
                bytes = contents.len(),
                "Planned config file"
            );

            plan.files.push(PlannedFile {
                module: module.id().to_string(),
                path: module.meta().filename.clone(),
                contents,
            });

            for dependency in &module.meta().dependencies {
                let target = if dependency.dev {
                    &mut plan.dev_dependencies
                } else {
                    &mut plan.dependencies
                };
                target.insert(dependency.name.clone());
            }
        }

        let runtime = plan.dependencies.clone();
        plan.dev_dependencies.retain(|name| !runtime.contains(name));

        tracing::info!(
            files = plan.files.len(),
            dependencies = plan.dependencies.len(),
            dev_dependencies = plan.dev_dependencies.len(),
            "Scaffold planned"
        );
        Ok(plan)
    }
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_modules::{ConfigModule, Dependency};

    #[test]
    fn test_unknown_module_is_rejected() {
        let manifest = KitManifest::parse("[modules]\nbiome = true\n").unwrap();
        let err = Scaffolder::with_builtins().plan(&manifest).unwrap_err();

        assert!(matches!(err, Error::UnknownModule { ref id } if id == "biome"));
        assert_eq!(err.to_string(), "Unknown module: biome");
    }

    #[test]
    fn test_runtime_dependency_wins_over_dev() {
        fn define(_: ()) -> bool {
            true
        }

        let mut registry = ModuleRegistry::new();
        registry.register(ConfigModule::new(
            "a",
            "a.json",
            vec![Dependency::dev("shared"), Dependency::dev("only-dev")],
            define,
        ));
        registry.register(ConfigModule::new(
            "b",
            "b.json",
            vec![Dependency::runtime("shared")],
            define,
        ));

        let plan = Scaffolder::new(registry).plan(&KitManifest::empty()).unwrap();

        assert_eq!(plan.paths(), vec!["a.json", "b.json"]);
        assert!(plan.dependencies.contains("shared"));
        assert!(!plan.dev_dependencies.contains("shared"));
        assert!(plan.dev_dependencies.contains("only-dev"));
    }

    #[test]
    fn test_layer_applies_manifests_in_order() {
        let scaffolder = Scaffolder::with_builtins();
        assert_eq!(scaffolder.layer(&[]).unwrap(), KitManifest::empty());

        let layered = scaffolder
            .layer(&[
                KitManifest::parse("[modules.eslint.rules]\neqeqeq = [\"error\", \"always\"]\n")
                    .unwrap(),
                KitManifest::parse("[modules.eslint.rules]\neqeqeq = \"off\"\n").unwrap(),
                KitManifest::parse("[modules]\ncommitlint = false\n").unwrap(),
            ])
            .unwrap();

        assert_eq!(
            layered.input("eslint"),
            Some(serde_json::json!({"rules": {"eqeqeq": "off"}}))
        );
        assert!(!layered.is_enabled("commitlint"));
    }

    #[test]
    fn test_all_disabled_gives_empty_plan() {
        let manifest = KitManifest::parse(
            "[modules]\ntsconfig = false\neslint = false\nprettier = false\ncommitlint = false\ndependency-cruiser = false\n",
        )
        .unwrap();

        let plan = Scaffolder::with_builtins().plan(&manifest).unwrap();

        assert!(plan.is_empty());
        assert!(plan.dependencies.is_empty());
        assert!(plan.dev_dependencies.is_empty());
    }
}
