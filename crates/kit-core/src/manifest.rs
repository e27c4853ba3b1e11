//! Kit manifest parsing for `kit.toml` files
//!
//! A kit manifest names the project and carries one entry per config
//! module. Several manifests (a shared preset, then the repository's own)
//! can be merged into the one a scaffold is planned from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use kit_modules::ModuleRegistry;

use crate::Result;

/// Project settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Package name of the scaffolded project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Entry for one module in `[modules]`.
///
/// `false` opts the module out, `true` keeps its defaults, a table is the
/// module's partial input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleEntry {
    Enabled(bool),
    Input(Map<String, Value>),
}

/// Kit manifest parsed from a `kit.toml`
///
/// ```toml
/// [project]
/// name = "my-lib"
///
/// [modules]
/// commitlint = false
///
/// [modules.prettier]
/// semi = false
///
/// [modules.dependency-cruiser.forbidden]
/// no-orphans = false
/// ```
///
/// Modules without an entry are enabled with their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitManifest {
    #[serde(default)]
    pub project: ProjectSection,

    /// Module entries keyed by module id
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleEntry>,
}

impl KitManifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use kit_core::KitManifest;
    ///
    /// let manifest = KitManifest::parse(r#"
    /// [project]
    /// name = "my-lib"
    ///
    /// [modules]
    /// eslint = false
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.project.name.as_deref(), Some("my-lib"));
    /// assert!(!manifest.is_enabled("eslint"));
    /// assert!(manifest.is_enabled("prettier"));
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: KitManifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Create an empty manifest: every module enabled with defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the module with `id` takes part in the scaffold.
    pub fn is_enabled(&self, id: &str) -> bool {
        !matches!(self.modules.get(id), Some(ModuleEntry::Enabled(false)))
    }

    /// The module's partial input, if the manifest gives one.
    pub fn input(&self, id: &str) -> Option<Value> {
        match self.modules.get(id) {
            Some(ModuleEntry::Input(input)) => Some(Value::Object(input.clone())),
            _ => None,
        }
    }

    /// Merge another manifest into this one, layering module inputs with
    /// the built-in modules' merge rules.
    ///
    /// See [`merge_with`](Self::merge_with).
    pub fn merge(&mut self, other: &KitManifest) -> Result<()> {
        self.merge_with(other, &ModuleRegistry::with_builtins())
    }

    /// Merge another manifest into this one
    ///
    /// The `other` manifest takes precedence:
    /// - `project.name`: replaced when `other` sets it
    /// - `false` in `other` disables the module
    /// - `true` in `other` enables the module, keeping any input it had
    /// - a table in `other` is merged into this manifest's input, or
    ///   becomes the input if the module had none or was disabled
    ///
    /// Two tables for a module in `registry` are merged by the module
    /// itself, so entries it replaces whole (ESLint and commitlint rules)
    /// stay intact. Tables for other ids are deep-merged as plain data.
    ///
    /// # Errors
    ///
    /// [`Error::Module`](crate::Error::Module) if either table is not valid
    /// input for its module. Entries merged before the failing one are kept.
    pub fn merge_with(&mut self, other: &KitManifest, registry: &ModuleRegistry) -> Result<()> {
        if other.project.name.is_some() {
            self.project.name.clone_from(&other.project.name);
        }

        for (id, incoming) in &other.modules {
            let merged = match (self.modules.get(id), incoming) {
                (_, ModuleEntry::Enabled(false)) => ModuleEntry::Enabled(false),
                (Some(ModuleEntry::Input(input)), ModuleEntry::Enabled(true)) => {
                    ModuleEntry::Input(input.clone())
                }
                (_, ModuleEntry::Enabled(true)) => ModuleEntry::Enabled(true),
                (Some(ModuleEntry::Input(input)), ModuleEntry::Input(overlay)) => {
                    ModuleEntry::Input(merge_inputs(registry, id, input, overlay)?)
                }
                (_, ModuleEntry::Input(overlay)) => ModuleEntry::Input(overlay.clone()),
            };
            tracing::debug!(module = %id, entry = ?merged, "Merged module entry");
            self.modules.insert(id.clone(), merged);
        }
        Ok(())
    }
}

fn merge_inputs(
    registry: &ModuleRegistry,
    id: &str,
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
) -> Result<Map<String, Value>> {
    let Some(module) = registry.get(id) else {
        let mut merged = base.clone();
        kit_merge::merge_map_in_place(&mut merged, overlay);
        return Ok(merged);
    };

    let merged =
        module.merge_inputs(&Value::Object(base.clone()), &Value::Object(overlay.clone()))?;
    match merged {
        Value::Object(map) => Ok(map),
        // input types that are not tables carry nothing to keep
        _ => Ok(Map::new()),
    }
}
