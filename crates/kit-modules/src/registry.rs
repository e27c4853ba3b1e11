//! Config module registry
//!
//! Built-in module registrations live in one place, [`ModuleRegistry::with_builtins`];
//! listing and lookup derive from it.

use crate::module::AnyConfigModule;
use crate::modules::{
    commitlint_module, depcruise_module, eslint_module, prettier_module, tsconfig_module,
};

/// Number of built-in modules.
pub const BUILTIN_COUNT: usize = 5;

/// Ordered set of config modules, keyed by id.
///
/// Order is the scaffolding order used by orchestrators.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn AnyConfigModule>>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in modules.
    ///
    /// Registers, in order: `tsconfig`, `eslint`, `prettier`, `commitlint`,
    /// `dependency-cruiser`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(tsconfig_module());
        registry.register(eslint_module());
        registry.register(prettier_module());
        registry.register(commitlint_module());
        registry.register(depcruise_module());
        registry
    }

    /// Register a module.
    ///
    /// A module with an id that is already registered replaces the earlier
    /// one in place.
    pub fn register(&mut self, module: impl AnyConfigModule + 'static) {
        let module: Box<dyn AnyConfigModule> = Box::new(module);
        match self.modules.iter().position(|m| m.id() == module.id()) {
            Some(index) => {
                tracing::debug!(module = module.id(), "Replacing registered module");
                self.modules[index] = module;
            }
            None => self.modules.push(module),
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn AnyConfigModule> {
        self.modules
            .iter()
            .find(|m| m.id() == id)
            .map(|m| m.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Module ids in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn AnyConfigModule> {
        self.modules.iter().map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.ids())
            .finish()
    }
}
