//! Known-rule registry and the forbidden-rule resolver

use std::sync::LazyLock;

use crate::builtin::recommended_rules;
use crate::factory::RuleFactory;
use crate::rule::{RuleDefinition, RuleToggle, RulesConfig};

static BUILTIN: LazyLock<RuleRegistry> = LazyLock::new(|| RuleRegistry::new(recommended_rules()));

/// Ordered, closed set of known rules.
///
/// Registration order is resolution order, so resolved rule lists are
/// stable across calls.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    factories: Vec<RuleFactory>,
}

impl RuleRegistry {
    /// Create a registry from rule factories.
    ///
    /// Rule names must be unique; a repeated name is dropped and the first
    /// registration kept.
    pub fn new(factories: Vec<RuleFactory>) -> Self {
        let mut registry = Self {
            factories: Vec::with_capacity(factories.len()),
        };
        for factory in factories {
            if registry.contains(factory.name()) {
                tracing::warn!(rule = factory.name(), "Duplicate rule registration ignored");
                continue;
            }
            registry.factories.push(factory);
        }
        registry
    }

    /// The built-in registry of dependency-cruiser's recommended rules.
    ///
    /// Built once on first use and shared read-only afterwards.
    pub fn builtin() -> &'static RuleRegistry {
        &BUILTIN
    }

    pub fn get(&self, name: &str) -> Option<&RuleFactory> {
        self.factories.iter().find(|f| f.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Rule names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.iter().map(RuleFactory::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleFactory> {
        self.factories.iter()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Resolve a partial rule configuration into a full forbidden list.
    ///
    /// For every known rule, in registration order:
    /// - `false` drops the rule
    /// - `true` or no entry emits the rule's defaults
    /// - an override object is merged onto the defaults
    ///
    /// `extended` rules follow verbatim, in input order. Keys of `config`
    /// that name no known rule are ignored.
    pub fn resolve(&self, config: &RulesConfig, extended: &[RuleDefinition]) -> Vec<RuleDefinition> {
        for name in config.keys().filter(|name| !self.contains(name)) {
            tracing::warn!(rule = %name, "Ignoring configuration for unknown rule");
        }

        let mut rules = Vec::with_capacity(self.factories.len() + extended.len());
        for factory in &self.factories {
            match config.get(factory.name()) {
                Some(RuleToggle::Enabled(false)) => {
                    tracing::debug!(rule = factory.name(), "Rule disabled");
                }
                Some(RuleToggle::Enabled(true)) | None => rules.push(factory.generate(None)),
                Some(RuleToggle::Override(overrides)) => {
                    tracing::debug!(rule = factory.name(), "Applying rule override");
                    rules.push(factory.generate(Some(overrides)));
                }
            }
        }
        rules.extend(extended.iter().cloned());
        rules
    }
}

/// Resolve against the built-in registry.
///
/// See [`RuleRegistry::resolve`].
pub fn resolve_rules(config: &RulesConfig, extended: &[RuleDefinition]) -> Vec<RuleDefinition> {
    RuleRegistry::builtin().resolve(config, extended)
}
