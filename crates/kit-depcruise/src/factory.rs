//! Rule factory: a known rule's defaults plus the logic to apply overrides

use kit_merge::Merge;

use crate::rule::{RuleDefinition, RuleOverride, RuleZone, Severity, clean_patterns};

/// Default zones and severity of a known rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleDefaults {
    pub severity: Severity,
    pub from: RuleZone,
    pub to: RuleZone,
}

impl RuleDefaults {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    pub fn with_from(mut self, zone: RuleZone) -> Self {
        self.from = zone;
        self
    }

    pub fn with_to(mut self, zone: RuleZone) -> Self {
        self.to = zone;
        self
    }
}

/// Identity of a known rule. Fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMeta {
    pub name: String,
    pub comment: String,
}

/// Produces fresh [`RuleDefinition`]s for one known rule.
///
/// The factory owns the rule's defaults and never hands out mutable access
/// to them; every [`generate`](Self::generate) call builds a new value.
///
/// # Example
///
/// ```
/// use kit_depcruise::{RuleDefaults, RuleFactory, RuleOverride, RuleZone, Severity};
///
/// let factory = RuleFactory::new(
///     "not-to-spec",
///     "Don't import from test files",
///     RuleDefaults::default().with_to(RuleZone::new().with_path(["spec$"])),
/// );
///
/// let rule = factory.generate(Some(
///     &RuleOverride::severity(Severity::Warn).with_to(RuleZone::new().with_path(["test$"])),
/// ));
///
/// assert_eq!(rule.severity, Severity::Warn);
/// assert_eq!(rule.to.path, vec!["spec$", "test$"]);
/// ```
#[derive(Debug, Clone)]
pub struct RuleFactory {
    meta: RuleMeta,
    defaults: RuleDefaults,
}

impl RuleFactory {
    pub fn new(name: impl Into<String>, comment: impl Into<String>, defaults: RuleDefaults) -> Self {
        Self {
            meta: RuleMeta {
                name: name.into(),
                comment: comment.into(),
            },
            defaults,
        }
    }

    pub fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn defaults(&self) -> &RuleDefaults {
        &self.defaults
    }

    /// Build the rule, applying `overrides` on top of the defaults.
    ///
    /// - severity: the override's if given, else the default
    /// - `path`/`pathNot`: union of default and override patterns, omitted
    ///   when empty
    /// - other zone keys: override wins per key, `null` values are skipped
    pub fn generate(&self, overrides: Option<&RuleOverride>) -> RuleDefinition {
        let severity = overrides
            .and_then(|o| o.severity)
            .unwrap_or(self.defaults.severity);

        RuleDefinition {
            name: self.meta.name.clone(),
            comment: Some(self.meta.comment.clone()),
            severity,
            from: merge_zone(&self.defaults.from, overrides.and_then(|o| o.from.as_ref())),
            to: merge_zone(&self.defaults.to, overrides.and_then(|o| o.to.as_ref())),
        }
    }
}

fn merge_zone(defaults: &RuleZone, overrides: Option<&RuleZone>) -> RuleZone {
    let mut zone = defaults.clone();
    if let Some(overrides) = overrides {
        zone.merge_from(overrides);
    }
    zone.path = clean_patterns(&zone.path);
    zone.path_not = clean_patterns(&zone.path_not);
    zone
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn dev_dep_factory() -> RuleFactory {
        RuleFactory::new(
            "not-to-dev-dep",
            "Don't use devDependencies in production code",
            RuleDefaults::default()
                .with_from(RuleZone::new().with_path(["^(src)"]))
                .with_to(RuleZone::new()
                    .with("dependencyTypes", json!(["npm-dev"]))
                    .with_path_not(["node_modules/@types/"])),
        )
    }

    #[test]
    fn test_generate_without_override_matches_defaults() {
        let rule = dev_dep_factory().generate(None);

        assert_eq!(rule.name, "not-to-dev-dep");
        assert_eq!(
            rule.comment.as_deref(),
            Some("Don't use devDependencies in production code")
        );
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.from.path, vec!["^(src)"]);
        assert_eq!(rule.to.path_not, vec!["node_modules/@types/"]);
        assert_eq!(rule.to.rest["dependencyTypes"], json!(["npm-dev"]));
    }

    #[test]
    fn test_generate_unions_patterns() {
        let overrides = RuleOverride::default()
            .with_from(RuleZone::new().with_path(["^(src)", "^(lib)"]))
            .with_to(RuleZone::new().with_path_not(["", "^test/"]));

        let rule = dev_dep_factory().generate(Some(&overrides));

        assert_eq!(rule.from.path, vec!["^(src)", "^(lib)"]);
        assert_eq!(rule.to.path_not, vec!["node_modules/@types/", "^test/"]);
    }

    #[test]
    fn test_generate_spreads_other_keys() {
        let overrides = RuleOverride::default().with_to(
            RuleZone::new()
                .with("dependencyTypes", json!(["npm-dev", "npm-optional"]))
                .with("dependencyTypesNot", json!(["type-only"]))
                .with("ignored", json!(null)),
        );

        let rule = dev_dep_factory().generate(Some(&overrides));

        // replaced as a whole, not unioned
        assert_eq!(rule.to.rest["dependencyTypes"], json!(["npm-dev", "npm-optional"]));
        assert_eq!(rule.to.rest["dependencyTypesNot"], json!(["type-only"]));
        assert!(!rule.to.rest.contains_key("ignored"));
    }

    #[test]
    fn test_empty_union_omits_key() {
        let factory = RuleFactory::new("r", "c", RuleDefaults::default());
        let rule = factory.generate(Some(&RuleOverride::default().with_from(RuleZone::new())));

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["from"], json!({}));
        assert_eq!(value["to"], json!({}));
    }

    #[test]
    fn test_generate_does_not_touch_defaults() {
        let factory = dev_dep_factory();
        let before = factory.defaults().clone();

        let mut rule = factory.generate(Some(
            &RuleOverride::default().with_from(RuleZone::new().with_path(["^extra"])),
        ));
        rule.from.path.push("^mutated".to_string());

        assert_eq!(factory.defaults(), &before);
        assert_eq!(factory.generate(None).from.path, vec!["^(src)"]);
    }
}
