//! Forbidden-rule shapes as dependency-cruiser reads them

use kit_merge::Merge;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// How dependency-cruiser reports a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warn,
    Info,
    Ignore,
}

kit_merge::replace_on_merge!(Severity);

/// Match constraints for one side of a dependency (`from` or `to`).
///
/// `path` and `pathNot` are pattern sets: merging unions them instead of
/// replacing. Every other dependency-cruiser match key (`circular`,
/// `orphan`, `dependencyTypes`, ...) is carried in `rest` untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleZone {
    #[serde(
        default,
        deserialize_with = "deserialize_patterns",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub path: Vec<String>,

    #[serde(
        rename = "pathNot",
        default,
        deserialize_with = "deserialize_patterns",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub path_not: Vec<String>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RuleZone {
    /// An empty zone, matching anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add patterns to `path`.
    pub fn with_path<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add patterns to `pathNot`.
    pub fn with_path_not<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path_not.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Set any other match key, e.g. `circular` or `dependencyTypes`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.rest.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.path_not.is_empty() && self.rest.is_empty()
    }
}

/// Patterns union; any other key is taken whole from `other`, except
/// `null` values, which are skipped.
impl Merge for RuleZone {
    fn merge_from(&mut self, other: &Self) {
        self.path.merge_from(&other.path);
        self.path_not.merge_from(&other.path_not);
        for (key, value) in &other.rest {
            if !value.is_null() {
                self.rest.insert(key.clone(), value.clone());
            }
        }
    }
}

/// A complete entry of dependency-cruiser's `forbidden` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default)]
    pub from: RuleZone,

    #[serde(default)]
    pub to: RuleZone,
}

/// The alterable part of a known rule.
///
/// Name and comment belong to the rule itself and have no place here;
/// unknown keys in the input are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<RuleZone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<RuleZone>,
}

impl RuleOverride {
    pub fn severity(severity: Severity) -> Self {
        Self {
            severity: Some(severity),
            ..Self::default()
        }
    }

    pub fn with_from(mut self, zone: RuleZone) -> Self {
        self.from = Some(zone);
        self
    }

    pub fn with_to(mut self, zone: RuleZone) -> Self {
        self.to = Some(zone);
        self
    }
}

impl Merge for RuleOverride {
    fn merge_from(&mut self, other: &Self) {
        self.severity.merge_from(&other.severity);
        self.from.merge_from(&other.from);
        self.to.merge_from(&other.to);
    }
}

/// Per-rule entry of a partial forbidden-rule configuration.
///
/// `false` opts the rule out, `true` keeps its defaults, an object
/// overrides parts of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleToggle {
    Enabled(bool),
    Override(RuleOverride),
}

/// Layering two toggles for the same rule:
/// - two overrides merge
/// - `true` over an override keeps the override
/// - anything else takes the later toggle
impl Merge for RuleToggle {
    fn merge_from(&mut self, other: &Self) {
        match other {
            Self::Override(incoming) => match self {
                Self::Override(current) => current.merge_from(incoming),
                Self::Enabled(_) => *self = other.clone(),
            },
            Self::Enabled(true) if matches!(self, Self::Override(_)) => {}
            Self::Enabled(enabled) => *self = Self::Enabled(*enabled),
        }
    }
}

impl From<bool> for RuleToggle {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<RuleOverride> for RuleToggle {
    fn from(overrides: RuleOverride) -> Self {
        Self::Override(overrides)
    }
}

/// Partial forbidden-rule configuration keyed by rule name.
pub type RulesConfig = BTreeMap<String, RuleToggle>;

/// Read a [`RulesConfig`], treating `null` entries as absent.
pub(crate) fn deserialize_rules_config<'de, D>(deserializer: D) -> Result<RulesConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<BTreeMap<String, Option<RuleToggle>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, toggle)| toggle.map(|toggle| (name, toggle)))
        .collect())
}

/// Drop blank entries from a pattern list.
pub(crate) fn clean_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .filter(|pattern| !pattern.trim().is_empty())
        .cloned()
        .collect()
}

/// dependency-cruiser accepts either a single pattern or a list of them.
fn deserialize_patterns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<Option<String>>),
    }

    let patterns = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(pattern)) => vec![pattern],
        Some(OneOrMany::Many(patterns)) => patterns.into_iter().flatten().collect(),
    };
    Ok(clean_patterns(&patterns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_zone_accepts_single_pattern() {
        let zone: RuleZone = serde_json::from_value(json!({"path": "^src"})).unwrap();
        assert_eq!(zone.path, vec!["^src"]);
        assert!(zone.path_not.is_empty());
    }

    #[test]
    fn test_zone_discards_blank_and_null_patterns() {
        let zone: RuleZone =
            serde_json::from_value(json!({"pathNot": ["", "  ", null, "spec$"]})).unwrap();
        assert_eq!(zone.path_not, vec!["spec$"]);
    }

    #[test]
    fn test_zone_keeps_other_keys() {
        let zone: RuleZone =
            serde_json::from_value(json!({"circular": true, "dependencyTypes": ["npm-dev"]}))
                .unwrap();
        assert_eq!(zone.rest["circular"], json!(true));
        assert_eq!(zone.rest["dependencyTypes"], json!(["npm-dev"]));
    }

    #[test]
    fn test_zone_serializes_without_empty_pattern_lists() {
        let zone = RuleZone::new().with("circular", true);
        assert_eq!(serde_json::to_value(&zone).unwrap(), json!({"circular": true}));
    }

    #[test]
    fn test_toggle_parses_bool_and_override() {
        let config: RulesConfig = serde_json::from_value(json!({
            "no-orphans": false,
            "no-circular": {"severity": "warn"},
            "not-to-spec": true,
        }))
        .unwrap();

        assert_eq!(config["no-orphans"], RuleToggle::Enabled(false));
        assert_eq!(config["not-to-spec"], RuleToggle::Enabled(true));
        assert_eq!(
            config["no-circular"],
            RuleToggle::Override(RuleOverride::severity(Severity::Warn))
        );
    }

    #[test]
    fn test_rules_config_skips_null_entries() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize_rules_config")]
            forbidden: RulesConfig,
        }

        let wrapper: Wrapper = serde_json::from_value(json!({
            "forbidden": {"no-circular": null, "no-orphans": false}
        }))
        .unwrap();

        assert_eq!(
            wrapper.forbidden,
            RulesConfig::from([("no-orphans".to_string(), RuleToggle::Enabled(false))])
        );
    }

    #[test]
    fn test_zone_merge_unions_patterns_and_replaces_other_keys() {
        let mut zone = RuleZone::new()
            .with_path(["^(src)"])
            .with("dependencyTypes", json!(["npm-dev"]))
            .with("circular", true);
        zone.merge_from(
            &RuleZone::new()
                .with_path(["^(src)", "^(lib)"])
                .with("dependencyTypes", json!(["npm-optional"]))
                .with("circular", Value::Null),
        );

        assert_eq!(zone.path, vec!["^(src)", "^(lib)"]);
        assert_eq!(zone.rest["dependencyTypes"], json!(["npm-optional"]));
        assert_eq!(zone.rest["circular"], json!(true));
    }

    #[test]
    fn test_toggle_layering() {
        let warn = RuleToggle::from(RuleOverride::severity(Severity::Warn));
        let with_path =
            RuleToggle::from(RuleOverride::default().with_from(RuleZone::new().with_path(["^a"])));

        let mut toggle = warn.clone();
        toggle.merge_from(&with_path);
        assert_eq!(
            toggle,
            RuleToggle::from(
                RuleOverride::severity(Severity::Warn).with_from(RuleZone::new().with_path(["^a"]))
            )
        );

        // true keeps an earlier override
        toggle.merge_from(&RuleToggle::Enabled(true));
        assert!(matches!(toggle, RuleToggle::Override(_)));

        toggle.merge_from(&RuleToggle::Enabled(false));
        assert_eq!(toggle, RuleToggle::Enabled(false));

        // an override re-enables a disabled rule
        toggle.merge_from(&warn);
        assert_eq!(toggle, warn);
    }

    #[test]
    fn test_override_ignores_name_and_comment() {
        let overrides: RuleOverride =
            serde_json::from_value(json!({"name": "renamed", "comment": "nope", "severity": "info"}))
                .unwrap();
        assert_eq!(overrides, RuleOverride::severity(Severity::Info));
    }
}
