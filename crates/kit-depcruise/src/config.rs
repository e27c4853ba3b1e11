//! Full `.dependency-cruiser.cjs` configuration

use kit_merge::Merge;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::LazyLock;

use crate::registry::resolve_rules;
use crate::rule::{RuleDefinition, RulesConfig, deserialize_rules_config};

/// File the rendered configuration is written to.
pub const FILENAME: &str = ".dependency-cruiser.cjs";

const HEADER: &str = "/** @type {import('dependency-cruiser').IConfiguration} */\n";

static DEFAULT_OPTIONS: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "doNotFollow": {
            "path": ["node_modules"]
        },
        "tsPreCompilationDeps": true,
        "tsConfig": {
            "fileName": "tsconfig.json"
        },
        "enhancedResolveOptions": {
            "exportsFields": ["exports"],
            "conditionNames": ["import", "require", "node", "default", "types"],
            "mainFields": ["module", "main", "types", "typings"]
        },
        "reporterOptions": {
            "dot": {
                "collapsePattern": "node_modules/(?:@[^/]+/[^/]+|[^/]+)"
            },
            "archi": {
                "collapsePattern": "^(?:packages|src|lib(s?)|app(s?)|bin|test(s?)|spec(s?))/[^/]+|node_modules/(?:@[^/]+/[^/]+|[^/]+)"
            }
        }
    })
});

/// Partial input accepted by [`define`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepCruiseInput {
    /// Toggles and overrides for the known rules. `null` entries count as
    /// absent.
    #[serde(
        deserialize_with = "deserialize_rules_config",
        skip_serializing_if = "RulesConfig::is_empty"
    )]
    pub forbidden: RulesConfig,

    /// Custom rules appended after the known ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extended: Vec<RuleDefinition>,

    /// Cruise options merged over the defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl Merge for DepCruiseInput {
    fn merge_from(&mut self, other: &Self) {
        self.forbidden.merge_from(&other.forbidden);
        self.extended.merge_from(&other.extended);
        self.options.merge_from(&other.options);
    }
}

/// Resolved configuration, in dependency-cruiser's `IConfiguration` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepCruiseConfig {
    pub forbidden: Vec<RuleDefinition>,
    pub options: Value,
}

/// Default cruise options.
pub fn default_options() -> &'static Value {
    &DEFAULT_OPTIONS
}

/// Resolve the forbidden rules and cruise options.
pub fn define(input: DepCruiseInput) -> DepCruiseConfig {
    DepCruiseConfig {
        forbidden: resolve_rules(&input.forbidden, &input.extended),
        options: kit_merge::merge(default_options(), input.options.as_ref()),
    }
}

/// Render the configuration as CommonJS source.
pub fn render(config: &DepCruiseConfig) -> serde_json::Result<String> {
    let body = serde_json::to_string_pretty(config)?;
    Ok(format!("{HEADER}module.exports = {body};\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RuleRegistry;
    use crate::rule::Severity;

    #[test]
    fn test_define_with_empty_input_emits_all_known_rules() {
        let config = define(DepCruiseInput::default());

        let names: Vec<&str> = config.forbidden.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, RuleRegistry::builtin().names());
        assert_eq!(&config.options, default_options());
    }

    #[test]
    fn test_define_merges_options() {
        let config = define(DepCruiseInput {
            options: Some(json!({
                "doNotFollow": {"path": ["dist"]},
                "tsConfig": {"fileName": "tsconfig.build.json"},
                "exclude": {"path": "coverage"}
            })),
            ..DepCruiseInput::default()
        });

        assert_eq!(
            config.options["doNotFollow"]["path"],
            json!(["node_modules", "dist"])
        );
        assert_eq!(config.options["tsConfig"]["fileName"], "tsconfig.build.json");
        assert_eq!(config.options["exclude"]["path"], "coverage");
        assert_eq!(config.options["tsPreCompilationDeps"], true);
    }

    #[test]
    fn test_null_rule_entry_keeps_defaults() {
        let input: DepCruiseInput =
            serde_json::from_value(json!({"forbidden": {"no-circular": null}})).unwrap();
        assert!(input.forbidden.is_empty());

        let config = define(input);
        assert_eq!(config.forbidden[0].name, "no-circular");
        assert_eq!(config.forbidden[0].severity, Severity::Error);
    }

    #[test]
    fn test_layered_inputs_merge_rule_overrides() {
        let preset: DepCruiseInput = serde_json::from_value(json!({
            "forbidden": {
                "no-orphans": false,
                "not-to-dev-dep": {"from": {"path": "^(packages)"}}
            },
            "extended": [{"name": "no-lodash", "to": {"path": "^lodash$"}}]
        }))
        .unwrap();
        let repo: DepCruiseInput = serde_json::from_value(json!({
            "forbidden": {
                "not-to-dev-dep": {"severity": "warn", "from": {"path": "^(apps)"}}
            },
            "extended": [{"name": "no-lodash", "to": {"path": "^lodash$"}}]
        }))
        .unwrap();

        let config = define(preset.merged(&repo));
        let rule = config
            .forbidden
            .iter()
            .find(|r| r.name == "not-to-dev-dep")
            .unwrap();

        assert!(config.forbidden.iter().all(|r| r.name != "no-orphans"));
        assert_eq!(rule.severity, Severity::Warn);
        assert_eq!(rule.from.path, vec!["^(src)", "^(packages)", "^(apps)"]);
        assert_eq!(
            config.forbidden.iter().filter(|r| r.name == "no-lodash").count(),
            1
        );
    }

    #[test]
    fn test_extended_rules_drop_blank_patterns() {
        let input: DepCruiseInput = serde_json::from_value(json!({
            "extended": [{
                "name": "no-legacy",
                "severity": "info",
                "from": {"path": ["^src", ""]},
                "to": {"path": "^legacy", "pathNot": [null, "  "], "orphan": false}
            }]
        }))
        .unwrap();

        let config = define(input);
        let rule = config.forbidden.last().unwrap();

        assert_eq!(
            serde_json::to_value(rule).unwrap(),
            json!({
                "name": "no-legacy",
                "severity": "info",
                "from": {"path": ["^src"]},
                "to": {"path": ["^legacy"], "orphan": false}
            })
        );
    }

    #[test]
    fn test_render_is_commonjs_module() {
        let config = define(DepCruiseInput::default());
        let source = render(&config).unwrap();

        assert!(source.starts_with("/** @type {import('dependency-cruiser').IConfiguration} */\n"));
        assert!(source.contains("module.exports = {"));
        assert!(source.contains("\"name\": \"no-circular\""));
        assert!(source.ends_with("};\n"));
    }
}
