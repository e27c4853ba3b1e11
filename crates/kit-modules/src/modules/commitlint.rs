//! commitlint configuration (`commitlint.config.cjs`)

use kit_merge::{Merge, Replace};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::module::{ConfigModule, Dependency};
use crate::template;

pub const FILENAME: &str = "commitlint.config.cjs";

/// commitlint `UserConfig`. Rule entries are `[level, applicable, value]`
/// tuples and are replaced whole on merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommitlintConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, Replace<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ignores: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

impl Merge for CommitlintConfig {
    fn merge_from(&mut self, other: &Self) {
        self.extends.merge_from(&other.extends);
        self.rules.merge_from(&other.rules);
        self.default_ignores.merge_from(&other.default_ignores);
        self.help_url.merge_from(&other.help_url);
    }
}

pub fn defaults() -> CommitlintConfig {
    CommitlintConfig {
        extends: vec!["@commitlint/config-conventional".to_string()],
        rules: BTreeMap::from([
            (
                "body-max-line-length".to_string(),
                Replace(json!([2, "always", 100])),
            ),
            (
                "header-max-length".to_string(),
                Replace(json!([2, "always", 100])),
            ),
        ]),
        ..CommitlintConfig::default()
    }
}

pub fn define(input: CommitlintConfig) -> CommitlintConfig {
    defaults().merged(&input)
}

fn render(config: &CommitlintConfig) -> Result<String> {
    template::commonjs(Some("import('@commitlint/types').UserConfig"), config)
}

pub fn commitlint_module() -> ConfigModule<CommitlintConfig, CommitlintConfig> {
    ConfigModule::new(
        "commitlint",
        FILENAME,
        vec![
            Dependency::dev("@commitlint/cli"),
            Dependency::dev("@commitlint/config-conventional"),
        ],
        define,
    )
    .with_template(render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_override_replaces_tuple() {
        let input: CommitlintConfig = serde_json::from_value(json!({
            "rules": {
                "header-max-length": [1, "always", 72],
                "scope-empty": [2, "never"]
            }
        }))
        .unwrap();

        let config = define(input);

        assert_eq!(config.rules["header-max-length"].0, json!([1, "always", 72]));
        assert_eq!(config.rules["body-max-line-length"].0, json!([2, "always", 100]));
        assert_eq!(config.rules["scope-empty"].0, json!([2, "never"]));
    }

    #[test]
    fn test_extends_is_unioned() {
        let config = define(CommitlintConfig {
            extends: vec![
                "@commitlint/config-conventional".to_string(),
                "@commitlint/config-pnpm-scopes".to_string(),
            ],
            ..CommitlintConfig::default()
        });

        assert_eq!(
            config.extends,
            vec!["@commitlint/config-conventional", "@commitlint/config-pnpm-scopes"]
        );
    }

    #[test]
    fn test_template_is_commonjs() {
        let source = commitlint_module()
            .get_template_string(CommitlintConfig::default())
            .unwrap();

        assert!(source.starts_with("/** @type {import('@commitlint/types').UserConfig} */\n"));
        assert!(source.contains("\"extends\": [\n    \"@commitlint/config-conventional\"\n  ]"));
        assert!(source.ends_with("};\n"));
    }
}
