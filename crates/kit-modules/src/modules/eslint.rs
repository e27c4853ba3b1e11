//! ESLint flat config (`eslint.config.mjs`)
//!
//! The flat config is code, not data: presets are imported objects and
//! spread arrays, so this module always renders through its template.

use kit_merge::{Merge, Replace};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::module::{ConfigModule, Dependency};
use crate::template::{inline_literal, nested_literal};

pub const FILENAME: &str = "eslint.config.mjs";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EslintOptions {
    /// Lint TypeScript through typescript-eslint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<bool>,
    /// Use the type-aware presets (needs a tsconfig)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_checked: Option<bool>,
    /// Files to lint beyond the defaults; also the scope of `rules`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
    /// `"error"`, `["warn", {...}]`, ... replaced whole on merge
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, Replace<Value>>,
}

impl Merge for EslintOptions {
    fn merge_from(&mut self, other: &Self) {
        self.typescript.merge_from(&other.typescript);
        self.type_checked.merge_from(&other.type_checked);
        self.files.merge_from(&other.files);
        self.ignores.merge_from(&other.ignores);
        self.rules.merge_from(&other.rules);
    }
}

pub fn defaults() -> EslintOptions {
    EslintOptions {
        typescript: Some(true),
        type_checked: Some(false),
        files: vec!["**/*.{js,mjs,cjs,ts,mts,cts}".to_string()],
        ignores: vec![
            "dist/".to_string(),
            "coverage/".to_string(),
            "node_modules/".to_string(),
        ],
        rules: BTreeMap::new(),
    }
}

pub fn define(input: EslintOptions) -> EslintOptions {
    defaults().merged(&input)
}

fn render(options: &EslintOptions) -> Result<String> {
    let typescript = options.typescript.unwrap_or(true);
    let type_checked = typescript && options.type_checked.unwrap_or(false);

    let mut entries = Vec::new();
    if !options.ignores.is_empty() {
        entries.push(format!("{{ ignores: {} }}", inline_literal(&options.ignores)?));
    }
    entries.push("eslint.configs.recommended".to_string());
    if typescript {
        let preset = if type_checked {
            "recommendedTypeChecked"
        } else {
            "recommended"
        };
        entries.push(format!("...tseslint.configs.{preset}"));
    }
    if type_checked {
        entries.push(
            [
                "{",
                "    languageOptions: {",
                "      parserOptions: {",
                "        projectService: true,",
                "        tsconfigRootDir: import.meta.dirname,",
                "      },",
                "    },",
                "  }",
            ]
            .join("\n"),
        );
    }
    if !options.rules.is_empty() {
        let mut block = String::from("{\n");
        if !options.files.is_empty() {
            block.push_str(&format!("    files: {},\n", inline_literal(&options.files)?));
        }
        block.push_str(&format!("    rules: {},\n", nested_literal(&options.rules, 4)?));
        block.push_str("  }");
        entries.push(block);
    } else if options.files != defaults().files && !options.files.is_empty() {
        // extra patterns still need linting without a rules block
        entries.push(format!("{{ files: {} }}", inline_literal(&options.files)?));
    }

    let mut out = String::from("// @ts-check\nimport eslint from \"@eslint/js\";\n");
    if typescript {
        out.push_str("import tseslint from \"typescript-eslint\";\n");
    }
    out.push('\n');
    let (open, close) = if typescript {
        ("export default tseslint.config(\n", ");\n")
    } else {
        ("export default [\n", "];\n")
    };
    out.push_str(open);
    for entry in &entries {
        out.push_str(&format!("  {entry},\n"));
    }
    out.push_str(close);
    Ok(out)
}

pub fn eslint_module() -> ConfigModule<EslintOptions, EslintOptions> {
    ConfigModule::new(
        "eslint",
        FILENAME,
        vec![
            Dependency::dev("eslint"),
            Dependency::dev("@eslint/js"),
            Dependency::dev("typescript-eslint"),
        ],
        define,
    )
    .with_template(render)
}
