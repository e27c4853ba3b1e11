//! TypeScript project configuration (`tsconfig.json`)

use kit_merge::Merge;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::module::{ConfigModule, Dependency};

pub const FILENAME: &str = "tsconfig.json";

/// Commonly set compiler options. Anything else goes through `rest`
/// and is merged with the generic engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_resolution: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lib: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es_module_interop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_lib_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_consistent_casing_in_file_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_modules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_json_module: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unchecked_indexed_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Merge for CompilerOptions {
    fn merge_from(&mut self, other: &Self) {
        self.target.merge_from(&other.target);
        self.module.merge_from(&other.module);
        self.module_resolution.merge_from(&other.module_resolution);
        self.lib.merge_from(&other.lib);
        self.types.merge_from(&other.types);
        self.strict.merge_from(&other.strict);
        self.es_module_interop.merge_from(&other.es_module_interop);
        self.skip_lib_check.merge_from(&other.skip_lib_check);
        self.force_consistent_casing_in_file_names
            .merge_from(&other.force_consistent_casing_in_file_names);
        self.isolated_modules.merge_from(&other.isolated_modules);
        self.resolve_json_module.merge_from(&other.resolve_json_module);
        self.no_unchecked_indexed_access
            .merge_from(&other.no_unchecked_indexed_access);
        self.declaration.merge_from(&other.declaration);
        self.declaration_map.merge_from(&other.declaration_map);
        self.source_map.merge_from(&other.source_map);
        self.composite.merge_from(&other.composite);
        self.out_dir.merge_from(&other.out_dir);
        self.root_dir.merge_from(&other.root_dir);
        self.paths.merge_from(&other.paths);
        self.rest.merge_from(&other.rest);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReference {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub compiler_options: CompilerOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<ProjectReference>,
}

impl Merge for TsConfig {
    fn merge_from(&mut self, other: &Self) {
        self.extends.merge_from(&other.extends);
        self.compiler_options.merge_from(&other.compiler_options);
        self.include.merge_from(&other.include);
        self.exclude.merge_from(&other.exclude);
        self.references.merge_from(&other.references);
    }
}

pub fn defaults() -> TsConfig {
    TsConfig {
        compiler_options: CompilerOptions {
            target: Some("ES2022".to_string()),
            module: Some("NodeNext".to_string()),
            module_resolution: Some("NodeNext".to_string()),
            lib: vec!["ES2022".to_string()],
            strict: Some(true),
            es_module_interop: Some(true),
            skip_lib_check: Some(true),
            force_consistent_casing_in_file_names: Some(true),
            isolated_modules: Some(true),
            resolve_json_module: Some(true),
            no_unchecked_indexed_access: Some(true),
            declaration: Some(true),
            declaration_map: Some(true),
            source_map: Some(true),
            out_dir: Some("dist".to_string()),
            root_dir: Some("src".to_string()),
            ..CompilerOptions::default()
        },
        include: vec!["src".to_string()],
        exclude: vec!["node_modules".to_string(), "dist".to_string()],
        ..TsConfig::default()
    }
}

pub fn define(input: TsConfig) -> TsConfig {
    defaults().merged(&input)
}

pub fn tsconfig_module() -> ConfigModule<TsConfig, TsConfig> {
    ConfigModule::new("tsconfig", FILENAME, vec![Dependency::dev("typescript")], define)
}
