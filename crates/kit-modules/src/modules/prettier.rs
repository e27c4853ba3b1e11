//! Prettier options (`.prettierrc.json`)

use kit_merge::{Merge, replace_on_merge};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::module::{ConfigModule, Dependency};

pub const FILENAME: &str = ".prettierrc.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    All,
    Es5,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    Always,
    Avoid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    Lf,
    Crlf,
    Cr,
    Auto,
}

replace_on_merge!(TrailingComma, ArrowParens, EndOfLine);

/// Prettier options. Doubles as the partial input: unset fields keep
/// their defaults, unknown options pass through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrettierOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_comma: Option<TrailingComma>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_spacing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_parens: Option<ArrowParens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_line: Option<EndOfLine>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Merge for PrettierOptions {
    fn merge_from(&mut self, other: &Self) {
        self.print_width.merge_from(&other.print_width);
        self.tab_width.merge_from(&other.tab_width);
        self.use_tabs.merge_from(&other.use_tabs);
        self.semi.merge_from(&other.semi);
        self.single_quote.merge_from(&other.single_quote);
        self.trailing_comma.merge_from(&other.trailing_comma);
        self.bracket_spacing.merge_from(&other.bracket_spacing);
        self.arrow_parens.merge_from(&other.arrow_parens);
        self.end_of_line.merge_from(&other.end_of_line);
        self.plugins.merge_from(&other.plugins);
        self.overrides.merge_from(&other.overrides);
        self.rest.merge_from(&other.rest);
    }
}

pub fn defaults() -> PrettierOptions {
    PrettierOptions {
        print_width: Some(100),
        tab_width: Some(2),
        use_tabs: Some(false),
        semi: Some(true),
        single_quote: Some(true),
        trailing_comma: Some(TrailingComma::All),
        bracket_spacing: Some(true),
        arrow_parens: Some(ArrowParens::Always),
        end_of_line: Some(EndOfLine::Lf),
        ..PrettierOptions::default()
    }
}

pub fn define(input: PrettierOptions) -> PrettierOptions {
    defaults().merged(&input)
}

pub fn prettier_module() -> ConfigModule<PrettierOptions, PrettierOptions> {
    ConfigModule::new("prettier", FILENAME, vec![Dependency::dev("prettier")], define)
}
