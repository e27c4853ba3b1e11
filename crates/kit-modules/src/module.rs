//! Config module factory
//!
//! A config module pairs a `define` function (partial input to resolved
//! config) with the metadata an orchestrator needs to place it in a
//! project: target filename and the npm packages the config relies on.

use kit_merge::Merge;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// An npm package a config needs at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// Belongs in `devDependencies`
    #[serde(default)]
    pub dev: bool,
}

impl Dependency {
    pub fn runtime(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dev: false,
        }
    }

    pub fn dev(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dev: true,
        }
    }
}

/// Declarative description of a module's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMeta {
    /// Path of the generated file, relative to the project root
    pub filename: String,
    pub dependencies: Vec<Dependency>,
}

/// Resolves a partial input into a full configuration.
pub type DefineFn<I, O> = fn(I) -> O;

/// Renders a resolved configuration as source text.
pub type TemplateFn<O> = fn(&O) -> Result<String>;

/// A config module with a typed input `I` and resolved output `O`.
///
/// # Example
///
/// ```
/// use kit_modules::{ConfigModule, Dependency};
///
/// fn define(width: u32) -> u32 {
///     width.max(80)
/// }
///
/// let module = ConfigModule::new("width", ".width", vec![Dependency::dev("width")], define)
///     .with_template(|w| Ok(format!("export default {w};\n")));
///
/// assert_eq!(module.define(40), 80);
/// assert_eq!(module.meta().filename, ".width");
/// assert_eq!(module.get_template_string(120).unwrap(), "export default 120;\n");
/// ```
pub struct ConfigModule<I, O> {
    id: &'static str,
    meta: ModuleMeta,
    define: DefineFn<I, O>,
    template: Option<TemplateFn<O>>,
}

impl<I, O> ConfigModule<I, O> {
    pub fn new(
        id: &'static str,
        filename: impl Into<String>,
        dependencies: Vec<Dependency>,
        define: DefineFn<I, O>,
    ) -> Self {
        Self {
            id,
            meta: ModuleMeta {
                filename: filename.into(),
                dependencies,
            },
            define,
            template: None,
        }
    }

    /// Render this module's file as source text instead of JSON data.
    pub fn with_template(mut self, template: TemplateFn<O>) -> Self {
        self.template = Some(template);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn meta(&self) -> &ModuleMeta {
        &self.meta
    }

    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }

    pub fn define(&self, input: I) -> O {
        (self.define)(input)
    }

    /// Resolve `input` and render it through the module's template.
    ///
    /// Fails with [`Error::NoTemplate`] for modules that are written as
    /// plain data.
    pub fn get_template_string(&self, input: I) -> Result<String> {
        let template = self.template.ok_or_else(|| Error::NoTemplate {
            module: self.id.to_string(),
        })?;
        template(&self.define(input))
    }
}

impl<I, O> std::fmt::Debug for ConfigModule<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigModule")
            .field("id", &self.id)
            .field("meta", &self.meta)
            .field("has_template", &self.template.is_some())
            .finish()
    }
}

/// Type-erased view of a [`ConfigModule`], with JSON in and out.
///
/// Lets modules with different input and output types share a registry.
pub trait AnyConfigModule: Send + Sync {
    fn id(&self) -> &str;

    fn meta(&self) -> &ModuleMeta;

    fn has_template(&self) -> bool;

    /// Resolve a JSON partial input into the module's JSON output.
    ///
    /// `None` and `null` mean "all defaults".
    fn define_value(&self, input: Option<&Value>) -> Result<Value>;

    /// Layer two partial inputs, `overlay` on top of `base`.
    ///
    /// Both sides are read as the module's typed input and merged with its
    /// [`Merge`] rules, so entries the module replaces whole (rule tuples)
    /// are not unioned.
    fn merge_inputs(&self, base: &Value, overlay: &Value) -> Result<Value>;

    /// Resolve and render the module's file contents.
    ///
    /// Template modules produce source text, the others pretty JSON with a
    /// trailing newline.
    fn render(&self, input: Option<&Value>) -> Result<String>;
}

impl<I, O> ConfigModule<I, O>
where
    I: DeserializeOwned + Default,
{
    fn parse_input(&self, input: Option<&Value>) -> Result<I> {
        match input {
            None | Some(Value::Null) => Ok(I::default()),
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|source| Error::InvalidInput {
                    module: self.id.to_string(),
                    source,
                })
            }
        }
    }
}

impl<I, O> AnyConfigModule for ConfigModule<I, O>
where
    I: DeserializeOwned + Serialize + Default + Merge + Clone,
    O: Serialize,
{
    fn id(&self) -> &str {
        self.id
    }

    fn meta(&self) -> &ModuleMeta {
        &self.meta
    }

    fn has_template(&self) -> bool {
        self.template.is_some()
    }

    fn define_value(&self, input: Option<&Value>) -> Result<Value> {
        let resolved = self.define(self.parse_input(input)?);
        Ok(serde_json::to_value(resolved)?)
    }

    fn merge_inputs(&self, base: &Value, overlay: &Value) -> Result<Value> {
        let merged = self
            .parse_input(Some(base))?
            .merged(&self.parse_input(Some(overlay))?);
        Ok(serde_json::to_value(merged)?)
    }

    fn render(&self, input: Option<&Value>) -> Result<String> {
        let resolved = self.define(self.parse_input(input)?);
        match self.template {
            Some(template) => template(&resolved),
            None => {
                let mut body = serde_json::to_string_pretty(&resolved)?;
                body.push('\n');
                Ok(body)
            }
        }
    }
}
