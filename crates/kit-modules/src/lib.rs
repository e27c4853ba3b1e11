//! Config modules for config-kit.
//!
//! Each module wraps one tool's configuration behind the same shape:
//!
//! - `define(partial) -> resolved`: defaults merged with a partial input
//! - `meta`: target filename and the npm packages the config relies on
//! - `get_template_string(partial)`: source text, for configs that must be
//!   written as code (`.cjs`/`.mjs`) rather than JSON
//!
//! [`ModuleRegistry`] holds type-erased modules ([`AnyConfigModule`]) so an
//! orchestrator can drive all of them from JSON input.

pub mod error;
pub mod module;
pub mod modules;
pub mod registry;
pub mod template;

pub use error::{Error, Result};
pub use module::{AnyConfigModule, ConfigModule, DefineFn, Dependency, ModuleMeta, TemplateFn};
pub use registry::{BUILTIN_COUNT, ModuleRegistry};
