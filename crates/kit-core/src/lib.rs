//! repo-kit orchestration for config-kit
//!
//! This crate sits above the config modules and assembles them into a
//! scaffold for a new repository:
//!
//! - **Kit manifest**: `kit.toml` with per-module toggles and partial inputs,
//!   layered shared-preset-then-repository
//! - **Scaffold plan**: rendered config files plus the npm packages they need
//!
//! # Architecture
//!
//! ```text
//!                  kit-core
//!                     |
//!                kit-modules
//!                 /        \
//!        kit-depcruise      |
//!                 \        /
//!                 kit-merge
//! ```
//!
//! # Example
//!
//! ```
//! use kit_core::{KitManifest, Scaffolder};
//!
//! let mut manifest = KitManifest::parse("[modules.prettier]\nsemi = true\n")?;
//! manifest.merge(&KitManifest::parse("[modules.prettier]\nsemi = false\n")?)?;
//!
//! let plan = Scaffolder::with_builtins().plan(&manifest)?;
//! let prettierrc = plan.file(".prettierrc.json").unwrap();
//! assert!(prettierrc.contents.contains("\"semi\": false"));
//! # Ok::<(), kit_core::Error>(())
//! ```

pub mod error;
pub mod logging;
pub mod manifest;
pub mod plan;

pub use error::{Error, Result};
pub use manifest::{KitManifest, ModuleEntry, ProjectSection};
pub use plan::{PlannedFile, ScaffoldPlan, Scaffolder};
