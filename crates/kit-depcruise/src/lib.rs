//! dependency-cruiser configuration for config-kit
//!
//! Forbidden rules are built from a closed registry of known rules, each
//! owned by a [`RuleFactory`]. A partial configuration keyed by rule name
//! switches rules off (`false`), keeps their defaults (`true` or absent), or
//! overrides parts of them; custom rules are appended after the known ones.
//!
//! # Example
//!
//! ```
//! use kit_depcruise::{RuleOverride, RuleToggle, RulesConfig, Severity, resolve_rules};
//!
//! let config = RulesConfig::from([
//!     ("no-orphans".to_string(), RuleToggle::Enabled(false)),
//!     ("no-circular".to_string(), RuleOverride::severity(Severity::Warn).into()),
//! ]);
//!
//! let rules = resolve_rules(&config, &[]);
//!
//! assert!(rules.iter().all(|r| r.name != "no-orphans"));
//! assert_eq!(rules[0].name, "no-circular");
//! assert_eq!(rules[0].severity, Severity::Warn);
//! ```

mod builtin;
pub mod config;
mod factory;
mod registry;
mod rule;

pub use config::{DepCruiseConfig, DepCruiseInput, default_options, define, render};
pub use factory::{RuleDefaults, RuleFactory, RuleMeta};
pub use registry::{RuleRegistry, resolve_rules};
pub use rule::{RuleDefinition, RuleOverride, RuleToggle, RuleZone, RulesConfig, Severity};
