//! Configuration merging for config-kit
//!
//! Every config module resolves its output the same way: built-in defaults
//! with a partial user override laid on top. This crate holds that merge
//! policy in two forms:
//!
//! - **Generic engine** ([`merge`], [`merge_in_place`]) over
//!   `serde_json::Value` trees, for open-ended pass-through fields.
//! - **Typed merge** ([`Merge`]) for closed schemas such as compiler options
//!   or prettier options.
//!
//! # Policy
//!
//! | base     | override  | result                                   |
//! |----------|-----------|------------------------------------------|
//! | any      | absent    | base                                     |
//! | any      | `null`    | base                                     |
//! | array    | any       | union of both, deduplicated, first-seen  |
//! | object   | object    | per-key recursion over the override keys |
//! | other    | other     | override                                 |
//!
//! Merging never fails. Mismatched shapes fall back to the override and
//! validation is left to the tool that reads the resulting file.

mod typed;
mod value;

pub use typed::{Merge, Replace};
pub use value::{merge, merge_in_place, merge_map_in_place, union_dedup};
