//! Helpers for rendering configs as JavaScript source

use serde::Serialize;

use crate::error::Result;

/// `module.exports = <value>;` with an optional leading type annotation.
pub fn commonjs<T: Serialize>(type_annotation: Option<&str>, value: &T) -> Result<String> {
    let body = serde_json::to_string_pretty(value)?;
    let mut out = String::new();
    if let Some(annotation) = type_annotation {
        out.push_str(&format!("/** @type {{{annotation}}} */\n"));
    }
    out.push_str(&format!("module.exports = {body};\n"));
    Ok(out)
}

/// Pretty JSON literal whose continuation lines are shifted right by
/// `indent` spaces, for nesting inside hand-written source.
pub fn nested_literal<T: Serialize>(value: &T, indent: usize) -> Result<String> {
    let pretty = serde_json::to_string_pretty(value)?;
    let pad = " ".repeat(indent);
    Ok(pretty.replace('\n', &format!("\n{pad}")))
}

/// Single-line JSON literal (strings, arrays).
pub fn inline_literal<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
