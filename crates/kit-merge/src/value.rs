//! Generic merge over `serde_json::Value` trees
//!
//! Used wherever a configuration schema is open-ended (pass-through option
//! maps, unknown compiler options, cruise options). Closed schemas go
//! through the [`Merge`](crate::Merge) trait instead.

use serde_json::{Map, Value};

/// Merge `overlay` on top of a copy of `base` and return the result.
///
/// `base` is never modified; the returned tree shares nothing with either
/// input.
///
/// - `None` or `null` overlays leave the base value as it is.
/// - An array base becomes the union of its elements and the overlay's
///   elements (a non-array overlay counts as a single element), deduplicated
///   by value in first-seen order.
/// - Two objects merge key by key over the overlay's keys.
/// - Any other combination is resolved in favour of the overlay.
///
/// # Example
///
/// ```
/// use kit_merge::merge;
/// use serde_json::json;
///
/// let base = json!({"a": [1, 2], "x": 1});
/// let merged = merge(&base, Some(&json!({"a": [2, 3], "x": 2})));
///
/// assert_eq!(merged, json!({"a": [1, 2, 3], "x": 2}));
/// assert_eq!(base, json!({"a": [1, 2], "x": 1}));
/// ```
pub fn merge(base: &Value, overlay: Option<&Value>) -> Value {
    let mut merged = base.clone();
    merge_in_place(&mut merged, overlay);
    merged
}

/// Merge `overlay` directly into `base`.
///
/// Same rules as [`merge`], for callers that own `base` exclusively and do
/// not need the original afterwards.
pub fn merge_in_place(base: &mut Value, overlay: Option<&Value>) {
    let Some(overlay) = overlay else {
        return;
    };
    // null is "not specified", never "clear this field"
    if overlay.is_null() {
        return;
    }

    match (base, overlay) {
        (Value::Array(items), extra) => {
            let extra = match extra {
                Value::Array(extra) => extra.as_slice(),
                single => std::slice::from_ref(single),
            };
            *items = union_dedup(items, extra);
        }
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_map_in_place(base_map, overlay_map);
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Merge the entries of `overlay` into `base`, recursing into shared keys.
///
/// Keys only present in `base` are kept. Keys only present in `overlay` are
/// copied over unless their value is `null`.
pub fn merge_map_in_place(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(key) {
            Some(existing) => merge_in_place(existing, Some(value)),
            None if value.is_null() => {}
            None => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Concatenate two sequences, dropping repeated values.
///
/// Order is first-seen: every element of `base` (minus its own duplicates)
/// followed by the elements of `extra` not seen yet.
pub fn union_dedup<T: PartialEq + Clone>(base: &[T], extra: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(base.len() + extra.len());
    for item in base.iter().chain(extra) {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_merge_without_overlay_returns_equal_copy() {
        let base = json!({"a": {"b": [1, 2]}, "c": "x"});
        assert_eq!(merge(&base, None), base);
    }

    #[test]
    fn test_null_overlay_is_noop() {
        let base = json!({"x": 1});
        assert_eq!(merge(&base, Some(&Value::Null)), base);
        assert_eq!(merge(&base, Some(&json!({"x": null}))), json!({"x": 1}));
    }

    #[test]
    fn test_null_overlay_key_is_not_inserted() {
        let merged = merge(&json!({}), Some(&json!({"gone": null, "kept": 1})));
        assert_eq!(merged, json!({"kept": 1}));
    }

    #[test]
    fn test_array_union_keeps_first_seen_order() {
        let merged = merge(&json!({"a": [1, 2]}), Some(&json!({"a": [2, 3]})));
        assert_eq!(merged, json!({"a": [1, 2, 3]}));
    }

    #[test]
    fn test_array_base_absorbs_scalar_overlay() {
        let merged = merge(&json!(["node_modules"]), Some(&json!("dist")));
        assert_eq!(merged, json!(["node_modules", "dist"]));

        let unchanged = merge(&json!(["dist"]), Some(&json!("dist")));
        assert_eq!(unchanged, json!(["dist"]));
    }

    #[test]
    fn test_array_union_dedups_objects_by_value() {
        let merged = merge(
            &json!([{"path": "a"}]),
            Some(&json!([{"path": "a"}, {"path": "b"}])),
        );
        assert_eq!(merged, json!([{"path": "a"}, {"path": "b"}]));
    }

    #[rstest]
    #[case::object_to_scalar(json!({"b": 1}), json!("flat"), json!("flat"))]
    #[case::scalar_to_object(json!(3), json!({"b": 1}), json!({"b": 1}))]
    #[case::string_to_number(json!("x"), json!(2), json!(2))]
    #[case::object_to_array(json!({"b": 1}), json!([1]), json!([1]))]
    fn test_shape_mismatch_overlay_wins(
        #[case] base: Value,
        #[case] overlay: Value,
        #[case] expected: Value,
    ) {
        assert_eq!(merge(&base, Some(&overlay)), expected);
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let base = json!({"compilerOptions": {"strict": true, "lib": ["ES2022"]}});
        let overlay = json!({"compilerOptions": {"lib": ["DOM"], "outDir": "dist"}});

        assert_eq!(
            merge(&base, Some(&overlay)),
            json!({"compilerOptions": {"strict": true, "lib": ["ES2022", "DOM"], "outDir": "dist"}})
        );
    }

    #[test]
    fn test_merge_in_place_mutates_base() {
        let mut base = json!({"x": 1});
        merge_in_place(&mut base, Some(&json!({"y": 2})));
        assert_eq!(base, json!({"x": 1, "y": 2}));
    }

    #[test]
    fn test_union_dedup_collapses_duplicates_in_base() {
        assert_eq!(union_dedup(&[1, 1, 2], &[3, 2]), vec![1, 2, 3]);
    }
}
