//! Shallow-override merging of mapping values.

use super::Value;

/// Merges `overrides` over a structural copy of `base`.
///
/// The result starts as a deep clone of `base`. Every entry of the
/// `overrides` mapping is then assigned over the clone, replacing any
/// value the base held under the same key. The assignment is shallow: a
/// nested mapping under an override key replaces the base's nested
/// mapping wholesale, it is not merged recursively. Function-valued
/// overrides keep their [`Rc`](std::rc::Rc) identity in the result.
///
/// Neither argument is mutated. When `overrides` is not a mapping there
/// are no entries to apply; when `base` is not a mapping there is nothing
/// to assign onto. In both cases the result is simply the clone of
/// `base`.
///
/// # Examples
///
/// ## Overriding a key
///
/// ```rust
/// use combinars::value::{merge, Value};
///
/// let base = Value::from_iter([
///     ("host".to_string(), Value::from("localhost")),
///     ("port".to_string(), Value::Int(80)),
/// ]);
/// let overrides = Value::from_iter([("port".to_string(), Value::Int(8080))]);
///
/// let merged = merge(&base, &overrides);
/// assert_eq!(merged.get("host"), Some(&Value::from("localhost")));
/// assert_eq!(merged.get("port"), Some(&Value::Int(8080)));
///
/// // The base is untouched.
/// assert_eq!(base.get("port"), Some(&Value::Int(80)));
/// ```
///
/// ## Nested mappings replace, they do not merge
///
/// ```rust
/// use combinars::value::{merge, Value};
///
/// let base = Value::from_iter([(
///     "limits".to_string(),
///     Value::from_iter([
///         ("cpu".to_string(), Value::Int(2)),
///         ("memory".to_string(), Value::Int(512)),
///     ]),
/// )]);
/// let overrides = Value::from_iter([(
///     "limits".to_string(),
///     Value::from_iter([("cpu".to_string(), Value::Int(4))]),
/// )]);
///
/// let merged = merge(&base, &overrides);
/// let limits = merged.get("limits").unwrap();
///
/// assert_eq!(limits.get("cpu"), Some(&Value::Int(4)));
/// assert_eq!(limits.get("memory"), None); // gone: replaced, not merged
/// ```
pub fn merge(base: &Value, overrides: &Value) -> Value {
    let mut merged = base.clone();

    if let (Value::Map(target), Value::Map(entries)) = (&mut merged, overrides) {
        for (key, value) in entries {
            target.insert(key.clone(), value.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn map_of(entries: &[(&str, Value)]) -> Value {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_merge_with_empty_overrides_equals_clone() {
        let base = map_of(&[("a", Value::Int(1))]);
        let merged = merge(&base, &map_of(&[]));
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_adds_new_keys() {
        let base = map_of(&[("a", Value::Int(1))]);
        let overrides = map_of(&[("b", Value::Int(2))]);

        let merged = merge(&base, &overrides);
        assert_eq!(merged.get("a"), Some(&Value::Int(1)));
        assert_eq!(merged.get("b"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_merge_preserves_function_identity() {
        let function = Value::function(|_| Value::Null);
        let base = map_of(&[("f", Value::Int(0))]);
        let overrides = map_of(&[("f", function.clone())]);

        let merged = merge(&base, &overrides);
        let merged_function = merged.get("f").and_then(Value::as_func).unwrap();
        assert!(Rc::ptr_eq(merged_function, function.as_func().unwrap()));
    }

    #[test]
    fn test_merge_over_non_map_base_is_clone() {
        let base = Value::Int(7);
        let overrides = map_of(&[("a", Value::Int(1))]);
        assert_eq!(merge(&base, &overrides), Value::Int(7));
    }

    #[test]
    fn test_merge_with_non_map_overrides_is_clone() {
        let base = map_of(&[("a", Value::Int(1))]);
        assert_eq!(merge(&base, &Value::Null), base);
    }
}
