//! Path expansion: re-nest dotted keys into nested maps after decoding.
//!
//! The inverse of key folding. With `PathExpansion::Safe`, every object key
//! containing a dot is split on the dots; iff each segment is a bare
//! identifier the entry is replaced by nested objects carrying the original
//! value. Keys expanding into the same subtree merge: `a.b: 1` and `a.c: 2`
//! become one `a` object with two entries.
//!
//! A conflict arises when an intermediate segment collides with an existing
//! non-object sibling, or the final segment already exists. Strict mode
//! reports [`crate::Error::PathExpansionConflict`]; lenient mode keeps the
//! dotted key unexpanded.

use crate::error::{Error, Result};
use crate::map::Map;
use crate::quote::is_identifier_segment;
use crate::value::Value;

/// Recursively expands dotted keys throughout a value tree.
pub(crate) fn expand_value(value: Value, strict: bool) -> Result<Value> {
    match value {
        Value::Object(map) => Ok(Value::Object(expand_object(map, strict)?)),
        Value::Array(arr) => {
            let items = arr
                .into_iter()
                .map(|item| expand_value(item, strict))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }
        other => Ok(other),
    }
}

fn expand_object(map: Map, strict: bool) -> Result<Map> {
    let mut out = Map::new();
    for (key, value) in map {
        let value = expand_value(value, strict)?;

        if key.contains('.') {
            let segments: Vec<&str> = key.split('.').collect();
            if segments.iter().all(|s| is_identifier_segment(s)) {
                if can_insert(&out, &segments) {
                    insert_path(&mut out, &segments, value);
                } else if strict {
                    return Err(Error::PathExpansionConflict { key });
                } else {
                    out.insert(key, value);
                }
                continue;
            }
        }

        // A literal key can still collide with an already-expanded subtree
        if out.contains_key(&key) {
            if strict {
                return Err(Error::PathExpansionConflict { key });
            }
            out.insert(key, value);
            continue;
        }
        out.insert(key, value);
    }
    Ok(out)
}

/// Dry-run walk: can this path be inserted without overwriting anything?
fn can_insert(map: &Map, segments: &[&str]) -> bool {
    let mut cur = map;
    for (i, segment) in segments.iter().enumerate() {
        let last = i + 1 == segments.len();
        match cur.get(segment) {
            None => return true,
            Some(Value::Object(child)) if !last => cur = child,
            Some(_) => return false,
        }
    }
    false
}

/// Inserts the value at the path, creating intermediate objects as needed.
/// Only called after `can_insert` succeeded.
fn insert_path(map: &mut Map, segments: &[&str], value: Value) {
    if segments.len() == 1 {
        map.insert(segments[0].to_string(), value);
        return;
    }
    if !map.contains_key(segments[0]) {
        map.insert(segments[0].to_string(), Value::Object(Map::new()));
    }
    if let Some(Value::Object(child)) = map.get_mut(segments[0]) {
        insert_path(child, &segments[1..], value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn expands_and_merges() {
        let value = toon!({"a.b": 1, "a.c": 2});
        let expanded = expand_value(value, true).unwrap();
        assert_eq!(expanded, toon!({"a": {"b": 1, "c": 2}}));
    }

    #[test]
    fn merges_into_existing_object() {
        let value = toon!({"a": {"x": 1}, "a.b": 2});
        let expanded = expand_value(value, true).unwrap();
        assert_eq!(expanded, toon!({"a": {"x": 1, "b": 2}}));
    }

    #[test]
    fn conflict_is_strict_error_and_lenient_literal() {
        let value = toon!({"a": 1, "a.b": 2});
        assert!(matches!(
            expand_value(value.clone(), true),
            Err(Error::PathExpansionConflict { .. })
        ));
        let lenient = expand_value(value, false).unwrap();
        assert_eq!(lenient, toon!({"a": 1, "a.b": 2}));
    }

    #[test]
    fn non_identifier_segments_stay_literal() {
        let value = toon!({"a..b": 1, "2x.y": 2});
        let expanded = expand_value(value.clone(), true).unwrap();
        assert_eq!(expanded, value);
    }
}
