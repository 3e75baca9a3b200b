//! Key folding: collapse single-key wrapper chains into dotted keys.
//!
//! With `KeyFolding::Safe`, an object entry whose value is a chain of
//! objects that each hold exactly one identifier key is rewritten into a
//! single dotted entry: `{a: {b: {c: 1}}}` emits as `a.b.c: 1`. The chain
//! is bounded by `flatten_depth`; a partially folded chain keeps its
//! remainder nested.
//!
//! "Safe" means the fold must decode back losslessly with path expansion
//! enabled. A fold is skipped when:
//!
//! - any segment is not a bare identifier (dots in a segment would split
//!   wrongly on expansion),
//! - the folded key would collide with an existing sibling key,
//! - a sibling literal dotted key shares a prefix with the chain root, in
//!   which case expansion would merge the two into one subtree.

use crate::map::Map;
use crate::quote::is_identifier_segment;
use crate::value::Value;
use std::collections::HashSet;

/// Applies key folding to a whole value tree, returning the rewritten copy.
pub(crate) fn fold_value(value: &Value, flatten_depth: usize) -> Value {
    fold_inner(value, flatten_depth, true)
}

fn fold_inner(value: &Value, flatten_depth: usize, fold_top: bool) -> Value {
    match value {
        Value::Object(obj) => Value::Object(fold_object(obj, flatten_depth, fold_top)),
        Value::Array(arr) => Value::Array(
            arr.iter()
                .map(|item| fold_inner(item, flatten_depth, true))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn fold_object(obj: &Map, flatten_depth: usize, fold_top: bool) -> Map {
    let key_set: HashSet<&str> = obj.keys().map(String::as_str).collect();

    // Dot-prefixes of literal dotted sibling keys. A chain rooted at one of
    // these would land in the same subtree on expansion, so it stays nested.
    let mut prefix_conflicts: HashSet<&str> = HashSet::new();
    for key in obj.keys() {
        for (idx, _) in key.match_indices('.') {
            if idx > 0 {
                prefix_conflicts.insert(&key[..idx]);
            }
        }
    }

    let mut out = Map::with_capacity(obj.len());
    for (key, value) in obj {
        if fold_top
            && is_identifier_segment(key)
            && !prefix_conflicts.contains(key.as_str())
        {
            if let Some(chain) = collect_chain(key, value, flatten_depth) {
                if !key_set.contains(chain.folded_key.as_str())
                    && !out.contains_key(&chain.folded_key)
                {
                    let leaf = fold_inner(chain.leaf, flatten_depth, !chain.cut_by_depth);
                    out.insert(chain.folded_key, leaf);
                    continue;
                }
            }
        }
        out.insert(key.clone(), fold_inner(value, flatten_depth, true));
    }
    out
}

struct Chain<'v> {
    folded_key: String,
    leaf: &'v Value,
    /// True when the depth bound stopped a chain that would otherwise
    /// continue; the leaf's own entries are then emitted unfolded.
    cut_by_depth: bool,
}

fn collect_chain<'v>(key: &str, value: &'v Value, flatten_depth: usize) -> Option<Chain<'v>> {
    let mut segments = vec![key];
    let mut cur = value;
    while segments.len() < flatten_depth {
        let Value::Object(obj) = cur else { break };
        if obj.len() != 1 {
            break;
        }
        let (next_key, next_value) = obj.iter().next()?;
        if !is_identifier_segment(next_key) {
            break;
        }
        segments.push(next_key.as_str());
        cur = next_value;
    }
    if segments.len() < 2 {
        return None;
    }
    let cut_by_depth = segments.len() == flatten_depth && continues_chain(cur);
    Some(Chain {
        folded_key: segments.join("."),
        leaf: cur,
        cut_by_depth,
    })
}

fn continues_chain(value: &Value) -> bool {
    match value {
        Value::Object(obj) if obj.len() == 1 => obj
            .keys()
            .next()
            .map(|k| is_identifier_segment(k))
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn folds_simple_chain() {
        let value = toon!({"a": {"b": {"c": 1}}});
        let folded = fold_value(&value, usize::MAX);
        assert_eq!(folded, toon!({"a.b.c": 1}));
    }

    #[test]
    fn multi_key_objects_stop_the_chain() {
        let value = toon!({"a": {"b": {"c": 1}, "d": 2}});
        let folded = fold_value(&value, usize::MAX);
        assert_eq!(folded, toon!({"a": {"b.c": 1, "d": 2}}));
    }

    #[test]
    fn depth_limit_folds_partially() {
        let value = toon!({"a": {"b": {"c": {"d": 1}}}});
        let folded = fold_value(&value, 2);
        assert_eq!(folded, toon!({"a.b": {"c": {"d": 1}}}));
    }

    #[test]
    fn sibling_collision_skips_fold() {
        let value = toon!({"a": {"b": 1}, "a.b": 2});
        let folded = fold_value(&value, usize::MAX);
        assert_eq!(folded, value);
    }

    #[test]
    fn dotted_segments_do_not_fold() {
        let value = toon!({"a": {"b.c": 1}});
        let folded = fold_value(&value, usize::MAX);
        assert_eq!(folded, value);
    }
}
