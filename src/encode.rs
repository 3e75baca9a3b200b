//! The emitter: a canonical [`Value`] tree becomes TOON text.
//!
//! Every emitted line is one of the line forms of the format:
//!
//! - `key: value` — scalar entry
//! - `key:` — map header, children one level deeper
//! - `key: {}` — empty map sentinel
//! - `key[N]: v1,v2` — inline primitive array
//! - `key[N]{f1,f2}:` — tabular header, one delimiter-joined row per line
//! - `key[N]:` — list header, `- ` items one level deeper
//!
//! Form selection per array: all-primitive arrays inline; arrays of objects
//! with identical key sets and primitive values go tabular (the dominant
//! token saving: the schema is declared once); everything else falls back
//! to `- ` list items. The declared `[N]` always matches the actual count.
//!
//! Non-comma delimiters announce themselves in the header between the
//! length and the closing bracket (`[3|]`, `[3\t]`), so the decoder never
//! has to guess.

use crate::error::{Error, Result};
use crate::fold;
use crate::map::Map;
use crate::options::{EncodeOptions, KeyFolding};
use crate::quote;
use crate::value::Value;
use crate::MAX_DEPTH;

/// Encodes a value with the given options.
pub(crate) fn encode_value(value: &Value, options: &EncodeOptions) -> Result<String> {
    let folded;
    let value = if options.key_folding == KeyFolding::Safe {
        folded = fold::fold_value(value, options.flatten_depth.max(1));
        &folded
    } else {
        value
    };

    let mut out = String::new();
    match value {
        Value::Object(obj) if obj.is_empty() => out.push_str("{}"),
        Value::Object(obj) => write_entries(&mut out, obj, 0, options)?,
        Value::Array(arr) => write_array(&mut out, None, arr, 0, options)?,
        primitive => write_primitive(&mut out, primitive, options),
    }
    Ok(out)
}

fn push_indent(out: &mut String, depth: usize, options: &EncodeOptions) {
    for _ in 0..depth * options.indent.max(1) {
        out.push(' ');
    }
}

fn write_primitive(out: &mut String, value: &Value, options: &EncodeOptions) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            quote::write_string(out, s, options.delimiter, options.quote_strings)
        }
        // containers never reach a primitive position
        Value::Array(_) | Value::Object(_) => out.push_str("null"),
    }
}

/// Emits the entries of an object, one per line, at the given depth.
/// The caller has already placed the cursor at a fresh line.
fn write_entries(
    out: &mut String,
    obj: &Map,
    depth: usize,
    options: &EncodeOptions,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthLimit(MAX_DEPTH));
    }
    let mut first = true;
    for (key, value) in obj {
        if !first {
            out.push('\n');
        }
        first = false;
        push_indent(out, depth, options);
        write_entry(out, key, value, depth, options)?;
    }
    Ok(())
}

/// Emits one `key …` entry on the current line. `depth` is the entry's
/// logical depth: nested children land at `depth + 1`.
fn write_entry(
    out: &mut String,
    key: &str,
    value: &Value,
    depth: usize,
    options: &EncodeOptions,
) -> Result<()> {
    match value {
        Value::Object(obj) if obj.is_empty() => {
            quote::write_key(out, key);
            out.push_str(": {}");
        }
        Value::Object(obj) => {
            quote::write_key(out, key);
            out.push_str(":\n");
            write_entries(out, obj, depth + 1, options)?;
        }
        Value::Array(arr) => {
            write_array(out, Some(key), arr, depth, options)?;
        }
        primitive => {
            quote::write_key(out, key);
            out.push_str(": ");
            write_primitive(out, primitive, options);
        }
    }
    Ok(())
}

/// Emits an array (header plus body) on the current line. `depth` is the
/// header's logical depth; rows and list items land at `depth + 1`.
fn write_array(
    out: &mut String,
    key: Option<&str>,
    arr: &[Value],
    depth: usize,
    options: &EncodeOptions,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthLimit(MAX_DEPTH));
    }
    if let Some(key) = key {
        quote::write_key(out, key);
    }

    if arr.is_empty() {
        out.push_str("[0]:");
        return Ok(());
    }

    if let Some(fields) = tabular_fields(arr) {
        write_header(out, arr.len(), Some(&fields), true, options);
        for row in arr {
            out.push('\n');
            push_indent(out, depth + 1, options);
            if let Value::Object(obj) = row {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push(options.delimiter.as_char());
                    }
                    // uniform key sets are a precondition of tabular form
                    let cell = obj.get(field).unwrap_or(&Value::Null);
                    write_primitive(out, cell, options);
                }
            }
        }
        return Ok(());
    }

    if arr.iter().all(Value::is_primitive) {
        write_header(out, arr.len(), None, true, options);
        out.push(' ');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                out.push(options.delimiter.as_char());
            }
            write_primitive(out, item, options);
        }
        return Ok(());
    }

    write_header(out, arr.len(), None, false, options);
    write_list_items(out, arr, depth + 1, options)
}

/// Formats `[N]`, `[N|]{f1|f2}` and friends, ending with the colon.
/// `with_delimiter` is set for forms whose body is delimiter-joined.
fn write_header(
    out: &mut String,
    len: usize,
    fields: Option<&[String]>,
    with_delimiter: bool,
    options: &EncodeOptions,
) {
    out.push('[');
    out.push_str(&len.to_string());
    if with_delimiter {
        out.push_str(options.delimiter.header_marker());
    }
    out.push(']');
    if let Some(fields) = fields {
        out.push('{');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(options.delimiter.as_char());
            }
            quote::write_key(out, field);
        }
        out.push('}');
    }
    out.push(':');
}

/// Emits `- ` list items at `item_depth`, one per line.
fn write_list_items(
    out: &mut String,
    arr: &[Value],
    item_depth: usize,
    options: &EncodeOptions,
) -> Result<()> {
    for item in arr {
        out.push('\n');
        push_indent(out, item_depth, options);
        out.push_str("- ");
        match item {
            Value::Object(obj) if obj.is_empty() => out.push_str("{}"),
            Value::Object(obj) => write_item_object(out, obj, item_depth, options)?,
            Value::Array(inner) => write_array(out, None, inner, item_depth, options)?,
            primitive => write_primitive(out, primitive, options),
        }
    }
    Ok(())
}

/// Emits an object list item. The first entry rides the marker line; the
/// remaining entries sit one level past the marker, which is also where
/// every entry's own children start counting from.
fn write_item_object(
    out: &mut String,
    obj: &Map,
    item_depth: usize,
    options: &EncodeOptions,
) -> Result<()> {
    let mut first = true;
    for (key, value) in obj {
        if !first {
            out.push('\n');
            push_indent(out, item_depth + 1, options);
        }
        first = false;
        write_entry(out, key, value, item_depth + 1, options)?;
    }
    Ok(())
}

/// Returns the shared field list iff the array is tabular-eligible: every
/// element an object with the same non-empty key set and primitive values.
/// Field order is first appearance scanning rows left to right; with
/// identical key sets this is the first row's order.
fn tabular_fields(arr: &[Value]) -> Option<Vec<String>> {
    let first = arr.first()?.as_object()?;
    if first.is_empty() {
        return None;
    }
    if first.values().any(|v| !v.is_primitive()) {
        return None;
    }
    let fields: Vec<String> = first.keys().cloned().collect();
    for item in &arr[1..] {
        let obj = item.as_object()?;
        if obj.len() != fields.len() {
            return None;
        }
        for field in &fields {
            let value = obj.get(field)?;
            if !value.is_primitive() {
                return None;
            }
        }
    }
    Some(fields)
}
