//! The parser: recursive descent over line depth.
//!
//! At a given depth the parser recognizes key–value lines, array headers
//! with declared lengths and field lists, tabular rows, and `- ` list
//! items. Strict mode enforces the structural contracts of the format —
//! declared lengths, row arity, exact child depth and unique keys; lenient
//! mode takes what it finds: actual counts, floored depth, last key wins,
//! short rows fill with null and long rows drop the excess.
//!
//! The parser builds a fresh [`Value`] tree and never partially mutates
//! caller-owned structures: an error abandons the whole decode.

use crate::error::{Error, Result};
use crate::lex;
use crate::map::Map;
use crate::options::{DecodeOptions, Delimiter};
use crate::scan::{scan, Cursor, ParsedLine};
use crate::value::Value;
use crate::MAX_DEPTH;

/// Parses a whole document into a [`Value`].
pub(crate) fn parse_document(input: &str, options: &DecodeOptions) -> Result<Value> {
    let (lines, blanks) = scan(input, options)?;
    let mut cursor = Cursor::new(&lines, &blanks);
    let value = parse_root(&mut cursor, options)?;
    if let Some(extra) = cursor.peek() {
        if options.strict {
            return Err(Error::parse(
                extra.line,
                "unexpected content after the top-level value",
            ));
        }
    }
    Ok(value)
}

fn parse_root(cursor: &mut Cursor, options: &DecodeOptions) -> Result<Value> {
    let first = match cursor.peek() {
        Some(line) => *line,
        None => return Ok(Value::Object(Map::new())),
    };
    if options.strict && first.depth != 0 {
        return Err(Error::indent(first.line, "top-level value must not be indented"));
    }

    if first.content.starts_with('[') {
        cursor.advance();
        let header = parse_header(first.content, first.line)?;
        return parse_array_body(cursor, &header, first.depth, options);
    }
    if is_key_line(first.content) {
        return parse_object(cursor, first.depth, options);
    }

    cursor.advance();
    if let Some(extra) = cursor.peek() {
        return Err(Error::parse(extra.line, "expected `key: value` entries"));
    }
    parse_scalar_or_sentinel(first.content, first.line)
}

/// A primitive value line; `{}` is the empty-object sentinel.
fn parse_scalar_or_sentinel(content: &str, line: usize) -> Result<Value> {
    if content == "{}" {
        return Ok(Value::Object(Map::new()));
    }
    lex::parse_scalar(content, line)
}

/// Does this content start an object entry (`key: …` / `key[…` / quoted key)?
fn is_key_line(content: &str) -> bool {
    if let Some(rest) = content.strip_prefix('"') {
        return match lex::find_closing_quote(rest, 0) {
            Some(close) => matches!(rest.as_bytes().get(close + 1), Some(&b':') | Some(&b'[')),
            None => false,
        };
    }
    match content.find([':', '[']) {
        Some(pos) if pos > 0 => !content[..pos].contains(' '),
        _ => false,
    }
}

/// Splits the leading key (quoted or bare) from a line, returning the key
/// and the remainder starting at `:` or `[`.
fn split_key(content: &str, line: usize) -> Result<(String, &str)> {
    if let Some(rest) = content.strip_prefix('"') {
        let close =
            lex::find_closing_quote(rest, 0).ok_or(Error::UnterminatedString { line })?;
        let key = lex::unescape(&rest[..close], line)?;
        let after = &rest[close + 1..];
        if after.starts_with(':') || after.starts_with('[') {
            return Ok((key, after));
        }
        return Err(Error::parse(line, "expected `:` after key"));
    }
    match content.find([':', '[']) {
        Some(pos) if pos > 0 => {
            let key = content[..pos].trim_end().to_string();
            Ok((key, &content[pos..]))
        }
        _ => Err(Error::parse(line, "expected `:` after key")),
    }
}

/// Parsed form of an array declaration: `[N]`, `[N|]{f1|f2}`, `[N]: v1,v2`…
struct ArrayHeader<'a> {
    len: usize,
    delimiter: Delimiter,
    fields: Option<Vec<String>>,
    inline: Option<&'a str>,
    line: usize,
}

/// Parses an array header starting at the `[`.
fn parse_header(rest: &str, line: usize) -> Result<ArrayHeader<'_>> {
    let body = &rest[1..];
    let digits_end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    if digits_end == 0 {
        return Err(Error::parse(line, "expected array length after `[`"));
    }
    let len: usize = body[..digits_end]
        .parse()
        .map_err(|_| Error::parse(line, "invalid array length"))?;

    let mut idx = digits_end;
    let mut delimiter = Delimiter::Comma;
    match body[idx..].chars().next() {
        Some(']') => idx += 1,
        Some(ch) => {
            delimiter =
                Delimiter::from_char(ch).ok_or(Error::UnknownDelimiter { line, found: ch })?;
            idx += ch.len_utf8();
            if !body[idx..].starts_with(']') {
                return Err(Error::parse(line, "expected `]` in array header"));
            }
            idx += 1;
        }
        None => return Err(Error::parse(line, "unterminated array header")),
    }

    let mut fields = None;
    if body[idx..].starts_with('{') {
        let region_start = idx + 1;
        let close = find_closing_brace(body, region_start)
            .ok_or_else(|| Error::parse(line, "unterminated field list in array header"))?;
        if len == 0 {
            return Err(Error::parse(line, "tabular header with declared length 0"));
        }
        let mut names = Vec::new();
        for token in lex::split_row(&body[region_start..close], delimiter, line)? {
            if token.is_empty() {
                return Err(Error::parse(line, "empty field name in array header"));
            }
            if let Some(quoted) = token.strip_prefix('"') {
                let end = lex::find_closing_quote(quoted, 0)
                    .ok_or(Error::UnterminatedString { line })?;
                if end + 1 != quoted.len() {
                    return Err(Error::parse(line, "unexpected characters after field name"));
                }
                names.push(lex::unescape(&quoted[..end], line)?);
            } else {
                names.push(token.to_string());
            }
        }
        fields = Some(names);
        idx = close + 1;
    }

    if !body[idx..].starts_with(':') {
        return Err(Error::parse(line, "expected `:` after array header"));
    }
    idx += 1;

    let remainder = body[idx..].trim();
    if remainder.is_empty() {
        Ok(ArrayHeader { len, delimiter, fields, inline: None, line })
    } else if fields.is_some() {
        Err(Error::parse(line, "unexpected content after tabular header"))
    } else {
        Ok(ArrayHeader { len, delimiter, fields, inline: Some(remainder), line })
    }
}

/// Index of the `}` closing a field list, skipping quoted field names.
fn find_closing_brace(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => i = lex::find_closing_quote(s, i + 1)? + 1,
            b'}' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Parses the body belonging to an array header at `depth`.
fn parse_array_body(
    cursor: &mut Cursor,
    header: &ArrayHeader,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthLimit(MAX_DEPTH));
    }

    if let Some(inline) = header.inline {
        let tokens = lex::split_row(inline, header.delimiter, header.line)?;
        if options.strict && tokens.len() != header.len {
            return Err(Error::LengthMismatch {
                line: header.line,
                declared: header.len,
                actual: tokens.len(),
            });
        }
        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            values.push(lex::parse_scalar(token, header.line)?);
        }
        return Ok(Value::Array(values));
    }

    if let Some(fields) = &header.fields {
        return parse_tabular_rows(cursor, header, fields, depth, options);
    }

    parse_list_items(cursor, header, depth, options)
}

fn parse_tabular_rows(
    cursor: &mut Cursor,
    header: &ArrayHeader,
    fields: &[String],
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let mut rows = Vec::new();
    while let Some(&line) = cursor.peek() {
        if line.depth <= depth {
            break;
        }
        if options.strict && line.depth != depth + 1 {
            return Err(Error::indent(
                line.line,
                format!("expected tabular row at depth {}", depth + 1),
            ));
        }
        cursor.advance();
        let tokens = lex::split_row(line.content, header.delimiter, line.line)?;
        if options.strict && tokens.len() != fields.len() {
            return Err(Error::FieldArityMismatch {
                line: line.line,
                declared: fields.len(),
                actual: tokens.len(),
            });
        }
        let mut row = Map::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            // lenient short rows fill with null; extra tokens are dropped
            let value = match tokens.get(i) {
                Some(token) => lex::parse_scalar(token, line.line)?,
                None => Value::Null,
            };
            if row.contains_key(field) && options.strict {
                return Err(Error::DuplicateKey {
                    line: line.line,
                    key: field.clone(),
                });
            }
            row.insert(field.clone(), value);
        }
        rows.push(Value::Object(row));
    }
    if options.strict && rows.len() != header.len {
        return Err(Error::LengthMismatch {
            line: cursor.boundary_line(),
            declared: header.len,
            actual: rows.len(),
        });
    }
    Ok(Value::Array(rows))
}

fn parse_list_items(
    cursor: &mut Cursor,
    header: &ArrayHeader,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let mut items = Vec::new();
    while let Some(&line) = cursor.peek() {
        if line.depth <= depth {
            break;
        }
        if options.strict && line.depth != depth + 1 {
            return Err(Error::indent(
                line.line,
                format!("expected list item at depth {}", depth + 1),
            ));
        }
        if !line.content.starts_with("- ") && line.content != "-" {
            if options.strict {
                return Err(Error::parse(line.line, "expected `- ` list item"));
            }
            break;
        }
        cursor.advance();
        items.push(parse_list_item(cursor, &line, line.depth, options)?);
    }
    if options.strict && items.len() != header.len {
        return Err(Error::LengthMismatch {
            line: cursor.boundary_line(),
            declared: header.len,
            actual: items.len(),
        });
    }
    Ok(Value::Array(items))
}

/// Parses one `- ` item whose marker line has already been consumed.
fn parse_list_item(
    cursor: &mut Cursor,
    line: &ParsedLine,
    item_depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let content = line.content.strip_prefix("- ").unwrap_or("").trim();
    if content == "{}" {
        return Ok(Value::Object(Map::new()));
    }
    if content.starts_with('[') {
        let header = parse_header(content, line.line)?;
        return parse_array_body(cursor, &header, item_depth, options);
    }
    if is_key_line(content) {
        return parse_item_object(cursor, content, line.line, item_depth, options);
    }
    parse_scalar_or_sentinel(content, line.line)
}

/// Parses an object list item: the first entry rides the marker line, the
/// remaining entries sit one level past the marker.
fn parse_item_object(
    cursor: &mut Cursor,
    first_content: &str,
    first_line: usize,
    item_depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let entry_depth = item_depth + 1;
    let mut map = Map::new();
    parse_entry_at(cursor, &mut map, first_content, first_line, entry_depth, options)?;

    while let Some(&line) = cursor.peek() {
        if line.depth < entry_depth {
            break;
        }
        if line.content.starts_with("- ") {
            break;
        }
        if line.depth > entry_depth && options.strict {
            return Err(Error::indent(
                line.line,
                format!("expected entry at depth {}", entry_depth),
            ));
        }
        cursor.advance();
        parse_entry_at(cursor, &mut map, line.content, line.line, entry_depth, options)?;
    }
    Ok(Value::Object(map))
}

/// Parses an object whose entries sit at `depth`.
fn parse_object(cursor: &mut Cursor, depth: usize, options: &DecodeOptions) -> Result<Value> {
    let mut map = Map::new();
    while let Some(&line) = cursor.peek() {
        if line.depth < depth {
            break;
        }
        if line.content.starts_with("- ") {
            break;
        }
        if line.depth > depth && options.strict {
            return Err(Error::indent(
                line.line,
                format!("expected entry at depth {}", depth),
            ));
        }
        cursor.advance();
        parse_entry_at(cursor, &mut map, line.content, line.line, depth, options)?;
    }
    Ok(Value::Object(map))
}

/// Parses one `key …` entry from `content` into `map`, consuming any block
/// the entry owns. `depth` is the entry's logical depth: its children live
/// at `depth + 1`.
fn parse_entry_at(
    cursor: &mut Cursor,
    map: &mut Map,
    content: &str,
    line_no: usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthLimit(MAX_DEPTH));
    }
    let (key, rest) = split_key(content, line_no)?;

    let value = if rest.starts_with('[') {
        let header = parse_header(rest, line_no)?;
        parse_array_body(cursor, &header, depth, options)?
    } else {
        let region = rest[1..].trim();
        if region.is_empty() {
            match cursor.peek() {
                Some(next) if next.depth > depth => parse_object(cursor, depth + 1, options)?,
                _ => Value::Object(Map::new()),
            }
        } else if region == "{}" {
            Value::Object(Map::new())
        } else {
            let value = lex::parse_scalar(region, line_no)?;
            if let Some(&next) = cursor.peek() {
                if next.depth > depth {
                    if options.strict {
                        return Err(Error::indent(
                            next.line,
                            "unexpected indentation under a scalar entry",
                        ));
                    }
                    while let Some(&skip) = cursor.peek() {
                        if skip.depth <= depth {
                            break;
                        }
                        cursor.advance();
                    }
                }
            }
            value
        }
    };

    if map.contains_key(&key) && options.strict {
        return Err(Error::DuplicateKey { line: line_no, key });
    }
    map.insert(key, value);
    Ok(())
}
