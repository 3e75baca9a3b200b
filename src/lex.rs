//! Line-level tokenization: delimiter-aware splitting and literal parsing.
//!
//! The value region of an inline array or a tabular row is split on the
//! active delimiter at top level only; delimiters inside quoted strings do
//! not count. Each resulting token is then recognized as one of the
//! primitive literals: `null`, `true`/`false`, a number, a quoted string
//! with JSON-style escapes, or a raw unquoted string.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::value::{Number, Value};

/// Finds the byte index of the closing quote, scanning from `start` and
/// skipping escaped characters. Returns `None` if the string runs out first.
pub(crate) fn find_closing_quote(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Resolves the escapes of a quoted string body.
///
/// Accepted escapes: `\"`, `\\`, `\n`, `\r`, `\t` and `\uXXXX` (with
/// surrogate pairs combined). Anything else is an [`Error::InvalidEscape`].
pub(crate) fn unescape(s: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let unit = read_hex4(&mut chars, line)?;
                if (0xD800..0xDC00).contains(&unit) {
                    // high surrogate: the low half must follow immediately
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(Error::InvalidEscape { line, escape: 'u' });
                    }
                    let low = read_hex4(&mut chars, line)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(Error::InvalidEscape { line, escape: 'u' });
                    }
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    match char::from_u32(combined) {
                        Some(ch) => out.push(ch),
                        None => return Err(Error::InvalidEscape { line, escape: 'u' }),
                    }
                } else {
                    match char::from_u32(unit) {
                        Some(ch) => out.push(ch),
                        None => return Err(Error::InvalidEscape { line, escape: 'u' }),
                    }
                }
            }
            Some(other) => return Err(Error::InvalidEscape { line, escape: other }),
            None => return Err(Error::UnterminatedString { line }),
        }
    }
    Ok(out)
}

fn read_hex4(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u32> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(Error::InvalidEscape { line, escape: 'u' })?;
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

/// Splits a value region on the delimiter at top level, honoring quotes.
/// Tokens come back trimmed of surrounding spaces, quotes still attached.
pub(crate) fn split_row<'a>(
    s: &'a str,
    delimiter: Delimiter,
    line: usize,
) -> Result<Vec<&'a str>> {
    let delim = delimiter.as_char();
    let mut tokens = Vec::new();
    let bytes = s.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let close = find_closing_quote(s, i + 1)
                    .ok_or(Error::UnterminatedString { line })?;
                i = close + 1;
            }
            b if b as char == delim => {
                tokens.push(s[start..i].trim());
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    tokens.push(s[start..].trim());
    Ok(tokens)
}

/// True for unquoted integer tokens with a redundant leading zero (`007`,
/// `-012`). These are kept as strings: no canonical number prints that way,
/// so treating them as numbers would not round-trip.
fn has_leading_zero(s: &str) -> bool {
    let rest = s.strip_prefix(['+', '-']).unwrap_or(s);
    let bytes = rest.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

/// Recognizes a single token as a primitive [`Value`].
///
/// Recognition order: quoted string, `null`, booleans, numbers, raw string.
/// This mirrors the encoder's quoting rules: any string that could be read
/// as a literal or number was quoted on the way out, so an unquoted token
/// can be interpreted by its shape.
pub(crate) fn parse_scalar(token: &str, line: usize) -> Result<Value> {
    let s = token.trim();

    if s.is_empty() {
        return Ok(Value::String(String::new()));
    }

    if let Some(rest) = s.strip_prefix('"') {
        let close = find_closing_quote(rest, 0)
            .ok_or(Error::UnterminatedString { line })?;
        if close + 1 != rest.len() {
            return Err(Error::parse(line, "unexpected characters after closing quote"));
        }
        return Ok(Value::String(unescape(&rest[..close], line)?));
    }

    match s {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if crate::quote::is_numeric_like(s) && !has_leading_zero(s) {
        let is_integer_form = !s.contains(['.', 'e', 'E']);
        if is_integer_form {
            if let Ok(n) = s.parse::<i64>() {
                return Ok(Value::Number(Number::Integer(n)));
            }
        }
        if let Ok(f) = s.parse::<f64>() {
            if let Some(n) = Number::from_f64(f) {
                return Ok(Value::Number(n));
            }
        }
    }

    Ok(Value::String(s.to_string()))
}
