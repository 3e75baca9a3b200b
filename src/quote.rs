//! String and key quoting rules.
//!
//! TOON leaves strings unquoted wherever the decoder can still recover them
//! unambiguously; every saved quote pair is two tokens. A string value must
//! be quoted when it is empty, carries leading or trailing whitespace, reads
//! as a literal (`true`, `false`, `null`) or a number, contains structural
//! characters or the active delimiter, or starts with the list-item marker.
//!
//! Keys have their own rule: a key may stay unquoted iff it matches
//! `[A-Za-z_][A-Za-z0-9_.]*`; everything else is quoted with the same
//! escape scheme as string values.

use crate::options::Delimiter;

/// True iff `s` is a bare identifier segment: `[A-Za-z_][A-Za-z0-9_]*`.
/// Segments are the unit of key folding and path expansion; dots are
/// excluded so a dotted key always splits unambiguously.
#[must_use]
pub(crate) fn is_identifier_segment(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// True iff `key` can be emitted without quotes: `[A-Za-z_][A-Za-z0-9_.]*`.
#[must_use]
pub(crate) fn is_unquoted_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// True iff `s` would read as a numeric literal to the decoder, including
/// leading-zero forms like `007` that the decoder deliberately keeps as
/// strings. Matches `[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?`.
#[must_use]
pub(crate) fn is_numeric_like(s: &str) -> bool {
    let rest = s.strip_prefix(['+', '-']).unwrap_or(s);
    if rest.is_empty() {
        return false;
    }
    let bytes = rest.as_bytes();
    let mut i = 0;
    let mut int_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        int_digits += 1;
        i += 1;
    }
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            frac_digits += 1;
            i += 1;
        }
        // `.5` needs fraction digits; `1.` does not
        if int_digits == 0 && frac_digits == 0 {
            return false;
        }
    } else if int_digits == 0 {
        return false;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        if int_digits == 0 && frac_digits == 0 {
            return false;
        }
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Decides whether a string value must be quoted to survive a round trip.
///
/// A string stays unquoted iff all of:
/// - non-empty,
/// - equal to its own trim,
/// - not a `true`/`false`/`null` literal,
/// - not numeric-looking,
/// - free of `:`, `"`, `\`, `[`, `]`, `{`, `}`, newline, carriage return,
///   tab, and the active delimiter,
/// - does not begin with `- `.
#[must_use]
pub(crate) fn needs_quotes(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    if s != s.trim() {
        return true;
    }
    if s == "true" || s == "false" || s == "null" {
        return true;
    }
    if is_numeric_like(s) {
        return true;
    }
    if s.contains([':', '"', '\\', '[', ']', '{', '}', '\n', '\r', '\t']) {
        return true;
    }
    if s.contains(delimiter.as_char()) {
        return true;
    }
    s.starts_with("- ")
}

/// Appends `s` wrapped in double quotes with JSON-style escapes. Control
/// characters without a short escape become `\uXXXX`.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Appends a string value, quoting it only when the quoting predicate (or
/// the `quote_strings` option, via `force`) requires it.
pub(crate) fn write_string(out: &mut String, s: &str, delimiter: Delimiter, force: bool) {
    if force || needs_quotes(s, delimiter) {
        write_quoted(out, s);
    } else {
        out.push_str(s);
    }
}

/// Appends an object key, quoted unless it matches the unquoted-key rule.
pub(crate) fn write_key(out: &mut String, key: &str) {
    if is_unquoted_key(key) {
        out.push_str(key);
    } else {
        write_quoted(out, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_like_forms() {
        for s in ["42", "-1", "+5", "3.14", ".5", "1.", "1e5", "2.5e-3", "007", "0"] {
            assert!(is_numeric_like(s), "{s} should look numeric");
        }
        for s in ["", "-", "+", "1e", "e5", "4.2.1", "a1", "0x10", "1 "] {
            assert!(!is_numeric_like(s), "{s} should not look numeric");
        }
    }

    #[test]
    fn quoting_predicate() {
        let d = Delimiter::Comma;
        assert!(needs_quotes("", d));
        assert!(needs_quotes(" padded ", d));
        assert!(needs_quotes("true", d));
        assert!(needs_quotes("42", d));
        assert!(needs_quotes("a,b", d));
        assert!(needs_quotes("a:b", d));
        assert!(needs_quotes("- item", d));
        assert!(!needs_quotes("hello world", d));
        assert!(!needs_quotes("a|b", d));
        // with pipe active, the comma is free and the pipe is not
        assert!(!needs_quotes("a,b", Delimiter::Pipe));
        assert!(needs_quotes("a|b", Delimiter::Pipe));
    }

    #[test]
    fn key_rules() {
        assert!(is_unquoted_key("user_name"));
        assert!(is_unquoted_key("a.b.c"));
        assert!(!is_unquoted_key("2nd"));
        assert!(!is_unquoted_key("user-id"));
        assert!(is_identifier_segment("ab_1"));
        assert!(!is_identifier_segment("a.b"));
    }

    #[test]
    fn escapes() {
        let mut out = String::new();
        write_quoted(&mut out, "a\"b\\c\nd\u{1}");
        assert_eq!(out, "\"a\\\"b\\\\c\\nd\\u0001\"");
    }
}
