//! Decoder behavior: strict-mode validation failures and their lenient-mode
//! recoveries, plus parsing of hand-written input shapes the encoder never
//! produces.

use toon_codec::{decode, decode_with_options, toon, DecodeOptions, Error, Value};

fn lenient() -> DecodeOptions {
    DecodeOptions::new().with_strict(false)
}

// ---------------------------------------------------------------------------
// Length validation
// ---------------------------------------------------------------------------

#[test]
fn strict_inline_length_mismatch() {
    let err = decode("items[3]: a,b").unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            line: 1,
            declared: 3,
            actual: 2
        }
    );
}

#[test]
fn lenient_inline_takes_actual_count() {
    let value = decode_with_options("items[3]: a,b", &lenient()).unwrap();
    assert_eq!(value, toon!({"items": ["a", "b"]}));
}

#[test]
fn strict_list_length_mismatch_too_few() {
    let err = decode("a[2]:\n  - 1").unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            line: 2,
            declared: 2,
            actual: 1
        }
    );
}

#[test]
fn strict_list_length_mismatch_too_many() {
    let err = decode("a[1]:\n  - 1\n  - 2").unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            line: 3,
            declared: 1,
            actual: 2
        }
    );
}

#[test]
fn strict_tabular_row_count() {
    let err = decode("a[2]{x,y}:\n  1,2").unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            line: 2,
            declared: 2,
            actual: 1
        }
    );
}

#[test]
fn lenient_list_takes_actual_count() {
    let value = decode_with_options("a[5]:\n  - 1\n  - 2", &lenient()).unwrap();
    assert_eq!(value, toon!({"a": [1, 2]}));
}

// ---------------------------------------------------------------------------
// Tabular row arity
// ---------------------------------------------------------------------------

#[test]
fn strict_field_arity_mismatch() {
    let err = decode("a[1]{x,y}:\n  1,2,3").unwrap_err();
    assert_eq!(
        err,
        Error::FieldArityMismatch {
            line: 2,
            declared: 2,
            actual: 3
        }
    );
}

#[test]
fn lenient_short_rows_fill_with_null_and_long_rows_drop() {
    let value = decode_with_options("a[2]{x,y}:\n  1\n  1,2,3", &lenient()).unwrap();
    assert_eq!(
        value,
        toon!({"a": [{"x": 1, "y": null}, {"x": 1, "y": 2}]})
    );
}

// ---------------------------------------------------------------------------
// Indentation
// ---------------------------------------------------------------------------

#[test]
fn strict_rejects_non_multiple_indent() {
    assert!(matches!(
        decode("a:\n   b: 1").unwrap_err(),
        Error::Indent { line: 2, .. }
    ));
}

#[test]
fn strict_rejects_tab_indentation() {
    assert!(matches!(
        decode("\ta: 1").unwrap_err(),
        Error::Indent { line: 1, .. }
    ));
}

#[test]
fn strict_rejects_over_indented_children() {
    assert!(matches!(
        decode("a:\n    b: 1").unwrap_err(),
        Error::Indent { line: 2, .. }
    ));
}

#[test]
fn strict_rejects_indent_under_scalar_entry() {
    assert!(matches!(
        decode("a: 1\n  b: 2").unwrap_err(),
        Error::Indent { line: 2, .. }
    ));
}

#[test]
fn lenient_assigns_nearest_depth() {
    let value = decode_with_options("a:\n    b: 1", &lenient()).unwrap();
    assert_eq!(value, toon!({"a": {"b": 1}}));

    let value = decode_with_options(" a: 1", &lenient()).unwrap();
    assert_eq!(value, toon!({"a": 1}));
}

#[test]
fn lenient_counts_a_tab_as_one_space() {
    let value = decode_with_options("\ta: 1", &lenient()).unwrap();
    assert_eq!(value, toon!({"a": 1}));
}

// ---------------------------------------------------------------------------
// Strings and escapes
// ---------------------------------------------------------------------------

#[test]
fn unterminated_string() {
    assert_eq!(
        decode("s: \"abc").unwrap_err(),
        Error::UnterminatedString { line: 1 }
    );
}

#[test]
fn invalid_escape() {
    assert_eq!(
        decode("s: \"a\\qb\"").unwrap_err(),
        Error::InvalidEscape { line: 1, escape: 'q' }
    );
}

#[test]
fn lone_surrogate_is_invalid() {
    assert_eq!(
        decode("s: \"\\ud83d\"").unwrap_err(),
        Error::InvalidEscape { line: 1, escape: 'u' }
    );
}

#[test]
fn surrogate_pair_combines() {
    let value = decode("s: \"\\ud83d\\ude00\"").unwrap();
    assert_eq!(value, toon!({"s": "\u{1F600}"}));
}

#[test]
fn unicode_escape_decodes() {
    let value = decode("s: \"\\u0041\\u00e9\"").unwrap();
    assert_eq!(value, toon!({"s": "Aé"}));
}

// ---------------------------------------------------------------------------
// Headers and delimiters
// ---------------------------------------------------------------------------

#[test]
fn unknown_delimiter_in_header() {
    assert_eq!(
        decode("a[2;]: 1;2").unwrap_err(),
        Error::UnknownDelimiter { line: 1, found: ';' }
    );
}

#[test]
fn explicit_comma_marker_is_accepted() {
    let value = decode("a[2,]: 1,2").unwrap();
    assert_eq!(value, toon!({"a": [1, 2]}));
}

#[test]
fn zero_length_tabular_header_is_invalid() {
    assert!(matches!(
        decode("a[0]{x}:").unwrap_err(),
        Error::Parse { line: 1, .. }
    ));
}

#[test]
fn header_declared_delimiter_drives_row_splitting() {
    let value = decode("rows[2|]{sku|qty}:\n  A1|2\n  B2|1").unwrap();
    assert_eq!(
        value,
        toon!({"rows": [{"sku": "A1", "qty": 2}, {"sku": "B2", "qty": 1}]})
    );
}

#[test]
fn quoted_cells_may_contain_the_delimiter() {
    let value = decode("a[2]: \"x,y\",z").unwrap();
    assert_eq!(value, toon!({"a": ["x,y", "z"]}));
}

// ---------------------------------------------------------------------------
// Duplicate keys
// ---------------------------------------------------------------------------

#[test]
fn strict_duplicate_key() {
    assert_eq!(
        decode("a: 1\na: 2").unwrap_err(),
        Error::DuplicateKey {
            line: 2,
            key: "a".to_string()
        }
    );
}

#[test]
fn lenient_duplicate_key_keeps_last() {
    let value = decode_with_options("a: 1\na: 2", &lenient()).unwrap();
    assert_eq!(value, toon!({"a": 2}));
}

// ---------------------------------------------------------------------------
// Literals and scalars
// ---------------------------------------------------------------------------

#[test]
fn unquoted_literals_decode_by_shape() {
    let value = decode("a: null\nb: true\nc: false\nd: 42\ne: 2.5\nf: hello").unwrap();
    assert_eq!(
        value,
        toon!({"a": null, "b": true, "c": false, "d": 42, "e": 2.5, "f": "hello"})
    );
}

#[test]
fn quoted_literals_stay_strings() {
    let value = decode("a: \"null\"\nb: \"true\"\nc: \"42\"").unwrap();
    assert_eq!(value, toon!({"a": "null", "b": "true", "c": "42"}));
}

#[test]
fn leading_zero_integers_decode_as_strings() {
    let value = decode("a: 007\nb: 0\nc: 0.5").unwrap();
    assert_eq!(value, toon!({"a": "007", "b": 0, "c": 0.5}));
}

#[test]
fn exponents_parse_as_numbers() {
    let value = decode("a: 1e3\nb: -2.5e-1").unwrap();
    assert_eq!(value, toon!({"a": 1000, "b": (-0.25)}));
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[test]
fn empty_document_is_an_empty_object() {
    assert_eq!(decode("").unwrap(), toon!({}));
    assert_eq!(decode("\n\n").unwrap(), toon!({}));
}

#[test]
fn bare_key_colon_is_an_empty_object() {
    assert_eq!(decode("a:").unwrap(), toon!({"a": {}}));
}

#[test]
fn crlf_input_is_accepted() {
    assert_eq!(
        decode("a: 1\r\nb: 2\r\n").unwrap(),
        toon!({"a": 1, "b": 2})
    );
}

#[test]
fn root_primitive_document() {
    assert_eq!(decode("hello").unwrap(), Value::from("hello"));
    assert_eq!(decode("42").unwrap(), Value::from(42));
    assert_eq!(decode("\"42\"").unwrap(), Value::from("42"));
}

#[test]
fn separator_line_is_not_interpreted() {
    // the --- separator belongs to external batching helpers
    assert_eq!(decode("---").unwrap(), Value::from("---"));
}

#[test]
fn strict_rejects_trailing_content_after_root_array() {
    assert!(matches!(
        decode("[1]: 1\nx: 2").unwrap_err(),
        Error::Parse { line: 2, .. }
    ));
}

#[test]
fn blank_lines_are_transparent() {
    let value = decode("a:\n\n  b: 1\n\nc: 2").unwrap();
    assert_eq!(value, toon!({"a": {"b": 1}, "c": 2}));
}

#[test]
fn quoted_keys_round_trip_structure() {
    let value = decode("\"user-id\": 1\n\"with space\": 2").unwrap();
    assert_eq!(value, toon!({"user-id": 1, "with space": 2}));
}
