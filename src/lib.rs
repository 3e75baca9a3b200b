//! # toon_codec
//!
//! Encoder and decoder for TOON (Token-Oriented Object Notation), a textual
//! encoding of the JSON data model built for efficient communication with
//! Large Language Models.
//!
//! ## What is TOON?
//!
//! TOON trades JSON's braces, brackets and quote pairs for indentation,
//! declared array lengths and one-line tabular rows, typically cutting
//! 30-60% of the tokens an LLM reads while staying human-readable and
//! deterministically round-trippable.
//!
//! ## Key Features
//!
//! - **Token-Efficient**: minimalist syntax, context-aware quote elision
//! - **Tabular Arrays**: uniform object arrays declare their schema once
//!   and emit one delimiter-joined row per element
//! - **Lossless**: `decode(encode(v)) == v` for every value in the JSON
//!   domain, key order included
//! - **Strict by default**: declared lengths, row arity and indentation are
//!   validated; a lenient mode recovers best-effort
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]`
//!   via [`to_string`] and [`from_str`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
//!
//! let value = toon!({
//!     "name": "Ada",
//!     "age": 30,
//!     "tags": ["rust", "codec"]
//! });
//!
//! let text = encode(&value).unwrap();
//! assert_eq!(text, "name: Ada\nage: 30\ntags[2]: rust,codec");
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ### Typed round trips
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Ada".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Ada\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ### Tabular arrays
//!
//! Arrays of uniform objects serialize as tables:
//!
//! ```rust
//! use serde::Serialize;
//! use toon_codec::to_string;
//!
//! #[derive(Serialize)]
//! struct Product { id: u32, name: String, price: f64 }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.5 },
//! ];
//!
//! let text = to_string(&products).unwrap();
//! assert_eq!(text, "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.5");
//! ```
//!
//! ### Key folding and path expansion
//!
//! ```rust
//! use toon_codec::{
//!     decode_with_options, encode_with_options, toon, DecodeOptions, EncodeOptions,
//!     KeyFolding, PathExpansion,
//! };
//!
//! let value = toon!({"data": {"metadata": {"items": ["a", "b"]}}});
//!
//! let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
//! let text = encode_with_options(&value, &options).unwrap();
//! assert_eq!(text, "data.metadata.items[2]: a,b");
//!
//! let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
//! assert_eq!(decode_with_options(&text, &options).unwrap(), value);
//! ```
//!
//! ## Format
//!
//! See the [`format`] module for the text format reference: line forms,
//! quoting rules, delimiters, and the strict-mode contracts.

pub mod de;
mod encode;
pub mod error;
mod expand;
mod fold;
pub mod format;
mod lex;
pub mod macros;
pub mod map;
mod normalize;
pub mod options;
mod parse;
mod quote;
mod scan;
pub mod value;

pub use de::{from_reader, from_slice, from_str, from_str_with_options, from_value};
pub use error::{Error, Result};
pub use map::Map;
pub use normalize::to_value;
pub use options::{DecodeOptions, Delimiter, EncodeOptions, KeyFolding, PathExpansion};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Recursion bound shared by the emitter and the parser. Values and
/// documents nested past this depth fail with [`Error::DepthLimit`].
pub(crate) const MAX_DEPTH: usize = 1000;

/// Encodes a [`Value`] to a TOON string with default options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode, toon};
///
/// let text = encode(&toon!({"tags": ["a", "b", "c"]})).unwrap();
/// assert_eq!(text, "tags[3]: a,b,c");
/// ```
///
/// # Errors
///
/// Returns an error if the value nests past the depth bound.
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &EncodeOptions::default())
}

/// Encodes a [`Value`] to a TOON string with custom options.
///
/// # Errors
///
/// Returns an error if the value nests past the depth bound.
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> Result<String> {
    encode::encode_value(value, options)
}

/// Decodes a TOON string into a [`Value`] with default options
/// (strict mode on).
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode, toon};
///
/// let value = decode("name: Ada\nage: 30").unwrap();
/// assert_eq!(value, toon!({"name": "Ada", "age": 30}));
/// ```
///
/// # Errors
///
/// Returns an error with the offending line number when the input violates
/// the format (see [`Error`] for the failure kinds).
pub fn decode(text: &str) -> Result<Value> {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decodes a TOON string into a [`Value`] with custom options.
///
/// # Errors
///
/// Returns an error with the offending line number when the input violates
/// the format.
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<Value> {
    let value = parse::parse_document(text, options)?;
    match options.expand_paths {
        PathExpansion::Safe => expand::expand_value(value, options.strict),
        PathExpansion::Off => Ok(value),
    }
}

/// Serializes any `T: Serialize` to a TOON string.
///
/// # Errors
///
/// Returns an error if the value cannot be normalized into the JSON data
/// model (e.g. a map with non-string-coercible keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a TOON string with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_string_with_options, Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
/// let text = to_string_with_options(&vec![1, 2, 3], &options).unwrap();
/// assert_eq!(text, "[3|]: 1|2|3");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be normalized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    encode_with_options(&to_value(value)?, options)
}

/// Serializes any `T: Serialize` to a writer in TOON format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes()).map_err(Error::io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let toon = to_string(&point).unwrap();
        assert_eq!(toon, "x: 1\ny: 2");
        let point_back: Point = from_str(&toon).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Ada".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let toon = to_string(&user).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_value_round_trip() {
        let value = toon!({"name": "Ada", "scores": [95, 87, 92]});
        let text = encode(&value).unwrap();
        assert_eq!(text, "name: Ada\nscores[3]: 95,87,92");
        assert_eq!(decode(&text).unwrap(), value);
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Number(Number::Integer(1))));
                assert_eq!(obj.get("y"), Some(&Value::Number(Number::Integer(2))));
            }
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        let toon = to_string(&numbers).unwrap();
        assert_eq!(toon, "[5]: 1,2,3,4,5");
        let numbers_back: Vec<i32> = from_str(&toon).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn test_to_writer() {
        let point = Point { x: 1, y: 2 };
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &point).unwrap();
        assert_eq!(buffer, b"x: 1\ny: 2");
    }

    #[test]
    fn test_custom_options() {
        let user = User {
            id: 123,
            name: "Ada".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
        let toon = to_string_with_options(&user, &options).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }
}
