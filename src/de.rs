//! Typed deserialization out of decoded values.
//!
//! The text parser produces a [`Value`] tree; this module makes that tree a
//! [`serde::Deserializer`] so any `T: Deserialize` can be read out of it.
//! [`from_str`] composes the two steps: parse the TOON text, then
//! deserialize the typed value.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use toon_codec::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let toon = "x: 1\ny: 2";
//! let point: Point = from_str(toon).unwrap();
//! assert_eq!(point, Point { x: 1, y: 2 });
//! ```

use crate::error::{Error, Result};
use crate::options::DecodeOptions;
use crate::value::{Number, Value};
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;
use std::io;

/// Deserializes an instance of type `T` from a decoded [`Value`].
///
/// # Errors
///
/// Returns an error if the value does not match the shape of `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

/// Deserializes an instance of type `T` from a string of TOON text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct User { id: u32, name: String }
///
/// let user: User = from_str("id: 7\nname: Ada").unwrap();
/// assert_eq!(user, User { id: 7, name: "Ada".to_string() });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOON or cannot be
/// deserialized to type `T`. Parse errors carry line numbers.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserializes an instance of type `T` from TOON text with custom options.
///
/// # Errors
///
/// Returns an error if the input is not valid TOON or cannot be
/// deserialized to type `T`.
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(crate::decode_with_options(s, options)?)
}

/// Deserializes an instance of type `T` from bytes of TOON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON, or
/// cannot be deserialized to type `T`.
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::message(e.to_string()))?;
    from_str(s)
}

/// Deserializes an instance of type `T` from an IO stream of TOON text.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid TOON, or the
/// data cannot be deserialized to type `T`.
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader.read_to_string(&mut string).map_err(Error::io)?;
    from_str(&string)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => {
                let seq = de::value::SeqDeserializer::new(arr.into_iter());
                de::Deserializer::deserialize_any(seq, visitor)
            }
            Value::Object(map) => {
                let map = de::value::MapDeserializer::new(map.into_iter());
                de::Deserializer::deserialize_any(map, visitor)
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let (variant, value) = match self {
            // externally tagged: a single-entry object or a bare variant name
            Value::Object(map) => {
                let mut iter = map.into_iter();
                let (variant, value) = iter.next().ok_or_else(|| {
                    Error::message("expected an enum variant, found an empty object")
                })?;
                if iter.next().is_some() {
                    return Err(Error::message(
                        "expected a single-entry object for an enum variant",
                    ));
                }
                (variant, Some(value))
            }
            Value::String(s) => (s, None),
            other => {
                return Err(Error::message(format!(
                    "expected an enum variant, found {:?}",
                    other
                )))
            }
        };
        visitor.visit_enum(EnumDeserializer { variant, value })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, VariantDeserializer)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = self.variant.into_deserializer();
        let access = VariantDeserializer { value: self.value };
        seed.deserialize(variant).map(|v| (v, access))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None | Some(Value::Null) => Ok(()),
            Some(other) => Err(Error::message(format!(
                "expected unit variant, found {:?}",
                other
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(value),
            None => Err(Error::message("expected newtype variant value")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => {
                let seq = de::value::SeqDeserializer::new(arr.into_iter());
                de::Deserializer::deserialize_any(seq, visitor)
            }
            _ => Err(Error::message("expected tuple variant value")),
        }
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(map)) => {
                let map = de::value::MapDeserializer::new(map.into_iter());
                de::Deserializer::deserialize_any(map, visitor)
            }
            _ => Err(Error::message("expected struct variant value")),
        }
    }
}
