//! The `toon!` macro for building [`crate::Value`] literals.

/// Builds a [`crate::Value`] from a JSON-like literal.
///
/// Only `null` and the two container shapes get dedicated rules; every
/// other token is an expression handed to the normalizer, so booleans,
/// numbers, strings and interpolated variables all take the same path as
/// [`crate::to_value`].
///
/// # Examples
///
/// ```rust
/// use toon_codec::toon;
///
/// let data = toon!({
///     "name": "Ada",
///     "age": 30,
///     "tags": ["rust", "codec"]
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::Value::Null
    };

    ([ $($item:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![ $( $crate::toon!($item) ),* ])
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Value::Object(
            [ $( ($key.to_string(), $crate::toon!($value)) ),* ]
                .into_iter()
                .collect::<$crate::Map>(),
        )
    };

    ($scalar:expr) => {
        $crate::to_value(&$scalar).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_toon_macro_primitives() {
        assert_eq!(toon!(null), Value::Null);
        assert_eq!(toon!(true), Value::Bool(true));
        assert_eq!(toon!(false), Value::Bool(false));
        assert_eq!(toon!(42), Value::Number(Number::Integer(42)));
        assert_eq!(toon!("hi"), Value::String("hi".to_string()));
    }

    #[test]
    fn test_toon_macro_collections() {
        assert_eq!(toon!([]), Value::Array(vec![]));
        assert_eq!(toon!({}), Value::Object(Map::new()));

        let value = toon!({"a": 1, "b": [2, 3]});
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(
            obj.get("b"),
            Some(&Value::Array(vec![Value::from(2), Value::from(3)]))
        );
    }

    #[test]
    fn test_toon_macro_nested() {
        let value = toon!({"outer": {"inner": "deep"}});
        let inner = value
            .as_object()
            .and_then(|o| o.get("outer"))
            .and_then(Value::as_object)
            .and_then(|o| o.get("inner"));
        assert_eq!(inner.and_then(Value::as_str), Some("deep"));
    }

    #[test]
    fn test_toon_macro_interpolation() {
        let name = "Ada";
        let value = toon!({"name": name, "scores": [1, 2]});
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name").and_then(Value::as_str), Some("Ada"));
    }
}
