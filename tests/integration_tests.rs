//! Integration tests for the serde surface: typed structs, enums, maps and
//! the io entry points, round-tripped through the codec.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Cursor;
use toon_codec::{
    from_reader, from_slice, from_str, from_value, to_string, to_string_with_options, to_value,
    to_writer, Delimiter, EncodeOptions, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Nested {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Metadata {
    created: String,
    version: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Shape {
    Point,
    Circle { radius: f64 },
    Pair(i32, i32),
    Label(String),
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        active: true,
    }
}

#[test]
fn struct_round_trip() {
    let user = sample_user();
    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        "id: 123\nname: Ada\nemail: ada@example.com\nactive: true"
    );
    assert_eq!(from_str::<User>(&text).unwrap(), user);
}

#[test]
fn vec_of_structs_is_tabular() {
    let products = vec![
        Product {
            sku: "A1".to_string(),
            name: "Widget".to_string(),
            price: 9.99,
            quantity: 2,
        },
        Product {
            sku: "B2".to_string(),
            name: "Gadget".to_string(),
            price: 14.5,
            quantity: 1,
        },
    ];
    let text = to_string(&products).unwrap();
    assert_eq!(
        text,
        "[2]{sku,name,price,quantity}:\n  A1,Widget,9.99,2\n  B2,Gadget,14.5,1"
    );
    assert_eq!(from_str::<Vec<Product>>(&text).unwrap(), products);
}

#[test]
fn nested_struct_round_trip() {
    let value = Nested {
        id: 42,
        metadata: Metadata {
            created: "yesterday".to_string(),
            version: 3,
        },
        tags: vec!["important".to_string(), "verified".to_string()],
    };
    let text = to_string(&value).unwrap();
    assert_eq!(
        text,
        "id: 42\nmetadata:\n  created: yesterday\n  version: 3\ntags[2]: important,verified"
    );
    assert_eq!(from_str::<Nested>(&text).unwrap(), value);
}

#[test]
fn enum_variants_round_trip() {
    for shape in [
        Shape::Point,
        Shape::Circle { radius: 2.5 },
        Shape::Pair(1, -2),
        Shape::Label("big".to_string()),
    ] {
        let text = to_string(&shape).unwrap();
        assert_eq!(from_str::<Shape>(&text).unwrap(), shape);
    }
}

#[test]
fn enum_encodings() {
    assert_eq!(to_string(&Shape::Point).unwrap(), "Point");
    assert_eq!(
        to_string(&Shape::Circle { radius: 2.5 }).unwrap(),
        "Circle:\n  radius: 2.5"
    );
    assert_eq!(to_string(&Shape::Pair(1, -2)).unwrap(), "Pair[2]: 1,-2");
    assert_eq!(to_string(&Shape::Label("big".to_string())).unwrap(), "Label: big");
}

#[test]
fn options_round_trip() {
    assert_eq!(to_string(&Option::<i32>::None).unwrap(), "null");
    assert_eq!(from_str::<Option<i32>>("null").unwrap(), None);
    assert_eq!(from_str::<Option<i32>>("7").unwrap(), Some(7));
}

#[test]
fn maps_round_trip() {
    let mut map = BTreeMap::new();
    map.insert("alpha".to_string(), 1);
    map.insert("beta".to_string(), 2);
    let text = to_string(&map).unwrap();
    assert_eq!(text, "alpha: 1\nbeta: 2");
    assert_eq!(from_str::<BTreeMap<String, i32>>(&text).unwrap(), map);
}

#[test]
fn integer_keyed_maps_coerce_to_strings() {
    let mut map = BTreeMap::new();
    map.insert(1u32, "one");
    map.insert(2u32, "two");
    let text = to_string(&map).unwrap();
    assert_eq!(text, "\"1\": one\n\"2\": two");
}

#[test]
fn dates_serialize_as_rfc3339_strings() {
    let when: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let text = to_string(&when).unwrap();
    assert_eq!(text, "\"2024-01-15T10:30:00Z\"");
    assert_eq!(from_str::<DateTime<Utc>>(&text).unwrap(), when);

    // the Value conversion goes through the same rendering
    assert_eq!(Value::from(when), Value::from("2024-01-15T10:30:00+00:00"));
}

#[test]
fn tuples_round_trip() {
    let pair = (42i32, true);
    let text = to_string(&pair).unwrap();
    assert_eq!(text, "[2]: 42,true");
    assert_eq!(from_str::<(i32, bool)>(&text).unwrap(), pair);
}

#[test]
fn delimiter_option_flows_through_typed_surface() {
    let tags = vec!["a,b".to_string(), "c".to_string()];
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    let text = to_string_with_options(&tags, &options).unwrap();
    assert_eq!(text, "[2|]: a,b|c");
    assert_eq!(from_str::<Vec<String>>(&text).unwrap(), tags);
}

#[test]
fn writer_and_reader_round_trip() {
    let user = sample_user();
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &user).unwrap();
    let back: User = from_reader(Cursor::new(&buffer)).unwrap();
    assert_eq!(back, user);

    let back: User = from_slice(&buffer).unwrap();
    assert_eq!(back, user);
}

#[test]
fn value_and_typed_views_agree() {
    let user = sample_user();
    let value = to_value(&user).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("id").and_then(Value::as_i64), Some(123));
    assert_eq!(obj.get("name").and_then(Value::as_str), Some("Ada"));

    let back: User = from_value(value).unwrap();
    assert_eq!(back, user);
}

#[test]
fn serde_json_values_pass_through() {
    let json = serde_json::json!({
        "name": "Ada",
        "scores": [95, 87, 92],
        "nested": {"ok": true}
    });
    let text = to_string(&json).unwrap();
    assert_eq!(
        text,
        "name: Ada\nscores[3]: 95,87,92\nnested:\n  ok: true"
    );
    let back: serde_json::Value = from_str(&text).unwrap();
    assert_eq!(back, json);
}

#[test]
fn non_finite_floats_normalize_to_null() {
    assert_eq!(to_string(&f64::NAN).unwrap(), "null");
    assert_eq!(to_string(&f64::INFINITY).unwrap(), "null");
    assert_eq!(to_string(&f64::NEG_INFINITY).unwrap(), "null");
    assert_eq!(to_value(&-0.0f64).unwrap(), Value::from(0));
}
