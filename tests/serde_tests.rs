#![cfg(feature = "serde")]
//! Serialization tests for the data subset of `Value`.

use combinars::value::Value;
use rstest::rstest;

#[rstest]
#[case::null(Value::Null, "null")]
#[case::boolean(Value::Bool(true), "true")]
#[case::integer(Value::Int(-3), "-3")]
#[case::float(Value::Float(1.5), "1.5")]
#[case::string(Value::from("hi"), "\"hi\"")]
fn test_primitives_serialize_to_natural_json(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_containers_round_trip() {
    let original = Value::from_iter([
        (
            "items".to_string(),
            Value::from(vec![Value::Int(1), Value::from("two"), Value::Null]),
        ),
        ("flag".to_string(), Value::Bool(false)),
    ]);

    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, original);
}

#[rstest]
fn test_deserializes_arbitrary_json() {
    let decoded: Value =
        serde_json::from_str(r#"{"nested": {"deep": [1, 2.5, "three"]}}"#).unwrap();

    let deep = decoded
        .get("nested")
        .and_then(|nested| nested.get("deep"))
        .and_then(Value::as_seq)
        .unwrap();

    assert_eq!(deep[0], Value::Int(1));
    assert_eq!(deep[1], Value::Float(2.5));
    assert_eq!(deep[2], Value::from("three"));
}

#[rstest]
fn test_function_leaves_refuse_to_serialize() {
    let with_function = Value::from(vec![Value::function(|_| Value::Null)]);
    assert!(serde_json::to_string(&with_function).is_err());
}
