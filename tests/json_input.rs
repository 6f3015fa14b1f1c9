use serde_json::json;
use strictify::{booleanify, numberify, stringify, value_from_json, Value};

#[test]
fn json_scalars() {
    assert_eq!(numberify(json!(42)).unwrap(), Some(42.0));
    assert_eq!(numberify(json!("2 ")).unwrap(), Some(2.0));
    assert_eq!(booleanify(json!(true)).unwrap(), Some(true));
    assert_eq!(booleanify(json!("0")).unwrap(), Some(false));
    assert_eq!(stringify(json!(1.5)).unwrap().as_deref(), Some("1.5"));
    assert_eq!(stringify(json!(null)).unwrap(), None);
}

#[test]
fn json_objects_and_arrays_are_unconvertible() {
    for input in [json!({"a": 1}), json!([5]), json!([]), json!({})] {
        assert_eq!(numberify(input.clone()).unwrap(), None);
        assert_eq!(booleanify(input.clone()).unwrap(), None);
        assert_eq!(stringify(input).unwrap(), None);
    }
}

#[test]
fn json_object_becomes_record() {
    let value = Value::from(json!({"min": 0, "max": 5}));
    match value {
        Value::Record(_) => {}
        other => panic!("Expected record, got {:?}", other),
    }
}

#[test]
fn parse_json_text() {
    assert_eq!(value_from_json("\"0x1A\"").unwrap(), Value::from("0x1A"));
    assert_eq!(numberify(value_from_json("\"0x1A\"").unwrap()).unwrap(), Some(26.0));
    assert_eq!(value_from_json("null").unwrap(), Value::Null);

    let err = value_from_json("{not json").unwrap_err();
    assert!(err.message.starts_with("Invalid JSON"));
}
