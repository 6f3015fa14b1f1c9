use strictify::{booleanify, Value};

fn b<V: Into<Value>>(v: V) -> Option<bool> {
    booleanify(v).unwrap()
}

#[test]
fn true_table() {
    assert_eq!(b(1), Some(true));
    assert_eq!(b(1.0), Some(true));
    assert_eq!(b("1"), Some(true));
    assert_eq!(b(true), Some(true));
}

#[test]
fn false_table() {
    assert_eq!(b(0), Some(false));
    assert_eq!(b(-0.0), Some(false));
    assert_eq!(b("0"), Some(false));
    assert_eq!(b(false), Some(false));
}

#[test]
fn everything_else_is_unconvertible() {
    assert_eq!(b(2), None);
    assert_eq!(b(-1), None);
    assert_eq!(b(0.5), None);
    assert_eq!(b("2"), None);
    assert_eq!(b(f64::NAN), None);
    assert_eq!(b(f64::INFINITY), None);
    assert_eq!(b("true"), None);
    assert_eq!(b("false"), None);
    assert_eq!(b(""), None);
    assert_eq!(b(" 1"), None);
    assert_eq!(b("1.0"), None);
    assert_eq!(b("yes"), None);
}

#[test]
fn null_is_unconvertible() {
    assert_eq!(b(Value::Null), None);
}

#[test]
fn output_is_a_fixed_point() {
    for input in [Value::from(1), Value::from("0"), Value::from(true)] {
        let once = b(&input).unwrap();
        assert_eq!(b(once), Some(once));
    }
}
