use serde_kv::{kv, parse, to_string, KvMap, Value};

#[test]
fn test_kv_macro_booleans() {
    assert_eq!(kv!(true), Value::Bool(true));
    assert_eq!(kv!(false), Value::Bool(false));
    assert_eq!(kv!(true), Value::from_bool(true));
}

#[test]
fn test_kv_macro_numbers() {
    assert_eq!(kv!(42), Value::Number(42.0));
    assert_eq!(kv!(3.5), Value::Number(3.5));
    assert_eq!(kv!((-123)), Value::Number(-123.0));
    assert_eq!(kv!(7u8), Value::Number(7.0));
}

#[test]
fn test_kv_macro_strings() {
    assert_eq!(kv!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(kv!(""), Value::String(String::new()));
    assert_eq!(kv!(String::from("owned")), Value::from("owned"));
}

#[test]
fn test_kv_macro_arrays() {
    assert_eq!(kv!([]), Value::Array(vec![]));

    assert_eq!(
        kv!([1, "hello", true]),
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("hello".to_string()),
            Value::Bool(true),
        ])
    );

    assert_eq!(
        kv!([[1, 2], [], [{}]]),
        Value::Array(vec![
            Value::array([1, 2]),
            Value::Array(vec![]),
            Value::Array(vec![Value::Object(KvMap::new())]),
        ])
    );
}

#[test]
fn test_kv_macro_objects() {
    assert_eq!(kv!({}), Value::Object(KvMap::new()));

    let value = kv!({
        "name": "Alice",
        "age": 30,
        "active": true,
        "scores": [95, 87.5],
        "address": { "city": "Oslo", "zip": "0150" },
    });

    let obj = value.get_object().unwrap();
    assert_eq!(obj.len(), 5);
    assert_eq!(obj.get("age"), Some(&Value::Number(30.0)));
    assert_eq!(
        obj.get("address").unwrap().get_object().unwrap().get("city"),
        Some(&Value::from("Oslo"))
    );
}

#[test]
fn test_kv_macro_matches_parsed_text() {
    let built = kv!({
        "Version": 2,
        "Files": [
            { "Path": "bin/app", "Size": 1024 },
            { "Path": "lib/core.so", "Size": 2048 }
        ],
        "Restart": false
    });

    let parsed = parse(
        r#"
        "Version" 2
        "Files" [
            { "Path" "bin/app" "Size" 1024 }
            { "Path" "lib/core.so" "Size" 2048 }
        ]
        "Restart" false
    "#,
    )
    .unwrap();

    assert_eq!(built, parsed);
}

#[test]
fn test_kv_macro_serializes() {
    let value = kv!({ "a": [1, { "b": "c" }] });
    assert_eq!(to_string(&value).unwrap(), r#""a" [1 {"b" "c"}]"#);
}
