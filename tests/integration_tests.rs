use serde::{Deserialize, Serialize};
use serde_kv::{
    from_str, kv, parse, render, render_with_options, serialize, to_string, to_string_pretty,
    to_value, Error, KvMap, KvOptions, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
    note: Option<String>,
}

fn roundtrip(value: &Value) -> Value {
    let doc = serialize(value.get_object().unwrap());
    parse(&render(&doc)).unwrap()
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        r#""id" 123 "name" "Alice" "active" true "tags" ["admin" "developer"]"#
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
        note: None,
    };

    let text = to_string_pretty(&order).unwrap();
    assert!(!text.contains("note"));

    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_matches_json_data_model() {
    let order = Order {
        order_id: 7,
        customer: User {
            id: 1,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
        },
        items: vec![],
        total: 0.5,
        note: Some("leave at door".to_string()),
    };

    let json = serde_json::to_value(&order).unwrap();
    let from_kv: serde_json::Value = from_str(&to_string(&order).unwrap()).unwrap();
    assert_eq!(json, from_kv);
}

#[test]
fn test_parsing() {
    let text = r#"
// Comment
"StringValue" "Hello, world!"
"FloatValue1" 123.23
"FloatValue2" 0.05
"NestedArrays" [
  [1 2]
  [3 4]
  []
]
"IntValue" 50
"ArrayValue" [
  25
  "Test"
  // Another comment
  {
    "Key" "Value"
  }
]
"TestArray" [false "Foo" 55] // Yet another comment
"BooleanValue" true
"EmptyArray" []
"ObjectValue" {
  "Foo" "Bar"
}
"EmptyObject" {
}
"#;

    let value = parse(text).unwrap();
    let expected = kv!({
        "StringValue": "Hello, world!",
        "FloatValue1": 123.23,
        "FloatValue2": 0.05,
        "IntValue": 50,
        "TestArray": [false, "Foo", 55],
        "NestedArrays": [[1, 2], [3, 4], []],
        "BooleanValue": true,
        "ArrayValue": [25, "Test", { "Key": "Value" }],
        "EmptyArray": [],
        "ObjectValue": { "Foo": "Bar" },
        "EmptyObject": {}
    });
    assert_eq!(value, expected);
}

#[test]
fn test_negative_zero_field_roundtrip() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Offset {
        x: f64,
    }

    let text = to_string(&Offset { x: -0.0 }).unwrap();
    assert_eq!(text, r#""x" -0"#);
    let back: Offset = from_str(&text).unwrap();
    assert!(back.x.is_sign_negative());
}

#[test]
fn test_merging() {
    let text = r#"
        "Cfg" { "A" 1 "B" false "C" { "X" [1 2 3] } }
        "Cfg" { "B" true "D" 5 "C" { "Y" false } }
    "#;

    let value = parse(text).unwrap();
    let expected = kv!({
        "Cfg": {
            "A": 1,
            "B": true,
            "D": 5,
            "C": { "X": [1, 2, 3], "Y": false }
        }
    });
    assert_eq!(value, expected);
}

#[test]
fn test_merge_keeps_first_slot() {
    let value = parse(r#""A" 1 "B" 2 "A" 3"#).unwrap();
    let keys: Vec<_> = value.get_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["A", "B"]);
    assert_eq!(value.get_object().unwrap().get("A"), Some(&Value::from(3)));
}

#[test]
fn test_merge_type_conflicts_replace() {
    let cases = [
        (r#""K" {"A" 1} "K" "text""#, Value::from("text")),
        (r#""K" {"A" 1} "K" 4"#, Value::from(4)),
        (r#""K" {"A" 1} "K" false"#, Value::from_bool(false)),
        (r#""K" {"A" 1} "K" [1]"#, Value::array([1])),
        (r#""K" [1 2] "K" {"A" 1}"#, Value::object([("A", 1)])),
        (r#""K" [1 2] "K" [3]"#, Value::array([3])),
    ];

    for (text, expected) in cases {
        let value = parse(text).unwrap();
        assert_eq!(value.get_object().unwrap().get("K"), Some(&expected), "{text}");
    }
}

#[test]
fn test_serialize_and_deserialize() {
    let value = kv!({
        "Name": "updater",
        "Version": 1.25,
        "Beta": false,
        "Empty": {},
        "List": [],
        "Nested": { "Path": "C:\\Program Files\\\"app\"", "Sizes": [1, 2.5, 1000000] }
    });

    assert_eq!(roundtrip(&value), value);

    let pretty = render_with_options(
        &serialize(value.get_object().unwrap()),
        &KvOptions::pretty(),
    );
    assert_eq!(parse(&pretty).unwrap(), value);
}

#[test]
fn test_empty_containers() {
    let value = parse(r#""EmptyArray" [] "EmptyObject" {}"#).unwrap();
    let root = value.get_object().unwrap();

    assert_eq!(root.get("EmptyArray"), Some(&Value::Array(vec![])));
    assert_eq!(root.get("EmptyObject"), Some(&Value::Object(KvMap::new())));
    assert_ne!(root.get("EmptyArray"), root.get("EmptyObject"));
}

#[test]
fn test_comments_do_not_change_tree() {
    let with = parse("\"X\" 1 // comment\n\"Y\" 2").unwrap();
    let without = parse("\"X\" 1\n\"Y\" 2").unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_equality() {
    assert_ne!(Value::from("Test"), Value::from(10));
    assert_ne!(Value::from(1), Value::from_bool(true));
    assert_eq!(
        Value::object([("a", 1), ("b", 2)]),
        Value::object([("b", 2), ("a", 1)])
    );
    assert_ne!(Value::array([1, 2]), Value::array([2, 1]));
}

#[test]
fn test_unterminated_array_fails() {
    let err = parse(r#""X" [1 2"#).unwrap_err();
    assert!(matches!(
        err,
        Error::UnterminatedContainer { delimiter: '[', .. }
    ));
    assert!(!err.to_string().is_empty());

    assert!(parse("[1 2").is_err());
}

#[test]
fn test_enums() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Step {
        Download { url: String, size: u64 },
        Verify(String),
        Restart,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Plan {
        steps: Vec<Step>,
    }

    let plan = Plan {
        steps: vec![
            Step::Download {
                url: "https://example.invalid/app".to_string(),
                size: 4096,
            },
            Step::Verify("abc123".to_string()),
            Step::Restart,
        ],
    };

    let text = to_string(&plan).unwrap();
    assert_eq!(
        text,
        r#""steps" [{"Download" {"url" "https://example.invalid/app" "size" 4096}} {"Verify" "abc123"} "Restart"]"#
    );
    let back: Plan = from_str(&text).unwrap();
    assert_eq!(plan, back);
}

#[test]
fn test_to_value_matches_parse() {
    let user = User {
        id: 9,
        name: "Eve".to_string(),
        active: true,
        tags: vec!["x".to_string()],
    };
    let value = to_value(&user).unwrap();
    assert_eq!(value, parse(&to_string(&user).unwrap()).unwrap());
}

#[test]
fn test_duplicate_struct_fields_merge_before_deserialize() {
    let user: User = from_str(
        r#"
        "id" 1 "name" "first" "active" false "tags" []
        "name" "second"
    "#,
    )
    .unwrap();
    assert_eq!(user.name, "second");
}
