//! Inspecting and building `Value` trees at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use serde_kv::{kv, parse, to_string, to_value, KvMap, Value};
use std::error::Error;

#[derive(Serialize)]
struct Plugin {
    name: String,
    enabled: bool,
    priority: u8,
}

fn describe(key: &str, value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            println!("{pad}{key}: object with {} keys", map.len());
            for (k, v) in map {
                describe(k, v, depth + 1);
            }
        }
        Value::Array(items) => {
            println!("{pad}{key}: array of {}", items.len());
            for (i, item) in items.iter().enumerate() {
                describe(&i.to_string(), item, depth + 1);
            }
        }
        scalar => println!("{pad}{key}: {} = {}", scalar.type_name(), scalar),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = parse(
        r#"
        "Host" "localhost"
        "Port" 8080
        "Features" ["auth" "logging"]
        "Limits" { "Connections" 64 "TimeoutSecs" 2.5 }
    "#,
    )?;

    describe("root", &settings, 0);

    // Checked accessors return TypeMismatch instead of panicking
    let root = settings.get_object()?;
    let port = root.get("Port").map(Value::get_number).transpose()?;
    println!("\nPort as number: {:?}", port);
    if let Some(Err(e)) = root.get("Port").map(Value::get_string) {
        println!("Port as string: {}", e);
    }

    // Structs convert to the same tree the parser produces
    let plugin = Plugin {
        name: "metrics".to_string(),
        enabled: false,
        priority: 10,
    };
    let plugin_value = to_value(&plugin)?;
    assert_eq!(
        plugin_value,
        kv!({ "name": "metrics", "enabled": false, "priority": 10 })
    );

    // Objects can be assembled key by key
    let mut extended: KvMap = root.clone();
    extended.insert("Plugin", plugin_value);
    extended.insert("Verbose", Value::from_bool(true));
    println!("\nExtended: {}", to_string(&extended)?);

    // Equality ignores key order, never mixes variants
    assert_eq!(
        Value::object([("a", 1), ("b", 2)]),
        Value::object([("b", 2), ("a", 1)])
    );
    assert_ne!(Value::from_bool(true), Value::from(1));

    Ok(())
}
