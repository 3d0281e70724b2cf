//! Duplicate keys and layered configuration.
//!
//! A key written twice merges object values field by field; any other
//! value is replaced by the later occurrence. Concatenating a defaults file
//! with an override file therefore patches the defaults.
//!
//! Run with: cargo run --example merging

use serde_kv::{merge, parse, to_string_pretty, Value};
use std::error::Error;

const DEFAULTS: &str = r#"
// shipped with the application
"Network" {
    "Host" "updates.example.invalid"
    "Port" 443
    "Retry" { "Count" 3 "DelayMs" 500 }
}
"Channels" ["stable"]
"#;

const OVERRIDES: &str = r#"
// written by the user
"Network" {
    "Port" 8443
    "Retry" { "Count" 5 }
}
"Channels" ["beta" "stable"]
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Merging inside one document
    let layered = parse(&format!("{DEFAULTS}\n{OVERRIDES}"))?;
    println!("Merged in one parse:\n{}", to_string_pretty(&layered)?);

    // The same result from two separate documents
    let combined = merge(parse(DEFAULTS)?, parse(OVERRIDES)?);
    assert_eq!(combined, layered);

    let retry = layered
        .get_object()?
        .get("Network")
        .and_then(|n| n.as_object())
        .and_then(|n| n.get("Retry"))
        .and_then(Value::as_object)
        .ok_or("missing Network.Retry")?;
    println!(
        "Retry count {} with delay {}ms",
        retry.get("Count").and_then(Value::as_f64).unwrap_or_default(),
        retry.get("DelayMs").and_then(Value::as_f64).unwrap_or_default()
    );

    // A type conflict replaces instead of merging
    let replaced = parse(r#""Network" { "Port" 1 } "Network" "offline""#)?;
    println!("\nType conflict:\n{}", to_string_pretty(&replaced)?);

    Ok(())
}
