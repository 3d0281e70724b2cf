//! Building values with the kv! macro.
//!
//! Run with: cargo run --example macro

use serde_kv::{kv, parse, to_string_pretty, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let window = kv!({
        "Title": "Launcher",
        "Size": [800, 600],
        "Resizable": true,
        "Theme": { "Accent": "#3366ff", "Opacity": 0.95 }
    });

    let text = to_string_pretty(&window)?;
    println!("{}", text);

    // The macro and the parser build the same tree
    assert_eq!(parse(&text)?, window);

    // Values from runtime data splice in as expressions
    let monitors = 2;
    let layout = kv!({ "Monitors": monitors, "Primary": (Value::from("DP-1")) });
    println!("{}", to_string_pretty(&layout)?);

    Ok(())
}
