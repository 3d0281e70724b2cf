//! Compact and pretty layouts.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_kv::{render_with_options, serialize, to_string, to_value, IndentChar, KvOptions};
use std::error::Error;

#[derive(Serialize)]
struct Build {
    target: String,
    features: Vec<String>,
    profile: Profile,
}

#[derive(Serialize)]
struct Profile {
    opt_level: u8,
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let build = Build {
        target: "x86_64-unknown-linux-gnu".to_string(),
        features: vec!["tls".to_string(), "zstd".to_string()],
        profile: Profile {
            opt_level: 3,
            debug: false,
        },
    };

    println!("Compact (default):\n{}\n", to_string(&build)?);

    // Canonicalize once, then render several layouts
    let value = to_value(&build)?;
    let doc = serialize(value.get_object()?);

    let layouts = [
        ("Pretty, 4 spaces", KvOptions::pretty()),
        ("Pretty, 2 spaces", KvOptions::pretty().with_indent(2)),
        (
            "Pretty, tabs",
            KvOptions::pretty()
                .with_indent(1)
                .with_indent_char(IndentChar::Tab),
        ),
    ];

    for (label, options) in layouts {
        println!("{}:\n{}", label, render_with_options(&doc, &options));
    }

    Ok(())
}
