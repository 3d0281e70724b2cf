//! Reading and rewriting an update manifest.
//!
//! Set `RUST_LOG=serde_kv=trace` to see the parser and renderer events.
//!
//! Run with: cargo run --example manifest

use serde::{Deserialize, Serialize};
use serde_kv::{from_str, to_writer_with_options, KvOptions};
use std::error::Error;
use tracing_subscriber::EnvFilter;

const MANIFEST: &str = r#"
// generated by the release pipeline
"Version" 12
"Channel" "stable"
"Files" [
    { "Path" "bin/app" "Hash" "9f2c0d1e" "Size" 1048576 }
    { "Path" "lib/core.so" "Hash" "01ab77fe" "Size" 524288 }
]
"Restart" true
"#;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Manifest {
    version: u32,
    channel: String,
    files: Vec<FileEntry>,
    restart: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FileEntry {
    path: String,
    hash: String,
    size: u64,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut manifest: Manifest = from_str(MANIFEST)?;
    let total: u64 = manifest.files.iter().map(|f| f.size).sum();
    println!(
        "Version {} on {}: {} files, {} bytes",
        manifest.version,
        manifest.channel,
        manifest.files.len(),
        total
    );

    manifest.version += 1;
    manifest.files.push(FileEntry {
        path: "share/readme.txt".to_string(),
        hash: "c0ffee00".to_string(),
        size: 2048,
    });

    println!("\nRewritten manifest:");
    to_writer_with_options(std::io::stdout().lock(), &manifest, KvOptions::pretty())?;

    Ok(())
}
