use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_kv::{from_str, parse, render, render_with_options, serialize, to_string, KvOptions};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct FileEntry {
    path: String,
    hash: String,
    size: u64,
}

#[derive(Serialize, Deserialize, Clone)]
struct Manifest {
    version: u32,
    channel: String,
    files: Vec<FileEntry>,
}

fn manifest(size: u32) -> Manifest {
    Manifest {
        version: 12,
        channel: "stable".to_string(),
        files: (0..size)
            .map(|i| FileEntry {
                path: format!("lib/module_{}.so", i),
                hash: format!("{:064x}", u64::from(i) * 0x9e37_79b9),
                size: 4096 + u64::from(i),
            })
            .collect(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = r#""id" 123 "name" "Alice" "email" "alice@example.com" "active" true"#;

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_parse_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_manifest");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&manifest(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_render_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_manifest");

    for size in [10, 50, 100, 500].iter() {
        let value = serde_kv::to_value(&manifest(*size)).unwrap();
        let doc = serialize(value.get_object().unwrap());

        group.bench_with_input(BenchmarkId::new("compact", size), &doc, |b, doc| {
            b.iter(|| render(black_box(doc)))
        });
        group.bench_with_input(BenchmarkId::new("pretty", size), &doc, |b, doc| {
            b.iter(|| render_with_options(black_box(doc), &KvOptions::pretty()))
        });
    }
    group.finish();
}

fn benchmark_merge_heavy(c: &mut Criterion) {
    let text: String = (0..200)
        .map(|i| format!("\"Cfg\" {{ \"K{}\" {} \"Shared\" {{ \"N\" {} }} }}\n", i % 20, i, i))
        .collect();

    c.bench_function("parse_duplicate_keys", |b| b.iter(|| parse(black_box(&text))));
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_parse_manifest,
    benchmark_render_manifest,
    benchmark_merge_heavy
);
criterion_main!(benches);
