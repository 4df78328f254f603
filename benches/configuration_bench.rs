//! Benchmarks for configuration generation
//!
//! Run with: cargo bench --bench configuration_bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use search_config_sdk::{ConfigurationOptions, Record, classify, generate_configuration};
use serde_json::{Value, json};

/// Generate sample product records
fn generate_sample_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let price = 10.5 + i as f64;
            let tag = ["sale", "new", "outlet"][i % 3];
            let stock = i % 40;
            let active = i % 2 == 0;
            let value = json!({
                "title": format!("Product {}", i),
                "price": price,
                "stock": stock,
                "active": active,
                "location": format!("{}.5, {}.25", i % 90, i % 180),
                "image": format!("https://cdn.example.com/{}.png", i),
                "tags": tag,
                "added": "2024-01-15T10:30:00Z",
            });
            match value {
                Value::Object(map) => map,
                _ => unreachable!(),
            }
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let cases = vec![
        ("float", json!(2.5)),
        ("geo", json!("52.52, 13.405")),
        ("image", json!("photo.jpeg")),
        ("date", json!("2024-01-15T10:30:00Z")),
        ("list", json!("red, green, blue")),
        ("text", json!("a fairly ordinary sentence")),
    ];

    for (name, value) in cases {
        group.bench_with_input(BenchmarkId::new("value", name), &value, |b, value| {
            b.iter(|| black_box(classify(value, None)));
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_configuration");
    let options = ConfigurationOptions::builder().name("bench").build();

    for count in [10, 100, 1000].iter() {
        let records = generate_sample_records(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            b.iter(|| black_box(generate_configuration(records, &options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_generate);
criterion_main!(benches);
