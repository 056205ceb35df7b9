use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use shub_packages::{bag_to_rows, normalize_feature_bag, rows_to_bag};
use std::hint::black_box;

fn bench_normalize(c: &mut Criterion) {
    let payload = json!({
        "modules_enabled": ["exams", "fees", "attendance", "library", "transport"],
        "max_students": "2500",
        "max_staff": 120,
        "max_storage_gb": 50,
        "priority_support": "enabled",
        "notes": "flagship tenant",
    });

    c.bench_function("normalize_feature_bag", |b| {
        b.iter(|| normalize_feature_bag(black_box(Some(&payload))));
    });

    let bag = normalize_feature_bag(Some(&payload));
    c.bench_function("bag_to_rows_to_bag", |b| {
        b.iter(|| rows_to_bag(black_box(&bag_to_rows(black_box(&bag)))));
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
