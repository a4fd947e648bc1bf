//! Performance benchmarks for a3s-cron-describe
//!
//! Run with: cargo bench

use a3s_cron_describe::{decode_cron, parse_schedule, validate_cron};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const EXPRESSIONS: [&str; 5] = [
    "* * * * *",
    "5 4 * * sun",
    "0 0,12 1 */2 *",
    "1,*,5 */3 1-15/2 jan,jul mon-fri",
    "@weekly",
];

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_cron", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(validate_cron(black_box(expr)));
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_schedule", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(parse_schedule(black_box(expr)).unwrap());
            }
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_cron", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(decode_cron(black_box(expr)).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_validate, bench_parse, bench_decode);
criterion_main!(benches);
