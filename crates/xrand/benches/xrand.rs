use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};

pub fn bench_string(c: &mut Criterion) {
    c.bench_function("string 16 alphanum", |b| {
        b.iter(|| xrand::string(black_box(16), None));
    });
}

pub fn bench_jitter(c: &mut Criterion) {
    c.bench_function("jitter 5m default factor", |b| {
        b.iter(|| xrand::jitter(black_box(Duration::from_secs(300)), None));
    });
}

criterion_group!(benches, bench_string, bench_jitter);
criterion_main!(benches);
