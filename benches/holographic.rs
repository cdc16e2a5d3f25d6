#[macro_use]
extern crate criterion;
extern crate rand;
extern crate statfilter;

use criterion::{BenchmarkId, Criterion};
use rand::distributions::Alphanumeric;
use rand::Rng;
use statfilter::{Filter, HolographicFilter, Murmur3};

const SAMPLE_SIZE: usize = 1_000;
const BYTE_BUDGET: usize = 4096;

fn add(c: &mut Criterion) {
    let mut group = c.benchmark_group("HolographicFilter");

    let mut filter = HolographicFilter::new(SAMPLE_SIZE, BYTE_BUDGET, Murmur3).unwrap();

    group.bench_function(BenchmarkId::new("add", BYTE_BUDGET), |b| {
        let key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(15)
            .map(char::from)
            .collect();
        b.iter(|| filter.add(key.as_str()));
    });
}

fn probability_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("HolographicFilter");

    let mut rng = rand::thread_rng();
    let keys: Vec<String> = (0..SAMPLE_SIZE)
        .map(|_| rng.gen::<u64>().to_string())
        .collect();
    let mut filter = HolographicFilter::new(SAMPLE_SIZE, BYTE_BUDGET, Murmur3).unwrap();
    filter.add_all(keys.iter().map(String::as_str));

    group.bench_function(
        BenchmarkId::new("probability_contains", BYTE_BUDGET),
        |b| {
            let key = &keys[rng.gen_range(0..SAMPLE_SIZE)];
            b.iter(|| filter.probability_contains(key.as_str()));
        },
    );
}

criterion_group!(holographic, add, probability_contains);
criterion_main!(holographic);
