#[macro_use]
extern crate criterion;
extern crate rand;
extern crate statfilter;

use criterion::{BenchmarkId, Criterion};
use rand::distributions::Alphanumeric;
use rand::Rng;
use statfilter::{BloomFilter, Filter, Murmur3};

const SAMPLE_SIZE: usize = 100_000;

fn random_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(15)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn add(c: &mut Criterion) {
    let mut group = c.benchmark_group("BloomFilter");
    let group = group.sample_size(10);

    let keys = random_keys(SAMPLE_SIZE);

    group.bench_with_input(BenchmarkId::new("add", SAMPLE_SIZE), &keys, |b, keys| {
        b.iter(|| {
            let mut filter = BloomFilter::new(SAMPLE_SIZE, SAMPLE_SIZE, Murmur3).unwrap();
            filter.add_all(keys.iter().map(String::as_str))
        });
    });
}

fn probability_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("BloomFilter");

    let keys = random_keys(SAMPLE_SIZE);
    let mut filter = BloomFilter::new(SAMPLE_SIZE, SAMPLE_SIZE, Murmur3).unwrap();
    filter.add_all(keys.iter().map(String::as_str));

    group.bench_function(
        BenchmarkId::new("probability_contains", SAMPLE_SIZE),
        |b| {
            let key = &keys[rand::thread_rng().gen_range(0..SAMPLE_SIZE)];
            b.iter(|| filter.probability_contains(key.as_str()));
        },
    );
}

criterion_group!(bloom, add, probability_contains);
criterion_main!(bloom);
