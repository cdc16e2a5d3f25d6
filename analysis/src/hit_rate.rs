// Usage: hit_rate <Bloom|Holographic> [threshold] [byte budget] [--verbose]
//
// Inserts "0".."9", queries "0".."19" and prints the fraction of queries classified correctly:
// a query is a hit when (score > threshold) matches whether the word was inserted.
// Set RUST_LOG=debug to see the filter dimensions.

extern crate statfilter;
extern crate tracing_subscriber;

use statfilter::{BloomFilter, Filter, HolographicFilter, Murmur3};
use tracing_subscriber::EnvFilter;

const SIZE_ESTIMATE: usize = 100;
const INSERTED: usize = 10;
const QUERIED: usize = 20;

fn hit_rate<F: Filter<str>>(filter: &mut F, threshold: f64, verbose: bool) -> f64 {
    let words: Vec<String> = (0..QUERIED).map(|i| i.to_string()).collect();
    filter.add_all(words[..INSERTED].iter().map(String::as_str));

    let mut hits = 0;
    for (i, word) in words.iter().enumerate() {
        let score = filter.probability_contains(word);
        let inserted = i < INSERTED;
        if verbose {
            println!("{},{}", score, inserted);
        }
        if (score > threshold) == inserted {
            hits += 1;
        }
    }
    hits as f64 / QUERIED as f64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    args.retain(|a| a != "--verbose");

    let filter_str = args.first().expect("Expected filter argument");
    let threshold: f64 = match args.get(1) {
        Some(t) => t.parse().expect("Threshold must be a number"),
        None => 0.1,
    };
    let byte_budget = |default: usize| match args.get(2) {
        Some(b) => b.parse().expect("Byte budget must be a positive integer"),
        None => default,
    };

    let rate = match filter_str.as_str() {
        "Bloom" => {
            let mut filter = BloomFilter::new(SIZE_ESTIMATE, byte_budget(10), Murmur3)
                .expect("Invalid filter parameters");
            hit_rate(&mut filter, threshold, verbose)
        }
        "Holographic" => {
            let mut filter = HolographicFilter::new(SIZE_ESTIMATE, byte_budget(400), Murmur3)
                .expect("Invalid filter parameters");
            hit_rate(&mut filter, threshold, verbose)
        }
        _ => panic!("Filter {} is invalid", filter_str),
    };
    println!("{}", rate);
}
