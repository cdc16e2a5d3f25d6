//! Implements a bit-array [Bloom filter].
//!
//! [Bloom filter]: https://en.wikipedia.org/wiki/Bloom_filter

use crate::{bits, Error, Filter, FilterParams, HashFunction};
use alloc::{boxed::Box, vec};
use core::f64::consts::LN_2;
use core::fmt;
use core::marker::PhantomData;
use libm::{ceil, exp, fmax, pow};

/// Optimal number of probes for `m` bits holding `size_estimate` elements, `⌈m/n · ln 2⌉`.
#[inline]
fn optimal_num_hashes(m: usize, size_estimate: usize) -> usize {
    // m and n are both positive, so the product is too and the ceiling is at least 1.
    ceil(m as f64 / size_estimate as f64 * LN_2) as usize
}

/// Bloom filter over a fixed-size bit array.
///
/// A `BloomFilter` built with a byte budget of `b` bytes holds `m = 8b` bits and probes
/// `k = ⌈m/n · ln 2⌉` of them per element, where `n` is the size estimate. Inserting sets the `k`
/// bits selected by the element's hashes under seeds `0..k`; querying checks the same bits.
///
/// [`probability_contains`] returns `0.0` when any probed bit is unset, which is a definitive
/// "not inserted": there are no false negatives. When every probed bit is set it returns
/// `1 - (1 - e^(-kn/m))^k` for the current insertion count `n`. That score is a property of the
/// filter's load, identical for every element that tests positive, and always greater than zero.
///
/// ```
/// use statfilter::{BloomFilter, Filter};
///
/// // Any `Fn(&E, i32) -> i32` is a hash function.
/// let hash = |word: &str, seed: i32| {
///     word.bytes()
///         .fold(seed, |h, b| h.wrapping_mul(31).wrapping_add(i32::from(b)))
/// };
/// let mut filter = BloomFilter::new(100, 10, hash).unwrap();
/// assert_eq!(filter.num_bits(), 80);
/// assert_eq!(filter.num_hashes(), 1);
///
/// let words: Vec<String> = (0..10).map(|i| i.to_string()).collect();
/// assert!(filter.add_all(words.iter().map(String::as_str)));
///
/// // no false negatives
/// for word in &words {
///     assert!(filter.probability_contains(word.as_str()) > 0.0);
/// }
/// ```
///
/// [`probability_contains`]: Filter::probability_contains
pub struct BloomFilter<E: ?Sized, H> {
    bits: Box<[u8]>,
    num_hashes: usize,
    num_inserted: usize,
    hash_function: H,
    _element: PhantomData<fn(&E)>,
}

impl<E: ?Sized, H> BloomFilter<E, H> {
    /// Creates an empty filter for `size_estimate` elements stored in `byte_budget` bytes.
    ///
    /// Fails if either value is zero.
    pub fn new(size_estimate: usize, byte_budget: usize, hash_function: H) -> Result<Self, Error> {
        let params = FilterParams::new(size_estimate, byte_budget)?;
        Ok(Self::with_params(params, hash_function))
    }

    /// Creates an empty filter from already validated parameters.
    pub fn with_params(params: FilterParams, hash_function: H) -> Self {
        let bits = vec![0u8; params.byte_budget()].into_boxed_slice();
        let num_hashes = optimal_num_hashes(bits.len() * 8, params.size_estimate());
        tracing::debug!(
            size_estimate = params.size_estimate(),
            m = bits.len() * 8,
            k = num_hashes,
            "created bloom filter"
        );

        Self {
            bits,
            num_hashes,
            num_inserted: 0,
            hash_function,
            _element: PhantomData,
        }
    }

    /// Number of bits in the filter, `m`.
    pub fn num_bits(&self) -> usize {
        self.bits.len() * 8
    }

    /// Number of bits probed per element, `k`.
    pub const fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// The packed bit array. Bit `i` lives in byte `i / 8` at position `i % 8`, counting from
    /// the least significant bit.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// `1 - (1 - e^(-kn/m))^k`, kept strictly positive so that a match never reads as a miss.
    fn positive_score(&self) -> f64 {
        let k = self.num_hashes as f64;
        let n = self.num_inserted as f64;
        let m = self.num_bits() as f64;
        let score = 1.0 - pow(1.0 - exp(-k * n / m), k);
        fmax(score, f64::MIN_POSITIVE)
    }
}

impl<E, H> Filter<E> for BloomFilter<E, H>
where
    E: ?Sized,
    H: HashFunction<E>,
{
    fn add(&mut self, element: &E) -> bool {
        let m = self.num_bits();
        for probe in 0..self.num_hashes {
            let hash = self.hash_function.hash(element, probe as i32);
            bits::set(&mut self.bits, bits::index(hash, m));
        }
        self.num_inserted += 1;
        true
    }

    fn clear(&mut self) {
        self.bits.fill(0);
        self.num_inserted = 0;
        tracing::trace!(m = self.num_bits(), "cleared bloom filter");
    }

    fn len(&self) -> usize {
        self.num_inserted
    }

    /// Returns `0.0` if `element` was definitely never inserted, otherwise the filter-wide
    /// estimate `1 - (1 - e^(-kn/m))^k`.
    fn probability_contains(&self, element: &E) -> f64 {
        let m = self.num_bits();
        let all_set = (0..self.num_hashes).all(|probe| {
            let hash = self.hash_function.hash(element, probe as i32);
            bits::get(&self.bits, bits::index(hash, m))
        });

        if all_set {
            self.positive_score()
        } else {
            0.0
        }
    }
}

impl<E: ?Sized, H: Clone> Clone for BloomFilter<E, H> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            num_hashes: self.num_hashes,
            num_inserted: self.num_inserted,
            hash_function: self.hash_function.clone(),
            _element: PhantomData,
        }
    }
}

impl<E: ?Sized, H: fmt::Debug> fmt::Debug for BloomFilter<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("num_bits", &self.num_bits())
            .field("num_hashes", &self.num_hashes)
            .field("num_inserted", &self.num_inserted)
            .field("hash_function", &self.hash_function)
            .finish()
    }
}

/// Lists every bit, `0` or `1`, comma-separated. For inspection only; the format is not stable.
impl<E: ?Sized, H> fmt::Display for BloomFilter<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for offset in 0..self.num_bits() {
            if offset > 0 {
                f.write_str(",")?;
            }
            let bit = u8::from(bits::get(&self.bits, offset));
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
