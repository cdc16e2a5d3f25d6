//! Implements the seeded hashing capability filters are built on.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A family of hash functions over `E`, indexed by a seed.
///
/// Filters call `hash` once per probe or trace cell, passing the probe index as the seed, so two
/// different seeds must behave like statistically independent hash functions. Implementations
/// must be pure: the same element and seed always produce the same value.
///
/// Any closure `Fn(&E, i32) -> i32` is a `HashFunction<E>`, which makes deterministic test
/// doubles easy to write:
///
/// ```
/// use statfilter::{BloomFilter, Filter};
///
/// let mut filter = BloomFilter::new(10, 4, |e: &u32, seed: i32| (*e as i32).wrapping_add(seed))
///     .unwrap();
/// filter.add(&7u32);
/// assert!(filter.probability_contains(&7u32) > 0.0);
/// ```
pub trait HashFunction<E: ?Sized> {
    /// Hashes `element` with the hash function selected by `seed`.
    fn hash(&self, element: &E, seed: i32) -> i32;
}

impl<E, F> HashFunction<E> for F
where
    E: ?Sized,
    F: Fn(&E, i32) -> i32,
{
    #[inline]
    fn hash(&self, element: &E, seed: i32) -> i32 {
        self(element, seed)
    }
}

/// Seeded hash functions for any [`Hash`] type, backed by a [`Hasher`].
///
/// Each call builds a fresh `H`, feeds it the seed followed by the element, and folds the 64-bit
/// result into 32 bits. The quality of the family depends on how well `H` mixes its input.
///
/// ```
/// # extern crate std;
/// use std::collections::hash_map::DefaultHasher;
/// use statfilter::{Filter, HasherFunction, HolographicFilter};
///
/// let mut filter = HolographicFilter::new(10, 256, HasherFunction::<DefaultHasher>::new())
///     .unwrap();
/// filter.add(&("alice", 31));
/// assert!(filter.probability_contains(&("alice", 31)) > filter.probability_contains(&("bob", 27)));
/// ```
///
/// [`Hash`]: core::hash::Hash
/// [`Hasher`]: core::hash::Hasher
pub struct HasherFunction<H> {
    _hasher: PhantomData<fn() -> H>,
}

impl<H> HasherFunction<H> {
    /// Creates the hash function family.
    pub const fn new() -> Self {
        Self {
            _hasher: PhantomData,
        }
    }
}

impl<H> Default for HasherFunction<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for HasherFunction<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for HasherFunction<H> {}

impl<H> fmt::Debug for HasherFunction<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HasherFunction")
    }
}

/// Folds a 64-bit hash into 32 bits, keeping entropy from both halves.
#[inline]
const fn fold(hash: u64) -> i32 {
    (hash ^ (hash >> 32)) as i32
}

impl<E, H> HashFunction<E> for HasherFunction<H>
where
    E: Hash + ?Sized,
    H: Hasher + Default,
{
    fn hash(&self, element: &E, seed: i32) -> i32 {
        let mut hasher = H::default();
        hasher.write_i32(seed);
        element.hash(&mut hasher);
        fold(hasher.finish())
    }
}
