//! This library implements statistical membership filters -- fixed-size data structures that
//! record that an element was inserted and can later estimate whether an element was inserted.
//! Like other probabilistic filters they are useful for cheaply ruling out an expensive lookup,
//! trading exactness for a small, constant memory footprint.
//!
//! Two filters are provided:
//!
//! - [`BloomFilter`], a [bit-array Bloom filter]. It never reports a false negative; elements that
//!   test positive are scored with the theoretical collision estimate for the filter's load.
//! - [`HolographicFilter`], a superposition of pseudo-Gaussian projections of every inserted
//!   element, in the spirit of [holographic reduced representations]. Queries score the angle
//!   between an element's projection and the accumulated trace.
//!
//! Filters do not hash elements themselves. Each is constructed with a [`HashFunction`], a seeded
//! family of 32-bit hashes. `Murmur3`, enabled by the default `murmur3` feature, hashes byte-like
//! elements, [`HasherFunction`] adapts any [`Hasher`], and plain closures work for deterministic
//! tests. Filters cannot shrink, grow, be merged, or forget elements. This library is `no_std`
//! and [`needs_allocator`].
//!
//! [bit-array Bloom filter]: https://en.wikipedia.org/wiki/Bloom_filter
//! [holographic reduced representations]: https://en.wikipedia.org/wiki/Holographic_associative_memory
//! [`Hasher`]: core::hash::Hasher
//! [`needs_allocator`]: https://doc.rust-lang.org/1.9.0/book/custom-allocators.html

#![no_std]
// Configuration attributes
#![warn(missing_docs)]
#![forbid(clippy::all, clippy::cargo, clippy::nursery)]
#![allow(clippy::len_without_is_empty, clippy::useless_attribute)]

extern crate alloc;

mod bits;
mod bloom;
mod error;
mod gaussian;
mod hash_function;
mod holographic;
#[cfg(feature = "murmur3")]
pub mod murmur3;
mod params;

pub use bloom::BloomFilter;
pub use error::Error;
pub use gaussian::hash_to_gaussian;
pub use hash_function::{HashFunction, HasherFunction};
pub use holographic::HolographicFilter;
#[cfg(feature = "murmur3")]
pub use murmur3::Murmur3;
pub use params::FilterParams;

/// Methods common to statistical filters.
pub trait Filter<Type: ?Sized> {
    /// Inserts an element. Returns `false` if the insertion failed.
    ///
    /// Neither filter in this crate can fail an insertion once constructed; the return value
    /// leaves room for filters that can.
    fn add(&mut self, element: &Type) -> bool;

    /// Inserts every element, returning `false` if any insertion failed.
    ///
    /// A failed insertion does not stop the remaining elements from being inserted.
    fn add_all<'a, I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Type>,
        Type: 'a,
        Self: Sized,
    {
        elements
            .into_iter()
            .fold(true, |all_added, element| self.add(element) && all_added)
    }

    /// Removes every element, leaving the filter as it was when constructed.
    fn clear(&mut self);

    /// Returns the number of insertions since construction or the last [`clear`].
    ///
    /// [`clear`]: Filter::clear
    fn len(&self) -> usize;

    /// Scores how likely it is that `element` was inserted. Higher is more likely.
    ///
    /// The range and meaning of the score depend on the filter; refer to individual filters'
    /// documentation.
    fn probability_contains(&self, element: &Type) -> f64;
}
