//! Implements a holographic filter: a superposition of pseudo-Gaussian projections queried by
//! cosine similarity.

use crate::gaussian::{cosine_similarity, hash_to_gaussian};
use crate::{Error, Filter, FilterParams, HashFunction};
use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;
use core::marker::PhantomData;
use libm::acos;

/// Offset the query angle is subtracted from.
const SCORE_OFFSET: f64 = 1.4;

/// Bytes per trace accumulator.
const CELL_BYTES: usize = core::mem::size_of::<i32>();

/// Holographic filter over a fixed-length memory trace.
///
/// Every element is projected onto a vector with one pseudo-Gaussian component per trace cell:
/// cell `i` takes the element's hash under seed `i` and maps it through [`hash_to_gaussian`].
/// Inserting adds the projection to the trace, so the trace is the superposition of every
/// inserted element. A `HolographicFilter` with a byte budget of `b` bytes has `b / 4` cells.
///
/// [`probability_contains`] projects the queried element the same way and returns
/// `1.4 - acos(cos θ)`, where `θ` is the angle between the projection and the trace. The score
/// grows with similarity, reaching `1.4` for a trace that holds only that element, but it is a
/// relative confidence rather than a calibrated probability. While the trace has zero magnitude
/// (nothing inserted, or fewer than four bytes of budget) the angle is undefined and the score
/// is `0.0`.
///
/// Unlike a Bloom filter, a holographic filter can report a low score for an inserted element
/// once many elements share the trace. [`len`] counts every `add` call since construction or the
/// last [`clear`].
///
/// ```
/// # #[cfg(feature = "murmur3")]
/// # {
/// use statfilter::{Filter, HolographicFilter, Murmur3};
///
/// let mut filter = HolographicFilter::new(10, 400, Murmur3).unwrap();
/// assert_eq!(filter.trace().len(), 100);
///
/// filter.add("apple");
/// filter.add("banana");
/// assert_eq!(filter.len(), 2);
///
/// let apple = filter.probability_contains("apple");
/// let grape = filter.probability_contains("grape");
/// assert!(apple > grape, "{} <= {}", apple, grape);
/// # }
/// ```
///
/// [`hash_to_gaussian`]: crate::hash_to_gaussian
/// [`probability_contains`]: Filter::probability_contains
/// [`len`]: Filter::len
/// [`clear`]: Filter::clear
pub struct HolographicFilter<E: ?Sized, H> {
    trace: Box<[i32]>,
    num_inserted: usize,
    hash_function: H,
    _element: PhantomData<fn(&E)>,
}

impl<E: ?Sized, H> HolographicFilter<E, H> {
    /// Creates an empty filter for `size_estimate` elements stored in `byte_budget` bytes.
    ///
    /// Fails if either value is zero.
    pub fn new(size_estimate: usize, byte_budget: usize, hash_function: H) -> Result<Self, Error> {
        let params = FilterParams::new(size_estimate, byte_budget)?;
        Ok(Self::with_params(params, hash_function))
    }

    /// Creates an empty filter from already validated parameters.
    pub fn with_params(params: FilterParams, hash_function: H) -> Self {
        let trace = vec![0i32; params.byte_budget() / CELL_BYTES].into_boxed_slice();
        tracing::debug!(
            size_estimate = params.size_estimate(),
            cells = trace.len(),
            "created holographic filter"
        );

        Self {
            trace,
            num_inserted: 0,
            hash_function,
            _element: PhantomData,
        }
    }

    /// The memory trace, one accumulator per cell.
    pub fn trace(&self) -> &[i32] {
        &self.trace
    }
}

impl<E, H> HolographicFilter<E, H>
where
    E: ?Sized,
    H: HashFunction<E>,
{
    #[inline]
    fn component(&self, element: &E, cell: usize) -> i32 {
        hash_to_gaussian(self.hash_function.hash(element, cell as i32))
    }

    fn projection(&self, element: &E) -> Vec<i32> {
        (0..self.trace.len())
            .map(|cell| self.component(element, cell))
            .collect()
    }
}

impl<E, H> Filter<E> for HolographicFilter<E, H>
where
    E: ?Sized,
    H: HashFunction<E>,
{
    fn add(&mut self, element: &E) -> bool {
        for cell in 0..self.trace.len() {
            let g = self.component(element, cell);
            self.trace[cell] = self.trace[cell].wrapping_add(g);
        }
        self.num_inserted += 1;
        true
    }

    fn clear(&mut self) {
        self.trace.fill(0);
        self.num_inserted = 0;
        tracing::trace!(cells = self.trace.len(), "cleared holographic filter");
    }

    fn len(&self) -> usize {
        self.num_inserted
    }

    /// Returns `1.4 - acos(cos θ)` for the angle `θ` between the element's projection and the
    /// trace, in `[1.4 - π, 1.4]`, or `0.0` while the trace is empty.
    fn probability_contains(&self, element: &E) -> f64 {
        match cosine_similarity(&self.projection(element), &self.trace) {
            Some(cos) => SCORE_OFFSET - acos(cos),
            None => 0.0,
        }
    }
}

impl<E: ?Sized, H: Clone> Clone for HolographicFilter<E, H> {
    fn clone(&self) -> Self {
        Self {
            trace: self.trace.clone(),
            num_inserted: self.num_inserted,
            hash_function: self.hash_function.clone(),
            _element: PhantomData,
        }
    }
}

impl<E: ?Sized, H: fmt::Debug> fmt::Debug for HolographicFilter<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolographicFilter")
            .field("cells", &self.trace.len())
            .field("num_inserted", &self.num_inserted)
            .field("hash_function", &self.hash_function)
            .finish()
    }
}

/// Lists every trace accumulator, comma-separated. For inspection only; the format is not
/// stable.
impl<E: ?Sized, H> fmt::Display for HolographicFilter<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, value) in self.trace.iter().enumerate() {
            if cell > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
