//! Maps hashes onto a discretized Gaussian and compares the resulting vectors.

use libm::sqrt;

/// Number of hash bits treated as coin flips.
const FLIPS: u32 = 16;

/// Converts a hash into an approximately Gaussian integer.
///
/// Each of the low 16 bits of `hash` is a fair coin: a set bit counts `+1`, a clear bit `-1`.
/// The sum is binomial, so values lie in `[-16, 16]`, are always even, and cluster around zero.
#[inline]
pub const fn hash_to_gaussian(hash: i32) -> i32 {
    let heads = ((hash as u32) & ((1 << FLIPS) - 1)).count_ones() as i32;
    2 * heads - FLIPS as i32
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// Returns `None` when either vector has zero magnitude, where the angle is undefined.
pub fn cosine_similarity(a: &[i32], b: &[i32]) -> Option<f64> {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    let cos = dot / (sqrt(norm_a) * sqrt(norm_b));
    Some(cos.clamp(-1.0, 1.0))
}
