//! [`MurmurHash3`] x86_32, exposed as a seeded [`HashFunction`] over byte-like elements.
//!
//! [`MurmurHash3`]: https://github.com/aappleby/smhasher/blob/master/src/MurmurHash3.cpp
//! [`HashFunction`]: crate::HashFunction

use crate::HashFunction;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Finalization mix, causing all bits of the state to [avalanche].
///
/// [avalanche]: https://en.wikipedia.org/wiki/Avalanche_effect
#[inline]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[inline]
const fn scramble(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Hashes `data` with MurmurHash3 x86_32.
pub fn hash32(data: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h ^= scramble(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k = tail
            .iter()
            .rev()
            .fold(0u32, |k, &byte| (k << 8) | u32::from(byte));
        h ^= scramble(k);
    }

    // The length only feeds the low 32 bits; longer inputs wrap as in the reference.
    h ^= data.len() as u32;
    fmix32(h)
}

/// MurmurHash3 x86_32 over the bytes of an element.
///
/// The seed handed to [`HashFunction::hash`] is reinterpreted as the unsigned Murmur seed, so
/// each probe index selects an independent hash function.
///
/// ```
/// use statfilter::{BloomFilter, Filter, Murmur3};
///
/// let mut filter = BloomFilter::new(100, 10, Murmur3).unwrap();
/// filter.add("needle");
/// assert!(filter.probability_contains("needle") > 0.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Murmur3;

impl<E> HashFunction<E> for Murmur3
where
    E: AsRef<[u8]> + ?Sized,
{
    #[inline]
    fn hash(&self, element: &E, seed: i32) -> i32 {
        hash32(element.as_ref(), seed as u32) as i32
    }
}

#[cfg(test)]
mod test {
    use super::{fmix32, hash32, Murmur3};
    use crate::HashFunction;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(hash32(b"", 0), 0);
        assert_eq!(hash32(b"", 1), 0x514e_28b7);
        assert_eq!(hash32(b"", 0xffff_ffff), 0x81f1_6f39);
        assert_eq!(hash32(&[0, 0, 0, 0], 0), 0x2362_f9de);
        assert_eq!(hash32(b"aaaa", 0x9747_b28c), 0x5a97_808a);
        assert_eq!(hash32(b"Hello, world!", 0x9747_b28c), 0x2488_4cba);
    }

    #[test]
    fn test_tail_lengths_distinct() {
        // Exercises every tail length (0..=3 trailing bytes).
        let data = b"abcdefgh";
        let hashes: [u32; 5] = [
            hash32(&data[..4], 7),
            hash32(&data[..5], 7),
            hash32(&data[..6], 7),
            hash32(&data[..7], 7),
            hash32(&data[..8], 7),
        ];
        for i in 0..hashes.len() {
            for j in (i + 1)..hashes.len() {
                assert_ne!(hashes[i], hashes[j]);
            }
        }
    }

    #[test]
    fn test_fmix32_zero_fixed_point() {
        assert_eq!(fmix32(0), 0);
        assert_ne!(fmix32(1), 1);
    }

    #[test]
    fn test_hash_function_matches_hash32() {
        let element = "element";
        for seed in [-3, -1, 0, 1, 42, i32::MAX, i32::MIN] {
            assert_eq!(
                Murmur3.hash(element, seed),
                hash32(element.as_bytes(), seed as u32) as i32
            );
        }
    }

    #[test]
    fn test_hash_function_byte_like_elements_agree() {
        extern crate std;
        use std::string::String;
        use std::vec::Vec;

        let as_str = "agree";
        let as_string = String::from("agree");
        let as_vec: Vec<u8> = as_str.bytes().collect();

        assert_eq!(Murmur3.hash(as_str, 5), Murmur3.hash(&as_string, 5));
        assert_eq!(Murmur3.hash(as_str, 5), Murmur3.hash(&as_vec, 5));
        assert_eq!(Murmur3.hash(as_str, 5), Murmur3.hash(b"agree", 5));
    }
}
