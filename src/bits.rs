//! Bit addressing over a packed byte array, least-significant bit first within each byte.

#[inline]
const fn locate(offset: usize) -> (usize, u8) {
    (offset / 8, 1 << (offset % 8))
}

/// Sets the bit at `offset`. Bits already set stay set.
#[inline]
pub fn set(bytes: &mut [u8], offset: usize) {
    let (byte, mask) = locate(offset);
    bytes[byte] |= mask;
}

/// Returns `true` if the bit at `offset` is set.
#[inline]
pub fn get(bytes: &[u8], offset: usize) -> bool {
    let (byte, mask) = locate(offset);
    bytes[byte] & mask != 0
}

/// Reduces a signed hash onto `0..m` using its absolute value.
///
/// `i32::MIN` has no positive counterpart in `i32`, so the magnitude is taken as `u32`.
#[inline]
pub const fn index(hash: i32, m: usize) -> usize {
    hash.unsigned_abs() as usize % m
}

#[cfg(test)]
mod test {
    use super::{get, index, set};

    #[test]
    fn test_lsb_first_within_byte() {
        let mut bytes = [0u8; 2];
        set(&mut bytes, 0);
        assert_eq!(bytes, [0b0000_0001, 0]);
        set(&mut bytes, 7);
        assert_eq!(bytes, [0b1000_0001, 0]);
        set(&mut bytes, 9);
        assert_eq!(bytes, [0b1000_0001, 0b0000_0010]);
    }

    #[test]
    fn test_set_is_union() {
        let mut bytes = [0u8; 4];
        for offset in [3, 3, 17, 31, 3] {
            set(&mut bytes, offset);
        }
        for offset in 0..32 {
            assert_eq!(get(&bytes, offset), matches!(offset, 3 | 17 | 31));
        }
    }

    #[test]
    fn test_index_uses_magnitude() {
        assert_eq!(index(13, 10), 3);
        assert_eq!(index(-13, 10), 3);
        assert_eq!(index(0, 80), 0);
        assert_eq!(index(i32::MIN, 80), (1usize << 31) % 80);
        assert_eq!(index(i32::MAX, 8), (i32::MAX as usize) % 8);
    }
}
