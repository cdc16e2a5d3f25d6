//! Construction parameters shared by every filter.

use crate::Error;

/// The capacity a filter is built for.
///
/// Both values are fixed for the lifetime of a filter; filters never resize. `FilterParams` can
/// only be obtained through [`FilterParams::new`], so a value of this type is always valid.
///
/// ```
/// use statfilter::{Error, FilterParams};
///
/// let params = FilterParams::new(100, 10).unwrap();
/// assert_eq!(params.size_estimate(), 100);
/// assert_eq!(params.byte_budget(), 10);
///
/// assert_eq!(FilterParams::new(0, 10), Err(Error::InvalidSizeEstimate));
/// assert_eq!(FilterParams::new(100, 0), Err(Error::InvalidByteBudget));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    size_estimate: usize,
    byte_budget: usize,
}

impl FilterParams {
    /// Validates a size estimate (expected number of distinct elements) and a byte budget (the
    /// storage the filter may use).
    pub const fn new(size_estimate: usize, byte_budget: usize) -> Result<Self, Error> {
        if size_estimate == 0 {
            return Err(Error::InvalidSizeEstimate);
        }
        if byte_budget == 0 {
            return Err(Error::InvalidByteBudget);
        }
        Ok(Self {
            size_estimate,
            byte_budget,
        })
    }

    /// Expected number of distinct elements.
    pub const fn size_estimate(&self) -> usize {
        self.size_estimate
    }

    /// Bytes of backing storage.
    pub const fn byte_budget(&self) -> usize {
        self.byte_budget
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, FilterParams};

    #[test]
    fn test_rejects_zero_size_estimate() {
        for budget in [0, 1, 10, 4096] {
            assert_eq!(
                FilterParams::new(0, budget),
                Err(Error::InvalidSizeEstimate)
            );
        }
    }

    #[test]
    fn test_rejects_zero_byte_budget() {
        for estimate in [1, 100, usize::MAX] {
            assert_eq!(
                FilterParams::new(estimate, 0),
                Err(Error::InvalidByteBudget)
            );
        }
    }

    #[test]
    fn test_accepts_positive_values() {
        for (estimate, budget) in [(1, 1), (100, 10), (usize::MAX, 1), (1, 1 << 20)] {
            let params = FilterParams::new(estimate, budget).unwrap();
            assert_eq!(params.size_estimate(), estimate);
            assert_eq!(params.byte_budget(), budget);
        }
    }
}
