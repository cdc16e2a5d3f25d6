//! Errors raised while constructing filters.

use thiserror::Error;

/// Invalid filter configuration.
///
/// This is the only error a filter can produce. Once a filter is built, every operation on it
/// succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The expected number of elements was zero.
    #[error("size estimate must be 1 or more")]
    InvalidSizeEstimate,

    /// The storage budget was zero bytes.
    #[error("byte budget must be 1 or more")]
    InvalidByteBudget,
}
