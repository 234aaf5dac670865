use thiserror::Error;

use super::state::PrimeType;

/// All structured failure modes the sieve's external interfaces can report.
/// The hot loop itself never returns an error: once a `ResidueState` is
/// constructed, every operation on it is infallible by construction.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SieveError {
    #[error("malformed hex input: {0}")]
    MalformedHex(String),

    #[error("input exceeds the maximum supported size of {max_bits} bits")]
    Oversize { max_bits: u32 },

    #[error("search mode {0:?} is not supported")]
    UnsupportedMode(PrimeType),

    #[error("invalid small-prime table size: {0}")]
    InvalidTableSize(String),

    #[error("table size {0:?} is disabled in this build")]
    TableSizeDisabled(super::table::TableSize),
}
