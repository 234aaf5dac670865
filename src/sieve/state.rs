//! Residue state: the mutable per-search record the advancer and tiered
//! driver operate on.

use super::table::TableSize;

/// Which family of candidate a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimeType {
    /// A single odd Q (PKCS#1-style candidate generation).
    Plain,
    /// Q and Q+2 both surviving the sieve.
    Twin,
    /// Q and 2Q+1 both surviving the sieve.
    Safe,
    /// FIPS-186 incremental search. Scaffolded only: parsing accepts it,
    /// the search dispatcher rejects it (see `sieve::search`).
    Fips186,
}

impl PrimeType {
    /// Whether this search flavor is compiled in. Mirrors the original's
    /// `NO_SIMD_{PLAINPRIME,TWINPRIME,SAFEPRIME,FIPS186PRIME}` build
    /// switches as Cargo features. `Fips186` has no search loop regardless
    /// of this flag (see `sieve::search::flavor_for`).
    pub fn is_enabled(self) -> bool {
        match self {
            PrimeType::Plain => cfg!(feature = "mode-plain"),
            PrimeType::Twin => cfg!(feature = "mode-twin"),
            PrimeType::Safe => cfg!(feature = "mode-safe"),
            PrimeType::Fips186 => cfg!(feature = "mode-fips186"),
        }
    }
}

/// A search's flavor plus the small-prime table tier it drives against.
#[derive(Debug, Clone, Copy)]
pub struct SearchMode {
    pub kind: PrimeType,
    pub table: TableSize,
}

/// The full mutable state of one candidate walk: residues of the current
/// candidate modulo every small prime in the chosen table, plus the
/// low-order tracking fields needed to report survivors and keep the
/// residues and the real candidate value in lockstep.
///
/// Invariants (see the sieve's property tests for the checks that enforce
/// these):
/// 1. `modn[i]` always equals the true `Q mod table.p()[i]`.
/// 2. `mod6` always equals the true `Q mod 6`.
/// 3. `lsb` always equals the true candidate's low 64 bits.
/// 4. Advancing by `stride` keeps every `modn[i]` in `[0, 2*p[i])` (the
///    residue-preserving invariant `reduce_preserving` maintains).
/// 5. `offset` is the total distance walked from the initializing Q0.
pub struct ResidueState {
    pub modn: Box<[u16]>,
    pub lsb: u64,
    pub mod6: u8,
    pub offset: u64,
    pub mode: SearchMode,

    /// FIPS-186 scaffolding: an optional additive increment, parsed but
    /// never driven by a search loop.
    pub incr: Option<Box<[u16]>>,
    pub mod6incr: Option<u8>,
    pub lsbi: Option<u64>,
    pub incr_len: Option<usize>,
}

impl ResidueState {
    pub fn table_size(&self) -> TableSize {
        self.mode.table
    }
}
