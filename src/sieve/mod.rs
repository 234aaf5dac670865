//! # Sieve — SIMD-friendly prime candidate generation
//!
//! A branch-free trial-division sieve for finding prime candidates ahead of
//! an expensive exact primality proof. Given a starting integer Q0, walks
//! the outer 6k+-1 sequence testing each step against a table of small
//! primes via the Granlund-Montgomery exact-division-by-inverse trick: for
//! odd prime p and `inv = p^-1 mod 2^16`, `n*inv mod 2^16 <= floor(65535/p)`
//! iff `p | n`.
//!
//! ## Module map
//!
//! - [`table`]: the generated small-prime tables (p, inv, limit, m2r).
//! - [`state`]: the mutable residue state one search walks forward.
//! - [`lanes`]: 16-wide branch-free micro-operations.
//! - [`group`]: 64-lane compositions of the lane kernels, one per flavor.
//! - [`driver`]: the generic tiered table driver (S/M/L).
//! - [`advance`]: the residue-preserving advancer.
//! - [`init`]: the Horner-scheme bignum initializer.
//! - [`search`]: the plain/twin/safe search loops.
//!
//! ## References
//!
//! - Torbjorn Granlund, Peter L. Montgomery, "Division by Invariant
//!   Integers using Multiplication", PLDI 1994.
//! - Daniel Lemire, Owen Kaser, Nathan Kurz, "Faster Remainder by Direct
//!   Computation", Software: Practice and Experience, 2019.

pub mod advance;
pub mod driver;
pub mod error;
pub mod group;
pub mod init;
pub mod lanes;
pub mod search;
pub mod state;
pub mod table;

pub use error::SieveError;
pub use state::{PrimeType, ResidueState, SearchMode};
pub use table::TableSize;
