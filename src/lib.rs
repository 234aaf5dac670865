//! # qsieve — SIMD-friendly prime candidate sieve
//!
//! A branch-free, 16-bit-lane trial-division sieve for generating streams
//! of prime candidates ahead of an external bignum primality proof. See
//! [`sieve`] for the core algorithm and [`numtheory`] for the small
//! general-purpose helpers it and its tests build on.
//!
//! This crate proves nothing about its survivors: it only rejects
//! candidates with a small factor, cheaply and in strictly increasing
//! order, leaving deterministic primality proving to an external bignum
//! library.

pub mod numtheory;
pub mod sieve;
