//! One generic tiered table driver, parameterized by search flavor and
//! table size, replacing what the original implementation unrolled into
//! three near-identical S/M/L copies per flavor.

use super::group::{self, GROUP};
use super::table::TableSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Plain,
    Safe,
    Twin,
}

/// Walks every 64-wide block of `table`, testing `modn` against it with the
/// group kernel for `flavor`, and returns `false` at the first block that
/// finds a factor. The first block alone rejects the large majority of
/// composites, so later blocks only run when it survives.
///
/// One [`group::GroupScratch`] is allocated per call and reused across every
/// block. Its `Drop` impl wipes the per-lane products and hit masks it
/// held — real intermediates derived from the candidate under test — on
/// every exit path from this function, including an early return or a
/// panic unwind.
pub fn no_factor(flavor: Flavor, table: TableSize, modn: &[u16]) -> bool {
    let inv = table.inv();
    let limit = table.limit();
    let mut scratch = group::GroupScratch::new();
    for b in 0..table.block_count() {
        let r = b * GROUP..(b + 1) * GROUP;
        let survives = match flavor {
            Flavor::Plain => {
                group::no_factor_of_q(&mut scratch, &modn[r.clone()], &inv[r.clone()], &limit[r.clone()])
            }
            Flavor::Safe => group::no_factor_of_q_or_2qp1(
                &mut scratch,
                &modn[r.clone()],
                &inv[r.clone()],
                &limit[r.clone()],
            ),
            Flavor::Twin => group::no_factor_of_q_or_qp2(
                &mut scratch,
                &modn[r.clone()],
                &inv[r.clone()],
                &limit[r.clone()],
            ),
        };
        if !survives {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::init;

    #[test]
    fn driver_rejects_candidate_with_small_factor() {
        // 15 = 3*5 is odd; with 3 excluded from the table, 5 should still
        // catch it once the residue is initialized from Q0 = 15.
        let state = init::init_from_limbs(
            crate::sieve::PrimeType::Plain,
            TableSize::S,
            &[15u64],
        )
        .unwrap();
        assert!(!no_factor(Flavor::Plain, TableSize::S, &state.modn));
    }

    #[test]
    fn driver_accepts_candidate_with_no_small_factor() {
        // A genuine prime larger than every table entry's direct multiples.
        let state = init::init_from_limbs(
            crate::sieve::PrimeType::Plain,
            TableSize::S,
            &[1_000_003u64],
        )
        .unwrap();
        assert!(no_factor(Flavor::Plain, TableSize::S, &state.modn));
    }

    #[test]
    fn s_m_l_agree_on_a_composite() {
        let limbs = [21u64]; // 3*7, 3 excluded but 7 is in every tier
        for size in [TableSize::S, TableSize::M, TableSize::L] {
            let state =
                init::init_from_limbs(crate::sieve::PrimeType::Plain, size, &limbs).unwrap();
            assert!(!no_factor(Flavor::Plain, size, &state.modn));
        }
    }
}
