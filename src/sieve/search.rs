//! Search loops: orchestrate the advancer and the tiered driver to walk
//! forward from an initialized `ResidueState`, collecting survivors in
//! strict increasing order.

use super::advance::Advancer;
use super::driver::{self, Flavor};
use super::error::SieveError;
use super::state::{PrimeType, ResidueState};
use super::table::TableSize;

fn flavor_for(kind: PrimeType) -> Result<Flavor, SieveError> {
    if !kind.is_enabled() {
        return Err(SieveError::UnsupportedMode(kind));
    }
    match kind {
        PrimeType::Plain => Ok(Flavor::Plain),
        PrimeType::Safe => Ok(Flavor::Safe),
        PrimeType::Twin => Ok(Flavor::Twin),
        // Scaffolded only: accepted by the parser, but no search loop
        // exists for it regardless of the mode-fips186 feature.
        PrimeType::Fips186 => Err(SieveError::UnsupportedMode(PrimeType::Fips186)),
    }
}

/// Moves `state` forward by `stride`, keeping `modn`, `lsb`, `offset`, and
/// `mod6` in lockstep. The only place any of these four fields change.
fn step(state: &mut ResidueState, advancer: &mut Advancer, table: TableSize, stride: u16) {
    advancer.advance(table, &mut state.modn, stride);
    state.lsb = state.lsb.wrapping_add(stride as u64);
    state.offset = state.offset.wrapping_add(stride as u64);
    state.mod6 = ((state.mod6 as u16 + stride as u16) % 6) as u8;
}

/// Smallest non-negative delta that carries `mod6` into one of `targets`
/// (each in `0..6`), walking forward only — candidates never move backward.
fn delta_to_class(mod6: u8, targets: &[u8]) -> u16 {
    targets
        .iter()
        .map(|&t| (t as i16 - mod6 as i16).rem_euclid(6) as u16)
        .min()
        .expect("targets is non-empty")
}

/// Per spec.md 4.6: the stride that follows a valid mod6 position, chosen
/// so plain mode alternates between the 6k+1 and 6k+5 classes while twin
/// and safe mode hold at 6k+5.
fn next_stride(flavor: Flavor, mod6: u8) -> u16 {
    match flavor {
        Flavor::Plain => {
            if mod6 == 1 {
                4
            } else {
                2
            }
        }
        Flavor::Twin | Flavor::Safe => 6,
    }
}

fn debug_check_invariants(state: &ResidueState, flavor: Flavor) {
    debug_assert_eq!(state.mod6, (state.lsb % 6) as u8, "mod6 out of sync with lsb");
    match flavor {
        Flavor::Plain => debug_assert!(
            state.mod6 == 1 || state.mod6 == 5,
            "plain-mode candidate has mod6 = {}",
            state.mod6
        ),
        Flavor::Twin | Flavor::Safe => debug_assert_eq!(
            state.mod6, 5,
            "twin/safe-mode candidate has mod6 = {}",
            state.mod6
        ),
    }
    for (i, (&m, &p)) in state.modn.iter().zip(state.mode.table.p().iter()).enumerate() {
        debug_assert!((m as u32) < 2 * p as u32, "modn[{i}] = {m} drifted past 2p for p={p}");
    }
}

/// Advances `state` to the first position satisfying the flavor's mod6
/// requirement (§4.6's "initialize by advancing Q0 to ..." step), per
/// `PrimeType::Plain` -> `{1, 5}`, `Twin`/`Safe` -> `{5}`.
fn align_to_start(state: &mut ResidueState, advancer: &mut Advancer, table: TableSize, flavor: Flavor) {
    let targets: &[u8] = match flavor {
        Flavor::Plain => &[1, 5],
        Flavor::Twin | Flavor::Safe => &[5],
    };
    let delta = delta_to_class(state.mod6, targets);
    if delta > 0 {
        step(state, advancer, table, delta);
    }
}

/// Runs one bounded search starting from `state`'s current position,
/// collecting up to `count` survivors in strictly increasing order.
///
/// Before any test runs, `state` is advanced (if needed) to the first
/// position whose mod6 class satisfies the active flavor, matching spec.md
/// 4.6 and the invariants in spec.md 3: plain mode tests mod6 in `{1, 5}`,
/// alternating between the two classes; twin and safe mode hold at mod6
/// == 5 and advance by a constant stride of 6.
///
/// When `count == 0`, only the (possibly realigned) current position is
/// tested; the result contains at most one element and no further advance
/// occurs.
pub fn search(state: &mut ResidueState, count: usize) -> Result<Vec<u64>, SieveError> {
    let flavor = flavor_for(state.mode.kind)?;
    let table = state.mode.table;
    let mut advancer = Advancer::new();

    align_to_start(state, &mut advancer, table, flavor);
    debug_check_invariants(state, flavor);

    if count == 0 {
        let survives = driver::no_factor(flavor, table, &state.modn);
        return Ok(if survives { vec![state.lsb] } else { vec![] });
    }

    let mut survivors = Vec::with_capacity(count);
    while survivors.len() < count {
        if driver::no_factor(flavor, table, &state.modn) {
            survivors.push(state.lsb);
        }
        if survivors.len() >= count {
            break;
        }
        let stride = next_stride(flavor, state.mod6);
        step(state, &mut advancer, table, stride);
        debug_check_invariants(state, flavor);
    }
    Ok(survivors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::init;
    use crate::sieve::table::TableSize;

    #[test]
    fn plain_search_collects_strictly_increasing_survivors() {
        let mut state = init::init_from_hex("0x65", TableSize::S).unwrap(); // 101, prime
        let survivors = search(&mut state, 5).unwrap();
        assert_eq!(survivors.len(), 5);
        for w in survivors.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn count_zero_tests_only_q0_when_already_aligned() {
        let mut state = init::init_from_hex("0x19", TableSize::S).unwrap(); // 25 = 5*5, mod6 == 1
        assert_eq!(state.mod6, 1);
        let survivors = search(&mut state, 0).unwrap();
        assert!(survivors.is_empty());
        assert_eq!(state.lsb, 25, "count==0 on an already-aligned Q0 must not advance the state");
    }

    #[test]
    fn count_zero_realigns_an_off_class_q0_before_testing() {
        // 15 = 3*5, mod6 == 3: not a valid plain-mode class. The search
        // loop must realign to the nearest mod6 in {1, 5} (here, 17) before
        // testing, per spec.md 4.6 and invariant 5.
        let mut state = init::init_from_hex("0x0F", TableSize::S).unwrap();
        assert_eq!(state.mod6, 3);
        let survivors = search(&mut state, 0).unwrap();
        assert_eq!(state.lsb, 17);
        assert_eq!(state.mod6, 5);
        assert_eq!(survivors, vec![17], "17 is prime and has no small factor");
    }

    #[test]
    fn plain_mode_alternates_between_6k_plus_1_and_6k_plus_5() {
        let mut state = init::init_from_hex("0x65", TableSize::S).unwrap(); // 101, mod6 == 5
        let survivors = search(&mut state, 6).unwrap();
        for &q in &survivors {
            assert!(q % 6 == 1 || q % 6 == 5, "{q} mod 6 = {}", q % 6);
        }
    }

    #[test]
    fn fips186_mode_is_rejected() {
        let mut state = init::init_from_hex("0x65", TableSize::S).unwrap();
        state.mode.kind = PrimeType::Fips186;
        assert!(matches!(search(&mut state, 1), Err(SieveError::UnsupportedMode(_))));
    }

    #[test]
    fn safe_prime_search_produces_safe_pairs() {
        let mut state = init::init_from_hex("s:0x0B", TableSize::S).unwrap(); // 11: 2*11+1=23 prime
        let survivors = search(&mut state, 3).unwrap();
        for &q in &survivors {
            let candidate_2qp1 = 2 * q + 1;
            assert!(
                crate::numtheory::is_prime_trial_division(candidate_2qp1),
                "2Q+1={candidate_2qp1} for Q={q} should be a plausible safe-prime companion"
            );
        }
    }

    #[test]
    fn twin_search_produces_q_and_qp2_survivors() {
        let mut state = init::init_from_hex("t:0x05", TableSize::S).unwrap(); // 5: (5,7) twin
        let survivors = search(&mut state, 2).unwrap();
        assert_eq!(survivors.len(), 2);
    }
}
