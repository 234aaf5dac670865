//! Small general-purpose number-theoretic helpers shared by the sieve's
//! build-time table generator and its test oracle.
//!
//! These are independent of the 16-bit lane machinery in `sieve::*`: a
//! naive-but-obviously-correct prime sieve and modular exponentiation,
//! useful as a cross-check for the SIMD-style tables without trusting the
//! same arithmetic twice.

/// Generate all primes up to `limit` using a wheel-30 sieve of Eratosthenes.
///
/// Uses a mod-30 wheel to store only numbers coprime to {2,3,5}, reducing
/// memory to 8/30 ~= 26.7% of the naive sieve.
pub fn generate_primes(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return vec![];
    }
    if limit < 7 {
        return [2, 3, 5].iter().copied().filter(|&p| p <= limit).collect();
    }

    const RESIDUES: [u8; 8] = [1, 7, 11, 13, 17, 19, 23, 29];
    const RES_TO_IDX: [u8; 30] = [
        255, 0, 255, 255, 255, 255, 255, 1, 255, 255, 255, 2, 255, 3, 255, 255, 255, 4, 255, 5,
        255, 255, 255, 6, 255, 255, 255, 255, 255, 7,
    ];

    let limit = limit as usize;
    let num_segments = limit / 30 + 1;
    let mut sieve = vec![0xFFu8; num_segments];

    let sqrt_limit = (limit as f64).sqrt() as usize + 1;
    for seg in 0..num_segments {
        for &ri in &RESIDUES {
            let n = seg * 30 + ri as usize;
            if n < 7 || n > sqrt_limit {
                continue;
            }
            let idx = RES_TO_IDX[ri as usize] as usize;
            if sieve[seg] & (1 << idx) == 0 {
                continue;
            }
            let mut m = n * n;
            while m <= limit {
                let ms = m / 30;
                let mr = m % 30;
                if mr < 30 && RES_TO_IDX[mr] != 255 {
                    sieve[ms] &= !(1 << RES_TO_IDX[mr]);
                }
                m += n;
            }
        }
    }

    let mut primes = Vec::with_capacity(estimate_prime_count(limit));
    primes.extend_from_slice(&[2, 3, 5]);
    for (seg, &byte) in sieve.iter().enumerate().take(num_segments) {
        if byte == 0 {
            continue;
        }
        for (bit_idx, &r) in RESIDUES.iter().enumerate() {
            if byte & (1 << bit_idx) != 0 {
                let n = seg * 30 + r as usize;
                if n > 5 && n <= limit {
                    primes.push(n as u64);
                }
            }
        }
    }
    primes
}

fn estimate_prime_count(n: usize) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (1.3 * nf / nf.ln()) as usize
}

/// Modular exponentiation: base^exp mod modulus, u128 intermediates.
pub fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result: u64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = (result as u128 * base as u128 % modulus as u128) as u64;
        }
        exp >>= 1;
        base = (base as u128 * base as u128 % modulus as u128) as u64;
    }
    result
}

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Trial division against every prime <= sqrt(n). Used only as a test
/// oracle; the sieve's own small-prime tables exist so production code
/// never has to do this.
pub fn is_prime_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in [2u64, 3, 5] {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    let mut i = 7u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_primes_matches_known_small_set() {
        assert_eq!(generate_primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn generate_primes_count_up_to_100() {
        assert_eq!(generate_primes(100).len(), 25);
    }

    #[test]
    fn pow_mod_matches_known_value() {
        assert_eq!(pow_mod(2, 10, 1000), 24);
    }

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn trial_division_oracle_matches_generate_primes() {
        let primes: std::collections::HashSet<u64> = generate_primes(2000).into_iter().collect();
        for n in 2..2000u64 {
            assert_eq!(is_prime_trial_division(n), primes.contains(&n), "mismatch at {n}");
        }
    }
}
