//! Generates the small-prime tables consumed by `sieve::table`.
//!
//! Runs once at build time: sieves enough primes to fill the largest tier
//! (3456 entries, excluding 2 and 3), then computes each prime's 16-bit
//! modular inverse via Hensel lifting (the same doubling-precision trick
//! used for 64-bit Montgomery contexts elsewhere in this codebase, here run
//! to 16 bits), its floor-division limit, and `2^16 mod p`. Writing these as
//! a generated `include!`d file means the tables are never hand-transcribed
//! and are always internally consistent.

use std::env;
use std::fs;
use std::path::Path;

const TABLE_L_LEN: usize = 3456;
const TABLE_M_LEN: usize = 1856;
const TABLE_S_LEN: usize = 576;

fn sieve_primes(limit: u64) -> Vec<u64> {
    let limit = limit as usize;
    let mut is_composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for n in 2..=limit {
        if !is_composite[n] {
            primes.push(n as u64);
            let mut m = n * n;
            while m <= limit {
                is_composite[m] = true;
                m += n;
            }
        }
    }
    primes
}

/// Computes `p^-1 mod 2^16` for odd `p` via Hensel lifting: start from the
/// trivially-correct 1-bit inverse (p*1 = 1 mod 2 for any odd p) and double
/// the number of correct bits each iteration until 16 bits are covered.
fn inverse_mod_65536(p: u32) -> u16 {
    let mut inv: u32 = 1;
    for _ in 0..4 {
        inv = inv.wrapping_mul(2u32.wrapping_sub(p.wrapping_mul(inv))) & 0xFFFF;
    }
    inv as u16
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("tables.rs");

    // Comfortably more than the 3456th prime after excluding 2 and 3.
    let raw = sieve_primes(50_000);
    let odd_not_three: Vec<u64> = raw.into_iter().filter(|&p| p != 2 && p != 3).collect();
    assert!(
        odd_not_three.len() >= TABLE_L_LEN,
        "sieve limit too small to fill the L table: got {} primes",
        odd_not_three.len()
    );
    let chosen = &odd_not_three[..TABLE_L_LEN];

    let mut p_vals = Vec::with_capacity(TABLE_L_LEN);
    let mut inv_vals = Vec::with_capacity(TABLE_L_LEN);
    let mut limit_vals = Vec::with_capacity(TABLE_L_LEN);
    let mut m2r_vals = Vec::with_capacity(TABLE_L_LEN);

    for &p in chosen {
        let p32 = p as u32;
        let inv = inverse_mod_65536(p32);
        let limit = (65535u32 / p32) as u16;
        let m2r = (65536u32 % p32) as u16;
        p_vals.push(p as u16);
        inv_vals.push(inv);
        limit_vals.push(limit);
        m2r_vals.push(m2r);
    }

    let render = |name: &str, vals: &[u16]| -> String {
        let body = vals
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("pub static {name}: [u16; {TABLE_L_LEN}] = [{body}];\n")
    };

    let mut out = String::new();
    out.push_str(&format!("pub const TABLE_S_LEN: usize = {TABLE_S_LEN};\n"));
    out.push_str(&format!("pub const TABLE_M_LEN: usize = {TABLE_M_LEN};\n"));
    out.push_str(&format!("pub const TABLE_L_LEN: usize = {TABLE_L_LEN};\n"));
    out.push_str(&render("P_L", &p_vals));
    out.push_str(&render("INV_L", &inv_vals));
    out.push_str(&render("LIMIT_L", &limit_vals));
    out.push_str(&render("M2R_L", &m2r_vals));

    fs::write(&dest, out).expect("failed to write generated small-prime tables");
    println!("cargo:rerun-if-changed=build.rs");
}
