//! 64-lane (4x16) group kernels: one "group" is a cache-friendly chunk of
//! 64 small-prime table entries, tested together before the tiered driver
//! moves on to the next group.

use zeroize::Zeroize;

use super::lanes::{self, Lane};

pub const LANE: usize = 16;
pub const GROUP: usize = 64;

fn as_lanes(s: &[u16]) -> [Lane; 4] {
    let mut out = [[0u16; 16]; 4];
    for (l, chunk) in out.iter_mut().zip(s.chunks_exact(LANE)) {
        l.copy_from_slice(chunk);
    }
    out
}

/// Reusable scratch for the per-lane products (`Q*inv mod 2^16` and the
/// twin/safe variants' companion products) and the divisibility masks
/// derived from them, owned by the tiered driver across one `no_factor*`
/// run and wiped via [`GroupScratch::wipe`] once that run is done. These
/// are the actual intermediates computed from the (possibly secret)
/// candidate under test, as opposed to a snapshot taken around them.
pub struct GroupScratch {
    v: [Lane; 4],
    aux: [Lane; 4],
    mask_q: [Lane; 4],
    mask_aux: [Lane; 4],
}

impl GroupScratch {
    pub fn new() -> Self {
        GroupScratch {
            v: [[0u16; 16]; 4],
            aux: [[0u16; 16]; 4],
            mask_q: [[0u16; 16]; 4],
            mask_aux: [[0u16; 16]; 4],
        }
    }

    /// Zeroizes every lane of every field. Called once by the driver after
    /// a block loop finishes, regardless of which block (if any) found a
    /// factor.
    pub fn wipe(&mut self) {
        for lane in self
            .v
            .iter_mut()
            .chain(self.aux.iter_mut())
            .chain(self.mask_q.iter_mut())
            .chain(self.mask_aux.iter_mut())
        {
            lane.zeroize();
        }
    }
}

impl Default for GroupScratch {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GroupScratch {
    fn drop(&mut self) {
        self.wipe();
    }
}

/// True if none of the 64 primes in this block divide Q.
pub fn no_factor_of_q(scratch: &mut GroupScratch, modn: &[u16], inv: &[u16], limit: &[u16]) -> bool {
    let modn = as_lanes(modn);
    let inv = as_lanes(inv);
    let limit = as_lanes(limit);
    for l in 0..4 {
        scratch.v[l] = lanes::mul16(&modn[l], &inv[l]);
        scratch.mask_q[l] = lanes::le_mask16(&scratch.v[l], &limit[l]);
    }
    scratch.mask_q.iter().all(lanes::is_all_zero)
}

/// True if none of the 64 primes in this block divide Q or 2Q+1 (safe-prime
/// form). Reuses `v = Q*inv mod 2^16` to derive `(2Q+1)*inv mod 2^16` via
/// `shladd16(v, inv)`, since multiplication distributes over the mod-2^16
/// ring: `(2Q+1)*inv = 2*(Q*inv) + inv`.
pub fn no_factor_of_q_or_2qp1(
    scratch: &mut GroupScratch,
    modn: &[u16],
    inv: &[u16],
    limit: &[u16],
) -> bool {
    let modn = as_lanes(modn);
    let inv = as_lanes(inv);
    let limit = as_lanes(limit);
    for l in 0..4 {
        scratch.v[l] = lanes::mul16(&modn[l], &inv[l]);
        scratch.mask_q[l] = lanes::le_mask16(&scratch.v[l], &limit[l]);
        scratch.aux[l] = lanes::shladd16(&scratch.v[l], &inv[l]);
        scratch.mask_aux[l] = lanes::le_mask16(&scratch.aux[l], &limit[l]);
    }
    scratch
        .mask_q
        .iter()
        .zip(scratch.mask_aux.iter())
        .all(|(q, aux)| lanes::is_all_zero(&lanes::or16(q, aux)))
}

/// True if none of the 64 primes in this block divide Q or Q+2 (twin-prime
/// form): `(Q+2)*inv = Q*inv + 2*inv` in the mod-2^16 ring.
pub fn no_factor_of_q_or_qp2(
    scratch: &mut GroupScratch,
    modn: &[u16],
    inv: &[u16],
    limit: &[u16],
) -> bool {
    let modn = as_lanes(modn);
    let inv = as_lanes(inv);
    let limit = as_lanes(limit);
    for l in 0..4 {
        scratch.v[l] = lanes::mul16(&modn[l], &inv[l]);
        scratch.mask_q[l] = lanes::le_mask16(&scratch.v[l], &limit[l]);
        let two_inv = lanes::add16(&inv[l], &inv[l]);
        scratch.aux[l] = lanes::add16(&scratch.v[l], &two_inv);
        scratch.mask_aux[l] = lanes::le_mask16(&scratch.aux[l], &limit[l]);
    }
    scratch
        .mask_q
        .iter()
        .zip(scratch.mask_aux.iter())
        .all(|(q, aux)| lanes::is_all_zero(&lanes::or16(q, aux)))
}
