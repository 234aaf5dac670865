//! Residue-preserving advancer: steps every residue forward by the outer
//! walk's stride using addition alone, never division.

use super::lanes;
use super::table::TableSize;

/// Number of bare additions allowed before a full reduction pass becomes
/// mandatory. `reduce_preserving` only ever needs to add `m2r` once per
/// step, which is only guaranteed sufficient while no residue has drifted
/// more than one `p` past its canonical range; this budget is conservative
/// enough (2^14 steps of stride 6 is far below where a u16 residue plus
/// repeated stride could wrap past 2p) to make that guarantee hold.
pub const MAX_STRIDE_BUDGET: u32 = 1 << 14;

pub struct Advancer {
    budget: u32,
}

impl Default for Advancer {
    fn default() -> Self {
        Self::new()
    }
}

impl Advancer {
    pub fn new() -> Self {
        Advancer {
            budget: MAX_STRIDE_BUDGET,
        }
    }

    /// Adds `stride` to every residue in `modn` (the table's own size
    /// determines which `m2r` slice applies), reducing lane-by-lane.
    /// Triggers a mandatory catch-up reduction once the stride budget is
    /// exhausted.
    pub fn advance(&mut self, table: TableSize, modn: &mut [u16], stride: u16) {
        let m2r = table.m2r();
        let stride_lane = [stride; 16];
        let mut i = 0;
        while i + 16 <= modn.len() {
            let v: lanes::Lane = modn[i..i + 16].try_into().expect("chunk is exactly 16");
            let bumped = lanes::add16(&v, &stride_lane);
            let mr: lanes::Lane = m2r[i..i + 16].try_into().expect("chunk is exactly 16");
            let reduced = lanes::reduce_preserving(&bumped, &mr);
            modn[i..i + 16].copy_from_slice(&reduced);
            i += 16;
        }

        self.budget = self.budget.saturating_sub(stride as u32);
        if self.budget == 0 {
            self.catch_up(table, modn);
        }
    }

    /// Full modular reduction: folds any residue that may have drifted
    /// past the single-bump tolerance of `reduce_preserving` back into
    /// `[0, p)`. Mandatory once the stride budget is exhausted; otherwise
    /// never called, since the hot path avoids division entirely.
    fn catch_up(&mut self, table: TableSize, modn: &mut [u16]) {
        let p = table.p();
        for (v, &pv) in modn.iter_mut().zip(p.iter()) {
            *v %= pv;
        }
        self.budget = MAX_STRIDE_BUDGET;
    }
}
