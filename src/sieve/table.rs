//! Small-prime tables: for each odd prime p (excluding 3, which the outer
//! 6k+-1 walk already rules out), its 16-bit modular inverse, the
//! floor-division limit, and `2^16 mod p`. Generated at build time (see
//! `build.rs`) rather than hand-transcribed, so the S/M/L tiers are
//! guaranteed to be prefixes of one another by construction.

include!(concat!(env!("OUT_DIR"), "/tables.rs"));

use super::error::SieveError;

/// Which tier of the small-prime table a search uses. Larger tables reject
/// more composites per candidate at the cost of more per-candidate work;
/// smaller tables fit in less cache and finish the common case faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSize {
    S,
    M,
    L,
}

impl TableSize {
    pub const fn len(self) -> usize {
        match self {
            TableSize::S => TABLE_S_LEN,
            TableSize::M => TABLE_M_LEN,
            TableSize::L => TABLE_L_LEN,
        }
    }

    /// Number of 64-lane blocks the tiered driver walks for this size.
    pub const fn block_count(self) -> usize {
        self.len() / super::group::GROUP
    }

    pub fn p(self) -> &'static [u16] {
        &P_L[..self.len()]
    }

    pub fn inv(self) -> &'static [u16] {
        &INV_L[..self.len()]
    }

    pub fn limit(self) -> &'static [u16] {
        &LIMIT_L[..self.len()]
    }

    pub fn m2r(self) -> &'static [u16] {
        &M2R_L[..self.len()]
    }

    /// Parses the `PRIMES` env var (one of 576/1856/3456) into a table size,
    /// falling back to `default` when unset. `default` is checked against
    /// `is_enabled()` just like an explicit value would be, so a disabled
    /// tier can never be selected silently.
    pub fn from_env_or(default: TableSize) -> Result<TableSize, SieveError> {
        match std::env::var("PRIMES") {
            Ok(v) => {
                let n: u64 = v
                    .trim()
                    .parse()
                    .map_err(|_| SieveError::InvalidTableSize(v.clone()))?;
                Self::from_count(n)
            }
            Err(_) if default.is_enabled() => Ok(default),
            Err(_) => Err(SieveError::TableSizeDisabled(default)),
        }
    }

    /// The largest tier compiled in. Spec section 6: "default is the
    /// largest enabled at build time."
    pub fn largest_enabled() -> Result<TableSize, SieveError> {
        [TableSize::L, TableSize::M, TableSize::S]
            .into_iter()
            .find(|size| size.is_enabled())
            .ok_or_else(|| SieveError::InvalidTableSize("no table size enabled".to_string()))
    }

    pub fn from_count(n: u64) -> Result<TableSize, SieveError> {
        let candidate = match n {
            x if x == TABLE_S_LEN as u64 => Some(TableSize::S),
            x if x == TABLE_M_LEN as u64 => Some(TableSize::M),
            x if x == TABLE_L_LEN as u64 => Some(TableSize::L),
            _ => None,
        };
        match candidate {
            Some(size) if size.is_enabled() => Ok(size),
            Some(size) => Err(SieveError::TableSizeDisabled(size)),
            None => Err(SieveError::InvalidTableSize(n.to_string())),
        }
    }

    /// Whether this tier is compiled in. Mirrors the original's
    /// `NO_SIMDDIVIDE_{S,M,L}` build switches as Cargo features; at least
    /// one tier must stay enabled (enforced by `default-features`, not at
    /// runtime).
    pub fn is_enabled(self) -> bool {
        match self {
            TableSize::S => cfg!(feature = "table-s"),
            TableSize::M => cfg!(feature = "table-m"),
            TableSize::L => cfg!(feature = "table-l"),
        }
    }
}
