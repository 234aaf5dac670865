//! Initializer: turns an external Q0 (hex string or raw big-endian bytes)
//! into a fully-populated `ResidueState` via Horner-scheme modular
//! reduction, one small prime at a time.

use super::error::SieveError;
use super::state::{PrimeType, ResidueState, SearchMode};
use super::table::TableSize;

/// Largest Q0 this crate will parse, in bits. Chosen generously above any
/// real RSA modulus half-size in current use.
pub const MAX_BITS: u32 = 8192;

/// Skips an optional `0x`/`0X`/`x`/`X` hex prefix.
fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('x'))
        .or_else(|| s.strip_prefix('X'))
        .unwrap_or(s)
}

/// Parses a hex string into big-endian bytes. An odd digit count is
/// tolerated by left-padding with an implicit zero nibble.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, SieveError> {
    let body = strip_hex_prefix(s.trim());
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SieveError::MalformedHex(s.to_string()));
    }
    let padded = if body.len() % 2 == 1 {
        format!("0{body}")
    } else {
        body.to_string()
    };
    (0..padded.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&padded[i..i + 2], 16).map_err(|_| SieveError::MalformedHex(s.to_string()))
        })
        .collect()
}

/// Converts big-endian bytes into big-endian u64 limbs, left-padding the
/// leading (possibly partial) limb with zero bytes.
pub fn bytes_to_limbs(bytes: &[u8]) -> Vec<u64> {
    if bytes.is_empty() {
        return vec![0];
    }
    let mut limbs = Vec::with_capacity(bytes.len().div_ceil(8));
    let lead = bytes.len() % 8;
    let mut idx = 0;
    if lead != 0 {
        let mut buf = [0u8; 8];
        buf[8 - lead..].copy_from_slice(&bytes[..lead]);
        limbs.push(u64::from_be_bytes(buf));
        idx = lead;
    }
    while idx < bytes.len() {
        let chunk: [u8; 8] = bytes[idx..idx + 8].try_into().expect("8-byte chunk");
        limbs.push(u64::from_be_bytes(chunk));
        idx += 8;
    }
    limbs
}

/// Horner-scheme reduction of a big-endian limb sequence modulo a small
/// (<= 16-bit) modulus. `mod264 = 2^64 mod modn`, computed once, folds each
/// limb in turn: `acc = (acc*mod264 + limb mod modn) mod modn`.
pub fn modn16(limbs: &[u64], modn: u16) -> u16 {
    let modn = modn as u64;
    let mod264 = 0u64.wrapping_sub(modn) % modn;
    let mut acc = 0u64;
    for &limb in limbs {
        acc = (acc * mod264 + (limb % modn)) % modn;
    }
    acc as u16
}

/// Splits off a leading `t:` or `s:` mode prefix; anything else is plain.
pub fn parse_mode_prefix(input: &str) -> (PrimeType, &str) {
    if let Some(rest) = input.strip_prefix("t:") {
        (PrimeType::Twin, rest)
    } else if let Some(rest) = input.strip_prefix("s:") {
        (PrimeType::Safe, rest)
    } else {
        (PrimeType::Plain, input)
    }
}

/// Parses a prefixed hex Q0 string into a ready-to-search `ResidueState`.
pub fn init_from_hex(input: &str, table: TableSize) -> Result<ResidueState, SieveError> {
    let (kind, body) = parse_mode_prefix(input);
    let bytes = hex_to_bytes(body)?;
    if bytes.len() as u32 * 8 > MAX_BITS {
        return Err(SieveError::Oversize { max_bits: MAX_BITS });
    }
    let limbs = bytes_to_limbs(&bytes);
    init_from_limbs(kind, table, &limbs)
}

/// Builds a `ResidueState` directly from big-endian u64 limbs, bypassing
/// hex parsing (used by tests and by callers that already hold Q0 as raw
/// limbs, e.g. from a bignum library's export).
pub fn init_from_limbs(
    kind: PrimeType,
    table: TableSize,
    limbs: &[u64],
) -> Result<ResidueState, SieveError> {
    let p = table.p();
    let mut modn = vec![0u16; p.len()].into_boxed_slice();
    for (slot, &pv) in modn.iter_mut().zip(p.iter()) {
        *slot = modn16(limbs, pv);
    }
    let mod6 = modn16(limbs, 6) as u8;
    let lsb = *limbs.last().unwrap_or(&0);
    Ok(ResidueState {
        modn,
        lsb,
        mod6,
        offset: 0,
        mode: SearchMode { kind, table },
        incr: None,
        mod6incr: None,
        lsbi: None,
        incr_len: None,
    })
}

/// Attaches a FIPS-186-style additive increment to an already-initialized
/// state. Parsed eagerly so the scaffolded fields are always populated
/// consistently with `state.modn`, even though no search loop drives them.
pub fn attach_increment(state: &mut ResidueState, incr_hex: &str) -> Result<(), SieveError> {
    let bytes = hex_to_bytes(incr_hex)?;
    let limbs = bytes_to_limbs(&bytes);
    let p = state.mode.table.p();
    let mut incr = vec![0u16; p.len()].into_boxed_slice();
    for (slot, &pv) in incr.iter_mut().zip(p.iter()) {
        *slot = modn16(&limbs, pv);
    }
    state.mod6incr = Some(modn16(&limbs, 6) as u8);
    state.lsbi = Some(*limbs.last().unwrap_or(&0));
    state.incr_len = Some(bytes.len());
    state.incr = Some(incr);
    Ok(())
}
