//! Deterministic pseudo-random selection.
//!
//! Every "random" choice in the engines is a pure function of an integer
//! seed built from date fields, so the same date always yields the same
//! output in every process. Callers must never substitute an entropy
//! source for anything keyed by date.

use almanac_time::CalendarDate;

/// Multiplier of the 32-bit linear congruential step.
pub const LCG_MULTIPLIER: i64 = 1_664_525;
/// Increment of the 32-bit linear congruential step.
pub const LCG_INCREMENT: i64 = 1_013_904_223;
const LCG_MODULUS: i64 = 1 << 32;

/// `year*10000 + month*100 + day + offset`.
pub fn date_seed(date: CalendarDate, offset: i64) -> i64 {
    i64::from(date.year()) * 10_000
        + i64::from(date.month()) * 100
        + i64::from(date.day())
        + offset
}

/// Index `seed mod len` (Euclidean), or `None` for an empty list.
pub fn pick_index(len: usize, seed: i64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(seed.rem_euclid(len as i64) as usize)
}

/// `items[seed mod len]`.
pub fn pick<T>(items: &[T], seed: i64) -> Option<&T> {
    pick_index(items.len(), seed).map(|i| &items[i])
}

/// One LCG step: `(seed * 1664525 + 1013904223) mod 2^32`.
pub fn lcg_next(seed: i64) -> u32 {
    (seed
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT))
    .rem_euclid(LCG_MODULUS) as u32
}

/// One LCG step mapped into `[0, 1)`.
pub fn lcg_unit(seed: i64) -> f64 {
    f64::from(lcg_next(seed)) / LCG_MODULUS as f64
}

/// `N` chained LCG steps from `seed`, each mapped into `[0, 1)`.
///
/// Draw `k + 1` is `lcg_unit` of draw `k`'s raw state, so the first draw
/// equals `lcg_unit(seed)`.
pub fn lcg_draws<const N: usize>(seed: i64) -> [f64; N] {
    let mut state = seed;
    std::array::from_fn(|_| {
        let next = lcg_next(state);
        state = i64::from(next);
        f64::from(next) / LCG_MODULUS as f64
    })
}

/// Stable 31-multiplier string hash over UTF-16 code units.
///
/// Wraps as a signed 32-bit value and returns its magnitude, so the result
/// only depends on the text.
pub fn label_hash(label: &str) -> u32 {
    label
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}
