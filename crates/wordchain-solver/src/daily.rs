// Daily puzzle selection.
//
// A date id (normally `YYYY-MM-DD`) is hashed with an FNV-1a style string hash
// and the hash seeds a mulberry32 generator, so every caller picks the same
// start/target pair for the same day without any shared state.
//
// The hash multiplies in double precision and truncates back to 32 bits
// before each xor, the way the puzzle backend computes it. For long inputs
// this differs from textbook FNV-1a, and the backend's pairs must match.

use wordchain_core::options::ChainOptions;

use wordchain_index::filter_words;

/// Built-in pool of daily puzzle words.
pub const STARTER_WORDS: [&str; 20] = [
    "START", "STONE", "ANGLE", "PLANE", "STEEL", "TRACK", "CRANE", "LIGHT", "TREND", "BRAVE",
    "RIVER", "MIGHT", "CLOUD", "SOUND", "SWEET", "EARTH", "FRAME", "GRACE", "HEART", "END",
];

/// Options used to precompute the best chain for a daily pair.
pub const DAILY_OPTIONS: ChainOptions = ChainOptions {
    min_overlap: 2,
    min_word_length: 3,
    max_word_length: None,
    max_steps: Some(8),
    allow_reuse: false,
};

/// A start/target pair chosen for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPair {
    pub start: String,
    pub target: String,
}

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: f64 = 16_777_619.0;

/// FNV-1a over the UTF-16 code units of `s` with a double-precision multiply.
///
/// The running value is an integer-valued `f64` below 2^56; before each xor
/// it is wrapped to a signed 32-bit integer, and the final value is wrapped
/// to unsigned. Products above 2^53 are rounded, so longer inputs hash
/// differently from textbook 32-bit FNV-1a.
pub fn fnv1a(s: &str) -> u32 {
    let hash = s.encode_utf16().fold(f64::from(FNV_OFFSET_BASIS), |hash, unit| {
        f64::from(wrap_i32(hash) ^ i32::from(unit)) * FNV_PRIME
    });
    wrap_i32(hash) as u32
}

// Integer-valued `hash` with magnitude below 2^63, reduced modulo 2^32.
#[inline]
fn wrap_i32(hash: f64) -> i32 {
    hash as i64 as i32
}

/// The mulberry32 generator.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform index in `0..len`; equal to `floor(next_u32() / 2^32 * len)`.
    pub fn next_index(&mut self, len: usize) -> usize {
        ((u64::from(self.next_u32()) * len as u64) >> 32) as usize
    }
}

/// Pick the day's start and target words from `words`.
///
/// Words are normalized and deduplicated first. The target is re-rolled
/// until it differs from the start. Returns `None` if fewer than two
/// distinct words remain.
pub fn daily_pair<I, S>(date_id: &str, words: I) -> Option<DailyPair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pool_options = ChainOptions {
        min_word_length: 1,
        ..ChainOptions::default()
    };
    let pool = filter_words(words, &pool_options);
    if pool.len() < 2 {
        return None;
    }

    let mut rng = Mulberry32::new(fnv1a(date_id));
    let start = rng.next_index(pool.len());
    let mut target = rng.next_index(pool.len());
    while target == start {
        target = rng.next_index(pool.len());
    }

    log::debug!("daily pair for {date_id}: {} -> {}", pool[start], pool[target]);
    Some(DailyPair {
        start: pool[start].clone(),
        target: pool[target].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(start: &str, target: &str) -> DailyPair {
        DailyPair {
            start: start.into(),
            target: target.into(),
        }
    }

    #[test]
    fn fnv1a_reference_values() {
        assert_eq!(fnv1a(""), 0x811c_9dc5);
        assert_eq!(fnv1a("a"), 0xe40c_292c);
        assert_eq!(fnv1a("2025-01-01"), 0x188e_81a0);
        assert_eq!(fnv1a("2024-02-29"), 0x7b0e_5578);
        assert_eq!(fnv1a("2026-10-16"), 0xcdf3_fe32);
    }

    #[test]
    fn rounded_hash_diverges_from_wrapping_fnv1a() {
        let wrapping = |s: &str| {
            s.bytes()
                .fold(FNV_OFFSET_BASIS, |h, b| (h ^ u32::from(b)).wrapping_mul(0x0100_0193))
        };
        assert_eq!(wrapping("a"), fnv1a("a"));
        assert_ne!(wrapping("2025-01-01"), fnv1a("2025-01-01"));
    }

    #[test]
    fn mulberry32_reference_values() {
        let mut rng = Mulberry32::new(1);
        assert_eq!(rng.next_u32(), 2_693_262_067);
        assert_eq!(rng.next_u32(), 11_749_833);
        assert_eq!(rng.next_u32(), 2_265_367_787);
    }

    #[test]
    fn known_dates() {
        assert_eq!(daily_pair("2025-01-01", STARTER_WORDS), Some(pair("END", "GRACE")));
        assert_eq!(daily_pair("2024-02-29", STARTER_WORDS), Some(pair("CRANE", "SOUND")));
        assert_eq!(daily_pair("2026-10-16", STARTER_WORDS), Some(pair("END", "STONE")));
    }

    #[test]
    fn pair_is_distinct_and_from_pool() {
        for day in 1..=28 {
            let date = format!("2025-02-{day:02}");
            let p = daily_pair(&date, STARTER_WORDS).unwrap();
            assert_ne!(p.start, p.target);
            assert!(STARTER_WORDS.contains(&p.start.as_str()));
            assert!(STARTER_WORDS.contains(&p.target.as_str()));
        }
    }

    #[test]
    fn same_date_same_pair() {
        assert_eq!(
            daily_pair("2025-06-01", STARTER_WORDS),
            daily_pair("2025-06-01", STARTER_WORDS)
        );
    }

    #[test]
    fn tiny_pools() {
        assert_eq!(daily_pair("2025-01-01", ["stone"]), None);
        assert_eq!(daily_pair("2025-01-01", ["stone", "STONE", "123"]), None);
        let p = daily_pair("2025-01-01", ["stone", "angle"]).unwrap();
        assert_ne!(p.start, p.target);
    }

    #[test]
    fn daily_options_are_valid() {
        assert_eq!(DAILY_OPTIONS.validate(), Ok(()));
        assert_eq!(DAILY_OPTIONS.max_steps, Some(8));
    }
}
