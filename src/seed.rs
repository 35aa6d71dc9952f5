//! Seed derivation and seeded variant selection.
//!
//! A letter's wording is chosen from pre-authored variants. The choice is a
//! pure function of a seed derived from the letter's identity fields, so the
//! same request always renders the same text.
//!
//! The hash below is pinned. Historical letters depend on it bit for bit;
//! any change must bump [`SEED_ALGORITHM_VERSION`].

use std::fmt;

use crate::types::LetterContext;

/// Version of the seed hash. Bump when [`derive_seed`] changes behaviour.
pub const SEED_ALGORITHM_VERSION: u32 = 1;

/// Delimiter placed between identity parts before hashing.
pub const SEED_DELIMITER: &str = "|";

const RADIX: u32 = 36;

/// Opaque key material for variant selection.
///
/// Not a document identifier: distinct requests may share a seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(String);

impl Seed {
    /// Wrap an already-derived seed string.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The seed as rendered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fold the seed's characters as base-36 digits into one number.
    pub fn value(&self) -> u64 {
        self.0.chars().fold(0_u64, |acc, ch| {
            let digit = ch
                .to_digit(RADIX)
                .unwrap_or_else(|| u32::from(ch).wrapping_rem(RADIX));
            acc.wrapping_mul(u64::from(RADIX))
                .wrapping_add(u64::from(digit))
        })
    }

    /// Folded value shifted by a call-site offset.
    pub fn slot(&self, offset: u32) -> u64 {
        self.value().wrapping_add(u64::from(offset))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a seed from ordered identity parts.
///
/// Absent and blank parts are dropped; survivors are joined with
/// [`SEED_DELIMITER`] and hashed with a 31-multiplier rolling hash over UTF-16
/// code units, wrapped to signed 32 bits. The absolute value is rendered in
/// lowercase base 36. An empty input hashes the empty string and yields `"0"`.
pub fn derive_seed(parts: &[Option<&str>]) -> Seed {
    let joined = parts
        .iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(SEED_DELIMITER);
    Seed(to_base36(u64::from(rolling_hash(&joined))))
}

fn rolling_hash(text: &str) -> u32 {
    let hash = text.encode_utf16().fold(0_i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_owned();
    }
    let radix = u64::from(RADIX);
    let mut digits = Vec::new();
    while n > 0 {
        let digit = u32::try_from(n.wrapping_rem(radix)).unwrap_or(0);
        digits.push(char::from_digit(digit, RADIX).unwrap_or('0'));
        n = n.wrapping_div(radix);
    }
    digits.iter().rev().collect()
}

/// Index chosen for a list of `len` options, or `None` when the list is empty.
///
/// A single option is returned without consulting the seed.
pub fn pick_index(seed: &Seed, offset: u32, len: usize) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ => {
            let len = u64::try_from(len).ok()?;
            usize::try_from(seed.slot(offset).wrapping_rem(len)).ok()
        }
    }
}

/// Pick one phrase. An empty list yields an empty string.
pub fn pick<'a>(seed: &Seed, offset: u32, options: &[&'a str]) -> &'a str {
    pick_index(seed, offset, options.len())
        .and_then(|idx| options.get(idx))
        .copied()
        .unwrap_or("")
}

/// A phrase that is rendered from the letter context.
pub type Phrase = fn(&LetterContext) -> String;

/// Pick one phrase-producing function and render it.
pub fn pick_with(seed: &Seed, offset: u32, options: &[Phrase], ctx: &LetterContext) -> String {
    pick_index(seed, offset, options.len())
        .and_then(|idx| options.get(idx))
        .map(|render| render(ctx))
        .unwrap_or_default()
}
