//! Random strings over an alphabet.
//!
//! Each 63-bit draw is split into groups of just enough bits to index the
//! alphabet. Groups that fall outside the alphabet are discarded instead of
//! being reduced modulo its length, so every symbol is equally likely.

use crate::service::RandomService;

/// ASCII lowercase letters and digits.
pub const ALPHANUM_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// The digits `0` to `9`.
pub const DIGITS_ALPHABET: &str = "0123456789";

/// Bits carried by one draw.
const DRAW_BITS: u32 = 63;

impl RandomService {
    /// Generates a string of exactly `length` symbols chosen uniformly from
    /// `alphabet`.
    ///
    /// A missing or empty alphabet means [`ALPHANUM_ALPHABET`]. Symbols are
    /// whole `char`s, so non-ASCII alphabets are supported.
    #[must_use]
    pub fn string(&self, length: usize, alphabet: Option<&str>) -> String {
        let alphabet = match alphabet {
            Some(a) if !a.is_empty() => a,
            _ => ALPHANUM_ALPHABET,
        };

        let mut out = String::with_capacity(length);
        if alphabet.is_ascii() {
            let symbols = alphabet.as_bytes();
            self.sample_indices(length, symbols.len(), |i| out.push(char::from(symbols[i])));
        } else {
            let symbols: Vec<char> = alphabet.chars().collect();
            self.sample_indices(length, symbols.len(), |i| out.push(symbols[i]));
        }
        out
    }

    /// Calls `emit` `count` times with indices uniform over `[0, len)`.
    #[allow(clippy::cast_possible_truncation)]
    fn sample_indices(&self, count: usize, len: usize, mut emit: impl FnMut(usize)) {
        if count == 0 {
            return;
        }
        let bits = index_bits(len);
        let mask = (1u64 << bits) - 1;
        let per_draw = DRAW_BITS / bits;

        let mut draw = self.int63();
        let mut remaining = per_draw;
        let mut emitted = 0;
        while emitted < count {
            if remaining == 0 {
                draw = self.int63();
                remaining = per_draw;
            }
            // Masked to at most usize::BITS bits.
            let index = (draw & mask) as usize;
            if index < len {
                emit(index);
                emitted += 1;
            }
            draw >>= bits;
            remaining -= 1;
        }
    }
}

/// Number of bits needed to represent every index of an alphabet of `len`
/// symbols, never less than one.
pub(crate) fn index_bits(len: usize) -> u32 {
    (usize::BITS - len.saturating_sub(1).leading_zeros()).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::StdRandomSource;

    fn seeded() -> RandomService {
        RandomService::with_source(StdRandomSource::from_seed(31))
    }

    #[test]
    fn test_index_bits() {
        assert_eq!(index_bits(1), 1);
        assert_eq!(index_bits(2), 1);
        assert_eq!(index_bits(3), 2);
        assert_eq!(index_bits(4), 2);
        assert_eq!(index_bits(5), 3);
        assert_eq!(index_bits(10), 4);
        assert_eq!(index_bits(32), 5);
        assert_eq!(index_bits(36), 6);
        assert_eq!(index_bits(64), 6);
        assert_eq!(index_bits(65), 7);
    }

    #[test]
    fn test_builtin_alphabet_sizes() {
        assert_eq!(ALPHANUM_ALPHABET.len(), 36);
        assert_eq!(DIGITS_ALPHABET.len(), 10);
    }

    #[test]
    fn test_zero_length_is_empty() {
        assert_eq!(seeded().string(0, Some("abc")), "");
    }

    #[test]
    fn test_single_symbol_alphabet() {
        assert_eq!(seeded().string(20, Some("x")), "x".repeat(20));
    }

    #[test]
    fn test_two_symbol_alphabet() {
        let s = seeded().string(200, Some("01"));
        assert_eq!(s.len(), 200);
        assert!(s.chars().all(|c| c == '0' || c == '1'));
        assert!(s.contains('0') && s.contains('1'));
    }

    #[test]
    fn test_non_ascii_alphabet_yields_whole_chars() {
        let alphabet = "αβγ🎲";
        let s = seeded().string(50, Some(alphabet));
        assert_eq!(s.chars().count(), 50);
        assert!(s.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_every_symbol_is_reachable() {
        let s = seeded().string(2000, Some(DIGITS_ALPHABET));
        for digit in DIGITS_ALPHABET.chars() {
            assert!(s.contains(digit), "digit {digit} never drawn");
        }
    }
}
