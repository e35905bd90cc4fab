//! Fixed tile data: letter values, bag supply, and per-word histograms.
//!
//! The two tables below are the only global data in the engine. Both are
//! read-only `const` arrays indexed by [`Letter`], so every lookup is a
//! single bounds-check-free load after letter construction.

use tilescore_types::{Letter, Score};

/// Point value of each letter, indexed `A..=Z`.
#[rustfmt::skip]
pub const LETTER_SCORES: [Score; Letter::COUNT] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3,
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Number of tiles of each letter available in the bag, indexed `A..=Z`.
///
/// Occurrences beyond this supply must be covered by blank tiles, which
/// score zero.
#[rustfmt::skip]
pub const LETTER_SUPPLY: [u16; Letter::COUNT] = [
    9, 2, 2, 1, 12, 2, 3, 2, 9, 1, 1, 4, 2,
    6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Returns the point value of a letter.
#[inline(always)]
pub const fn letter_score(letter: Letter) -> Score {
    LETTER_SCORES[letter.index()]
}

/// Returns the bag supply of a letter.
#[inline(always)]
pub const fn letter_supply(letter: Letter) -> u16 {
    LETTER_SUPPLY[letter.index()]
}

/// Returns `true` if a normalized token consists only of `A..=Z`.
///
/// Tokens failing this test are silently dropped from the pipeline; the
/// check is a plain byte scan, no allocation.
#[inline(always)]
pub fn is_playable(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_uppercase())
}

/// Occurrence counts of each letter within one word.
///
/// Built fresh per word and discarded after scoring. 26 `u16` slots keep
/// the whole histogram in a single cache line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterHistogram {
    counts: [u16; Letter::COUNT],
}

impl LetterHistogram {
    /// Builds the histogram of a playable word.
    ///
    /// The caller must have filtered the word through [`is_playable`];
    /// non-alphabetic bytes are ignored here (debug builds assert).
    pub fn from_word(word: &str) -> Self {
        debug_assert!(
            is_playable(word),
            "histogram input not playable — pipeline filter contract violated"
        );

        let mut counts = [0u16; Letter::COUNT];
        for b in word.bytes() {
            if let Some(letter) = Letter::from_ascii_upper(b) {
                counts[letter.index()] = counts[letter.index()].saturating_add(1);
            }
        }
        Self { counts }
    }

    /// Returns the occurrence count of a letter.
    #[inline(always)]
    pub const fn count(&self, letter: Letter) -> u16 {
        self.counts[letter.index()]
    }

    /// Iterates the letters present in the word with their counts.
    #[inline]
    pub fn present(&self) -> impl Iterator<Item = (Letter, u16)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .filter_map(|(i, &c)| Letter::from_index(i).map(|l| (l, c)))
    }
}
