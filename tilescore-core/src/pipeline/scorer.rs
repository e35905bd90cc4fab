//! Board-placement scoring.
//!
//! Pure functions of a word and the fixed tile tables; no state, no side
//! effects, deterministic by construction. The pipeline composes these
//! per word, reusing one histogram for both the blank-budget check and
//! the base score.

use crate::pipeline::types::{
    BINGO_BONUS, BINGO_LENGTH, DOUBLE_WORD_FACTOR, HEAD_WINDOW, TAIL_WINDOW,
};
use crate::tiles::{letter_score, letter_supply, LetterHistogram};
use tilescore_types::{Letter, Score};

/// Number of blank tiles the word requires.
///
/// A blank covers every occurrence of a letter beyond the bag supply:
/// `sum(max(0, count - supply))` over the word's letters.
#[inline]
pub fn blanks_needed(hist: &LetterHistogram) -> u32 {
    hist.present()
        .map(|(letter, count)| count.saturating_sub(letter_supply(letter)) as u32)
        .sum()
}

/// Base letter score with blanks scoring zero.
///
/// Each distinct letter contributes `value * min(count, supply)`; the
/// occurrences a blank would have to cover contribute nothing.
#[inline]
pub fn tile_score(hist: &LetterHistogram) -> Score {
    hist.present()
        .map(|(letter, count)| letter_score(letter) * count.min(letter_supply(letter)) as Score)
        .sum()
}

/// Double-letter bonus: the best single letter reachable from a
/// board-edge bonus square.
///
/// Candidates are the union of the first `HEAD_WINDOW` and last
/// `TAIL_WINDOW` characters; for short words the windows degrade to
/// whatever characters exist (and may overlap). Returns 0 for an empty
/// word.
#[inline]
pub fn double_letter_bonus(word: &str) -> Score {
    let bytes = word.as_bytes();
    let head = &bytes[..bytes.len().min(HEAD_WINDOW)];
    let tail = &bytes[bytes.len().saturating_sub(TAIL_WINDOW)..];

    head.iter()
        .chain(tail)
        .filter_map(|&b| Letter::from_ascii_upper(b))
        .map(letter_score)
        .max()
        .unwrap_or(0)
}

/// Score of the word placed on the board.
///
/// The factor of 2 models a double-word square under the placement; the
/// +50 models the bingo for playing all `BINGO_LENGTH` rack tiles.
#[inline]
pub fn placement_score(word: &str) -> Score {
    let hist = LetterHistogram::from_word(word);
    placement_score_with(&hist, word)
}

/// [`placement_score`] against a histogram the caller already built.
#[inline]
pub fn placement_score_with(hist: &LetterHistogram, word: &str) -> Score {
    let bingo = if word.len() == BINGO_LENGTH {
        BINGO_BONUS
    } else {
        0
    };
    DOUBLE_WORD_FACTOR * (tile_score(hist) + double_letter_bonus(word)) + bingo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(word: &str) -> LetterHistogram {
        LetterHistogram::from_word(word)
    }

    #[test]
    fn cat_worked_example() {
        let h = hist("CAT");
        assert_eq!(blanks_needed(&h), 0);
        assert_eq!(tile_score(&h), 5); // C=3, A=1, T=1
        assert_eq!(double_letter_bonus("CAT"), 3); // both windows cover CAT
        assert_eq!(placement_score("CAT"), 16); // 2 * (5 + 3)
    }

    #[test]
    fn blanks_capped_letters_score_zero() {
        // Z supply is 1: the second Z needs a blank and scores nothing.
        let h = hist("JAZZ");
        assert_eq!(blanks_needed(&h), 1);
        assert_eq!(tile_score(&h), 19); // J=8, A=1, Z=10*min(2,1)
        assert_eq!(double_letter_bonus("JAZZ"), 10);
        assert_eq!(placement_score("JAZZ"), 58); // 2 * (19 + 10)
    }

    #[test]
    fn blanks_accumulate_across_letters() {
        // QQ needs 1 blank, ZZ needs 1 blank: 2 total.
        assert_eq!(blanks_needed(&hist("QQZZ")), 2);
        // Four Zs against a supply of 1: 3 blanks.
        assert_eq!(blanks_needed(&hist("PIZZAZZ")), 3);
    }

    #[test]
    fn budget_boundary_at_exactly_two_blanks() {
        assert_eq!(blanks_needed(&hist("ZZZ")), 2);
        assert_eq!(tile_score(&hist("ZZZ")), 10); // only the supplied Z scores
        assert_eq!(placement_score("ZZZ"), 40); // 2 * (10 + 10)
    }

    #[test]
    fn deterministic() {
        for word in ["CAT", "JAZZ", "MAILBAG", "A"] {
            assert_eq!(placement_score(word), placement_score(word));
        }
    }

    #[test]
    fn bingo_term_iff_length_seven() {
        for word in ["CAT", "JAZZ", "MAILBAG", "QUARTZ", "WHIZZING"] {
            let h = hist(word);
            let raw = DOUBLE_WORD_FACTOR * (tile_score(&h) + double_letter_bonus(word));
            let expected = if word.len() == 7 { BINGO_BONUS } else { 0 };
            assert_eq!(placement_score(word) - raw, expected, "word {}", word);
        }
    }

    #[test]
    fn seven_letter_worked_example() {
        // MAILBAG: M=3 A=1 I=1 L=1 B=3 A=1 G=2 -> 12; windows MAI | LBAG -> 3.
        let h = hist("MAILBAG");
        assert_eq!(tile_score(&h), 12);
        assert_eq!(double_letter_bonus("MAILBAG"), 3);
        assert_eq!(placement_score("MAILBAG"), 80); // 2 * (12 + 3) + 50
    }

    #[test]
    fn short_words_degrade_windows_gracefully() {
        assert_eq!(double_letter_bonus("A"), 1);
        assert_eq!(placement_score("A"), 4); // 2 * (1 + 1)

        assert_eq!(double_letter_bonus("AX"), 8);
        assert_eq!(placement_score("AX"), 34); // 2 * (9 + 8)

        assert_eq!(double_letter_bonus(""), 0);
    }

    #[test]
    fn bonus_only_sees_head_and_tail_windows() {
        // QUACKIEST (9 letters): head QUA, tail IEST. The K (5) at index 4
        // sits outside both windows; Q (10) is in the head.
        assert_eq!(double_letter_bonus("QUACKIEST"), 10);
        // ANTIQUATED (10 letters): head ANT, tail ATED. The Q sits outside
        // both windows, leaving D (2) as the best candidate.
        assert_eq!(double_letter_bonus("ANTIQUATED"), 2);
    }

    #[test]
    fn bonus_monotone_under_window_strengthening() {
        // Appending a high-value letter lands it in the tail window and
        // can only raise (never lower) the bonus.
        for word in ["CAT", "MAILBAG", "AB", "NOON"] {
            let stronger = format!("{}Q", word);
            assert!(double_letter_bonus(&stronger) >= double_letter_bonus(word));
        }
    }

    #[test]
    fn overlapping_windows_for_mid_length_words() {
        // Length 5: head covers 0..3, tail covers 1..5 — full overlap of
        // the middle. Every letter is a candidate.
        assert_eq!(double_letter_bonus("JUMBO"), 8); // J visible to head
        assert_eq!(double_letter_bonus("OJUMB"), 8); // J visible to both
    }
}
