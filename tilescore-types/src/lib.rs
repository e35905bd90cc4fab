//! Core types for the tilescore scoring engine.
//!
//! This crate provides the fundamental types that are shared across
//! the tilescore ecosystem. Keeping types separate ensures:
//!
//! - **Zero-cost abstractions**: Types are sized for cache efficiency
//! - **Cross-crate compatibility**: Core and tooling share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Board-placement score of a word, in points.
///
/// Every term in the scoring formula is non-negative (letter values,
/// double-letter bonus, bingo bonus), so scores fit naturally in an
/// unsigned integer. Realistic corpus scores stay well below 1000.
pub type Score = u32;

/// A letter of the playing alphabet, stored as a 0-based index.
///
/// Letters are packed as `b - b'A'`, giving an index in `0..26` that is
/// used directly into the fixed score and supply tables. This
/// representation:
/// - Fits in 1 byte
/// - Enables table lookups without bounds checks after construction
/// - Works as a histogram index without conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Creates a letter from an uppercase ASCII byte.
    ///
    /// Returns `None` for any byte outside `b'A'..=b'Z'`.
    #[inline(always)]
    pub const fn from_ascii_upper(b: u8) -> Option<Self> {
        if b.is_ascii_uppercase() {
            Some(Self(b - b'A'))
        } else {
            None
        }
    }

    /// Creates a letter from a char.
    ///
    /// Returns `None` unless the char is `'A'..='Z'`.
    #[inline(always)]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_ascii_upper(c as u8)
        } else {
            None
        }
    }

    /// Creates a letter from a 0-based table index.
    ///
    /// Returns `None` if the index is `COUNT` or greater.
    #[inline(always)]
    pub const fn from_index(i: usize) -> Option<Self> {
        if i < Self::COUNT {
            Some(Self(i as u8))
        } else {
            None
        }
    }

    /// Returns the 0-based table index of this letter.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the uppercase ASCII byte of this letter.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        self.0 + b'A'
    }

    /// Returns this letter as a char.
    #[inline(always)]
    pub const fn as_char(self) -> char {
        self.to_ascii() as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A group of words sharing the same computed score.
///
/// Groups are ordered by score (descending in pipeline output), with the
/// word list preserving corpus encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGroup {
    /// The score every word in this group achieved.
    pub score: Score,
    /// The words achieving it, in corpus encounter order.
    pub words: Vec<String>,
}

impl ScoreGroup {
    /// Creates a new score group.
    #[inline]
    pub fn new(score: Score, words: Vec<String>) -> Self {
        Self { score, words }
    }
}

impl PartialOrd for ScoreGroup {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoreGroup {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: score (higher = greater for intuitive comparison)
        // Secondary: word list (for a total order when scores are equal)
        match self.score.cmp(&other.score) {
            core::cmp::Ordering::Equal => self.words.cmp(&other.words),
            ord => ord,
        }
    }
}

impl fmt::Display for ScoreGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score={} words={}", self.score, self.words.len())
    }
}

/// Pipeline configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum number of blank tiles a word may consume.
    /// Default: 2 (the number of blanks in a standard tile bag)
    pub max_blanks: u16,
    /// Number of top score groups returned by a run.
    pub top_groups: usize,
    /// Whether to split the word stream across a thread pool.
    pub parallel: bool,
    /// Tokens per work unit in parallel mode.
    pub chunk_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_blanks: 2,
            top_groups: 3,
            parallel: true,
            chunk_size: 4096,
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration that processes the word stream on the
    /// calling thread only.
    pub const fn sequential() -> Self {
        Self {
            max_blanks: 2,
            top_groups: 3,
            parallel: false,
            chunk_size: 4096,
        }
    }

    /// Creates a configuration that fans the word stream out across the
    /// thread pool.
    pub const fn parallel() -> Self {
        Self {
            max_blanks: 2,
            top_groups: 3,
            parallel: true,
            chunk_size: 4096,
        }
    }
}

/// Errors that can occur while loading the corpus or the dictionary.
///
/// Load failures are fatal: the pipeline never runs against a partial
/// corpus or an empty dictionary.
#[derive(Debug)]
pub enum LoadError {
    /// The resource could not be read from disk.
    Read {
        /// Path of the resource that failed to load.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The resource was read but contained no usable content.
    Empty {
        /// Which resource was empty ("corpus" or "dictionary").
        what: &'static str,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            LoadError::Empty { what } => {
                write!(f, "{} contains no words", what)
            }
        }
    }
}

impl core::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Empty { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_size_is_1_byte() {
        assert_eq!(size_of::<Letter>(), 1);
    }

    #[test]
    fn letter_from_ascii_roundtrip() {
        for b in b'A'..=b'Z' {
            let l = Letter::from_ascii_upper(b).expect("should accept A-Z");
            assert_eq!(l.to_ascii(), b);
            assert_eq!(l.index(), (b - b'A') as usize);
        }
    }

    #[test]
    fn letter_rejects_non_uppercase() {
        assert!(Letter::from_ascii_upper(b'a').is_none());
        assert!(Letter::from_ascii_upper(b'0').is_none());
        assert!(Letter::from_ascii_upper(b' ').is_none());
        assert!(Letter::from_ascii_upper(b'@').is_none()); // 'A' - 1
        assert!(Letter::from_ascii_upper(b'[').is_none()); // 'Z' + 1
    }

    #[test]
    fn letter_from_index_bounds() {
        assert_eq!(Letter::from_index(0).map(|l| l.as_char()), Some('A'));
        assert_eq!(Letter::from_index(25).map(|l| l.as_char()), Some('Z'));
        assert!(Letter::from_index(26).is_none());
    }

    #[test]
    fn letter_from_char_rejects_non_ascii() {
        assert!(Letter::from_char('É').is_none());
        assert!(Letter::from_char('ß').is_none());
        assert_eq!(Letter::from_char('Q').map(|l| l.index()), Some(16));
    }

    #[test]
    fn score_group_ordering() {
        let g1 = ScoreGroup::new(120, vec!["WHIZZING".into()]);
        let g2 = ScoreGroup::new(76, vec!["MAILBAG".into()]);
        let g3 = ScoreGroup::new(120, vec!["QUARTZY".into()]);

        assert!(g1 > g2); // Higher score is "greater"
        assert_ne!(g1, g3); // Different words = not equal

        // When scores are equal, the word list breaks the tie
        assert_eq!(g1.cmp(&g3), core::cmp::Ordering::Greater); // "WHI" > "QUA"
    }

    #[test]
    fn config_presets() {
        assert!(PipelineConfig::parallel().parallel);
        assert!(!PipelineConfig::sequential().parallel);
        assert_eq!(PipelineConfig::default().max_blanks, 2);
        assert_eq!(PipelineConfig::default().top_groups, 3);
    }

    #[test]
    fn load_error_display() {
        let err = LoadError::Empty { what: "dictionary" };
        assert_eq!(err.to_string(), "dictionary contains no words");
    }
}
