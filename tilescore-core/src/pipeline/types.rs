//! Pipeline types and constants.

use crate::analyzer::{Normalizer, Tokenizer};
use crate::pipeline::stats::RunStats;
use crate::tiles::is_playable;
use rustc_hash::FxHashSet;
use tilescore_types::{PipelineConfig, Score};

/// Characters of the leading double-letter candidate window.
pub const HEAD_WINDOW: usize = 3;

/// Characters of the trailing double-letter candidate window.
pub const TAIL_WINDOW: usize = 4;

/// Word length that empties the rack and earns the bingo bonus.
pub const BINGO_LENGTH: usize = 7;

/// Points awarded for playing a full rack.
pub const BINGO_BONUS: Score = 50;

/// Multiplier for a word placed on a double-word square.
pub const DOUBLE_WORD_FACTOR: Score = 2;

/// Scrabble corpus scoring engine.
///
/// Holds the loaded dictionary, the normalized corpus, and reusable
/// analysis components. A run scans the corpus once and produces the top
/// score groups; nothing about a run persists except its statistics.
pub struct Tilescore {
    pub(crate) dictionary: FxHashSet<Box<str>>,
    pub(crate) normalizer: Normalizer,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) config: PipelineConfig,
    /// Corpus text, normalized once at load.
    pub(crate) corpus: String,
    pub(crate) last_stats: Option<RunStats>,
    /// Total number of pipeline runs executed.
    pub(crate) runs_executed: u64,
}

impl Default for Tilescore {
    fn default() -> Self {
        Self::new()
    }
}

impl Tilescore {
    /// Creates a new engine with an empty corpus and dictionary.
    pub fn new() -> Self {
        Self {
            dictionary: FxHashSet::default(),
            normalizer: Normalizer::new(),
            tokenizer: Tokenizer::new(),
            config: PipelineConfig::default(),
            corpus: String::new(),
            last_stats: None,
            runs_executed: 0,
        }
    }

    /// Creates a new engine with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Loads the corpus, normalizing it in place.
    ///
    /// Replaces any previously loaded corpus.
    pub fn set_corpus(&mut self, raw: &str) {
        let normalizer = self.normalizer;
        normalizer.normalize_into(raw, &mut self.corpus);
    }

    /// Replaces the dictionary with an already-uppercase word set.
    pub fn set_dictionary(&mut self, words: FxHashSet<Box<str>>) {
        self.dictionary = words;
    }

    /// Inserts a single word into the dictionary.
    ///
    /// The word must already be uppercase `A..=Z` (debug builds assert).
    pub fn insert_word(&mut self, word: &str) {
        debug_assert!(
            is_playable(word),
            "dictionary words must be uppercase A-Z"
        );
        self.dictionary.insert(Box::from(word));
    }

    /// Returns the number of dictionary words.
    #[inline(always)]
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Returns the normalized corpus length in bytes.
    #[inline(always)]
    #[must_use]
    pub fn corpus_bytes(&self) -> usize {
        self.corpus.len()
    }

    /// Returns `true` if no corpus has been loaded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Removes the corpus, dictionary, and recorded statistics.
    pub fn clear(&mut self) {
        self.dictionary.clear();
        self.corpus.clear();
        self.last_stats = None;
        self.runs_executed = 0;
    }

    /// Returns the statistics of the most recent run, if any.
    #[inline(always)]
    #[must_use]
    pub fn last_run_stats(&self) -> Option<&RunStats> {
        self.last_stats.as_ref()
    }

    /// Returns basic metrics about the engine's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> PipelineMetrics {
        PipelineMetrics {
            runs_executed: self.runs_executed,
            corpus_bytes: self.corpus.len() as u64,
            dictionary_words: self.dictionary.len() as u64,
        }
    }
}

/// Basic operational metrics for the scoring engine.
#[derive(Debug, Clone, Copy)]
pub struct PipelineMetrics {
    /// Total number of pipeline runs executed.
    pub runs_executed: u64,
    /// Size of the normalized corpus in bytes.
    pub corpus_bytes: u64,
    /// Number of words in the loaded dictionary.
    pub dictionary_words: u64,
}
