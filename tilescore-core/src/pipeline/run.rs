//! Pipeline execution and score aggregation.
//!
//! One pass over the corpus: tokenize → alphabetic filter → dictionary
//! filter → blank-budget filter → score → group by score → sort groups
//! descending → truncate to the top k. Nothing revisits an earlier stage.
//!
//! ## Parallel execution
//!
//! Every per-word stage is independent, so the token list is split into
//! fixed chunks processed on the rayon pool. Each chunk builds a private
//! score→words map plus private counters; shard maps are then merged *in
//! chunk order*, which makes the word order inside every group equal to
//! corpus encounter order — parallel and sequential runs produce
//! identical output. The merge is the only synchronization point and it
//! happens after the pool is done.

use crate::analyzer::Tokenizer;
use crate::pipeline::scorer::{blanks_needed, placement_score_with};
use crate::pipeline::stats::RunStats;
use crate::pipeline::types::Tilescore;
use crate::tiles::{is_playable, LetterHistogram};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tilescore_types::{PipelineConfig, Score, ScoreGroup};

/// Score → words achieving it, in encounter order.
type Grouped<'c> = FxHashMap<Score, Vec<&'c str>>;

impl Tilescore {
    /// Runs the full pipeline and returns the number of top score groups.
    ///
    /// This is the external invocation surface: 3 for any sufficiently
    /// rich corpus and dictionary, fewer when fewer distinct scores
    /// exist. The groups themselves are available via [`top_groups`].
    ///
    /// [`top_groups`]: Tilescore::top_groups
    pub fn run(&mut self) -> usize {
        self.top_groups().len()
    }

    /// Runs the full pipeline and returns the top score groups, best
    /// score first.
    pub fn top_groups(&mut self) -> Vec<ScoreGroup> {
        let (groups, stats) = execute(&self.tokenizer, &self.corpus, &self.dictionary, self.config);
        self.runs_executed += 1;
        self.last_stats = Some(stats);
        groups
    }
}

fn execute(
    tokenizer: &Tokenizer,
    corpus: &str,
    dictionary: &FxHashSet<Box<str>>,
    config: PipelineConfig,
) -> (Vec<ScoreGroup>, RunStats) {
    // Tokens are slices of the normalized corpus; collecting them is the
    // only allocation proportional to corpus size.
    let mut tokens: Vec<&str> = Vec::with_capacity(corpus.len() / 6 + 1);
    tokenizer.tokenize(corpus, |token, _| tokens.push(token));

    let chunk = config.chunk_size.max(1);
    let (grouped, mut stats) = if config.parallel && tokens.len() > chunk {
        let shards: Vec<(Grouped<'_>, RunStats)> = tokens
            .par_chunks(chunk)
            .map(|part| score_chunk(part, dictionary, config))
            .collect();
        merge_shards(shards)
    } else {
        score_chunk(&tokens, dictionary, config)
    };

    stats.distinct_scores = grouped.len();

    let mut entries: SmallVec<[(Score, Vec<&str>); 64]> = grouped.into_iter().collect();
    entries.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    entries.truncate(config.top_groups);

    stats.groups_returned = entries.len();

    let groups = entries
        .into_iter()
        .map(|(score, words)| {
            ScoreGroup::new(score, words.into_iter().map(String::from).collect())
        })
        .collect();

    (groups, stats)
}

/// Filters and scores one slice of the token stream.
///
/// Shared by both execution modes: the sequential path calls it once
/// over all tokens, the parallel path once per chunk.
fn score_chunk<'c>(
    tokens: &[&'c str],
    dictionary: &FxHashSet<Box<str>>,
    config: PipelineConfig,
) -> (Grouped<'c>, RunStats) {
    let mut grouped = Grouped::default();
    let mut stats = RunStats::default();

    for &token in tokens {
        stats.tokens_seen += 1;

        if !is_playable(token) {
            stats.rejected_nonalpha += 1;
            continue;
        }
        if !dictionary.contains(token) {
            stats.rejected_dictionary += 1;
            continue;
        }

        let hist = LetterHistogram::from_word(token);
        if blanks_needed(&hist) > config.max_blanks as u32 {
            stats.rejected_blanks += 1;
            continue;
        }

        let score = placement_score_with(&hist, token);
        stats.words_scored += 1;
        grouped.entry(score).or_default().push(token);
    }

    (grouped, stats)
}

/// Merges shard maps in chunk order, preserving encounter order within
/// every score group.
fn merge_shards<'c>(shards: Vec<(Grouped<'c>, RunStats)>) -> (Grouped<'c>, RunStats) {
    let mut grouped = Grouped::default();
    let mut stats = RunStats::default();

    for (shard, shard_stats) in shards {
        stats.absorb(&shard_stats);
        for (score, mut words) in shard {
            grouped.entry(score).or_default().append(&mut words);
        }
    }

    (grouped, stats)
}
