//! The scoring pipeline.
//!
//! A single forward pass over the loaded corpus:
//! tokenize → alphabetic filter → dictionary filter → blank-budget filter
//! → score → group by score → sort descending → top k.
//!
//! Filtering is silent by design — a rejected token is excluded, never an
//! error. The only fallible operations in the crate are the loaders in
//! [`corpus`](crate::corpus).
//!
//! Threading:
//! - [`Tilescore`] itself is plain owned data; runs may fan out over the
//!   rayon pool ([`PipelineConfig::parallel`]) but the engine is only
//!   borrowed mutably by one caller at a time.
//!
//! [`PipelineConfig::parallel`]: tilescore_types::PipelineConfig

mod run;
mod scorer;
mod stats;
mod types;

pub use scorer::{blanks_needed, double_letter_bonus, placement_score, tile_score};
pub use stats::RunStats;
pub use types::{
    PipelineMetrics, Tilescore, BINGO_BONUS, BINGO_LENGTH, DOUBLE_WORD_FACTOR, HEAD_WINDOW,
    TAIL_WINDOW,
};
