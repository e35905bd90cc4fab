//! High-throughput Scrabble corpus scoring engine.
//!
//! Finds the highest-scoring playable words in a text corpus. One linear
//! pipeline: normalize the corpus, tokenize it, keep the tokens that are
//! dictionary words writable within the blank budget, score each placed
//! on the board, and return the top score groups.
//!
//! ```no_run
//! use tilescore_core::{corpus, Tilescore};
//!
//! # fn main() -> Result<(), tilescore_types::LoadError> {
//! let mut engine = Tilescore::new();
//! engine.set_dictionary(corpus::load_dictionary("scrabble.txt")?);
//! engine.set_corpus(&corpus::load_corpus("shakespeare.txt")?);
//!
//! for group in engine.top_groups() {
//!     println!("{}", group);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod corpus;
pub mod pipeline;
pub mod tiles;

pub use pipeline::{RunStats, Tilescore};
pub use tilescore_types::{Letter, LoadError, PipelineConfig, Score, ScoreGroup};
