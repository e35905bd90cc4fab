//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Uppercases raw corpus text and collapses whitespace
//! - **Tokenizer**: Splits normalized text into word tokens

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::Normalizer;
pub use tokenizer::Tokenizer;
