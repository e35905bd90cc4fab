//! Streaming tokenizer over normalized corpus text.
//!
//! Splits a normalized corpus into individual word tokens. Tokens are
//! slices of the input string, so tokenizing an entire corpus performs no
//! allocation; downstream stages decide which tokens are worth keeping.
//!
//! ## The input contract
//!
//! The tokenizer expects **pre-normalized** input from
//! [`Normalizer`](super::Normalizer):
//! - Tokens separated by exactly one ASCII space
//! - No leading or trailing whitespace
//!
//! Violations panic in debug builds with a helpful message.

use core::str;
use memchr::memchr_iter;

/// Streaming word tokenizer.
///
/// Emits each token via a callback together with its 0-based position in
/// the corpus. A single forward scan over the bytes, splitting on ASCII
/// space (0x20); each non-empty run between spaces becomes a token.
///
/// # Examples
///
/// ```
/// use tilescore_core::analyzer::Tokenizer;
///
/// let mut words = Vec::new();
/// Tokenizer::new().tokenize("TO BE OR NOT", |token, _pos| {
///     words.push(token);
/// });
/// assert_eq!(words, vec!["TO", "BE", "OR", "NOT"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(token, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace — normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace — normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8. We split only on ASCII
                // space (0x20), which is never a continuation byte, so
                // `bytes[start..i]` is always a valid UTF-8 subslice.
                let token = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(token, pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above — `start` was set to `i + 1`
            // after an ASCII space byte, so `bytes[start..]` is a valid
            // UTF-8 subslice.
            let token = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(token, pos);
        }
    }
}
