//! Corpus and dictionary loading.
//!
//! Loading happens once, synchronously, before any pipeline run; the
//! pipeline itself never touches I/O. A missing, unreadable, or empty
//! resource is an unrecoverable startup failure — there is no partial
//! operation and no retry, so the loaders simply return [`LoadError`]
//! for the caller to propagate.

use crate::analyzer::Normalizer;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tilescore_types::LoadError;

/// Reads the full corpus text.
///
/// The text is returned raw; the engine normalizes it when loaded via
/// [`Tilescore::set_corpus`](crate::Tilescore::set_corpus).
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Empty`] if it contains no words.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    if text.split_whitespace().next().is_none() {
        return Err(LoadError::Empty { what: "corpus" });
    }

    Ok(text)
}

/// Reads a whitespace-separated word list into a membership set.
///
/// Entries are uppercased at load, so standard word lists (typically
/// lowercase) produce the already-uppercase set the dictionary filter
/// matches against.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Empty`] if it contains no words.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<FxHashSet<Box<str>>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let normalizer = Normalizer::new();
    let words: FxHashSet<Box<str>> = text
        .split_whitespace()
        .map(|word| normalizer.normalize(word).into_boxed_str())
        .collect();

    if words.is_empty() {
        return Err(LoadError::Empty { what: "dictionary" });
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).expect("should create temp file");
        file.write_all(content.as_bytes())
            .expect("should write temp file");
        path
    }

    #[test]
    fn corpus_roundtrip() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = write_temp(&dir, "corpus.txt", "To be, or not to be");

        let text = load_corpus(&path).expect("should load corpus");
        assert_eq!(text, "To be, or not to be");
    }

    #[test]
    fn missing_corpus_is_fatal() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let err = load_corpus(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn empty_corpus_is_fatal() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = write_temp(&dir, "empty.txt", "  \n\t ");
        let err = load_corpus(&path).unwrap_err();
        assert!(matches!(err, LoadError::Empty { what: "corpus" }));
    }

    #[test]
    fn dictionary_entries_uppercased_and_deduplicated() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = write_temp(&dir, "words.txt", "cat\nJAZZ\ncat mat");

        let words = load_dictionary(&path).expect("should load dictionary");
        assert_eq!(words.len(), 3);
        assert!(words.contains("CAT"));
        assert!(words.contains("JAZZ"));
        assert!(words.contains("MAT"));
        assert!(!words.contains("cat"));
    }

    #[test]
    fn empty_dictionary_is_fatal() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = write_temp(&dir, "words.txt", "\n\n");
        let err = load_dictionary(&path).unwrap_err();
        assert!(matches!(err, LoadError::Empty { what: "dictionary" }));
    }
}
