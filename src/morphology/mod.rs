//! Morphological analysis contract and candidate types.
//!
//! A morphological analyzer proposes, for each token of the input, a list of
//! candidate *solutions* (possible root/POS/gloss readings), plus an
//! auxiliary list of stem candidates in Buckwalter form used for
//! root-candidate lookup. [`LexiconAnalyzer`](analyzer::LexiconAnalyzer) is
//! the built-in implementation.
//!
//! # Solution string format
//!
//! Each candidate carries an opaque-looking but fixed-format `solution`
//! string of four whitespace-separated Buckwalter fields:
//!
//! ```text
//! <segmentation> <lemma> <root> <pattern>
//! ```
//!
//! Downstream ambiguity detection compares field 2 (the root sub-tag)
//! across candidates. [`solution_subtag`] is the only place that positional
//! convention is encoded; a format change must touch only that function.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod analyzer;
pub mod lexicon;

/// One candidate morphological reading of a token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Surface form of the token in Arabic script.
    pub arabic: String,
    /// Buckwalter transliteration of the surface form.
    pub transl: String,
    /// Fixed-format solution string (see module docs).
    pub solution: String,
    /// Part-of-speech tag.
    pub pos: String,
    /// English gloss.
    pub gloss: String,
}

/// All candidate solutions for one token.
///
/// `solutions` may be empty when the analyzer has no reading for the token;
/// `surface` is always populated, so callers can still refer to the word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// The token as it appeared in the input.
    pub surface: String,
    /// Candidate readings, in discovery order.
    pub solutions: Vec<Solution>,
}

/// The two-part result of analyzing a text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Per-token candidate lists, in token order.
    pub words: Vec<WordAnalysis>,
    /// Auxiliary stem candidates in Buckwalter form, deduplicated in
    /// discovery order across the whole text.
    pub stem_candidates: Vec<String>,
}

/// Trait for morphological analyzers.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Analyze `text`, producing candidate solutions for every token.
    ///
    /// An empty input yields an empty [`Analysis`] without error.
    fn analyze(&self, text: &str) -> Result<Analysis>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// Extract the root sub-tag (field 2) from a solution string.
///
/// Returns `None` if the string has fewer than three fields.
pub fn solution_subtag(solution: &str) -> Option<&str> {
    solution.split_whitespace().nth(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_subtag_extracts_root_field() {
        assert_eq!(solution_subtag("mdyn+p mdyn dyn faEiyl"), Some("dyn"));
        assert_eq!(solution_subtag("mdynp mdynp mdn faEiylap"), Some("mdn"));
    }

    #[test]
    fn test_solution_subtag_short_string() {
        assert_eq!(solution_subtag("a b"), None);
        assert_eq!(solution_subtag(""), None);
    }
}
