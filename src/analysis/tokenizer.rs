//! Word tokenization.
//!
//! Splits raw text into word-level tokens using Unicode word boundary rules
//! (UAX #29), which handle Arabic script, Latin text, and mixed content.
//! Punctuation and whitespace segments are filtered out.
//!
//! # Examples
//!
//! ```
//! use sarf::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("كيف تحولت؟");
//! assert_eq!(tokens, vec!["كيف", "تحولت"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Trait for tokenizers that split text into word-level tokens.
///
/// Tokenization is a pure function of the input text: no side effects, and
/// an empty input always yields an empty token sequence.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into words.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) and keeps only
/// segments containing at least one alphanumeric character, so punctuation
/// and whitespace never appear as tokens.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_tokenization() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("كيف تحولت من مدينة للانوار إلى الاشباح");
        assert_eq!(
            tokens,
            vec!["كيف", "تحولت", "من", "مدينة", "للانوار", "إلى", "الاشباح"]
        );
    }

    #[test]
    fn test_punctuation_is_dropped() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("hello, world! ؟");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "word");
    }
}
