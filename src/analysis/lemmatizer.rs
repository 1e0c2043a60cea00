//! Dictionary-based lemmatization.
//!
//! A lemmatizer maps an inflected surface form to its dictionary headword.
//! Words absent from the dictionary are returned unchanged; that behavior is
//! part of the collaborator contract, and callers rely on it.

use std::collections::HashMap;

use crate::morphology::lexicon::Lexicon;

/// Trait for lemmatizers.
pub trait Lemmatizer: Send + Sync {
    /// Return the lemma for `word`, or `word` itself if unknown.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// A lemmatizer backed by a surface-form-to-lemma dictionary.
///
/// # Examples
///
/// ```
/// use sarf::analysis::lemmatizer::{DictionaryLemmatizer, Lemmatizer};
/// use sarf::morphology::lexicon::Lexicon;
///
/// let lemmatizer = DictionaryLemmatizer::from_lexicon(&Lexicon::builtin());
/// assert_eq!(lemmatizer.lemmatize("انوار"), "نور");
/// // unknown words come back unchanged
/// assert_eq!(lemmatizer.lemmatize("قطار"), "قطار");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DictionaryLemmatizer {
    entries: HashMap<String, String>,
}

impl DictionaryLemmatizer {
    /// Create a lemmatizer with an explicit dictionary.
    pub fn new(entries: HashMap<String, String>) -> Self {
        DictionaryLemmatizer { entries }
    }

    /// Build the dictionary from a morphological lexicon's stem/lemma pairs.
    ///
    /// The first entry for a surface form wins; lemmas also map to
    /// themselves so already-lemmatized text passes through stably.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let mut entries = HashMap::new();
        for entry in lexicon.entries() {
            entries
                .entry(entry.stem.clone())
                .or_insert_with(|| entry.lemma.clone());
            entries
                .entry(entry.lemma.clone())
                .or_insert_with(|| entry.lemma.clone());
        }
        DictionaryLemmatizer { entries }
    }

    /// Number of surface forms in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        match self.entries.get(word) {
            Some(lemma) => lemma.clone(),
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_word() {
        let lemmatizer = DictionaryLemmatizer::from_lexicon(&Lexicon::builtin());
        assert_eq!(lemmatizer.lemmatize("اشباح"), "شبح");
    }

    #[test]
    fn test_unknown_word_unchanged() {
        let lemmatizer = DictionaryLemmatizer::from_lexicon(&Lexicon::builtin());
        assert_eq!(lemmatizer.lemmatize("غامض"), "غامض");
        assert_eq!(lemmatizer.lemmatize(""), "");
    }

    #[test]
    fn test_lemma_is_fixed_point() {
        let lemmatizer = DictionaryLemmatizer::from_lexicon(&Lexicon::builtin());
        let lemma = lemmatizer.lemmatize("انوار");
        assert_eq!(lemmatizer.lemmatize(&lemma), lemma);
    }
}
