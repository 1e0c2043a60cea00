//! Sentence segmentation.
//!
//! Splits text into sentences on terminal punctuation, covering both the
//! Latin terminals and their Arabic counterparts (`؟`, `؛`, `۔`). Runs of
//! consecutive terminals ("?!", "...") stay attached to the sentence they
//! close.

/// Trait for sentence segmenters.
pub trait Segmenter: Send + Sync {
    /// Split `text` into an ordered sequence of sentences.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Get the name of this segmenter.
    fn name(&self) -> &'static str;
}

/// Characters that close a sentence.
const TERMINALS: &[char] = &['.', '!', '?', '؟', '؛', '۔', '…'];

/// A rule-based sentence segmenter driven by terminal punctuation.
///
/// # Examples
///
/// ```
/// use sarf::analysis::segmenter::{PunctuationSegmenter, Segmenter};
///
/// let segmenter = PunctuationSegmenter::new();
/// let sentences = segmenter.segment("ذهب الولد. هل عاد؟ نعم!");
/// assert_eq!(sentences, vec!["ذهب الولد.", "هل عاد؟", "نعم!"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PunctuationSegmenter;

impl PunctuationSegmenter {
    /// Create a new punctuation segmenter.
    pub fn new() -> Self {
        PunctuationSegmenter
    }
}

impl Segmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut in_terminal_run = false;

        for c in text.chars() {
            if TERMINALS.contains(&c) {
                current.push(c);
                in_terminal_run = true;
            } else {
                if in_terminal_run {
                    let sentence = current.trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    current.clear();
                    in_terminal_run = false;
                }
                current.push(c);
            }
        }

        let sentence = current.trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }

        sentences
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_terminals() {
        let segmenter = PunctuationSegmenter::new();
        let sentences = segmenter.segment("كيف حالك؟ انا بخير؛ شكرا");
        assert_eq!(sentences, vec!["كيف حالك؟", "انا بخير؛", "شكرا"]);
    }

    #[test]
    fn test_terminal_runs_stay_attached() {
        let segmenter = PunctuationSegmenter::new();
        let sentences = segmenter.segment("ماذا؟! لا اعرف...");
        assert_eq!(sentences, vec!["ماذا؟!", "لا اعرف..."]);
    }

    #[test]
    fn test_no_terminal_yields_single_sentence() {
        let segmenter = PunctuationSegmenter::new();
        assert_eq!(segmenter.segment("جملة واحدة"), vec!["جملة واحدة"]);
    }

    #[test]
    fn test_empty_input() {
        let segmenter = PunctuationSegmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("   ").is_empty());
    }
}
