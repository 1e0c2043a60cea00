//! The text analysis orchestrator.
//!
//! [`TextAnalyzer`] wires the four collaborators (morphological analyzer,
//! root stemmer, lemmatizer, sentence segmenter) together and reshapes their
//! raw output into per-word records, an ambiguous-word list, and a
//! search-by-root view. Every operation is one linear pass: call a
//! collaborator, reshape, cache on the instance, return.
//!
//! # State lifecycle
//!
//! `processed_data` is *replaced* by each [`TextAnalyzer::analyze`] call,
//! but `extracted` and `ambiguous_words` are *append-only*: running
//! extraction or ambiguity detection twice accumulates two copies. Call
//! [`TextAnalyzer::reset`] for fresh-per-call semantics. The type is
//! intended for single-threaded use.
//!
//! # Examples
//!
//! ```
//! use sarf::analyzer::TextAnalyzer;
//!
//! let mut analyzer =
//!     TextAnalyzer::with_text("كيف تحولت من مدينة للانوار إلى الاشباح").unwrap();
//! analyzer.analyze().unwrap();
//! let ambiguous = analyzer.detect_ambiguous().to_vec();
//! assert_eq!(ambiguous, vec!["مدينة"]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::lemmatizer::{DictionaryLemmatizer, Lemmatizer};
use crate::analysis::segmenter::{PunctuationSegmenter, Segmenter};
use crate::analysis::stemmer::{IsriStemmer, Stemmer};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::buckwalter;
use crate::error::{Result, SarfError};
use crate::morphology::analyzer::LexiconAnalyzer;
use crate::morphology::lexicon::Lexicon;
use crate::morphology::{MorphologicalAnalyzer, WordAnalysis, solution_subtag};

/// One token's reshaped analysis: scalar surface fields plus parallel
/// candidate lists.
///
/// The lists are index-aligned: `solution[i]`, `pos[i]`, and `gloss[i]`
/// describe the same candidate, so their lengths always match. The scalar
/// `arabic`/`transl` fields keep the *last* candidate's value when
/// candidates disagree; that asymmetry is part of the record's contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// Surface form (last candidate's value).
    pub arabic: String,
    /// Buckwalter transliteration (last candidate's value).
    pub transl: String,
    /// Solution strings of all candidates.
    pub solution: Vec<String>,
    /// POS tags of all candidates.
    pub pos: Vec<String>,
    /// Glosses of all candidates.
    pub gloss: Vec<String>,
}

/// One token's extracted root information.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Surface form.
    pub arabic: String,
    /// Buckwalter transliteration of the surface form.
    pub transl: String,
    /// Stem of the surface form. Empty when the analyzer produced no
    /// candidate for the token.
    pub root: String,
    /// Buckwalter transliteration of `root`.
    pub root_transl: String,
    /// Alternative root forms in Arabic script, from re-analyzing the
    /// isolated word.
    pub candidates: Vec<String>,
}

/// Orchestrates morphological analysis of Arabic text.
///
/// See the [module docs](self) for the state lifecycle.
pub struct TextAnalyzer {
    analyzer: Box<dyn MorphologicalAnalyzer>,
    stemmer: Box<dyn Stemmer>,
    lemmatizer: Box<dyn Lemmatizer>,
    segmenter: Box<dyn Segmenter>,
    tokenizer: WordTokenizer,

    raw_data: Option<String>,
    full_analysis: Vec<WordAnalysis>,
    processed_data: Vec<ProcessedRecord>,
    analyzed_data: Vec<ExtractedRecord>,
    ambig_words: Vec<String>,
    corpus: Vec<String>,
}

impl TextAnalyzer {
    /// Create an analyzer over the built-in lexicon, with no input text yet.
    ///
    /// Collaborator construction happens here; a lexicon that fails to load
    /// surfaces immediately as [`SarfError::Lexicon`].
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Lexicon::builtin())
    }

    /// Create an analyzer with an initial input text.
    pub fn with_text<S: Into<String>>(text: S) -> Result<Self> {
        let mut analyzer = Self::new()?;
        analyzer.raw_data = Some(text.into());
        Ok(analyzer)
    }

    /// Create an analyzer over a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        let morph = LexiconAnalyzer::new(lexicon.clone())?;
        let lemmatizer = DictionaryLemmatizer::from_lexicon(&lexicon);
        Ok(TextAnalyzer {
            analyzer: Box::new(morph),
            stemmer: Box::new(IsriStemmer::new()),
            lemmatizer: Box::new(lemmatizer),
            segmenter: Box::new(PunctuationSegmenter::new()),
            tokenizer: WordTokenizer::new(),
            raw_data: None,
            full_analysis: Vec::new(),
            processed_data: Vec::new(),
            analyzed_data: Vec::new(),
            ambig_words: Vec::new(),
            corpus: Vec::new(),
        })
    }

    /// Replace the raw input text. Derived state is left as-is; call
    /// [`Self::reset`] first for a clean slate.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.raw_data = Some(text.into());
    }

    /// The current raw input text, if any.
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_data.as_deref()
    }

    /// Split `text` into word-level tokens. Pure; empty input yields an
    /// empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Stem every token of `text`.
    pub fn stems(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .iter()
            .map(|w| self.stemmer.stem(w))
            .collect()
    }

    /// Legacy rendering of [`Self::stems`] as a bracketed, quoted list.
    pub fn stems_display(&self, text: &str) -> String {
        Self::display_list(&self.stems(text))
    }

    /// Stem a single word.
    pub fn stem_word(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Lemmatize every token of `text`. Tokens unknown to the lemmatizer's
    /// dictionary come back unchanged.
    pub fn lemmas(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .iter()
            .map(|w| self.lemmatizer.lemmatize(w))
            .collect()
    }

    /// Legacy rendering of [`Self::lemmas`] as a bracketed, quoted list.
    pub fn lemmas_display(&self, text: &str) -> String {
        Self::display_list(&self.lemmas(text))
    }

    /// Split `text` into sentences.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// Buckwalter transliteration of an Arabic word.
    pub fn transliterate(word: &str) -> String {
        buckwalter::to_latin(word)
    }

    /// Convert a Buckwalter transliteration back to Arabic script.
    pub fn reverse_transliterate(latin: &str) -> String {
        buckwalter::to_arabic(latin)
    }

    /// Run full morphological analysis on the current raw text.
    ///
    /// Stores the per-token candidate lists, rebuilds `processed_data`, and
    /// returns the full analysis. Fails with [`SarfError::Input`] when no
    /// raw text has been provided; an empty string analyzes to an empty
    /// structure without error.
    pub fn analyze(&mut self) -> Result<&[WordAnalysis]> {
        let raw = self
            .raw_data
            .clone()
            .ok_or_else(|| SarfError::input("no input provided; call set_text first"))?;
        let analysis = self.analyzer.analyze(&raw)?;
        self.full_analysis = analysis.words;
        self.reshape();
        Ok(&self.full_analysis)
    }

    /// Rebuild `processed_data` from the current full analysis.
    ///
    /// Accumulation is asymmetric on purpose: `arabic`/`transl` are
    /// overwritten per candidate (last one wins), while `solution`/`pos`/
    /// `gloss` append one element per candidate.
    fn reshape(&mut self) {
        let mut all = Vec::with_capacity(self.full_analysis.len());
        for word in &self.full_analysis {
            let mut record = ProcessedRecord::default();
            for candidate in &word.solutions {
                record.transl = candidate.transl.clone();
                record.arabic = candidate.arabic.clone();
                record.solution.push(candidate.solution.clone());
                record.pos.push(candidate.pos.clone());
                record.gloss.push(candidate.gloss.clone());
            }
            all.push(record);
        }
        self.processed_data = all;
    }

    /// Extract per-token root records from the current raw text.
    ///
    /// Appends one [`ExtractedRecord`] per token to the running list; the
    /// list grows across calls (see module docs). A token the analyzer has
    /// no candidates for still gets a record, with its surface form and
    /// empty root fields.
    pub fn extract(&mut self) -> Result<&[ExtractedRecord]> {
        self.analyze()?;
        let words = std::mem::take(&mut self.full_analysis);
        for word in &words {
            let record = match word.solutions.first() {
                Some(first) => {
                    let root = self.stemmer.stem(&first.arabic);
                    let root_transl = buckwalter::to_latin(&root);
                    ExtractedRecord {
                        arabic: first.arabic.clone(),
                        transl: first.transl.clone(),
                        root,
                        root_transl,
                        candidates: self.root_candidates(&word.surface)?,
                    }
                }
                None => ExtractedRecord {
                    arabic: word.surface.clone(),
                    transl: buckwalter::to_latin(&word.surface),
                    ..ExtractedRecord::default()
                },
            };
            self.analyzed_data.push(record);
        }
        self.full_analysis = words;
        Ok(&self.analyzed_data)
    }

    /// All root candidates for an isolated word, in Arabic script.
    ///
    /// Re-invokes the analyzer on the word alone and converts each
    /// auxiliary stem candidate back from Buckwalter form.
    pub fn root_candidates(&self, word: &str) -> Result<Vec<String>> {
        let analysis = self.analyzer.analyze(word)?;
        Ok(analysis
            .stem_candidates
            .iter()
            .map(|bw| buckwalter::to_arabic(bw))
            .collect())
    }

    /// Find the words of the current text that share a root with `key`.
    ///
    /// The key's transliterated stem is compared against each extracted
    /// record's `root_transl`. Runs [`Self::extract`] internally, so every
    /// search re-extracts (and appends to) the record list.
    pub fn search(&mut self, key: &str) -> Result<HashSet<String>> {
        let key = buckwalter::to_latin(&self.stemmer.stem(key));
        self.extract()?;
        Ok(self
            .analyzed_data
            .iter()
            .filter(|record| record.root_transl == key)
            .map(|record| record.arabic.clone())
            .collect())
    }

    /// Append the surface forms whose candidate solutions disagree on the
    /// root sub-tag to the ambiguous-word list, and return the list.
    ///
    /// A word is ambiguous when its candidates' solution strings carry more
    /// than one distinct root sub-tag (see [`solution_subtag`]). The list is
    /// append-only; duplicates from repeated calls are kept.
    pub fn detect_ambiguous(&mut self) -> &[String] {
        for record in &self.processed_data {
            let distinct: HashSet<&str> = record
                .solution
                .iter()
                .filter_map(|s| solution_subtag(s))
                .collect();
            if distinct.len() > 1 {
                self.ambig_words.push(record.arabic.clone());
            }
        }
        &self.ambig_words
    }

    /// Read a UTF-8 text file in full and segment it into sentences.
    ///
    /// A missing, unreadable, or non-UTF-8 file surfaces as
    /// [`SarfError::Corpus`] with the path and cause.
    pub fn load_corpus<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SarfError::corpus(path, e))?;
        self.corpus = self.segmenter.segment(&content);
        Ok(())
    }

    /// Per-token reshaped records from the last analysis.
    pub fn processed_data(&self) -> &[ProcessedRecord] {
        &self.processed_data
    }

    /// Accumulated extracted records.
    pub fn extracted(&self) -> &[ExtractedRecord] {
        &self.analyzed_data
    }

    /// Accumulated ambiguous surface forms.
    pub fn ambiguous_words(&self) -> &[String] {
        &self.ambig_words
    }

    /// Sentences of the last loaded corpus file.
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    /// Clear all derived state (analysis, records, ambiguous words, corpus).
    /// The raw input text is kept.
    pub fn reset(&mut self) {
        self.full_analysis.clear();
        self.processed_data.clear();
        self.analyzed_data.clear();
        self.ambig_words.clear();
        self.corpus.clear();
    }

    /// Python-style list rendering, kept for legacy output parity.
    fn display_list(items: &[String]) -> String {
        let quoted: Vec<String> = items.iter().map(|s| format!("'{s}'")).collect();
        format!("[{}]", quoted.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "كيف تحولت من مدينة للانوار إلى الاشباح";

    #[test]
    fn test_analyze_without_input_fails() {
        let mut analyzer = TextAnalyzer::new().unwrap();
        let err = analyzer.analyze().unwrap_err();
        assert!(matches!(err, SarfError::Input(_)));
    }

    #[test]
    fn test_analyze_empty_text() {
        let mut analyzer = TextAnalyzer::with_text("").unwrap();
        let analysis = analyzer.analyze().unwrap();
        assert!(analysis.is_empty());
        assert!(analyzer.processed_data().is_empty());
    }

    #[test]
    fn test_reshape_field_count_invariant() {
        let mut analyzer = TextAnalyzer::with_text(SAMPLE).unwrap();
        analyzer.analyze().unwrap();
        let records = analyzer.processed_data();
        assert_eq!(records.len(), 7);
        for record in records {
            assert_eq!(record.solution.len(), record.pos.len());
            assert_eq!(record.solution.len(), record.gloss.len());
        }
        // "مدينة" carries two candidates, one per segmentation
        assert_eq!(records[3].arabic, "مدينة");
        assert_eq!(records[3].solution.len(), 2);
    }

    #[test]
    fn test_detect_ambiguous_is_append_only() {
        let mut analyzer = TextAnalyzer::with_text(SAMPLE).unwrap();
        analyzer.analyze().unwrap();
        assert_eq!(analyzer.detect_ambiguous(), &["مدينة"]);
        assert_eq!(analyzer.detect_ambiguous(), &["مدينة", "مدينة"]);
    }

    #[test]
    fn test_extract_empty_candidate_policy() {
        // the analyzer knows none of these words
        let mut analyzer = TextAnalyzer::with_text("زرافة").unwrap();
        let records = analyzer.extract().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].arabic, "زرافة");
        assert_eq!(records[0].transl, "zrAfp");
        assert!(records[0].root.is_empty());
        assert!(records[0].root_transl.is_empty());
        assert!(records[0].candidates.is_empty());
    }

    #[test]
    fn test_transliteration_helpers() {
        assert_eq!(TextAnalyzer::transliterate("كيف"), "kyf");
        assert_eq!(TextAnalyzer::reverse_transliterate("kyf"), "كيف");
    }

    #[test]
    fn test_display_list_matches_legacy_format() {
        let analyzer = TextAnalyzer::new().unwrap();
        assert_eq!(analyzer.stems_display(""), "[]");
        assert_eq!(analyzer.stems_display("كيف من"), "['كيف', 'من']");
    }

    #[test]
    fn test_reset_clears_derived_state_keeps_text() {
        let mut analyzer = TextAnalyzer::with_text(SAMPLE).unwrap();
        analyzer.analyze().unwrap();
        analyzer.detect_ambiguous();
        analyzer.reset();
        assert!(analyzer.processed_data().is_empty());
        assert!(analyzer.ambiguous_words().is_empty());
        assert_eq!(analyzer.raw_text(), Some(SAMPLE));
    }
}
