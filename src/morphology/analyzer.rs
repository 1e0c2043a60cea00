//! Lexicon-backed morphological analyzer.
//!
//! For each token, the analyzer tries every prefix/stem/suffix segmentation
//! against small closed affix tables and looks the candidate stem up in the
//! [`Lexicon`]. Every matching reading becomes one [`Solution`]; a token
//! with no match keeps its surface form and an empty solution list.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::buckwalter;
use crate::error::{Result, SarfError};
use crate::morphology::lexicon::Lexicon;
use crate::morphology::{Analysis, MorphologicalAnalyzer, Solution, WordAnalysis};

/// Proclitic prefixes tried against each token, longest forms first within
/// each family. The empty prefix must stay first so bare stems win the
/// candidate ordering.
const PREFIXES: &[&str] = &[
    "", "ال", "لل", "وال", "بال", "كال", "فال", "و", "ف", "ب", "ك", "ل",
];

/// Enclitic and inflectional suffixes tried against each token. The empty
/// suffix must stay first, for the same ordering reason as [`PREFIXES`].
const SUFFIXES: &[&str] = &[
    "", "ة", "ات", "ان", "ون", "ين", "ه", "ها", "هم", "هن", "كم", "نا", "ي", "ت", "وا",
];

static DIACRITICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{064B}-\u{0652}]").expect("valid diacritics class"));

/// A morphological analyzer backed by a stem lexicon and affix tables.
///
/// # Examples
///
/// ```
/// use sarf::morphology::MorphologicalAnalyzer;
/// use sarf::morphology::analyzer::LexiconAnalyzer;
/// use sarf::morphology::lexicon::Lexicon;
///
/// let analyzer = LexiconAnalyzer::new(Lexicon::builtin()).unwrap();
/// let analysis = analyzer.analyze("مدينة").unwrap();
/// assert_eq!(analysis.words.len(), 1);
/// // city and debtor readings
/// assert_eq!(analysis.words[0].solutions.len(), 2);
/// ```
#[derive(Debug)]
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
    tokenizer: WordTokenizer,
}

impl LexiconAnalyzer {
    /// Create an analyzer over the given lexicon.
    ///
    /// An empty lexicon is a fatal initialization error: the analyzer would
    /// never produce a solution.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        if lexicon.is_empty() {
            return Err(SarfError::lexicon("lexicon has no entries"));
        }
        Ok(LexiconAnalyzer {
            lexicon,
            tokenizer: WordTokenizer::new(),
        })
    }

    /// Strip diacritics and normalize hamzated alef forms for lexicon lookup.
    fn normalize(word: &str) -> String {
        DIACRITICS
            .replace_all(word, "")
            .chars()
            .map(|c| match c {
                'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
                c => c,
            })
            .collect()
    }

    /// Analyze one token, pushing any new stem candidates onto `stems`.
    fn analyze_word(
        &self,
        surface: &str,
        stems: &mut Vec<String>,
        seen: &mut HashSet<String>,
    ) -> WordAnalysis {
        let normalized = Self::normalize(surface);
        let chars: Vec<char> = normalized.chars().collect();
        let transl = buckwalter::to_latin(surface);
        let mut solutions = Vec::new();

        for prefix in PREFIXES {
            let plen = prefix.chars().count();
            if chars.len() < plen + 2 || !normalized.starts_with(prefix) {
                continue;
            }
            for suffix in SUFFIXES {
                let slen = suffix.chars().count();
                if chars.len() < plen + slen + 2 {
                    continue;
                }
                if !normalized.ends_with(suffix) {
                    continue;
                }
                let core: String = chars[plen..chars.len() - slen].iter().collect();
                for entry in self.lexicon.lookup(&core) {
                    let segmentation = [prefix, core.as_str(), suffix]
                        .iter()
                        .filter(|part| !part.is_empty())
                        .map(|part| buckwalter::to_latin(part))
                        .collect::<Vec<_>>()
                        .join("+");
                    let root_bw = buckwalter::to_latin(&entry.root);
                    let solution = format!(
                        "{segmentation} {} {root_bw} {}",
                        buckwalter::to_latin(&entry.lemma),
                        entry.pattern,
                    );
                    if seen.insert(root_bw.clone()) {
                        stems.push(root_bw);
                    }
                    solutions.push(Solution {
                        arabic: surface.to_string(),
                        transl: transl.clone(),
                        solution,
                        pos: entry.pos.clone(),
                        gloss: entry.gloss.clone(),
                    });
                }
            }
        }

        WordAnalysis {
            surface: surface.to_string(),
            solutions,
        }
    }
}

impl MorphologicalAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<Analysis> {
        let mut words = Vec::new();
        let mut stem_candidates = Vec::new();
        let mut seen = HashSet::new();

        for token in self.tokenizer.tokenize(text) {
            words.push(self.analyze_word(&token, &mut stem_candidates, &mut seen));
        }

        Ok(Analysis {
            words,
            stem_candidates,
        })
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::solution_subtag;

    fn analyzer() -> LexiconAnalyzer {
        LexiconAnalyzer::new(Lexicon::builtin()).unwrap()
    }

    #[test]
    fn test_empty_lexicon_is_fatal() {
        let err = LexiconAnalyzer::new(Lexicon::new(Vec::new())).unwrap_err();
        assert!(matches!(err, SarfError::Lexicon(_)));
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyzer().analyze("").unwrap();
        assert!(analysis.words.is_empty());
        assert!(analysis.stem_candidates.is_empty());
    }

    #[test]
    fn test_prefixed_word() {
        let analysis = analyzer().analyze("الاشباح").unwrap();
        assert_eq!(analysis.words.len(), 1);
        let solutions = &analysis.words[0].solutions;
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].gloss, "ghosts;specters");
        assert_eq!(solutions[0].solution, "Al+A$bAH $bH $bH >afoEAl");
    }

    #[test]
    fn test_ambiguous_segmentations_disagree_on_root() {
        let analysis = analyzer().analyze("مدينة").unwrap();
        let solutions = &analysis.words[0].solutions;
        assert_eq!(solutions.len(), 2);
        // bare stem (city) ordered before the segmented reading (debtor)
        assert_eq!(solution_subtag(&solutions[0].solution), Some("mdn"));
        assert_eq!(solution_subtag(&solutions[1].solution), Some("dyn"));
        assert_eq!(analysis.stem_candidates, vec!["mdn", "dyn"]);
    }

    #[test]
    fn test_agreeing_readings_share_root() {
        let analysis = analyzer().analyze("من").unwrap();
        let solutions = &analysis.words[0].solutions;
        assert_eq!(solutions.len(), 2);
        assert_eq!(
            solution_subtag(&solutions[0].solution),
            solution_subtag(&solutions[1].solution)
        );
    }

    #[test]
    fn test_unknown_word_keeps_surface() {
        let analysis = analyzer().analyze("زرافة").unwrap();
        assert_eq!(analysis.words[0].surface, "زرافة");
        assert!(analysis.words[0].solutions.is_empty());
    }

    #[test]
    fn test_diacritics_normalized_for_lookup() {
        let analysis = analyzer().analyze("إِلَى").unwrap();
        let solutions = &analysis.words[0].solutions;
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].pos, "PREP");
        // transliteration keeps the original diacritics
        assert_eq!(solutions[0].transl, "<ilaY");
    }
}
