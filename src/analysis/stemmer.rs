//! Stemming algorithms for reducing Arabic words to their root forms.
//!
//! The [`IsriStemmer`] implements the ISRI algorithm: a dictionary-free
//! root stemmer that strips diacritics and affixes, then matches the
//! remaining letters against positional pattern tables for 4-, 5-, 6- and
//! 7-letter words. Identical input always produces identical output.

use std::sync::LazyLock;

use regex::Regex;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Length-three prefixes.
const P3: &[&str] = &["كال", "بال", "ولل", "وال"];

/// Length-two prefixes.
const P2: &[&str] = &["ال", "لل"];

/// Connective and preformative single-letter prefixes.
const P1: &[char] = &['ل', 'ب', 'ف', 'س', 'و', 'ي', 'ت', 'ن', 'ا'];

/// Length-three suffixes.
const S3: &[&str] = &["تمل", "همل", "تان", "تين", "كمل"];

/// Length-two suffixes.
const S2: &[&str] = &[
    "ون", "ات", "ان", "ين", "تن", "كم", "هن", "نا", "يا", "ها", "تم", "كن", "ني", "وا", "ما", "هم",
];

/// Single-letter suffixes.
const S1: &[char] = &['ة', 'ه', 'ي', 'ك', 'ت', 'ا', 'ن'];

/// Augment letters admissible at each position of a four-letter word
/// (root length three).
const PR4: &[&[char]] = &[&['م'], &['ا'], &['ا', 'و', 'ي'], &['ة']];

/// Augment letters used by the five-letter word patterns.
const PR53: &[&[char]] = &[
    &['ا', 'ت'],
    &['ا', 'ي', 'و'],
    &['ا', 'ت', 'م'],
    &['م', 'ي', 'ت'],
    &['م', 'ت'],
    &['ا', 'و'],
    &['ا', 'م'],
];

/// Function words returned whole rather than stemmed.
const FUNCTION_WORDS: &[&str] = &[
    "يكون", "وليس", "وكان", "كذلك", "التي", "وبين", "عليها", "مساء", "الذي", "وكانت", "ولكن",
    "والتي", "تكون", "اليوم", "اللذين", "عليه", "كانت", "لذلك", "أمام", "هناك", "ومن", "مازال",
    "لازال", "لايزال", "مايزال", "اصبح", "أصبح", "أمسى", "امسى", "اضحى", "أضحى", "مابرح",
    "مافتئ", "ماانفك", "لاسيما", "ولايزال", "الحالي", "اليها", "الذين", "فانه", "والذي", "وهذا",
    "لهذا", "فكان", "ستكون", "اليه", "يمكن", "بهذا", "التى",
];

/// Arabic short vowels, tanwin, shadda, and sukun.
static DIACRITICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{064B}-\u{0652}]").expect("valid diacritics class"));

/// The ISRI Arabic root stemmer.
///
/// Processing order: diacritic removal, function-word check, length-3/2
/// prefix and suffix stripping, double-waw reduction, initial-hamza
/// normalization, then a length dispatch into the pattern tables. Words of
/// three letters or fewer are returned as-is after normalization.
#[derive(Clone, Debug, Default)]
pub struct IsriStemmer;

impl IsriStemmer {
    /// Create a new ISRI stemmer.
    pub fn new() -> Self {
        IsriStemmer
    }

    /// Remove short vowels, tanwin, shadda, and sukun.
    fn strip_diacritics(word: &str) -> String {
        DIACRITICS.replace_all(word, "").into_owned()
    }

    fn starts_with(word: &[char], prefix: &str) -> bool {
        let p: Vec<char> = prefix.chars().collect();
        word.len() >= p.len() && word[..p.len()] == p[..]
    }

    fn ends_with(word: &[char], suffix: &str) -> bool {
        let s: Vec<char> = suffix.chars().collect();
        word.len() >= s.len() && word[word.len() - s.len()..] == s[..]
    }

    /// Strip length-three then length-two prefixes.
    fn pre32(word: Vec<char>) -> Vec<char> {
        if word.len() >= 6 {
            for p in P3 {
                if Self::starts_with(&word, p) {
                    return word[3..].to_vec();
                }
            }
        }
        if word.len() >= 5 {
            for p in P2 {
                if Self::starts_with(&word, p) {
                    return word[2..].to_vec();
                }
            }
        }
        word
    }

    /// Strip length-three then length-two suffixes.
    fn suf32(word: Vec<char>) -> Vec<char> {
        if word.len() >= 6 {
            for s in S3 {
                if Self::ends_with(&word, s) {
                    return word[..word.len() - 3].to_vec();
                }
            }
        }
        if word.len() >= 5 {
            for s in S2 {
                if Self::ends_with(&word, s) {
                    return word[..word.len() - 2].to_vec();
                }
            }
        }
        word
    }

    /// Reduce an initial double waw to a single waw.
    fn waw(word: Vec<char>) -> Vec<char> {
        if word.len() >= 4 && word[0] == 'و' && word[1] == 'و' {
            word[1..].to_vec()
        } else {
            word
        }
    }

    /// Normalize an initial hamzated alef to a bare alef.
    fn norm_initial_hamza(mut word: Vec<char>) -> Vec<char> {
        if let Some(first) = word.first_mut()
            && matches!(*first, 'أ' | 'إ' | 'آ')
        {
            *first = 'ا';
        }
        word
    }

    /// Strip a single-letter suffix.
    fn suf1(word: Vec<char>) -> Vec<char> {
        if let Some(&last) = word.last()
            && S1.contains(&last)
        {
            return word[..word.len() - 1].to_vec();
        }
        word
    }

    /// Strip a single-letter prefix.
    fn pre1(word: Vec<char>) -> Vec<char> {
        if let Some(&first) = word.first()
            && P1.contains(&first)
        {
            return word[1..].to_vec();
        }
        word
    }

    /// Patterns for four-letter words (three-letter roots).
    fn pro_w4(word: Vec<char>) -> Vec<char> {
        if PR4[0].contains(&word[0]) {
            word[1..].to_vec()
        } else if PR4[1].contains(&word[1]) {
            vec![word[0], word[2], word[3]]
        } else if PR4[2].contains(&word[2]) {
            vec![word[0], word[1], word[3]]
        } else if PR4[3].contains(&word[3]) {
            word[..3].to_vec()
        } else {
            let word = Self::suf1(word);
            if word.len() == 4 { Self::pre1(word) } else { word }
        }
    }

    /// Patterns for five-letter words carrying a three-letter root.
    fn pro_w53(word: Vec<char>) -> Vec<char> {
        let w = &word;
        if PR53[0].contains(&w[2]) && w[0] == 'ا' {
            vec![w[1], w[3], w[4]]
        } else if PR53[1].contains(&w[3]) && w[0] == 'م' {
            vec![w[1], w[2], w[4]]
        } else if PR53[2].contains(&w[0]) && w[4] == 'ة' {
            vec![w[1], w[2], w[3]]
        } else if PR53[3].contains(&w[0]) && w[2] == 'ت' {
            vec![w[1], w[3], w[4]]
        } else if PR53[4].contains(&w[0]) && w[2] == 'ا' {
            vec![w[1], w[3], w[4]]
        } else if PR53[5].contains(&w[2]) && w[4] == 'ة' {
            vec![w[0], w[1], w[3]]
        } else if PR53[6].contains(&w[0]) && w[1] == 'ن' {
            vec![w[2], w[3], w[4]]
        } else if w[3] == 'ا' && w[0] == 'ا' {
            vec![w[1], w[2], w[4]]
        } else if w[4] == 'ن' && w[3] == 'ا' {
            vec![w[0], w[1], w[2]]
        } else if w[3] == 'ي' && w[0] == 'ت' {
            vec![w[1], w[2], w[4]]
        } else if w[3] == 'و' && w[1] == 'ا' {
            vec![w[0], w[2], w[4]]
        } else if w[2] == 'ا' && w[1] == 'و' {
            vec![w[0], w[3], w[4]]
        } else if w[3] == 'ئ' && w[2] == 'ا' {
            vec![w[0], w[1], w[4]]
        } else if w[4] == 'ة' && w[1] == 'ا' {
            vec![w[0], w[2], w[3]]
        } else if w[4] == 'ي' && w[2] == 'ا' {
            vec![w[0], w[1], w[3]]
        } else {
            let word = Self::suf1(word);
            if word.len() == 5 { Self::pre1(word) } else { word }
        }
    }

    /// Patterns for five-letter words carrying a four-letter root.
    fn pro_w54(word: Vec<char>) -> Vec<char> {
        if PR53[2].contains(&word[0]) {
            word[1..].to_vec()
        } else if word[4] == 'ة' {
            word[..4].to_vec()
        } else if word[2] == 'ا' {
            vec![word[0], word[1], word[3], word[4]]
        } else {
            word
        }
    }

    /// Finish stemming a five-letter word after [`Self::pro_w53`].
    fn end_w5(word: Vec<char>) -> Vec<char> {
        match word.len() {
            4 => Self::pro_w4(word),
            5 => Self::pro_w54(word),
            _ => word,
        }
    }

    /// Patterns for six-letter words carrying a three-letter root.
    fn pro_w6(word: Vec<char>) -> Vec<char> {
        let w = &word;
        if Self::starts_with(w, "است") || Self::starts_with(w, "مست") {
            word[3..].to_vec()
        } else if w[0] == 'م' && w[3] == 'ا' && w[5] == 'ة' {
            vec![w[1], w[2], w[4]]
        } else if w[0] == 'ا' && w[2] == 'ت' && w[4] == 'ا' {
            vec![w[1], w[3], w[5]]
        } else if w[0] == 'ا' && w[3] == 'و' && w[2] == w[4] {
            vec![w[1], w[4], w[5]]
        } else if w[2] == 'ا' && w[4] == 'ا' {
            vec![w[0], w[1], w[3], w[5]]
        } else {
            let word = Self::suf1(word);
            if word.len() == 6 { Self::pre1(word) } else { word }
        }
    }

    /// Patterns for six-letter words carrying a four-letter root.
    fn pro_w64(word: Vec<char>) -> Vec<char> {
        let w = &word;
        if w[0] == 'ا' && w[4] == 'ا' {
            vec![w[1], w[2], w[3], w[5]]
        } else if Self::starts_with(w, "مت") {
            word[2..].to_vec()
        } else {
            word
        }
    }

    /// Finish stemming a six-letter word after [`Self::pro_w6`].
    fn end_w6(word: Vec<char>) -> Vec<char> {
        match word.len() {
            5 => Self::end_w5(Self::pro_w53(word)),
            6 => Self::pro_w64(word),
            _ => word,
        }
    }
}

impl Stemmer for IsriStemmer {
    fn stem(&self, word: &str) -> String {
        let normalized = Self::strip_diacritics(word);
        if FUNCTION_WORDS.contains(&normalized.as_str()) {
            return normalized;
        }

        let mut w: Vec<char> = normalized.chars().collect();
        w = Self::pre32(w);
        w = Self::suf32(w);
        w = Self::waw(w);
        w = Self::norm_initial_hamza(w);

        w = match w.len() {
            4 => Self::pro_w4(w),
            5 => Self::end_w5(Self::pro_w53(w)),
            6 => Self::end_w6(Self::pro_w6(w)),
            7 => {
                let mut w = Self::suf1(w);
                if w.len() == 7 {
                    w = Self::pre1(w);
                }
                if w.len() == 6 {
                    Self::end_w6(Self::pro_w6(w))
                } else {
                    w
                }
            }
            _ => w,
        };

        w.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "isri"
    }
}
