//! Stem lexicon backing the morphological analyzer.
//!
//! A lexicon maps bare stems (diacritic-free, hamza-normalized) to one or
//! more [`StemEntry`] readings. A compact built-in lexicon ships with the
//! crate; larger lexicons load from JSON files shaped as
//! `{"entries": [{"stem": ..., "lemma": ..., ...}]}`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SarfError};

/// One dictionary reading of a stem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StemEntry {
    /// Normalized stem as it appears inside a token.
    pub stem: String,
    /// Dictionary headword.
    pub lemma: String,
    /// Consonantal root.
    pub root: String,
    /// Part-of-speech tag.
    pub pos: String,
    /// English gloss (semicolon-separated senses).
    pub gloss: String,
    /// Morphological pattern in Buckwalter form.
    pub pattern: String,
}

/// On-disk lexicon file shape.
#[derive(Debug, Serialize, Deserialize)]
struct LexiconFile {
    entries: Vec<StemEntry>,
}

/// Built-in lexicon entries: (stem, lemma, root, pos, gloss, pattern).
///
/// Small by design; enough coverage for interactive use and for the test
/// fixtures. Note the two readings of "من" (agreeing roots) and the two
/// segmentations of "مدينة" — city vs. debtor — whose roots disagree.
const BUILTIN_ENTRIES: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("كيف", "كيف", "كيف", "INTERROG_PART", "how", "part"),
    ("تحول", "تحول", "حول", "VERB_PERFECT", "be transformed;turn into", "tafaE~al"),
    ("من", "من", "من", "PREP", "from", "part"),
    ("من", "من", "من", "INTERROG_PRON", "who;whom", "part"),
    ("مدينة", "مدينة", "مدن", "NOUN", "city", "faEiylap"),
    ("مدين", "مدين", "دين", "ADJ", "indebted;debtor", "faEiyl"),
    ("انوار", "نور", "نور", "NOUN", "lights", ">afoEAl"),
    ("نور", "نور", "نور", "NOUN", "light", "fuEol"),
    ("الى", "الى", "الى", "PREP", "to;towards", "part"),
    ("اشباح", "شبح", "شبح", "NOUN", "ghosts;specters", ">afoEAl"),
    ("شبح", "شبح", "شبح", "NOUN", "ghost;phantom", "faEal"),
    ("كتاب", "كتاب", "كتب", "NOUN", "book", "fiEAl"),
    ("مكتبة", "مكتبة", "كتب", "NOUN", "library;bookstore", "mafoEalap"),
    ("حال", "حال", "حول", "NOUN", "condition;state", "faEal"),
    ("علم", "علم", "علم", "NOUN", "knowledge;science", "fiEol"),
];

/// A stem lexicon with an index from stem to its readings.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: Vec<StemEntry>,
    index: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// Build a lexicon from a list of entries.
    pub fn new(entries: Vec<StemEntry>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.stem.clone()).or_default().push(i);
        }
        Lexicon { entries, index }
    }

    /// The built-in lexicon shipped with the crate.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|&(stem, lemma, root, pos, gloss, pattern)| StemEntry {
                stem: stem.to_string(),
                lemma: lemma.to_string(),
                root: root.to_string(),
                pos: pos.to_string(),
                gloss: gloss.to_string(),
                pattern: pattern.to_string(),
            })
            .collect();
        Lexicon::new(entries)
    }

    /// Load a lexicon from a JSON file.
    ///
    /// Any read or parse failure is a [`SarfError::Lexicon`]: a lexicon that
    /// cannot load is a fatal initialization error for the analyzer built on
    /// top of it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| SarfError::lexicon(format!("failed to read {}: {e}", path.display())))?;
        let file: LexiconFile = serde_json::from_str(&content)
            .map_err(|e| SarfError::lexicon(format!("invalid lexicon {}: {e}", path.display())))?;
        Ok(Lexicon::new(file.entries))
    }

    /// All readings of `stem`, in insertion order.
    pub fn lookup(&self, stem: &str) -> impl Iterator<Item = &StemEntry> {
        self.index
            .get(stem)
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[StemEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let lexicon = Lexicon::builtin();
        let readings: Vec<_> = lexicon.lookup("من").collect();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].pos, "PREP");
        assert_eq!(readings[1].pos, "INTERROG_PRON");
    }

    #[test]
    fn test_unknown_stem() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.lookup("زرافة").count(), 0);
    }

    #[test]
    fn test_from_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        let json = serde_json::json!({
            "entries": [{
                "stem": "قلم",
                "lemma": "قلم",
                "root": "قلم",
                "pos": "NOUN",
                "gloss": "pen",
                "pattern": "faEal"
            }]
        });
        fs::write(&path, json.to_string()).unwrap();

        let lexicon = Lexicon::from_path(&path).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.lookup("قلم").next().unwrap().gloss, "pen");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Lexicon::from_path("no/such/lexicon.json").unwrap_err();
        assert!(matches!(err, SarfError::Lexicon(_)));
    }

    #[test]
    fn test_from_path_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let err = Lexicon::from_path(&path).unwrap_err();
        assert!(matches!(err, SarfError::Lexicon(_)));
    }
}
