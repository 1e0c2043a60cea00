//! Buckwalter transliteration between Arabic script and ASCII.
//!
//! The Buckwalter scheme maps each supported Arabic character to exactly one
//! printable ASCII character, which makes the encoding losslessly invertible:
//! [`to_arabic`] undoes [`to_latin`] for any string composed of supported
//! characters. Characters outside the table (digits, whitespace, Latin
//! letters) pass through unchanged in both directions.
//!
//! # Examples
//!
//! ```
//! use sarf::buckwalter::{to_arabic, to_latin};
//!
//! assert_eq!(to_latin("كيف"), "kyf");
//! assert_eq!(to_arabic("kyf"), "كيف");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

/// The Buckwalter character table, Arabic on the left, ASCII on the right.
///
/// One entry per supported character; both columns are duplicate-free, which
/// is what makes the mapping bijective.
const BUCKWALTER_TABLE: &[(char, char)] = &[
    ('\u{0621}', '\''), // hamza
    ('\u{0622}', '|'),  // alef with madda
    ('\u{0623}', '>'),  // alef with hamza above
    ('\u{0624}', '&'),  // waw with hamza
    ('\u{0625}', '<'),  // alef with hamza below
    ('\u{0626}', '}'),  // yeh with hamza
    ('\u{0627}', 'A'),  // alef
    ('\u{0628}', 'b'),  // beh
    ('\u{0629}', 'p'),  // teh marbuta
    ('\u{062A}', 't'),  // teh
    ('\u{062B}', 'v'),  // theh
    ('\u{062C}', 'j'),  // jeem
    ('\u{062D}', 'H'),  // hah
    ('\u{062E}', 'x'),  // khah
    ('\u{062F}', 'd'),  // dal
    ('\u{0630}', '*'),  // thal
    ('\u{0631}', 'r'),  // reh
    ('\u{0632}', 'z'),  // zain
    ('\u{0633}', 's'),  // seen
    ('\u{0634}', '$'),  // sheen
    ('\u{0635}', 'S'),  // sad
    ('\u{0636}', 'D'),  // dad
    ('\u{0637}', 'T'),  // tah
    ('\u{0638}', 'Z'),  // zah
    ('\u{0639}', 'E'),  // ain
    ('\u{063A}', 'g'),  // ghain
    ('\u{0640}', '_'),  // tatweel
    ('\u{0641}', 'f'),  // feh
    ('\u{0642}', 'q'),  // qaf
    ('\u{0643}', 'k'),  // kaf
    ('\u{0644}', 'l'),  // lam
    ('\u{0645}', 'm'),  // meem
    ('\u{0646}', 'n'),  // noon
    ('\u{0647}', 'h'),  // heh
    ('\u{0648}', 'w'),  // waw
    ('\u{0649}', 'Y'),  // alef maksura
    ('\u{064A}', 'y'),  // yeh
    ('\u{064B}', 'F'),  // fathatan
    ('\u{064C}', 'N'),  // dammatan
    ('\u{064D}', 'K'),  // kasratan
    ('\u{064E}', 'a'),  // fatha
    ('\u{064F}', 'u'),  // damma
    ('\u{0650}', 'i'),  // kasra
    ('\u{0651}', '~'),  // shadda
    ('\u{0652}', 'o'),  // sukun
    ('\u{0670}', '`'),  // superscript alef
    ('\u{0671}', '{'),  // alef wasla
];

static UNI_TO_BUCK: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| BUCKWALTER_TABLE.iter().copied().collect());

static BUCK_TO_UNI: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| BUCKWALTER_TABLE.iter().map(|&(u, b)| (b, u)).collect());

/// Transliterate Arabic script to its Buckwalter ASCII form.
///
/// Unsupported characters are copied through unchanged.
pub fn to_latin(word: &str) -> String {
    word.chars()
        .map(|c| UNI_TO_BUCK.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Convert a Buckwalter-encoded string back to Arabic script.
///
/// Inverse of [`to_latin`] for supported characters; unsupported characters
/// are copied through unchanged.
pub fn to_arabic(latin: &str) -> String {
    latin
        .chars()
        .map(|c| BUCK_TO_UNI.get(&c).copied().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_transliteration() {
        assert_eq!(to_latin("مدينة"), "mdynp");
        assert_eq!(to_latin("سلام"), "slAm");
        assert_eq!(to_arabic("slAm"), "سلام");
    }

    #[test]
    fn test_diacritics_and_hamza_forms() {
        // "إِلَى" carries kasra and fatha marks
        assert_eq!(to_latin("إِلَى"), "<ilaY");
        assert_eq!(to_arabic("<ilaY"), "إِلَى");
    }

    #[test]
    fn test_round_trip_supported_words() {
        for word in ["كيف", "تحولت", "مدينة", "الاشباح", "شَدَّة"] {
            assert_eq!(to_arabic(&to_latin(word)), word, "round trip for {word}");
        }
    }

    #[test]
    fn test_unsupported_characters_pass_through() {
        assert_eq!(to_latin("abc 123"), "abc 123");
        assert_eq!(to_latin("كيف 2024"), "kyf 2024");
    }

    #[test]
    fn test_table_is_bijective() {
        use std::collections::HashSet;
        let arabic: HashSet<_> = BUCKWALTER_TABLE.iter().map(|&(u, _)| u).collect();
        let latin: HashSet<_> = BUCKWALTER_TABLE.iter().map(|&(_, b)| b).collect();
        assert_eq!(arabic.len(), BUCKWALTER_TABLE.len());
        assert_eq!(latin.len(), BUCKWALTER_TABLE.len());
    }
}
