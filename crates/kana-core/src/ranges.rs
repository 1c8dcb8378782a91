//! Inclusive codepoint ranges for the character classes, and their rendering
//! as regex character-class bodies (`[...]` contents) for external pattern
//! engines.

use std::sync::OnceLock;

pub const KANJI_RANGES: &[(u32, u32)] = &[(0x4E00, 0x9FBF), (0x3400, 0x4DBF), (0x20000, 0x2A6DF)];

/// Starts at ア (U+30A2): the small ァ and the punctuation before it are not
/// matched.
pub const KATAKANA_RANGES: &[(u32, u32)] = &[(0x30A2, 0x30FF)];

/// Hiragana and katakana blocks plus the katakana phonetic extensions.
pub const KANA_RANGES: &[(u32, u32)] = &[(0x3040, 0x30FF), (0x31F0, 0x31FF)];

pub const WIDE_LATIN_RANGES: &[(u32, u32)] = &[(0xFF10, 0xFF5A)];

pub(crate) fn in_ranges(value: u32, ranges: &[(u32, u32)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&value))
}

/// Render ranges as `lo-hi` pairs, e.g. `"一-龿㐀-䶿"`, for use inside a
/// regex character class: `format!("[{}]", character_class(KANJI_RANGES))`.
///
/// Pairs whose bounds are not scalar values are skipped.
pub fn character_class(ranges: &[(u32, u32)]) -> String {
    ranges
        .iter()
        .filter_map(|&(lo, hi)| Some((char::from_u32(lo)?, char::from_u32(hi)?)))
        .map(|(lo, hi)| format!("{lo}-{hi}"))
        .collect()
}

pub fn kanji_class() -> &'static str {
    static CLASS: OnceLock<String> = OnceLock::new();
    CLASS.get_or_init(|| character_class(KANJI_RANGES))
}

pub fn katakana_class() -> &'static str {
    static CLASS: OnceLock<String> = OnceLock::new();
    CLASS.get_or_init(|| character_class(KATAKANA_RANGES))
}

pub fn kana_class() -> &'static str {
    static CLASS: OnceLock<String> = OnceLock::new();
    CLASS.get_or_init(|| character_class(KANA_RANGES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_character_class_rendering() {
        assert_eq!(katakana_class(), "ア-ヿ");
        assert_eq!(kana_class(), "\u{3040}-ヿㇰ-ㇿ");
        assert!(kanji_class().starts_with("一-"));
        assert_eq!(kanji_class().chars().count(), 9);
    }

    #[test]
    fn test_kanji_class_in_regex() {
        let re = Regex::new(&format!("^[{}]+$", kanji_class())).unwrap();
        assert!(re.is_match("漢字"));
        assert!(re.is_match("𠀀"));
        assert!(!re.is_match("かんじ"));
        assert!(!re.is_match("kanji"));
    }

    #[test]
    fn test_katakana_class_in_regex() {
        let re = Regex::new(&format!("^[{}]+$", katakana_class())).unwrap();
        assert!(re.is_match("カタカナ"));
        assert!(re.is_match("ラーメン"));
        assert!(!re.is_match("ァ"));
        assert!(!re.is_match("ひらがな"));
    }

    #[test]
    fn test_kana_class_in_regex() {
        let re = Regex::new(&format!("[{}]", kana_class())).unwrap();
        let found: String = re.find_iter("漢字とカナab").map(|m| m.as_str()).collect();
        assert_eq!(found, "とカナ");
    }

    #[test]
    fn test_in_ranges() {
        assert!(in_ranges(0x30A2, KATAKANA_RANGES));
        assert!(!in_ranges(0x30A1, KATAKANA_RANGES));
        assert!(!in_ranges(0, &[]));
    }
}
