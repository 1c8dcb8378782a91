//! 7-bit-clean sort keys for mixed kana and Latin text.
//!
//! Keys compare byte-wise in gojuon order, with digits before letters before
//! kana. Case, hiragana vs. katakana, and voicing do not affect the key.
//!
//! Byte bands:
//! - digits `0`-`9` → `!`..`*` (0x21..0x2A)
//! - letters `a`-`z` → `+`..`D` (0x2B..0x44)
//! - kana ordinals 0-47 → `F`..`u` (0x46..0x75)

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::kana::TransformTable;

const DIGIT_SHIFT: u8 = 15;
const LETTER_SHIFT: u8 = 54;
const KANA_BASE: u8 = 70;

/// Offset from a full-width ASCII form to its half-width character.
const WIDE_OFFSET: u32 = 0xFEE0;

/// Base sounds in gojuon order; the index is the ordinal.
const GOJUON: [char; 48] = [
    'あ', 'い', 'う', 'え', 'お',
    'か', 'き', 'く', 'け', 'こ',
    'さ', 'し', 'す', 'せ', 'そ',
    'た', 'ち', 'つ', 'て', 'と',
    'な', 'に', 'ぬ', 'ね', 'の',
    'は', 'ひ', 'ふ', 'へ', 'ほ',
    'ま', 'み', 'む', 'め', 'も',
    'や', 'ゆ', 'よ',
    'ら', 'り', 'る', 'れ', 'ろ',
    'わ', 'ゐ', 'ゑ', 'を', 'ん',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortEntry {
    Ordinal(u8),
    /// Resolve to this character and classify again.
    Alias(char),
}

fn sort_table() -> &'static HashMap<char, SortEntry> {
    static INSTANCE: OnceLock<HashMap<char, SortEntry>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let to_katakana = TransformTable::hiragana_to_katakana();
        let voiced = TransformTable::unvoiced_to_voiced();
        let semi_voiced = TransformTable::unvoiced_to_semi_voiced();

        let mut table = HashMap::new();
        for (ordinal, &base) in GOJUON.iter().enumerate() {
            let entry = SortEntry::Ordinal(ordinal as u8);
            for plain in std::iter::once(base).chain(to_katakana.get(base)) {
                table.insert(plain, entry);
                for variant in voiced.get(plain).into_iter().chain(semi_voiced.get(plain)) {
                    table.insert(variant, entry);
                }
            }
        }
        // Katakana-only voiced forms (ヴ) also get their hiragana spelling (ゔ).
        let to_hiragana = TransformTable::katakana_to_hiragana();
        let hiragana_forms: Vec<(char, SortEntry)> = table
            .iter()
            .filter_map(|(&c, &entry)| Some((to_hiragana.get(c)?, entry)))
            .collect();
        for (c, entry) in hiragana_forms {
            table.entry(c).or_insert(entry);
        }

        let wide = ('０'..='９').chain('Ａ'..='Ｚ').chain('ａ'..='ｚ');
        for c in wide {
            if let Some(half) = char::from_u32(c as u32 - WIDE_OFFSET) {
                table.insert(c, SortEntry::Alias(half.to_ascii_lowercase()));
            }
        }
        table
    })
}

/// A byte-comparable key. Every byte is printable ASCII.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(String);

impl SortKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the sort key for `text`. Characters with no place in the ordering
/// (kanji, symbols, small kana, ...) contribute nothing.
pub fn sort_key(text: &str) -> SortKey {
    let table = sort_table();
    let mut key = String::with_capacity(text.len());

    for original in text.chars() {
        let mut c = original.to_ascii_lowercase();
        // One pass plus at most one retry: aliases always resolve to ASCII.
        for _ in 0..2 {
            match c {
                '0'..='9' => key.push((c as u8 - DIGIT_SHIFT) as char),
                'a'..='z' => key.push((c as u8 - LETTER_SHIFT) as char),
                _ => match table.get(&c) {
                    Some(SortEntry::Ordinal(n)) => key.push((KANA_BASE + n) as char),
                    Some(SortEntry::Alias(half)) => {
                        c = *half;
                        continue;
                    }
                    None => {}
                },
            }
            break;
        }
    }
    SortKey(key)
}
