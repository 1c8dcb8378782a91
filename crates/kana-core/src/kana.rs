//! Single-character kana substitution tables: script conversion and voicing.
//!
//! Each table maps one character to exactly one replacement. Characters with
//! no entry pass through unchanged.
//!
//! は行 has two voiced forms. `voice_kana` always produces the dakuten form
//! (は→ば); the handakuten form (は→ぱ) has its own operation,
//! `semi_voice_kana`. `unvoice_kana` folds both back to the plain kana.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Katakana → hiragana, including voiced, semi-voiced and small forms.
const KATAKANA_HIRAGANA: &[(char, char)] = &[
    ('ア', 'あ'), ('イ', 'い'), ('ウ', 'う'), ('エ', 'え'), ('オ', 'お'),
    ('カ', 'か'), ('キ', 'き'), ('ク', 'く'), ('ケ', 'け'), ('コ', 'こ'),
    ('サ', 'さ'), ('シ', 'し'), ('ス', 'す'), ('セ', 'せ'), ('ソ', 'そ'),
    ('タ', 'た'), ('チ', 'ち'), ('ツ', 'つ'), ('テ', 'て'), ('ト', 'と'),
    ('ナ', 'な'), ('ニ', 'に'), ('ヌ', 'ぬ'), ('ネ', 'ね'), ('ノ', 'の'),
    ('ハ', 'は'), ('ヒ', 'ひ'), ('フ', 'ふ'), ('ヘ', 'へ'), ('ホ', 'ほ'),
    ('マ', 'ま'), ('ミ', 'み'), ('ム', 'む'), ('メ', 'め'), ('モ', 'も'),
    ('ヤ', 'や'), ('ユ', 'ゆ'), ('ヨ', 'よ'),
    ('ラ', 'ら'), ('リ', 'り'), ('ル', 'る'), ('レ', 'れ'), ('ロ', 'ろ'),
    ('ワ', 'わ'), ('ヰ', 'ゐ'), ('ヱ', 'ゑ'), ('ヲ', 'を'), ('ン', 'ん'),
    ('ガ', 'が'), ('ギ', 'ぎ'), ('グ', 'ぐ'), ('ゲ', 'げ'), ('ゴ', 'ご'),
    ('ザ', 'ざ'), ('ジ', 'じ'), ('ズ', 'ず'), ('ゼ', 'ぜ'), ('ゾ', 'ぞ'),
    ('ダ', 'だ'), ('ヂ', 'ぢ'), ('ヅ', 'づ'), ('デ', 'で'), ('ド', 'ど'),
    ('バ', 'ば'), ('ビ', 'び'), ('ブ', 'ぶ'), ('ベ', 'べ'), ('ボ', 'ぼ'),
    ('パ', 'ぱ'), ('ピ', 'ぴ'), ('プ', 'ぷ'), ('ペ', 'ぺ'), ('ポ', 'ぽ'),
    ('ヴ', 'ゔ'),
    ('ァ', 'ぁ'), ('ィ', 'ぃ'), ('ゥ', 'ぅ'), ('ェ', 'ぇ'), ('ォ', 'ぉ'),
    ('ャ', 'ゃ'), ('ュ', 'ゅ'), ('ョ', 'ょ'), ('ッ', 'っ'), ('ヮ', 'ゎ'),
];

/// (plain, dakuten) pairs.
const DAKUTEN: &[(char, char)] = &[
    ('か', 'が'), ('き', 'ぎ'), ('く', 'ぐ'), ('け', 'げ'), ('こ', 'ご'),
    ('さ', 'ざ'), ('し', 'じ'), ('す', 'ず'), ('せ', 'ぜ'), ('そ', 'ぞ'),
    ('た', 'だ'), ('ち', 'ぢ'), ('つ', 'づ'), ('て', 'で'), ('と', 'ど'),
    ('は', 'ば'), ('ひ', 'び'), ('ふ', 'ぶ'), ('へ', 'べ'), ('ほ', 'ぼ'),
    ('ウ', 'ヴ'),
    ('カ', 'ガ'), ('キ', 'ギ'), ('ク', 'グ'), ('ケ', 'ゲ'), ('コ', 'ゴ'),
    ('サ', 'ザ'), ('シ', 'ジ'), ('ス', 'ズ'), ('セ', 'ゼ'), ('ソ', 'ゾ'),
    ('タ', 'ダ'), ('チ', 'ヂ'), ('ツ', 'ヅ'), ('テ', 'デ'), ('ト', 'ド'),
    ('ハ', 'バ'), ('ヒ', 'ビ'), ('フ', 'ブ'), ('ヘ', 'ベ'), ('ホ', 'ボ'),
];

/// (plain, handakuten) pairs.
const HANDAKUTEN: &[(char, char)] = &[
    ('は', 'ぱ'), ('ひ', 'ぴ'), ('ふ', 'ぷ'), ('へ', 'ぺ'), ('ほ', 'ぽ'),
    ('ハ', 'パ'), ('ヒ', 'ピ'), ('フ', 'プ'), ('ヘ', 'ペ'), ('ホ', 'ポ'),
];

/// An immutable one-character-to-one-character substitution map.
#[derive(Debug)]
pub struct TransformTable {
    map: HashMap<char, char>,
}

impl TransformTable {
    fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a (char, char)>) -> Self {
        Self {
            map: pairs.into_iter().copied().collect(),
        }
    }

    fn from_inverted<'a>(pairs: impl IntoIterator<Item = &'a (char, char)>) -> Self {
        Self {
            map: pairs.into_iter().map(|&(from, to)| (to, from)).collect(),
        }
    }

    pub fn katakana_to_hiragana() -> &'static TransformTable {
        static INSTANCE: OnceLock<TransformTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_pairs(KATAKANA_HIRAGANA))
    }

    pub fn hiragana_to_katakana() -> &'static TransformTable {
        static INSTANCE: OnceLock<TransformTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_inverted(KATAKANA_HIRAGANA))
    }

    pub fn unvoiced_to_voiced() -> &'static TransformTable {
        static INSTANCE: OnceLock<TransformTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_pairs(DAKUTEN))
    }

    pub fn unvoiced_to_semi_voiced() -> &'static TransformTable {
        static INSTANCE: OnceLock<TransformTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_pairs(HANDAKUTEN))
    }

    /// Dakuten and handakuten forms both map back to the plain kana.
    pub fn voiced_to_unvoiced() -> &'static TransformTable {
        static INSTANCE: OnceLock<TransformTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_inverted(DAKUTEN.iter().chain(HANDAKUTEN)))
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Replace every mapped character; unmapped characters are kept.
    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.get(c).unwrap_or(c)).collect()
    }
}

pub fn to_hiragana(text: &str) -> String {
    TransformTable::katakana_to_hiragana().apply(text)
}

pub fn to_katakana(text: &str) -> String {
    TransformTable::hiragana_to_katakana().apply(text)
}

pub fn unvoice_kana(text: &str) -> String {
    TransformTable::voiced_to_unvoiced().apply(text)
}

pub fn voice_kana(text: &str) -> String {
    TransformTable::unvoiced_to_voiced().apply(text)
}

pub fn semi_voice_kana(text: &str) -> String {
    TransformTable::unvoiced_to_semi_voiced().apply(text)
}
