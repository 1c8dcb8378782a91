//! Kana engine: character-level tools for Japanese UTF-8 text.
//!
//! This crate is the flat public surface over `kana_core`. The component
//! modules are re-exported for callers that need the full APIs (custom
//! romanization rules, transform tables, settings).

pub mod trace_init;

pub use kana_core;
pub use kana_core::{codec, kana, offset, ranges, settings};

pub use kana_core::codec::{CharClass, Codepoint, EncodedChar, Encoding, EncodingError};
pub use kana_core::kana::{semi_voice_kana, to_hiragana, to_katakana, unvoice_kana, voice_kana};
pub use kana_core::offset::{find_char_offset, slice_chars, OffsetError};
pub use kana_core::ranges::{
    kana_class, kanji_class, katakana_class, KANA_RANGES, KANJI_RANGES, KATAKANA_RANGES,
};
pub use kana_core::romanize::{Diagnostic, Romanized, Romanizer, RuleSet};
pub use kana_core::sort_key::{sort_key, SortKey};

/// Decode the character at byte `offset`, returning it and its byte length.
pub fn decode_character(bytes: &[u8], offset: usize) -> Result<(Codepoint, usize), EncodingError> {
    codec::decode(bytes, offset)
}

pub fn encode_character(codepoint: Codepoint) -> EncodedChar {
    codec::encode(codepoint)
}

pub fn classify(codepoint: Codepoint) -> CharClass {
    codec::classify(codepoint)
}

/// `Ok(None)` when `byte_offset` falls inside a character.
pub fn byte_offset_to_char_offset(
    text: &[u8],
    byte_offset: usize,
) -> Result<Option<usize>, OffsetError> {
    offset::byte_to_char(text, byte_offset)
}

pub fn char_offset_to_byte_offset(text: &[u8], char_offset: usize) -> Result<usize, OffsetError> {
    offset::char_to_byte(text, char_offset)
}

/// Romanize with diagnostics on or off per `[romanize] emit_diagnostics`
/// (on by default).
pub fn romanize(text: &str) -> Romanized {
    romanize_with(text, settings::settings().romanize.emit_diagnostics)
}

pub fn romanize_with(text: &str, emit_diagnostics: bool) -> Romanized {
    kana_core::romanize::romanize(text, emit_diagnostics)
}
