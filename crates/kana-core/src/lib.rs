//! Japanese text toolkit over UTF-8 bytes: a single-character codec with
//! kanji/kana/wide-Latin classification, byte ↔ character offset translation,
//! kana script and voicing tables, romanization, and kana-aware sort keys.

pub mod codec;
pub mod kana;
pub mod offset;
pub mod ranges;
pub mod romanize;
pub mod settings;
pub mod sort_key;
#[cfg(test)]
mod tests;
