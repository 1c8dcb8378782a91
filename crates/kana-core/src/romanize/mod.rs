//! Kana-to-Latin romanization.
//!
//! A fixed pipeline over the whole text: ordered digraph rules, a
//! single-character fallback, validation of the result against the Latin
//! output alphabet, then gemination (small tsu) and vowel lengthening (ー).
//! Unmappable characters never fail the call; they are reported as
//! `Diagnostic`s.

pub mod config;
mod engine;
mod table;

pub use config::{init_custom, parse_rules_toml, RomanizeConfigError};
pub use engine::{Diagnostic, Romanized, Romanizer, RuleSet};

/// Romanize with the global rule set.
pub fn romanize(text: &str, emit_diagnostics: bool) -> Romanized {
    Romanizer::global().romanize(text, emit_diagnostics)
}
