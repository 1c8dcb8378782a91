use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug_span, warn};

use super::config::parse_rules_toml;
use super::table::DEFAULT_TOML;

const SMALL_TSU: [char; 2] = ['っ', 'ッ'];
const LONG_VOWEL_MARK: char = 'ー';

pub(super) static GLOBAL: OnceLock<Romanizer> = OnceLock::new();

/// Ordered digraph rules plus the single-character fallback map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    digraphs: Vec<(String, String)>,
    singles: HashMap<char, String>,
}

impl RuleSet {
    pub fn new(digraphs: Vec<(String, String)>, singles: HashMap<char, String>) -> Self {
        Self { digraphs, singles }
    }

    /// The rules embedded from `default_rules.toml`.
    pub fn builtin() -> Self {
        parse_rules_toml(DEFAULT_TOML).expect("built-in romanization TOML must be valid")
    }

    pub fn digraphs(&self) -> &[(String, String)] {
        &self.digraphs
    }

    pub fn single(&self, c: char) -> Option<&str> {
        self.singles.get(&c).map(String::as_str)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A character that could not be mapped into the Latin output alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub character: char,
    /// The full input the character came from.
    pub source: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "couldn't romanize {} in {}", self.character, self.source)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Romanized {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Romanizer {
    rules: RuleSet,
}

impl Romanizer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Get or initialize the global romanizer (built-in rules unless a custom
    /// set was installed with `config::init_custom` first).
    pub fn global() -> &'static Romanizer {
        GLOBAL.get_or_init(|| Romanizer::new(RuleSet::builtin()))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Romanize `text`. Never fails: characters without a mapping are kept
    /// as-is and, when `emit_diagnostics` is set, reported.
    pub fn romanize(&self, text: &str, emit_diagnostics: bool) -> Romanized {
        let _span = debug_span!("romanize", len = text.len()).entered();

        let digraphed = self.apply_digraphs(text);

        let mut out = String::with_capacity(digraphed.len());
        let mut diagnostics = Vec::new();
        for c in digraphed.chars() {
            let mut buf = [0u8; 4];
            let chunk: &str = match self.rules.single(c) {
                Some(latin) => latin,
                None => &*c.encode_utf8(&mut buf),
            };
            if emit_diagnostics && !is_romanized(chunk) {
                warn!(character = %c, source = text, "couldn't romanize character");
                diagnostics.push(Diagnostic {
                    character: c,
                    source: text.to_string(),
                });
            }
            out.push_str(chunk);
        }

        Romanized {
            text: lengthen(&geminate(&out)),
            diagnostics,
        }
    }

    fn apply_digraphs(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (pattern, latin) in &self.rules.digraphs {
            if current.contains(pattern.as_str()) {
                current = current.replace(pattern.as_str(), latin);
            }
        }
        current
    }
}

/// Output alphabet after the single-character stage. Small tsu and the
/// long-vowel mark are still pending at that point.
fn is_romanized(chunk: &str) -> bool {
    !chunk.is_empty()
        && chunk.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '&' | '.' | '-' | ' ')
                || SMALL_TSU.contains(&c)
                || c == LONG_VOWEL_MARK
        })
}

/// Each small tsu doubles the next character and is dropped. Consecutive
/// markers all apply to the same character. A marker at the end of the text
/// or before a newline is left in place.
pub(crate) fn geminate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut markers: Vec<char> = Vec::new();
    for c in text.chars() {
        if SMALL_TSU.contains(&c) {
            markers.push(c);
            continue;
        }
        if c == '\n' {
            out.extend(markers.drain(..));
        } else {
            out.extend(markers.drain(..).map(|_| c));
        }
        out.push(c);
    }
    out.extend(markers);
    out
}

/// Each long-vowel mark repeats the character before it. A mark at the start
/// of the text or after a newline is left in place.
pub(crate) fn lengthen(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if c == LONG_VOWEL_MARK {
            if let Some(p) = prev.filter(|&p| p != '\n') {
                out.push(p);
                continue;
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
