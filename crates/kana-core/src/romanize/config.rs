use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::debug;

use super::engine::{RuleSet, Romanizer, GLOBAL};

#[derive(Deserialize)]
struct RulesConfig {
    #[serde(default)]
    digraph: Vec<DigraphRule>,
    #[serde(default)]
    single: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct DigraphRule {
    pattern: String,
    latin: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RomanizeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no [[digraph]] or [single] rules")]
    Empty,
    #[error("digraph pattern must be exactly two characters: {0}")]
    InvalidPattern(String),
    #[error("single key must be exactly one character: {0}")]
    InvalidKey(String),
    #[error("empty replacement for: {0}")]
    EmptyValue(String),
    #[error("romanizer already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a `RuleSet`.
///
/// ```toml
/// [[digraph]]
/// pattern = "きゃ"
/// latin = "kya"
///
/// [single]
/// "あ" = "a"
/// ```
///
/// `[[digraph]]` entries keep their file order, which is the order they are
/// applied in.
pub fn parse_rules_toml(toml_str: &str) -> Result<RuleSet, RomanizeConfigError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RomanizeConfigError::Parse(e.to_string()))?;

    if config.digraph.is_empty() && config.single.is_empty() {
        return Err(RomanizeConfigError::Empty);
    }

    let mut digraphs = Vec::with_capacity(config.digraph.len());
    for rule in config.digraph {
        if rule.pattern.chars().count() != 2 {
            return Err(RomanizeConfigError::InvalidPattern(rule.pattern));
        }
        if rule.latin.is_empty() {
            return Err(RomanizeConfigError::EmptyValue(rule.pattern));
        }
        digraphs.push((rule.pattern, rule.latin));
    }

    let mut singles = HashMap::with_capacity(config.single.len());
    for (key, value) in config.single {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(RomanizeConfigError::InvalidKey(key));
        };
        if value.is_empty() {
            return Err(RomanizeConfigError::EmptyValue(key));
        }
        singles.insert(c, value);
    }

    Ok(RuleSet::new(digraphs, singles))
}

/// Install a custom rule set as the global romanizer. Must be called before
/// the first `Romanizer::global()` call.
pub fn init_custom(toml_content: &str) -> Result<(), RomanizeConfigError> {
    let rules = parse_rules_toml(toml_content)?;
    let digraphs = rules.digraphs().len();
    GLOBAL
        .set(Romanizer::new(rules))
        .map_err(|_| RomanizeConfigError::AlreadyInitialized)?;
    debug!(digraphs, "installed custom romanization rules");
    Ok(())
}
