/// Built-in romanization rules, in the same format `parse_rules_toml` accepts.
pub(crate) const DEFAULT_TOML: &str = include_str!("default_rules.toml");
