//! Key-argument discrimination between independent connections.

use super::args::*;
use super::self_prelude::*;

/// Rule selecting which of a field's arguments distinguish one logical
/// connection from another.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum KeyArgsRule {
    /// Every argument except the pagination controls qualifies.
    #[default]
    NonPagination,
    /// Only the listed argument names qualify.
    Explicit(Vec<String>),
}

impl KeyArgsRule {
    /// Argument names from `args` that qualify under this rule.
    pub fn key_args<'a>(&'a self, args: &'a FieldArgs) -> Vec<&'a str> {
        self.key_arg_pairs(args)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Canonical signature of the qualifying (name, value) pairs. Pairs are
    /// sorted by name, so two fetches with the same qualifying arguments
    /// always map to the same signature regardless of call order. An empty
    /// subset yields the `()` signature, a bucket of its own.
    pub fn signature(&self, args: &FieldArgs) -> KeyArgsSignature {
        let mut pairs = self.key_arg_pairs(args);
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let rendered = pairs
            .iter()
            .map(|(name, value)| format!("{}:{}", name, value))
            .collect::<Vec<String>>()
            .join(",");

        KeyArgsSignature(format!("({})", rendered))
    }

    fn key_arg_pairs<'a>(&'a self, args: &'a FieldArgs) -> Vec<(&'a str, &'a serde_json::Value)> {
        match self {
            Self::NonPagination => args
                .iter()
                .filter(|(name, _)| !FieldArgs::is_pagination_arg(name))
                .map(|(name, value)| (name.as_str(), value))
                .collect(),
            Self::Explicit(names) => names
                .iter()
                .filter_map(|name| args.get(name).map(|value| (name.as_str(), value)))
                .collect(),
        }
    }
}

/// Canonical rendering of a key-argument set, part of a connection's cache
/// key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KeyArgsSignature(pub String);

impl fmt::Display for KeyArgsSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn args(pairs: &[(&str, serde_json::Value)]) -> FieldArgs {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_signature_excludes_pagination_args() {
        let rule = KeyArgsRule::default();
        let a = args(&[("first", json!(25)), ("status", json!("active"))]);
        let b = args(&[
            ("status", json!("active")),
            ("first", json!(50)),
            ("after", json!("cursor-9")),
        ]);

        assert_eq!(rule.signature(&a), rule.signature(&b));
        assert_eq!(rule.key_args(&a), vec!["status"]);
    }

    #[test]
    fn test_signature_is_call_order_insensitive() {
        let rule = KeyArgsRule::default();
        let a = args(&[("status", json!("active")), ("search", json!("smith"))]);
        let b = args(&[("search", json!("smith")), ("status", json!("active"))]);

        assert_eq!(rule.signature(&a), rule.signature(&b));
    }

    #[test]
    fn test_signature_differs_on_filter_values() {
        let rule = KeyArgsRule::default();
        let a = args(&[("status", json!("active"))]);
        let b = args(&[("status", json!("archived"))]);

        assert_ne!(rule.signature(&a), rule.signature(&b));
    }

    #[test]
    fn test_explicit_rule_ignores_unlisted_args() {
        let rule = KeyArgsRule::Explicit(vec!["designationAccountId".to_string()]);
        let a = args(&[
            ("designationAccountId", json!("da-1")),
            ("search", json!("smith")),
        ]);
        let b = args(&[("designationAccountId", json!("da-1"))]);

        assert_eq!(rule.signature(&a), rule.signature(&b));
    }

    #[test]
    fn test_empty_subset_is_its_own_bucket() {
        let rule = KeyArgsRule::default();
        let bare = FieldArgs::new();
        let paged = args(&[("first", json!(25))]);

        assert_eq!(rule.signature(&bare), rule.signature(&paged));
        assert_eq!(rule.signature(&bare).0, "()");
    }
}
