//! Canonical string representation for attribute-bearing types.

use serde_json::{Map, Value};

/// Trait for types that can enumerate their own attributes and render
/// a canonical, deterministic representation of them.
///
/// The rendered form is::
///
/// ```text
/// TypeName(pos1, pos2, key1=value1, key2=value2, **{"weird key": value3})
/// ```
///
/// Positional attributes come first in sequence order, then the
/// identifier-named attributes in sorted-name order, then a single
/// trailing `**{...}` entry collecting any attribute whose name is not
/// identifier-shaped (e.g. contains a space). Values render as compact
/// JSON.
pub trait AttributeHolder {
    /// Name printed before the parenthesized attribute list.
    fn type_name(&self) -> &'static str;

    /// Values rendered without a name, in order. Empty by default.
    fn positional_attributes(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Named values, sorted by name.
    fn named_attributes(&self) -> Vec<(String, Value)>;

    /// Renders the canonical representation. Pure; two calls on an
    /// unmodified value yield identical strings.
    fn canonical_repr(&self) -> String {
        let mut parts: Vec<String> = self
            .positional_attributes()
            .iter()
            .map(Value::to_string)
            .collect();
        let mut oddly_named = Map::new();
        for (name, value) in self.named_attributes() {
            if is_identifier(&name) {
                parts.push(format!("{name}={value}"));
            } else {
                oddly_named.insert(name, value);
            }
        }
        if !oddly_named.is_empty() {
            parts.push(format!("**{}", Value::Object(oddly_named)));
        }
        format!("{}({})", self.type_name(), parts.join(", "))
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*` over Unicode alphanumerics.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Probe {
        positional: Vec<Value>,
        named: Vec<(String, Value)>,
    }

    impl AttributeHolder for Probe {
        fn type_name(&self) -> &'static str {
            "Probe"
        }

        fn positional_attributes(&self) -> Vec<Value> {
            self.positional.clone()
        }

        fn named_attributes(&self) -> Vec<(String, Value)> {
            self.named.clone()
        }
    }

    #[test]
    fn test_identifier_shapes() {
        assert!(is_identifier("count"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("dest2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("weird key"));
        assert!(!is_identifier("dash-ed"));
    }

    #[test]
    fn test_empty_holder() {
        let probe = Probe {
            positional: vec![],
            named: vec![],
        };
        assert_eq!(probe.canonical_repr(), "Probe()");
    }

    #[test]
    fn test_positional_then_named_order() {
        let probe = Probe {
            positional: vec![json!("first"), json!(2)],
            named: vec![
                ("alpha".to_string(), json!(1)),
                ("beta".to_string(), json!("b")),
            ],
        };
        assert_eq!(
            probe.canonical_repr(),
            r#"Probe("first", 2, alpha=1, beta="b")"#
        );
    }

    #[test]
    fn test_non_identifier_names_trail_in_starred_group() {
        let probe = Probe {
            positional: vec![],
            named: vec![
                ("ok".to_string(), json!(true)),
                ("weird key".to_string(), json!(3)),
            ],
        };
        let repr = probe.canonical_repr();
        assert_eq!(repr, r#"Probe(ok=true, **{"weird key":3})"#);
        // The odd name never appears as a bare name=value token.
        assert!(!repr.contains("weird key="));
    }

    #[test]
    fn test_repr_is_deterministic() {
        let probe = Probe {
            positional: vec![json!(1)],
            named: vec![
                ("a".to_string(), json!([1, 2])),
                ("b c".to_string(), json!(null)),
            ],
        };
        assert_eq!(probe.canonical_repr(), probe.canonical_repr());
    }
}
