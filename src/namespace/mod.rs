//! The `Namespace` result container returned by a parse.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::holder::AttributeHolder;

/// Simple object for storing attributes.
///
/// Maps destination names to parsed values. Equality is structural and
/// order-independent; assignment is last-write-wins, as with ordinary
/// attribute assignment. A parse invocation owns its `Namespace`
/// exclusively; concurrent parses use distinct instances.
///
/// Serializes as a plain JSON object.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace {
    attrs: BTreeMap<String, Value>, // dest → parsed value
}

impl Namespace {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attrs.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Attributes in sorted-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_repr())
    }
}

impl AttributeHolder for Namespace {
    fn type_name(&self) -> &'static str {
        "Namespace"
    }

    fn named_attributes(&self) -> Vec<(String, Value)> {
        // BTreeMap iteration is already sorted by name.
        self.attrs
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Namespace
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ns = Self::new();
        ns.extend(iter);
        ns
    }
}

impl<K, V> Extend<(K, V)> for Namespace
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl IntoIterator for Namespace {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

/// Builds a [`Namespace`] from literal bindings:
///
/// ```rust
/// # use argbase::namespace;
/// let ns = namespace!(count = 3, verbose = true);
/// assert_eq!(ns.get("count"), Some(&serde_json::json!(3)));
/// ```
#[macro_export]
macro_rules! namespace {
    () => {
        $crate::Namespace::new()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {{
        let mut ns = $crate::Namespace::new();
        $(ns.set(stringify!($name), $value);)+
        ns
    }};
}
