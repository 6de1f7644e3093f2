//! Small helpers shared with the parser core.

use serde_json::Value;

/// Copies the default value consumed by an accumulating action
/// (append, append-const, extend).
///
/// Each parse invocation must start from an independent copy so that a
/// caller-supplied default is never mutated in place across repeated
/// parses of the same argument definition. `None` yields a fresh empty
/// array, the list-like seed accumulating actions expect; anything else
/// is cloned with its concrete variant preserved.
pub fn copy_items(items: Option<&Value>) -> Value {
    match items {
        None => Value::Array(Vec::new()),
        Some(value) => value.clone(),
    }
}
