//! Canonicalization: the first stage of serialization.
//!
//! [`serialize`](crate::serialize) turns a [`KvMap`] into a [`Document`], an
//! ordered list of entries whose [`Node`]s say exactly how each value is to
//! be written. The renderer (see [`crate::render`]) consumes documents, so
//! compact and pretty output share this stage.
//!
//! Canonicalization only reshapes the tree. Keys keep their insertion order
//! and no merging happens.

use crate::{KvMap, Value};

/// An ordered emission document for one object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<Entry>,
}

/// One `key value` pair of a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub node: Node,
}

/// How a single value is written.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Quoted, escaped string.
    String(String),
    /// Bare number in shortest round-trip form.
    Number(f64),
    /// Bare `true` / `false`.
    Bool(bool),
    /// `{ ... }` block.
    Object(Document),
    /// `[ ... ]` block.
    Array(Vec<Node>),
}

impl Document {
    /// Canonicalizes an object.
    #[must_use]
    pub fn from_map(map: &KvMap) -> Self {
        Document {
            entries: map
                .iter()
                .map(|(key, value)| Entry {
                    key: key.clone(),
                    node: Node::from_value(value),
                })
                .collect(),
        }
    }

    /// The entries in emission order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Node {
    /// Canonicalizes a single value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Node::String(s.clone()),
            Value::Number(n) => Node::Number(*n),
            Value::Bool(b) => Node::Bool(*b),
            Value::Object(obj) => Node::Object(Document::from_map(obj)),
            Value::Array(items) => Node::Array(items.iter().map(Node::from_value).collect()),
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let map = KvMap::from([("z", Value::from(1)), ("a", Value::from(2)), ("m", Value::from(3))]);
        let doc = Document::from_map(&map);
        let keys: Vec<_> = doc.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_nested_structure() {
        let map = KvMap::from([(
            "outer",
            Value::object([("list", Value::array([Value::from("x"), Value::from_bool(false)]))]),
        )]);
        let doc = Document::from_map(&map);

        let Node::Object(inner) = &doc.entries()[0].node else {
            panic!("expected object node");
        };
        assert_eq!(
            inner.entries()[0].node,
            Node::Array(vec![Node::String("x".to_string()), Node::Bool(false)])
        );
    }

    #[test]
    fn test_empty_map() {
        let doc = Document::from_map(&KvMap::new());
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
