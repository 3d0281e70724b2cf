//! Rendering: the second stage of serialization.
//!
//! Writes a canonical [`Document`] as KV text. Keys and strings are always
//! quoted, numbers and booleans are bare words, and containers use `{}` and
//! `[]`. Comments are never emitted.
//!
//! ## Layouts
//!
//! Compact (the default) writes everything on one line:
//!
//! ```text
//! "Name" "demo" "Size" [1 2] "Flags" {"Debug" false}
//! ```
//!
//! Pretty writes one entry per line and indents container contents:
//!
//! ```text
//! "Name" "demo"
//! "Size" [
//!     1
//!     2
//! ]
//! "Flags" {
//!     "Debug" false
//! }
//! ```

use crate::document::{Document, Node};
use crate::escape::escape;
use crate::KvOptions;

/// Renders a document with default (compact) options.
///
/// # Examples
///
/// ```rust
/// use serde_kv::{kv, render, serialize};
///
/// let value = kv!({ "Key": "Value", "List": [1, 2.5] });
/// let doc = serialize(value.get_object().unwrap());
/// assert_eq!(render(&doc), r#""Key" "Value" "List" [1 2.5]"#);
/// ```
#[must_use]
pub fn render(doc: &Document) -> String {
    render_with_options(doc, &KvOptions::default())
}

/// Renders a document with the given layout options.
#[must_use]
pub fn render_with_options(doc: &Document, options: &KvOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.write_entries(doc);
    tracing::trace!(
        entries = doc.len(),
        bytes = renderer.output.len(),
        "rendered KV document"
    );
    renderer.into_inner()
}

/// Renders a single node as it would appear after a key.
pub(crate) fn render_node(node: &Node, options: &KvOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.write_node(node);
    renderer.into_inner()
}

struct Renderer<'o> {
    output: String,
    options: &'o KvOptions,
    indent_level: usize,
}

impl<'o> Renderer<'o> {
    fn new(options: &'o KvOptions) -> Self {
        Renderer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        if self.options.pretty {
            let width = self.indent_level * self.options.indent;
            let ch = self.options.indent_char.as_char();
            self.output.extend(std::iter::repeat(ch).take(width));
        }
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        self.output.push_str(&escape(s));
        self.output.push('"');
    }

    fn write_entries(&mut self, doc: &Document) {
        for (i, entry) in doc.entries().iter().enumerate() {
            if self.options.pretty {
                self.write_indent();
            } else if i > 0 {
                self.output.push(' ');
            }
            self.write_string(&entry.key);
            self.output.push(' ');
            self.write_node(&entry.node);
            if self.options.pretty {
                self.output.push('\n');
            }
        }
    }

    // Plain and exponent forms both read back as the same f64; keep the
    // shorter one, plain on ties.
    fn write_number(&mut self, n: f64) {
        let plain = n.to_string();
        let exponent = format!("{:e}", n);
        if exponent.len() < plain.len() {
            self.output.push_str(&exponent);
        } else {
            self.output.push_str(&plain);
        }
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::String(s) => self.write_string(s),
            Node::Number(n) => self.write_number(*n),
            Node::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Node::Object(doc) if doc.is_empty() => self.output.push_str("{}"),
            Node::Object(doc) => {
                self.output.push('{');
                if self.options.pretty {
                    self.output.push('\n');
                    self.indent_level += 1;
                    self.write_entries(doc);
                    self.indent_level -= 1;
                    self.write_indent();
                } else {
                    self.write_entries(doc);
                }
                self.output.push('}');
            }
            Node::Array(items) if items.is_empty() => self.output.push_str("[]"),
            Node::Array(items) => {
                self.output.push('[');
                if self.options.pretty {
                    self.output.push('\n');
                    self.indent_level += 1;
                    for item in items {
                        self.write_indent();
                        self.write_node(item);
                        self.output.push('\n');
                    }
                    self.indent_level -= 1;
                    self.write_indent();
                } else {
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            self.output.push(' ');
                        }
                        self.write_node(item);
                    }
                }
                self.output.push(']');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndentChar, KvMap, Value};

    fn sample() -> Document {
        let map = KvMap::from([
            ("Name", Value::from("demo")),
            ("Size", Value::array([1, 2])),
            ("Flags", Value::object([("Debug", Value::from_bool(false))])),
            ("Empty", Value::Array(vec![])),
        ]);
        Document::from_map(&map)
    }

    #[test]
    fn test_compact_layout() {
        assert_eq!(
            render(&sample()),
            r#""Name" "demo" "Size" [1 2] "Flags" {"Debug" false} "Empty" []"#
        );
    }

    #[test]
    fn test_pretty_layout() {
        let expected = concat!(
            "\"Name\" \"demo\"\n",
            "\"Size\" [\n",
            "    1\n",
            "    2\n",
            "]\n",
            "\"Flags\" {\n",
            "    \"Debug\" false\n",
            "}\n",
            "\"Empty\" []\n",
        );
        assert_eq!(render_with_options(&sample(), &KvOptions::pretty()), expected);
    }

    #[test]
    fn test_pretty_tabs_nested() {
        let map = KvMap::from([("a", Value::array([Value::array([1])]))]);
        let options = KvOptions::pretty()
            .with_indent(1)
            .with_indent_char(IndentChar::Tab);
        assert_eq!(
            render_with_options(&Document::from_map(&map), &options),
            "\"a\" [\n\t[\n\t\t1\n\t]\n]\n"
        );
    }

    #[test]
    fn test_escaping() {
        let map = KvMap::from([("say \"hi\"", Value::from(r"C:\dir"))]);
        assert_eq!(
            render(&Document::from_map(&map)),
            r#""say \"hi\"" "C:\\dir""#
        );
    }

    #[test]
    fn test_numbers_shortest_form() {
        let node = |n: f64| render_node(&Node::Number(n), &KvOptions::default());
        assert_eq!(node(50.0), "50");
        assert_eq!(node(0.05), "0.05");
        assert_eq!(node(123.23), "123.23");
        assert_eq!(node(-1.5), "-1.5");
        assert_eq!(node(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_numbers_switch_to_exponent_when_shorter() {
        let node = |n: f64| render_node(&Node::Number(n), &KvOptions::default());
        assert_eq!(node(1e300), "1e300");
        assert_eq!(node(5e-324), "5e-324");
        assert_eq!(node(1e-7), "1e-7");
        assert_eq!(node(-2.5e-10), "-2.5e-10");
        assert_eq!(node(1000.0), "1e3");
        assert_eq!(node(100.0), "100");
        assert_eq!(node(8080.0), "8080");

        for n in [1e300, 5e-324, 1e-7, -2.5e-10, f64::MAX, f64::MIN_POSITIVE] {
            let map = KvMap::from([("k", n)]);
            let parsed = crate::parse(&render(&Document::from_map(&map))).unwrap();
            let back = parsed.get_object().unwrap().get("k").unwrap().get_number().unwrap();
            assert_eq!(back.to_bits(), n.to_bits());
        }
    }

    #[test]
    fn test_empty_document_renders_empty() {
        assert_eq!(render(&Document::default()), "");
        assert_eq!(render_with_options(&Document::default(), &KvOptions::pretty()), "");
    }
}
