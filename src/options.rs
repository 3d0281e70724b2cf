//! Configuration options for KV rendering.
//!
//! - [`KvOptions`]: main configuration struct
//! - [`IndentChar`]: spaces or tabs for pretty output
//!
//! Options only affect layout. Every layout re-parses to the same value.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kv::{kv, to_string_with_options, IndentChar, KvOptions};
//!
//! let data = kv!({ "x": 1, "y": 2 });
//!
//! let compact = to_string_with_options(&data, KvOptions::new()).unwrap();
//! assert_eq!(compact, r#""x" 1 "y" 2"#);
//!
//! let tabs = KvOptions::pretty().with_indent_char(IndentChar::Tab);
//! let pretty = to_string_with_options(&data, tabs).unwrap();
//! assert_eq!(pretty, "\"x\" 1\n\"y\" 2\n");
//! ```

/// Character used for one level of pretty indentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IndentChar {
    #[default]
    Space,
    Tab,
}

impl IndentChar {
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            IndentChar::Space => ' ',
            IndentChar::Tab => '\t',
        }
    }
}

/// Configuration options for KV rendering.
///
/// # Examples
///
/// ```rust
/// use serde_kv::{IndentChar, KvOptions};
///
/// // Default compact options
/// let options = KvOptions::new();
/// assert!(!options.pretty);
///
/// // One entry per line, 4-space indentation
/// let options = KvOptions::pretty();
/// assert_eq!(options.indent, 4);
///
/// // Custom configuration
/// let options = KvOptions::pretty()
///     .with_indent(1)
///     .with_indent_char(IndentChar::Tab);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KvOptions {
    /// Indent characters per nesting level (pretty only).
    pub indent: usize,
    pub indent_char: IndentChar,
    /// One entry per line instead of a single line.
    pub pretty: bool,
}

impl Default for KvOptions {
    fn default() -> Self {
        KvOptions {
            indent: 4,
            indent_char: IndentChar::default(),
            pretty: false,
        }
    }
}

impl KvOptions {
    /// Creates default options (compact, single line).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates pretty-printing options: one entry per line, 4-space indent.
    #[must_use]
    pub fn pretty() -> Self {
        KvOptions {
            pretty: true,
            ..Self::default()
        }
    }

    /// Sets the number of indent characters per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the indent character.
    #[must_use]
    pub fn with_indent_char(mut self, indent_char: IndentChar) -> Self {
        self.indent_char = indent_char;
        self
    }

    /// Enables or disables pretty-printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
