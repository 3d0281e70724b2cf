//! # serde_kv
//!
//! A reader and writer for the KV format, a comment-tolerant key/value text
//! language used for configuration and update manifests, with Serde support.
//!
//! ## What is KV?
//!
//! ```text
//! // build settings
//! "Name" "launcher"
//! "Version" 3.1
//! "Targets" ["linux" "windows"]
//! "Debug" { "Symbols" true "Level" 2 }
//! ```
//!
//! A document is a list of `"key" value` pairs. Values are strings, numbers,
//! `true`/`false`, `[...]` arrays and `{...}` objects. See [`syntax`] for the
//! full grammar.
//!
//! ## Key Features
//!
//! - **Duplicate-key merge**: a key written twice merges its object values
//!   field by field, so later files can patch earlier ones
//! - **Round trip**: rendered text parses back to an equal [`Value`]
//! - **Two-stage writer**: [`serialize`] builds a [`Document`], [`render`]
//!   lays it out compact or pretty
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]`
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_kv = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_kv::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, r#""id" 123 "name" "Alice" "active" true"#);
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ### Dynamic values
//!
//! ```rust
//! use serde_kv::{kv, parse, render, serialize};
//!
//! let value = parse(r#"
//!     "Cfg" { "A" 1 "B" false }
//!     "Cfg" { "B" true }   // later pairs win
//! "#).unwrap();
//!
//! assert_eq!(value, kv!({ "Cfg": { "A": 1, "B": true } }));
//!
//! let doc = serialize(value.get_object().unwrap());
//! assert_eq!(render(&doc), r#""Cfg" {"A" 1 "B" true}"#);
//! ```
//!
//! ## Errors
//!
//! Lexing and parsing failures carry a [`Position`]. Typed accessors such as
//! [`Value::get_string`] return [`Error::TypeMismatch`] instead of panicking.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `debug` and `trace` level. Install
//! any subscriber to see them.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - serialize and deserialize a struct
//! - **`macro.rs`** - building values with the kv! macro
//! - **`merging.rs`** - duplicate keys and layered files
//! - **`dynamic_values.rs`** - working with `Value` directly
//! - **`custom_options.rs`** - compact and pretty layouts
//! - **`manifest.rs`** - reading and rewriting an update manifest
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod document;
pub mod error;
pub mod escape;
pub mod lexer;
pub mod macros;
pub mod map;
mod merge;
pub mod options;
mod parser;
mod render;
pub mod ser;
pub mod syntax;
pub mod value;

pub use document::{Document, Entry, Node};
pub use error::{Error, ErrorKind, Position, Result};
pub use lexer::{Lexer, Token, TokenKind};
pub use map::KvMap;
pub use merge::merge;
pub use options::{IndentChar, KvOptions};
pub use parser::RECURSION_LIMIT;
pub use render::{render, render_with_options};
pub use ser::ValueSerializer;
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses a KV document into its root object.
///
/// Duplicate keys are merged as they are read. On failure no partial tree
/// is returned.
///
/// # Examples
///
/// ```rust
/// use serde_kv::{parse, Value};
///
/// let value = parse(r#""X" 1 // comment
/// "Y" [true "two"]"#).unwrap();
/// assert_eq!(value.get_object().unwrap().get("X"), Some(&Value::from(1)));
///
/// assert!(parse(r#""X" [1 2"#).is_err());
/// ```
///
/// # Errors
///
/// Returns a lexing or parsing error with the position it occurred at.
pub fn parse(text: &str) -> Result<Value> {
    tracing::trace!(bytes = text.len(), "parsing KV text");
    parser::parse_document(text).map(Value::Object)
}

/// Parses a KV document from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not UTF-8 or the text does not parse.
pub fn parse_slice(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(Error::custom)?;
    parse(text)
}

/// Canonicalizes an object into an emission [`Document`].
///
/// This is the first stage of writing; pass the result to [`render`] or
/// [`render_with_options`].
#[must_use]
pub fn serialize(object: &KvMap) -> Document {
    Document::from_map(object)
}

/// Serialize any `T: Serialize` to a compact KV string.
///
/// The top level must serialize to an object (a struct or a map).
///
/// # Examples
///
/// ```rust
/// use serde_kv::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), r#""x" 1 "y" 2"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value contains unsupported types or is not an
/// object at the top level.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, KvOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed KV string.
///
/// One entry per line, containers indented by four spaces.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, KvOptions::pretty())
}

/// Serialize any `T: Serialize` to a KV string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_kv::{to_string_with_options, KvOptions};
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("list", vec![1, 2]);
///
/// let text = to_string_with_options(&map, KvOptions::pretty().with_indent(2)).unwrap();
/// assert_eq!(text, "\"list\" [\n  1\n  2\n]\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: KvOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    let doc = serialize(value.get_object()?);
    Ok(render_with_options(&doc, &options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_kv::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error for `None`, unit, non-string map keys and other shapes
/// the format cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_kv_value(value)
}

/// Serialize any `T: Serialize` to a writer in compact KV format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, KvOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_kv::{kv, to_writer_with_options, KvOptions};
///
/// let mut buffer = Vec::new();
/// to_writer_with_options(&mut buffer, &kv!({ "a": true }), KvOptions::pretty()).unwrap();
/// assert_eq!(buffer, b"\"a\" true\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: KvOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

/// Deserialize an instance of type `T` from KV text.
///
/// # Examples
///
/// ```rust
/// use serde_kv::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#""x" 1 "y" 2"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text does not parse or cannot be deserialized
/// to `T`. Parse errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(s)?)
}

/// Deserialize an instance of type `T` from an I/O stream of KV text.
///
/// # Examples
///
/// ```rust
/// use serde_kv::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(b"\"x\" 1\n\"y\" 2\n");
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid KV, or the
/// data cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of KV text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid KV, or
/// cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse_slice(v)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct TestStruct {
        name: String,
        value: i32,
        active: bool,
    }

    #[test]
    fn test_basic_roundtrip() {
        let original = TestStruct {
            name: "test".to_string(),
            value: 42,
            active: true,
        };

        let serialized = to_string(&original).unwrap();
        let deserialized: TestStruct = from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_pretty_roundtrip() {
        let original = TestStruct {
            name: "with \"quotes\"".to_string(),
            value: -3,
            active: false,
        };

        let serialized = to_string_pretty(&original).unwrap();
        assert!(serialized.ends_with('\n'));
        let deserialized: TestStruct = from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = to_string(&vec![1, 2]).unwrap_err();
        assert_eq!(err, Error::type_mismatch("object", "array"));
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let err = from_slice::<TestStruct>(&[0x22, 0xff, 0x22]).unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &kv!({ "k": "v" })).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), r#""k" "v""#);
    }

    #[test]
    fn test_parse_failure_returns_no_value() {
        let err = parse(r#""A" {"B" 1"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.position().is_some());
        assert!(!err.to_string().is_empty());
    }
}
