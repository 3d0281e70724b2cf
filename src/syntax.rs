//! KV Format Reference
//!
//! This module documents the KV text format as read and written by this
//! library. It contains no code.
//!
//! # Overview
//!
//! KV is a small hierarchical key/value language for configuration and
//! manifest files. A document is an object without enclosing braces:
//!
//! ```text
//! // update manifest
//! "Version" 12
//! "Channel" "stable"
//! "Files" [
//!     { "Path" "bin/app" "Hash" "9f2c..." }
//!     { "Path" "lib/core.so" "Hash" "01ab..." }
//! ]
//! "Restart" true
//! ```
//!
//! # Grammar
//!
//! ```text
//! document  = pair* EOF
//! pair      = string value
//! value     = string | bareword-bool | bareword-number | array | object
//! array     = '[' value* ']'
//! object    = '{' pair* '}'
//! ```
//!
//! There are no separators between pairs or array elements besides
//! whitespace. Keys are always quoted strings.
//!
//! ## Tokens
//!
//! | Token | Form |
//! |-------|------|
//! | `{` `}` `[` `]` | Single characters |
//! | String | `"..."`, may span lines |
//! | Bare word | Run of characters up to whitespace, a bracket, `"` or `//` |
//! | End of input | |
//!
//! Whitespace is space, tab, `\n` and `\r`. A leading UTF-8 byte order mark
//! is ignored.
//!
//! ## Comments
//!
//! `//` starts a comment that runs to the end of the line. Comments may
//! appear anywhere a token may, including after a value on the same line.
//! Inside a quoted string `//` is ordinary text. Comments are never
//! written back out.
//!
//! ## Strings
//!
//! Only two escapes exist: `\"` for a quote and `\\` for a backslash. Any
//! other backslash is kept as written, so Windows paths such as
//! `"C:\temp"` read naturally. The writer escapes every quote and
//! backslash, which keeps such strings stable through a round trip.
//!
//! ## Bare words
//!
//! A bare word is `true` or `false` if it matches exactly. Otherwise it is
//! read as a 64-bit float using Rust's float syntax, so `50`, `-1.5`,
//! `1e-3`, `inf` and `NaN` are all numbers. Anything else is an
//! [`Error::UnexpectedToken`](crate::Error::UnexpectedToken).
//!
//! There is no `null`.
//!
//! # Duplicate keys
//!
//! When a key repeats within one object (the implicit root included) the
//! two values are merged:
//!
//! - Both objects: merged key by key, recursively.
//! - Otherwise: the later value replaces the earlier one.
//!
//! The key keeps the position of its first occurrence. For example
//!
//! ```text
//! "Cfg" { "A" 1 "B" false "C" { "X" [1 2 3] } }
//! "Cfg" { "B" true "D" 5 "C" { "Y" false } }
//! ```
//!
//! reads as
//!
//! ```text
//! "Cfg" { "A" 1 "B" true "C" { "X" [1 2 3] "Y" false } "D" 5 }
//! ```
//!
//! # Writing
//!
//! Serialization runs in two stages. [`serialize`](crate::serialize) turns
//! an object into a [`Document`](crate::Document), and
//! [`render`](crate::render()) writes the document as text. Keys and strings
//! are quoted, numbers use the shortest text that reads back as the same
//! `f64`, and empty containers are written as `{}` and `[]`.
//!
//! Parsing rendered output reproduces an equal value for any tree whose
//! objects have unique keys and whose numbers are not NaN.
//!
//! # Limits
//!
//! Nesting deeper than [`RECURSION_LIMIT`](crate::RECURSION_LIMIT)
//! containers is rejected with
//! [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded).
