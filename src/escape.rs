//! Backslash escaping for quoted KV strings.
//!
//! Only two sequences are recognized: `\"` and `\\`. Any other backslash is
//! literal text, which keeps Windows-style paths such as `"C:\Games\bin"`
//! readable without doubling every separator.

use std::borrow::Cow;

/// Removes escapes from the raw body of a quoted string.
///
/// # Examples
///
/// ```rust
/// use serde_kv::escape::unescape;
///
/// assert_eq!(unescape(r#"Hello, \"world!\""#), "Hello, \"world!\"");
/// assert_eq!(unescape(r"C:\bin"), r"C:\bin");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next @ ('"' | '\\')) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Escapes `"` and `\` so the text can be placed between quotes.
///
/// Every backslash is escaped, so [`unescape`] always restores the input.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '"' | '\\')) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}
