//! KV tokenizer.
//!
//! The [`Lexer`] turns source text into a flat stream of [`Token`]s. It is
//! lazy: each call to [`Lexer::next_token`] scans just far enough to produce
//! one token. Whitespace and `//` line comments are skipped between tokens
//! and never surface in the stream.
//!
//! ```rust
//! use serde_kv::lexer::{Lexer, TokenKind};
//!
//! let kinds: Vec<_> = Lexer::new(r#""Size" [1 2] // trailing"#)
//!     .map(|token| token.unwrap().kind)
//!     .collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::String("Size".into()),
//!         TokenKind::OpenBracket,
//!         TokenKind::Word("1"),
//!         TokenKind::Word("2"),
//!         TokenKind::CloseBracket,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use crate::error::Position;
use crate::escape::unescape;
use crate::{Error, Result};
use std::borrow::Cow;

/// The kind and payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind<'a> {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    /// Quoted string with escapes already removed.
    String(Cow<'a, str>),
    /// Unquoted run of characters: a number or `true`/`false`.
    Word(&'a str),
    Eof,
}

impl TokenKind<'_> {
    /// Short human-readable description used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            TokenKind::OpenBrace => "'{'".to_string(),
            TokenKind::CloseBrace => "'}'".to_string(),
            TokenKind::OpenBracket => "'['".to_string(),
            TokenKind::CloseBracket => "']'".to_string(),
            TokenKind::String(s) => format!("string \"{}\"", s),
            TokenKind::Word(w) => format!("bare word `{}`", w),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub position: Position,
}

/// Streaming tokenizer over a borrowed input.
///
/// Iterating a `Lexer` yields every token up to and including
/// [`TokenKind::Eof`], then stops. Iteration also stops after the first error.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
            finished: false,
        };
        if input.starts_with('\u{feff}') {
            lexer.position = '\u{feff}'.len_utf8();
        }
        lexer
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn current_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }

    /// Skips whitespace and comments up to the next token.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(ch) if is_separator(ch) => {
                    self.next_char();
                }
                Some('/') if self.rest().starts_with("//") => {
                    while let Some(ch) = self.peek_char() {
                        if ch == '\n' {
                            break;
                        }
                        self.next_char();
                    }
                }
                _ => break,
            }
        }
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnterminatedString`] when a quoted string runs into
    /// the end of input.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_trivia();
        let position = self.current_position();

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some('{') => self.single(TokenKind::OpenBrace),
            Some('}') => self.single(TokenKind::CloseBrace),
            Some('[') => self.single(TokenKind::OpenBracket),
            Some(']') => self.single(TokenKind::CloseBracket),
            Some('"') => TokenKind::String(self.quoted(position)?),
            Some(_) => TokenKind::Word(self.word()),
        };

        Ok(Token { kind, position })
    }

    fn single(&mut self, kind: TokenKind<'a>) -> TokenKind<'a> {
        self.next_char();
        kind
    }

    fn quoted(&mut self, start: Position) -> Result<Cow<'a, str>> {
        self.next_char(); // opening quote
        let body_start = self.position;

        loop {
            match self.next_char() {
                Some('"') => {
                    let body = &self.input[body_start..self.position - 1];
                    return Ok(unescape(body));
                }
                Some('\\') => {
                    if self.next_char().is_none() {
                        break;
                    }
                }
                Some(_) => {}
                None => break,
            }
        }

        Err(Error::UnterminatedString { position: start })
    }

    fn word(&mut self) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if is_separator(ch)
                || matches!(ch, '{' | '}' | '[' | ']' | '"')
                || self.rest().starts_with("//")
            {
                break;
            }
            self.next_char();
        }
        &self.input[start..self.position]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        match &token {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            })
            | Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(token)
    }
}

#[inline]
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}
