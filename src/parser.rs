//! Recursive-descent KV parser.
//!
//! The grammar, with the document itself acting as an object without
//! braces:
//!
//! ```text
//! document  = pair* EOF
//! pair      = string value
//! value     = string | bareword-bool | bareword-number | array | object
//! array     = '[' value* ']'
//! object    = '{' pair* '}'
//! ```
//!
//! Every pair is added to its enclosing object through the duplicate-key
//! merge (see [`crate::merge`]), so a key written twice at any depth yields
//! one combined entry.

use crate::error::Position;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::{Error, KvMap, Result, Value};

/// Containers may nest at most this deep.
pub const RECURSION_LIMIT: usize = 256;

/// Parses a complete document into its root object.
pub(crate) fn parse_document(input: &str) -> Result<KvMap> {
    let mut parser = Parser::new(input);
    let root = parser.document()?;
    tracing::debug!(entries = root.len(), "parsed KV document");
    Ok(root)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input),
            depth: 0,
        }
    }

    fn next(&mut self) -> Result<Token<'a>> {
        self.lexer.next_token()
    }

    fn document(&mut self) -> Result<KvMap> {
        let mut root = KvMap::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Eof => return Ok(root),
                TokenKind::String(key) => {
                    let value = self.value()?;
                    root.merge_insert(key.into_owned(), value);
                }
                other => {
                    return Err(Error::unexpected_token(
                        token.position,
                        &other.describe(),
                        "a key string",
                    ))
                }
            }
        }
    }

    fn value(&mut self) -> Result<Value> {
        let token = self.next()?;
        self.value_from(token)
    }

    fn value_from(&mut self, token: Token<'a>) -> Result<Value> {
        match token.kind {
            TokenKind::String(s) => Ok(Value::String(s.into_owned())),
            TokenKind::Word(word) => bareword(word, token.position),
            TokenKind::OpenBrace => {
                self.enter(token.position)?;
                let object = self.object(token.position);
                self.depth -= 1;
                object.map(Value::Object)
            }
            TokenKind::OpenBracket => {
                self.enter(token.position)?;
                let array = self.array(token.position);
                self.depth -= 1;
                array.map(Value::Array)
            }
            other => Err(Error::unexpected_token(
                token.position,
                &other.describe(),
                "a value",
            )),
        }
    }

    fn enter(&mut self, position: Position) -> Result<()> {
        if self.depth >= RECURSION_LIMIT {
            return Err(Error::RecursionLimitExceeded { position });
        }
        self.depth += 1;
        Ok(())
    }

    fn object(&mut self, open: Position) -> Result<KvMap> {
        let mut object = KvMap::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::CloseBrace => return Ok(object),
                TokenKind::String(key) => {
                    let value = self.value()?;
                    object.merge_insert(key.into_owned(), value);
                }
                TokenKind::Eof => {
                    return Err(Error::UnterminatedContainer {
                        position: open,
                        delimiter: '{',
                    })
                }
                other => {
                    return Err(Error::unexpected_token(
                        token.position,
                        &other.describe(),
                        "a key string or '}'",
                    ))
                }
            }
        }
    }

    fn array(&mut self, open: Position) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::CloseBracket => return Ok(items),
                TokenKind::Eof => {
                    return Err(Error::UnterminatedContainer {
                        position: open,
                        delimiter: '[',
                    })
                }
                _ => items.push(self.value_from(token)?),
            }
        }
    }
}

fn bareword(word: &str, position: Position) -> Result<Value> {
    match word {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => word.parse::<f64>().map(Value::Number).map_err(|_| {
            Error::unexpected_token(
                position,
                &format!("bare word `{}`", word),
                "a number, `true` or `false`",
            )
        }),
    }
}
