//! Pull-based token cursor and block reading.

use super::{
    error::ParseError,
    scanner::{Token, TokenKind},
    tags::{Tag, classify},
};

/// Explicit position over a scanned token sequence.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Return the current token and move past it.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move back to a position previously returned by [`TokenCursor::position`].
    pub fn rewind(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Text accumulated up to a closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Raw content of every token before the closing tag, stripped.
    pub text: String,
    /// The tag that ended the block.
    pub close: Tag,
}

/// Consume tokens until a tag named in `closing` is found.
///
/// Non-matching tags, outputs and comments are kept verbatim in the text.
/// `opened_at` is the line of the tag that opened the block, used for the
/// error when the input runs out first.
pub fn read_block(
    cursor: &mut TokenCursor,
    closing: &[&str],
    opened_at: usize,
) -> Result<Block, ParseError> {
    let mut text = String::new();
    while let Some(token) = cursor.advance() {
        if let Some(close) = classify(token, closing) {
            return Ok(Block {
                text: text.trim().to_string(),
                close,
            });
        }
        text.push_str(&token.raw);
    }
    Err(ParseError::UnterminatedBlock {
        line: opened_at,
        expected: closing.iter().map(|name| name.to_string()).collect(),
    })
}

/// Consume a translator comment leading the current block, if any.
///
/// Whitespace before the comment is skipped. When no comment leads the
/// block the cursor is left where it was.
pub fn take_comment(cursor: &mut TokenCursor) -> Option<String> {
    let start = cursor.position();
    while cursor.peek().is_some_and(Token::is_blank) {
        cursor.advance();
    }
    match cursor.peek() {
        Some(token) if token.kind == TokenKind::Comment => {
            let body = token.body().to_string();
            cursor.advance();
            Some(body).filter(|body| !body.is_empty())
        }
        _ => {
            cursor.rewind(start);
            None
        }
    }
}
