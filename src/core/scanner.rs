//! Quote-aware tokenizer for the Prosody tag language.
//!
//! Splits text on `{% ... %}` (tag), `{{ ... }}` (output) and `{# ... #}`
//! (comment) units. Inside tags and outputs, single- and double-quoted
//! literals are skipped, so a string argument containing `%}` does not end
//! the unit early. Comments end at the first `#}`.

/// Kind of a scanned unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Tag,
    Output,
    Comment,
}

impl TokenKind {
    fn from_opener(byte: u8) -> Option<Self> {
        match byte {
            b'%' => Some(TokenKind::Tag),
            b'{' => Some(TokenKind::Output),
            b'#' => Some(TokenKind::Comment),
            _ => None,
        }
    }

    /// First byte of the two-byte closer for this kind (the second is always `}`).
    fn closer(self) -> u8 {
        match self {
            TokenKind::Tag => b'%',
            TokenKind::Output => b'}',
            TokenKind::Comment => b'#',
            TokenKind::Text => b'{',
        }
    }
}

/// A scanned unit with the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text, delimiters included.
    pub raw: String,
    /// 1-based line number of the first character.
    pub line: usize,
}

impl Token {
    /// Content between the delimiters, trimmed. Text tokens return their raw text.
    pub fn body(&self) -> &str {
        match self.kind {
            TokenKind::Text => &self.raw,
            _ => self
                .raw
                .get(2..self.raw.len().saturating_sub(2))
                .unwrap_or_default()
                .trim(),
        }
    }

    /// True for text tokens holding only whitespace.
    pub fn is_blank(&self) -> bool {
        self.kind == TokenKind::Text && self.raw.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    InDelimiter(TokenKind),
    InSingleQuote(TokenKind),
    InDoubleQuote(TokenKind),
    /// Backslash seen inside a quote; the byte is the quote to return to.
    Escape(TokenKind, u8),
}

/// Split `text` into tokens.
///
/// Never fails. A unit whose closer never appears runs to the end of the
/// input and is emitted as a `Text` token, so it can never be mistaken for a
/// closing tag.
pub fn scan(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut state = State::Outside;
    let mut start = 0;
    let mut start_line = 1;
    let mut line = 1;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        match state {
            State::Outside => {
                if byte == b'{'
                    && let Some(kind) = bytes.get(i + 1).copied().and_then(TokenKind::from_opener)
                {
                    push(&mut tokens, TokenKind::Text, &text[start..i], start_line);
                    start = i;
                    start_line = line;
                    state = State::InDelimiter(kind);
                    i += 2;
                    continue;
                }
            }
            State::InDelimiter(kind) => {
                if byte == kind.closer() && bytes.get(i + 1) == Some(&b'}') {
                    push(&mut tokens, kind, &text[start..i + 2], start_line);
                    start = i + 2;
                    start_line = line;
                    state = State::Outside;
                    i += 2;
                    continue;
                }
                if kind != TokenKind::Comment {
                    match byte {
                        b'\'' => state = State::InSingleQuote(kind),
                        b'"' => state = State::InDoubleQuote(kind),
                        _ => {}
                    }
                }
            }
            State::InSingleQuote(kind) => match byte {
                b'\\' => state = State::Escape(kind, b'\''),
                b'\'' => state = State::InDelimiter(kind),
                _ => {}
            },
            State::InDoubleQuote(kind) => match byte {
                b'\\' => state = State::Escape(kind, b'"'),
                b'"' => state = State::InDelimiter(kind),
                _ => {}
            },
            State::Escape(kind, quote) => {
                state = if quote == b'\'' {
                    State::InSingleQuote(kind)
                } else {
                    State::InDoubleQuote(kind)
                };
            }
        }
        if byte == b'\n' {
            line += 1;
        }
        i += 1;
    }

    // Whatever is left is either trailing text or an unterminated unit.
    push(&mut tokens, TokenKind::Text, &text[start..], start_line);
    tokens
}

fn push(tokens: &mut Vec<Token>, kind: TokenKind, raw: &str, line: usize) {
    if raw.is_empty() {
        return;
    }
    tokens.push(Token {
        kind,
        raw: raw.to_string(),
        line,
    });
}
