//! Tag classification and inline translatable literals.

use std::{iter::Peekable, str::Chars};

use super::scanner::{Token, TokenKind};

pub const TRANS_TAG: &str = "trans";
pub const PLURAL_TAG: &str = "plural";
pub const ENDTRANS_TAG: &str = "endtrans";
pub const MSG_TAG: &str = "msg";
pub const ENDMSG_TAG: &str = "endmsg";

/// Tag names with a fixed meaning in templates or catalogue files.
pub const RESERVED_TAGS: &[&str] = &[TRANS_TAG, PLURAL_TAG, ENDTRANS_TAG, MSG_TAG, ENDMSG_TAG];

/// Sequences that may not appear in an inline translatable literal.
pub const DELIMITERS: &[&str] = &["{%", "%}", "{{", "}}", "{#", "#}"];

/// A tag token matched against a set of accepted names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub args: Vec<String>,
    pub line: usize,
}

/// Match a tag token against `accepted` names.
///
/// Only `Tag` tokens can match. The first whitespace-separated word is the
/// name; the remaining words are the arguments. A quoted argument may hold
/// whitespace and is returned decoded.
pub fn classify(token: &Token, accepted: &[&str]) -> Option<Tag> {
    if token.kind != TokenKind::Tag {
        return None;
    }
    let body = token.body();
    let name = body.split_whitespace().next()?;
    if !accepted.contains(&name) {
        return None;
    }
    Some(Tag {
        name: name.to_string(),
        args: split_args(&body[name.len()..]),
        line: token.line,
    })
}

/// Split tag arguments on whitespace, keeping quoted literals whole.
fn split_args(text: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut rest = text.trim_start();
    while let Some(first) = rest.chars().next() {
        let quoted = (first == '\'' || first == '"')
            .then(|| closing_quote(rest, first))
            .flatten();
        let end = match quoted {
            Some(end) => {
                args.push(decode_escapes(&rest[1..end]));
                end + 1
            }
            None => {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                args.push(rest[..end].to_string());
                end
            }
        };
        rest = rest[end..].trim_start();
    }
    args
}

/// Render `arg` so that it reads back as one tag argument.
///
/// Plain words are written as is; anything holding whitespace, quotes,
/// braces, `%` or a backslash becomes a double-quoted escaped literal.
pub fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && !arg
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "'\"\\{}%".contains(c));
    if plain {
        return arg.to_string();
    }
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    for c in arg.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Detect `{{ 'literal' | trans }}` and return the decoded literal.
///
/// The body must start with a single quoted literal, followed by a pipeline
/// whose first step is exactly `trans`. Further filters may follow.
pub fn inline_literal(token: &Token) -> Option<String> {
    if token.kind != TokenKind::Output {
        return None;
    }
    let body = token.body();
    let quote = body.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let end = closing_quote(body, quote)?;
    let pipeline = body[end + 1..].trim_start().strip_prefix('|')?;
    let step = pipeline.split('|').next()?.trim();
    (step == TRANS_TAG).then(|| decode_escapes(&body[1..end]))
}

/// Byte index of the quote closing the literal that opens `body`.
fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in body.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(i);
        }
    }
    None
}

/// Decode backslash escapes in a quoted literal.
///
/// Unknown or malformed escapes are kept verbatim.
pub fn decode_escapes(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(c @ ('\\' | '\'' | '"')) => out.push(c),
            Some('x') => push_hex_escape(&mut chars, 'x', 2, &mut out),
            Some('u') => push_hex_escape(&mut chars, 'u', 4, &mut out),
            Some('U') => push_hex_escape(&mut chars, 'U', 8, &mut out),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn push_hex_escape(chars: &mut Peekable<Chars<'_>>, marker: char, width: usize, out: &mut String) {
    let digits: String = chars.clone().take(width).collect();
    let decoded = (digits.len() == width && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .then(|| u32::from_str_radix(&digits, 16).ok())
        .flatten()
        .and_then(char::from_u32);
    match decoded {
        Some(decoded) => {
            out.push(decoded);
            for _ in 0..width {
                chars.next();
            }
        }
        None => {
            out.push('\\');
            out.push(marker);
        }
    }
}
