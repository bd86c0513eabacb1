//! Reading and writing catalogue files.
//!
//! A catalogue file is a sequence of `msg` blocks:
//!
//! ```text
//! {% msg index.html#L4 about.html#L9 %}
//! {# translator note #}
//! first variant
//! {% msg %}
//! second variant
//! {% en %}
//! one cat
//! {% plural %}
//! many cats
//! {% endmsg %}
//! ```
//!
//! The variants come first, then the source-language tag (`en` by default)
//! introduces the original singular and optional plural text.

use std::fmt::Write as _;

use super::{
    catalogue::{LocaleCatalogue, LocaleEntry, ReferenceCatalogue},
    cursor::{TokenCursor, read_block, take_comment},
    error::ParseError,
    scanner::{TokenKind, scan},
    tags::{ENDMSG_TAG, MSG_TAG, PLURAL_TAG, Tag, classify, inline_literal, quote_arg},
};

/// A text token starting with one of these is a unit that never closed.
const OPENERS: &[&str] = &["{%", "{{", "{#"];

/// Render a catalogue in the `msg` block format.
pub fn serialize(catalogue: &LocaleCatalogue, source_tag: &str) -> String {
    let mut out = String::new();
    for (i, entry) in catalogue.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_entry(&mut out, entry, source_tag);
    }
    out
}

/// Render the reference catalogue: every entry without translations.
pub fn serialize_reference(reference: &ReferenceCatalogue, source_tag: &str) -> String {
    let catalogue: LocaleCatalogue = reference.iter().map(LocaleEntry::placeholder).collect();
    serialize(&catalogue, source_tag)
}

fn write_entry(out: &mut String, entry: &LocaleEntry, source_tag: &str) {
    out.push_str("{% ");
    out.push_str(MSG_TAG);
    for source in &entry.sources {
        out.push(' ');
        out.push_str(&quote_arg(source));
    }
    out.push_str(" %}\n");
    match &entry.comment {
        Some(comment) => {
            let _ = writeln!(out, "{{# {} #}}", comment);
        }
        // An empty slot keeps a leading comment inside the first variant.
        None if entry
            .translations
            .first()
            .is_some_and(|variant| variant.trim_start().starts_with("{#")) =>
        {
            out.push_str("{# #}\n");
        }
        None => {}
    }
    for (i, variant) in entry.translations.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "{{% {} %}}", MSG_TAG);
        }
        out.push_str(variant);
        out.push('\n');
    }
    let _ = writeln!(out, "{{% {} %}}", source_tag);
    out.push_str(&entry.key);
    out.push('\n');
    if let Some(plural) = &entry.plural {
        let _ = writeln!(out, "{{% {} %}}", PLURAL_TAG);
        out.push_str(plural);
        out.push('\n');
    }
    let _ = writeln!(out, "{{% {} %}}", ENDMSG_TAG);
}

/// Parse a catalogue file.
///
/// Text between entries is ignored. A key that appears twice keeps its first
/// position and collects the variants of both entries.
pub fn parse_catalogue(text: &str, source_tag: &str) -> Result<LocaleCatalogue, ParseError> {
    let mut cursor = TokenCursor::new(scan(text));
    let mut catalogue = LocaleCatalogue::new();

    while let Some(open) = next_entry(&mut cursor)? {
        let comment = take_comment(&mut cursor);

        let mut translations = Vec::new();
        let original = loop {
            let block = read_block(&mut cursor, &[MSG_TAG, source_tag], open.line)?;
            if !block.text.is_empty() {
                translations.push(block.text);
            }
            if block.close.name == source_tag {
                break read_block(&mut cursor, &[PLURAL_TAG, ENDMSG_TAG], open.line)?;
            }
        };

        let plural = if original.close.name == PLURAL_TAG {
            Some(read_block(&mut cursor, &[ENDMSG_TAG], open.line)?.text)
        } else {
            None
        };

        let entry = LocaleEntry {
            key: original.text,
            translations,
            sources: open.args,
            plural,
            comment,
        };
        catalogue.insert_or_merge(entry, |existing, duplicate| {
            existing.translations.extend(duplicate.translations);
        });
    }

    Ok(catalogue)
}

/// Advance to the next `msg` opening tag.
fn next_entry(cursor: &mut TokenCursor) -> Result<Option<Tag>, ParseError> {
    while let Some(token) = cursor.advance() {
        if let Some(open) = classify(token, &[MSG_TAG]) {
            return Ok(Some(open));
        }
        if inline_literal(token).is_some() {
            return Err(ParseError::UnexpectedOutput { line: token.line });
        }
        if token.kind == TokenKind::Text
            && let Some(opener) = OPENERS.iter().find(|o| token.raw.starts_with(**o))
        {
            return Err(ParseError::UnterminatedUnit {
                line: token.line,
                opener: opener.to_string(),
            });
        }
    }
    Ok(None)
}
