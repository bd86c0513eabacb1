//! Build the reference catalogue from template sources.

use super::{
    catalogue::{CatalogueEntry, ReferenceCatalogue},
    cursor::{TokenCursor, read_block, take_comment},
    error::{FileError, ParseError},
    scanner::scan,
    tags::{DELIMITERS, ENDTRANS_TAG, PLURAL_TAG, TRANS_TAG, classify, inline_literal},
};

/// A key met more than once whose plural form or translator note differs
/// between occurrences. The first occurrence is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyCollision {
    pub key: String,
    /// Location of the occurrence that was kept.
    pub kept_source: String,
    /// Location of the occurrence whose plural/comment was dropped.
    pub dropped_source: String,
}

/// Result of an extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub catalogue: ReferenceCatalogue,
    pub collisions: Vec<DuplicateKeyCollision>,
}

impl Extraction {
    /// Fold one message into the catalogue.
    ///
    /// A repeated key gains the new source location; its singular, plural
    /// and comment stay those of the first occurrence.
    fn record(&mut self, message: CatalogueEntry) {
        let collisions = &mut self.collisions;
        self.catalogue
            .insert_or_merge(message, |existing, duplicate| {
                if existing.plural != duplicate.plural || existing.comment != duplicate.comment {
                    collisions.push(DuplicateKeyCollision {
                        key: existing.key.clone(),
                        kept_source: existing.sources.first().cloned().unwrap_or_default(),
                        dropped_source: duplicate.sources.first().cloned().unwrap_or_default(),
                    });
                }
                existing.sources.extend(duplicate.sources);
            });
    }
}

/// Extract translatable messages from `(path, text)` pairs, in order.
///
/// Any structural error aborts the whole extraction.
pub fn extract<I, P, T>(files: I) -> Result<Extraction, FileError>
where
    I: IntoIterator<Item = (P, T)>,
    P: AsRef<str>,
    T: AsRef<str>,
{
    let mut extraction = Extraction::default();
    for (path, text) in files {
        let path = path.as_ref();
        let messages =
            extract_file(path, text.as_ref()).map_err(|error| FileError::new(path, error))?;
        for message in messages {
            extraction.record(message);
        }
    }
    Ok(extraction)
}

/// Extract the messages of a single template, in document order.
pub fn extract_file(path: &str, text: &str) -> Result<Vec<CatalogueEntry>, ParseError> {
    let mut cursor = TokenCursor::new(scan(text));
    let mut messages = Vec::new();

    while let Some(token) = cursor.advance() {
        let line = token.line;
        let opened = classify(token, &[TRANS_TAG]);
        let inline = inline_literal(token);

        if let Some(open) = opened {
            let comment = take_comment(&mut cursor);
            let singular = read_block(&mut cursor, &[PLURAL_TAG, ENDTRANS_TAG], open.line)?;
            let plural = if singular.close.name == PLURAL_TAG {
                Some(read_block(&mut cursor, &[ENDTRANS_TAG], open.line)?.text)
            } else {
                None
            };
            if !singular.text.is_empty() {
                messages.push(CatalogueEntry {
                    key: singular.text,
                    sources: vec![source_location(path, line)],
                    plural,
                    comment,
                });
            }
        } else if let Some(literal) = inline {
            let text = literal.trim();
            if DELIMITERS.iter().any(|d| text.contains(d)) {
                return Err(ParseError::UnexpectedLiteralDelimiter {
                    line,
                    text: text.to_string(),
                });
            }
            if !text.is_empty() {
                messages.push(CatalogueEntry {
                    key: text.to_string(),
                    sources: vec![source_location(path, line)],
                    plural: None,
                    comment: None,
                });
            }
        }
    }

    Ok(messages)
}

fn source_location(path: &str, line: usize) -> String {
    format!("{}#L{}", path, line)
}
