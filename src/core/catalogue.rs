//! Insertion-ordered catalogues and their entries.

use std::collections::HashMap;

/// Entries stored in a [`Catalogue`] are looked up by their message key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Insertion-ordered mapping from message key to entry.
///
/// Keys are unique; order is the order in which keys were first inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue<E> {
    entries: Vec<E>,
    index: HashMap<String, usize>,
}

impl<E> Default for Catalogue<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: Keyed> Catalogue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&E> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Keyed::key)
    }

    /// Append `entry` if its key is new. Returns false when the key already
    /// exists, in which case `entry` is dropped.
    pub fn insert(&mut self, entry: E) -> bool {
        self.insert_or_merge(entry, |_, _| {})
    }

    /// Append `entry`, or hand it to `merge` together with the entry already
    /// stored under the same key. Returns true when the entry was appended.
    pub fn insert_or_merge(&mut self, entry: E, merge: impl FnOnce(&mut E, E)) -> bool {
        match self.index.get(entry.key()) {
            Some(&i) => {
                merge(&mut self.entries[i], entry);
                false
            }
            None => {
                self.index.insert(entry.key().to_string(), self.entries.len());
                self.entries.push(entry);
                true
            }
        }
    }
}

impl<E: Keyed> FromIterator<E> for Catalogue<E> {
    /// Collects entries, keeping the first entry for a repeated key.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut catalogue = Self::new();
        for entry in iter {
            catalogue.insert(entry);
        }
        catalogue
    }
}

impl<E> IntoIterator for Catalogue<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Catalogue<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A translatable message extracted from the templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    /// Stripped singular text; doubles as the message key.
    pub key: String,
    /// Locations in `path#Lline` form, in the order they were found.
    pub sources: Vec<String>,
    pub plural: Option<String>,
    /// Translator note from a leading `{# ... #}`.
    pub comment: Option<String>,
}

impl CatalogueEntry {
    pub fn singular(&self) -> &str {
        &self.key
    }
}

impl Keyed for CatalogueEntry {
    fn key(&self) -> &str {
        &self.key
    }
}

impl From<LocaleEntry> for CatalogueEntry {
    fn from(entry: LocaleEntry) -> Self {
        Self {
            key: entry.key,
            sources: entry.sources,
            plural: entry.plural,
            comment: entry.comment,
        }
    }
}

/// A message as stored in a locale catalogue or its unused sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleEntry {
    pub key: String,
    /// Translated variants, in file order. Empty while translation is pending.
    pub translations: Vec<String>,
    pub sources: Vec<String>,
    pub plural: Option<String>,
    pub comment: Option<String>,
}

impl LocaleEntry {
    /// An untranslated entry carrying the reference metadata.
    pub fn placeholder(reference: &CatalogueEntry) -> Self {
        Self {
            key: reference.key.clone(),
            translations: Vec::new(),
            sources: reference.sources.clone(),
            plural: reference.plural.clone(),
            comment: reference.comment.clone(),
        }
    }

    /// An entry with only a key and its translations, as kept in the unused sidecar.
    pub fn bare(key: impl Into<String>, translations: Vec<String>) -> Self {
        Self {
            key: key.into(),
            translations,
            ..Default::default()
        }
    }

    /// True when at least one variant holds non-whitespace text.
    pub fn is_translated(&self) -> bool {
        self.translations.iter().any(|t| !t.trim().is_empty())
    }

    /// Variants with text, in order.
    pub fn translated_variants(&self) -> Vec<String> {
        self.translations
            .iter()
            .filter(|t| !t.trim().is_empty())
            .cloned()
            .collect()
    }
}

impl Keyed for LocaleEntry {
    fn key(&self) -> &str {
        &self.key
    }
}

pub type ReferenceCatalogue = Catalogue<CatalogueEntry>;
pub type LocaleCatalogue = Catalogue<LocaleEntry>;
