//! Reconcile a locale's catalogues against the reference catalogue.

use super::catalogue::{LocaleCatalogue, LocaleEntry, ReferenceCatalogue};

/// Updated catalogues for one locale, plus what happened to each key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub locale: LocaleCatalogue,
    pub unused: LocaleCatalogue,
    /// Reference keys with no stored translation.
    pub pending: Vec<String>,
    /// Reference keys whose translation came back from the unused sidecar.
    pub revived: Vec<String>,
    /// Translated locale keys no longer in the reference, moved to the sidecar.
    pub demoted: Vec<String>,
    /// Stale keys with nothing worth keeping.
    pub discarded: Vec<String>,
}

impl Reconciliation {
    /// Number of reference keys carrying a translation.
    pub fn translated_count(&self) -> usize {
        self.locale.len() - self.pending.len()
    }
}

/// Join the reference catalogue with a locale's existing catalogues.
///
/// Reference order drives the new locale catalogue. Each key is looked up in
/// `existing_locale`, then `existing_unused`; a hit carries its translated
/// variants forward, a miss becomes a placeholder. Metadata (sources,
/// plural, comment) always comes from the reference entry.
///
/// Stale keys with at least one translated variant move to the new unused
/// catalogue without metadata; the rest are dropped.
pub fn reconcile(
    reference: &ReferenceCatalogue,
    existing_locale: &LocaleCatalogue,
    existing_unused: &LocaleCatalogue,
) -> Reconciliation {
    let mut result = Reconciliation::default();

    for entry in reference {
        let mut carried = LocaleEntry::placeholder(entry);
        let key = entry.key.as_str();

        if let Some(found) = existing_locale.get(key).filter(|e| e.is_translated()) {
            carried.translations = found.translated_variants();
        } else if let Some(found) = existing_unused.get(key).filter(|e| e.is_translated()) {
            carried.translations = found.translated_variants();
            result.revived.push(key.to_string());
        } else {
            result.pending.push(key.to_string());
        }
        result.locale.insert(carried);
    }

    let stale = existing_locale
        .iter()
        .map(|entry| (entry, true))
        .chain(existing_unused.iter().map(|entry| (entry, false)));

    for (entry, from_locale) in stale {
        let key = entry.key.as_str();
        if reference.contains_key(key) || result.unused.contains_key(key) {
            continue;
        }
        if !entry.is_translated() {
            let kept_elsewhere =
                from_locale && existing_unused.get(key).is_some_and(LocaleEntry::is_translated);
            if !kept_elsewhere && !result.discarded.iter().any(|k| k == key) {
                result.discarded.push(key.to_string());
            }
            continue;
        }
        if from_locale {
            result.demoted.push(key.to_string());
        }
        result
            .unused
            .insert(LocaleEntry::bare(key, entry.translated_variants()));
    }

    result
}
