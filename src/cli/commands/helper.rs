//! Steps shared by `extract`, `sync` and `merge`.
//!
//! Every command builds its full list of writes before touching the disk, so a
//! parse error in any input leaves all files as they were.

use std::path::PathBuf;

use anyhow::Result;

use super::{command_result::LocaleSummary, context::L10nContext};
use crate::{
    core::{
        ReferenceCatalogue, reconcile, serialize,
        writer::{would_change, write_if_changed},
    },
    issues::{Issue, reconciliation_issues},
};

/// A file's new contents, not yet written.
#[derive(Debug)]
pub struct PendingWrite {
    pub path: PathBuf,
    pub contents: String,
}

/// Reconciled catalogues of one locale, ready to be written.
pub struct LocalePlan {
    pub summary: LocaleSummary,
    pub issues: Vec<Issue>,
    pub writes: Vec<PendingWrite>,
}

/// Read a locale's catalogue and sidecar and reconcile them with `reference`.
pub fn plan_locale(
    ctx: &L10nContext,
    reference: &ReferenceCatalogue,
    locale: &str,
) -> Result<LocalePlan> {
    let locale_path = ctx.locale_path(locale);
    let unused_path = ctx.unused_path(locale);
    let existing = ctx.read_catalogue(&locale_path)?;
    let unused = ctx.read_catalogue(&unused_path)?;

    let result = reconcile(reference, &existing, &unused);
    let issues = reconciliation_issues(locale, &result);
    let summary = LocaleSummary {
        locale: locale.to_string(),
        translated: result.translated_count(),
        total: reference.len(),
        pending: result.pending.len(),
        revived: result.revived.len(),
        demoted: result.demoted.len(),
        discarded: result.discarded.len(),
        changed_files: Vec::new(),
    };
    let writes = vec![
        PendingWrite {
            path: locale_path,
            contents: serialize(&result.locale, ctx.source_tag()),
        },
        PendingWrite {
            path: unused_path,
            contents: serialize(&result.unused, ctx.source_tag()),
        },
    ];

    Ok(LocalePlan {
        summary,
        issues,
        writes,
    })
}

/// Write the files whose contents changed, or only report them when `check`.
///
/// Returns the display paths of the changed files.
pub fn apply_writes(
    ctx: &L10nContext,
    writes: &[PendingWrite],
    check: bool,
) -> Result<Vec<String>> {
    let mut changed = Vec::new();
    for write in writes {
        let is_changed = if check {
            would_change(&write.path, &write.contents)
        } else {
            write_if_changed(&write.path, &write.contents)?
        };
        if is_changed {
            if ctx.verbose {
                eprintln!(
                    "{} {}",
                    if check { "Out of date:" } else { "Writing" },
                    ctx.display_path(&write.path)
                );
            }
            changed.push(ctx.display_path(&write.path));
        }
    }
    Ok(changed)
}
