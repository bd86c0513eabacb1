use anyhow::{Result, bail};

use super::super::args::MergeCommand;
use super::{
    CommandResult, CommandSummary, MergeSummary,
    context::L10nContext,
    helper::{apply_writes, plan_locale},
};
use crate::core::{CatalogueEntry, ReferenceCatalogue};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let ctx = L10nContext::new(&cmd.common)?;
    let locale = ctx
        .select_locales(std::slice::from_ref(&cmd.locale))?
        .remove(0);

    let reference_path = match &cmd.reference {
        Some(file) => ctx.messages_root.join(file),
        None => ctx.reference_path(),
    };
    if !reference_path.is_file() {
        bail!(
            "Reference catalogue not found: {} (run `extract` first)",
            ctx.display_path(&reference_path)
        );
    }
    let reference: ReferenceCatalogue = ctx
        .read_catalogue(&reference_path)?
        .into_iter()
        .map(CatalogueEntry::from)
        .collect();

    let plan = plan_locale(&ctx, &reference, &locale)?;
    let mut summary = plan.summary;
    summary.changed_files = apply_writes(&ctx, &plan.writes, false)?;

    let mut result = CommandResult::new(CommandSummary::Merge(MergeSummary { locale: summary }));
    result.issues = plan.issues;
    Ok(result)
}
