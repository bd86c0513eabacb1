use anyhow::Result;

use super::super::args::SyncCommand;
use super::{
    CommandResult, CommandSummary, SyncSummary,
    context::L10nContext,
    extract::ExtractPlan,
    helper::{apply_writes, plan_locale},
};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = L10nContext::new(&cmd.common)?;
    let locales = ctx.select_locales(&cmd.locales)?;

    let extract = ExtractPlan::build(&ctx)?;
    let plans = locales
        .iter()
        .map(|locale| plan_locale(&ctx, &extract.catalogue, locale))
        .collect::<Result<Vec<_>>>()?;

    let extract_summary = extract.apply(&ctx, cmd.check)?;
    let mut check_failed = cmd.check && extract_summary.changed;
    let mut issues = extract.issues;
    let mut summaries = Vec::with_capacity(plans.len());
    for plan in plans {
        let mut summary = plan.summary;
        summary.changed_files = apply_writes(&ctx, &plan.writes, cmd.check)?;
        check_failed |= cmd.check && !summary.changed_files.is_empty();
        issues.extend(plan.issues);
        summaries.push(summary);
    }

    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncSummary {
            extract: extract_summary,
            locales: summaries,
            is_check: cmd.check,
        }),
        issues,
        check_failed,
    })
}
