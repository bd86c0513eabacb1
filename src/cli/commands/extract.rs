use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{
    CommandResult, CommandSummary, ExtractSummary,
    context::L10nContext,
    helper::{PendingWrite, apply_writes},
};
use crate::{
    core::{ReferenceCatalogue, serialize_reference},
    issues::Issue,
};

/// The reference catalogue built from the templates, not yet written.
pub struct ExtractPlan {
    pub catalogue: ReferenceCatalogue,
    pub issues: Vec<Issue>,
    pub write: PendingWrite,
    pub template_count: usize,
    pub skipped_count: usize,
}

impl ExtractPlan {
    pub fn build(ctx: &L10nContext) -> Result<Self> {
        let extracted = ctx.extract_templates()?;
        let catalogue = extracted.extraction.catalogue;
        let issues = extracted
            .extraction
            .collisions
            .into_iter()
            .map(Issue::from)
            .collect();
        let write = PendingWrite {
            path: ctx.reference_path(),
            contents: serialize_reference(&catalogue, ctx.source_tag()),
        };
        Ok(Self {
            catalogue,
            issues,
            write,
            template_count: extracted.template_count,
            skipped_count: extracted.skipped_count,
        })
    }

    /// Write (or, with `check`, compare) the reference catalogue.
    pub fn apply(&self, ctx: &L10nContext, check: bool) -> Result<ExtractSummary> {
        let changed = apply_writes(ctx, std::slice::from_ref(&self.write), check)?;
        Ok(ExtractSummary {
            template_count: self.template_count,
            message_count: self.catalogue.len(),
            reference_path: ctx.display_path(&self.write.path),
            changed: !changed.is_empty(),
            skipped_count: self.skipped_count,
        })
    }
}

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = L10nContext::new(&cmd.common)?;
    let plan = ExtractPlan::build(&ctx)?;
    let summary = plan.apply(&ctx, false)?;

    let mut result = CommandResult::new(CommandSummary::Extract(summary));
    result.issues = plan.issues;
    Ok(result)
}
