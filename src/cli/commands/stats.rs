use anyhow::{Result, bail};

use super::super::args::StatsCommand;
use super::{CommandResult, CommandSummary, LocaleStats, StatsSummary, context::L10nContext};

/// Count translated reference keys per locale, from the files on disk.
pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = L10nContext::new(&cmd.common)?;
    let reference_path = ctx.reference_path();
    if !reference_path.is_file() {
        bail!(
            "Reference catalogue not found: {} (run `extract` first)",
            ctx.display_path(&reference_path)
        );
    }
    let reference = ctx.read_catalogue(&reference_path)?;

    let mut locales = Vec::new();
    for locale in ctx.select_locales(&cmd.locales)? {
        let catalogue = ctx.read_catalogue(&ctx.locale_path(&locale))?;
        let translated = reference
            .keys()
            .filter(|key| catalogue.get(key).is_some_and(|entry| entry.is_translated()))
            .count();
        locales.push(LocaleStats {
            locale,
            translated,
            total: reference.len(),
        });
    }

    Ok(CommandResult::new(CommandSummary::Stats(StatsSummary {
        locales,
    })))
}
