//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style; command summaries follow them. Separate from
//! the core so the catalogue engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, LocaleStats, LocaleSummary, MergeSummary,
    StatsSummary, SyncSummary,
};
use crate::config::{CONFIG_FILE_NAME, UNUSED_SUFFIX};
use crate::issues::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command's issues and summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    report_to(&result.issues, verbose, writer);

    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, false, writer),
        CommandSummary::Sync(summary) => print_sync(summary, writer),
        CommandSummary::Merge(summary) => print_merge(summary, writer),
        CommandSummary::Stats(summary) => print_stats(summary, writer),
        CommandSummary::Init => print_init(writer),
    }
}

/// Print a command's issues and summary to stdout, then any warning about
/// unreadable template paths to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_skipped_warning_to(skipped_count(result), verbose, &mut io::stderr().lock());
}

/// Warn about template paths that could not be read.
///
/// With `verbose` each path was already reported while scanning.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} template path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn skipped_count(result: &CommandResult) -> usize {
    match &result.summary {
        CommandSummary::Extract(summary) => summary.skipped_count,
        CommandSummary::Sync(summary) => summary.extract.skipped_count,
        _ => 0,
    }
}

/// Print issues in cargo-style format.
///
/// Warnings are always shown; notes only with `verbose`.
pub fn report_to<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    let shown: Vec<&Issue> = issues
        .iter()
        .filter(|issue| verbose || issue.severity() == Severity::Warning)
        .collect();
    if shown.is_empty() {
        return;
    }

    for issue in &shown {
        print_issue(issue, writer);
    }

    let warnings = shown
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    if warnings > 0 {
        let _ = writeln!(
            writer,
            "{} {} {}\n",
            FAILURE_MARK.yellow(),
            warnings,
            if warnings == 1 { "warning" } else { "warnings" }.yellow()
        );
    } else {
        let _ = writeln!(writer);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Warning => "warning".bold().yellow(),
        Severity::Info => "note".bold().cyan(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\" {}  {}",
        severity_str,
        issue.key(),
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    if let Some(location) = issue.location() {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), location);
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, is_check: bool, writer: &mut W) {
    let line = format!(
        "Extracted {} {} from {} {}",
        summary.message_count,
        plural(summary.message_count, "message", "messages"),
        summary.template_count,
        plural(summary.template_count, "template", "templates"),
    );

    if is_check && summary.changed {
        let _ = writeln!(
            writer,
            "{} {} ({})",
            "Would update".yellow().bold(),
            summary.reference_path,
            line
        );
    } else if summary.changed {
        let _ = writeln!(
            writer,
            "{} {} into {}",
            SUCCESS_MARK.green(),
            line.green(),
            summary.reference_path
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({} unchanged)",
            SUCCESS_MARK.green(),
            line.green(),
            summary.reference_path
        );
    }
}

fn print_sync<W: Write>(summary: &SyncSummary, writer: &mut W) {
    print_extract(&summary.extract, summary.is_check, writer);
    for locale in &summary.locales {
        print_locale(locale, summary.is_check, writer);
    }

    if summary.is_check {
        let out_of_date = usize::from(summary.extract.changed)
            + summary
                .locales
                .iter()
                .map(|l| l.changed_files.len())
                .sum::<usize>();
        if out_of_date == 0 {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "All catalogues are up to date".green()
            );
        } else {
            let _ = writeln!(
                writer,
                "\n{} {} catalogue {} out of date. Run without {} to update {}.",
                FAILURE_MARK.red(),
                out_of_date,
                plural(out_of_date, "file is", "files are"),
                "--check".cyan(),
                plural(out_of_date, "it", "them"),
            );
        }
    }
}

fn print_merge<W: Write>(summary: &MergeSummary, writer: &mut W) {
    print_locale(&summary.locale, false, writer);
}

fn print_locale<W: Write>(summary: &LocaleSummary, is_check: bool, writer: &mut W) {
    let mut details = Vec::new();
    if summary.pending > 0 {
        details.push(format!("{} pending", summary.pending));
    }
    if summary.revived > 0 {
        details.push(format!(
            "{} restored from {}{}",
            summary.revived, summary.locale, UNUSED_SUFFIX
        ));
    }
    if summary.demoted > 0 {
        details.push(format!(
            "{} moved to {}{}",
            summary.demoted, summary.locale, UNUSED_SUFFIX
        ));
    }
    if summary.discarded > 0 {
        details.push(format!("{} dropped", summary.discarded));
    }

    let mut line = progress_line(&summary.locale, summary.translated, summary.total);
    if !details.is_empty() {
        line = format!("{} ({})", line, details.join(", "));
    }

    let mark = if is_check && !summary.changed_files.is_empty() {
        FAILURE_MARK.red()
    } else {
        SUCCESS_MARK.green()
    };
    let _ = writeln!(writer, "{} {}", mark, line);

    for file in &summary.changed_files {
        let verb = if is_check {
            "Would update".yellow().bold()
        } else {
            "Updated".green().bold()
        };
        let _ = writeln!(writer, "  {} {}", verb, file);
    }
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.locales.is_empty() {
        let _ = writeln!(writer, "No locale catalogues found");
        return;
    }
    for LocaleStats {
        locale,
        translated,
        total,
    } in &summary.locales
    {
        let percent = if *total == 0 {
            100
        } else {
            translated * 100 / total
        };
        let line = progress_line(locale, *translated, *total);
        let percent = format!("{}%", percent);
        let percent = if translated == total {
            percent.green()
        } else {
            percent.yellow()
        };
        let _ = writeln!(writer, "{} ({})", line, percent);
    }
}

fn print_init<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}

fn progress_line(locale: &str, translated: usize, total: usize) -> String {
    format!(
        "{}: {}/{} {} translated",
        locale.bold(),
        translated,
        total,
        plural(total, "message", "messages")
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// Tests
// ============================================================
