use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Sync(SyncSummary),
    Merge(MergeSummary),
    Stats(StatsSummary),
    Init,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub template_count: usize,
    pub message_count: usize,
    /// Reference catalogue path, relative to the repository root.
    pub reference_path: String,
    /// Whether the reference file was (or, with `--check`, would be) rewritten.
    pub changed: bool,
    /// Paths under the templates root that could not be read.
    pub skipped_count: usize,
}

/// Outcome of reconciling one locale.
#[derive(Debug)]
pub struct LocaleSummary {
    pub locale: String,
    pub translated: usize,
    pub total: usize,
    pub pending: usize,
    pub revived: usize,
    pub demoted: usize,
    pub discarded: usize,
    /// Files rewritten (or that would be), relative to the repository root.
    pub changed_files: Vec<String>,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub extract: ExtractSummary,
    pub locales: Vec<LocaleSummary>,
    pub is_check: bool,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub locale: LocaleSummary,
}

#[derive(Debug)]
pub struct LocaleStats {
    pub locale: String,
    pub translated: usize,
    pub total: usize,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub locales: Vec<LocaleStats>,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Per-entry issues, in the order they were found.
    pub issues: Vec<Issue>,
    /// Set by `sync --check` when some catalogue is out of date.
    pub check_failed: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            issues: Vec::new(),
            check_failed: false,
        }
    }
}
