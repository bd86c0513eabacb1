//! Issue types reported after extraction and reconciliation.
//!
//! Fatal structural problems are errors (see [`crate::core::ParseError`]) and
//! abort the run; everything here is per-entry and non-fatal.

use crate::core::{DuplicateKeyCollision, Reconciliation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Information was lost or may be wrong; always shown.
    Warning,
    /// Bookkeeping about an entry; shown with `--verbose`.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "note"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateKey,
    Demoted,
    Revived,
    Pending,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::Demoted => write!(f, "demoted"),
            Rule::Revived => write!(f, "revived"),
            Rule::Pending => write!(f, "pending"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Same key extracted twice with a different plural form or translator note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub key: String,
    pub kept_source: String,
    pub dropped_source: String,
}

/// A translated entry no template uses anymore, moved to the unused sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemotedIssue {
    pub locale: String,
    pub key: String,
}

/// A translation restored from the unused sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevivedIssue {
    pub locale: String,
    pub key: String,
}

/// A reference key awaiting translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingIssue {
    pub locale: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateKey(DuplicateKeyIssue),
    Demoted(DemotedIssue),
    Revived(RevivedIssue),
    Pending(PendingIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DuplicateKey(_) => Severity::Warning,
            Issue::Demoted(_) | Issue::Revived(_) | Issue::Pending(_) => Severity::Info,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::DuplicateKey(_) => Rule::DuplicateKey,
            Issue::Demoted(_) => Rule::Demoted,
            Issue::Revived(_) => Rule::Revived,
            Issue::Pending(_) => Rule::Pending,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Issue::DuplicateKey(i) => &i.key,
            Issue::Demoted(i) => &i.key,
            Issue::Revived(i) => &i.key,
            Issue::Pending(i) => &i.key,
        }
    }

    /// One-line description shown after the severity.
    pub fn message(&self) -> String {
        match self {
            Issue::DuplicateKey(_) => {
                "key extracted twice with a different plural or comment".to_string()
            }
            Issue::Demoted(i) => format!("moved to {}.unused", i.locale),
            Issue::Revived(i) => format!("restored from {}.unused", i.locale),
            Issue::Pending(i) => format!("awaiting translation in {}", i.locale),
        }
    }

    /// Location line (`-->`), when the issue points into a template.
    pub fn location(&self) -> Option<&str> {
        match self {
            Issue::DuplicateKey(i) => Some(&i.dropped_source),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            Issue::DuplicateKey(i) => Some(format!(
                "keeping the plural and comment from {}",
                i.kept_source
            )),
            _ => None,
        }
    }
}

impl From<DuplicateKeyCollision> for Issue {
    fn from(collision: DuplicateKeyCollision) -> Self {
        Issue::DuplicateKey(DuplicateKeyIssue {
            key: collision.key,
            kept_source: collision.kept_source,
            dropped_source: collision.dropped_source,
        })
    }
}

/// Per-entry issues of one locale's reconciliation, in catalogue order.
pub fn reconciliation_issues(locale: &str, result: &Reconciliation) -> Vec<Issue> {
    let revived = result.revived.iter().map(|key| {
        Issue::Revived(RevivedIssue {
            locale: locale.to_string(),
            key: key.clone(),
        })
    });
    let pending = result.pending.iter().map(|key| {
        Issue::Pending(PendingIssue {
            locale: locale.to_string(),
            key: key.clone(),
        })
    });
    let demoted = result.demoted.iter().map(|key| {
        Issue::Demoted(DemotedIssue {
            locale: locale.to_string(),
            key: key.clone(),
        })
    });
    revived.chain(pending).chain(demoted).collect()
}
