use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::Config;

/// Marker content that flags a file as a template.
const TEMPLATE_MARKER: char = '+';

/// A template selected for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    /// Path relative to the templates root, `/`-separated.
    pub relative: String,
}

/// Result of scanning the templates tree.
pub struct ScanResult {
    pub files: Vec<TemplateFile>,
    pub skipped_count: usize,
}

/// Walk `root` in file-name order and select template files.
///
/// A file is skipped when its name ends with an ignored suffix, equals an
/// ignored name, matches an `ignores` glob (relative to `root`), or has a
/// sibling `<name>.mime` marker whose first character is not `+`.
pub fn scan_templates(root: &Path, config: &Config, verbose: bool) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let patterns: Vec<Pattern> = config
        .ignores
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = relative_path(root, path);
        let name = entry.file_name().to_string_lossy();

        if config.ignored_names.iter().any(|n| *n == name)
            || config.ignored_suffixes.iter().any(|s| name.ends_with(s.as_str()))
            || patterns.iter().any(|p| p.matches(&relative))
        {
            continue;
        }

        if !is_template(path) {
            if verbose {
                eprintln!("Skipping non-template: {}", relative);
            }
            continue;
        }

        files.push(TemplateFile {
            path: path.to_path_buf(),
            relative,
        });
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Read every template as `(relative path, text)`, in scan order.
pub fn read_templates(files: &[TemplateFile]) -> Result<Vec<(String, String)>> {
    files
        .iter()
        .map(|file| {
            let text = fs::read_to_string(&file.path)
                .with_context(|| format!("Failed to read template: {}", file.path.display()))?;
            Ok((file.relative.clone(), text))
        })
        .collect()
}

/// A file without a `.mime` marker is a template; with one, only if the
/// marker starts with `+`.
fn is_template(path: &Path) -> bool {
    let mut marker = path.as_os_str().to_owned();
    marker.push(".mime");
    match fs::read(&marker) {
        Ok(bytes) => bytes.first() == Some(&(TEMPLATE_MARKER as u8)),
        Err(_) => true,
    }
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
