use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};

use super::super::args::CommonArgs;
use crate::{
    config::{Config, UNUSED_SUFFIX, load_config},
    core::{
        Extraction, LocaleCatalogue, extract,
        file_scanner::{read_templates, scan_templates},
        parse_catalogue,
    },
};

/// Paths and configuration shared by every command.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--messages-root l10n`)
/// 2. `.l10nrc.json` config file
/// 3. Built-in defaults
pub struct L10nContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub templates_root: PathBuf,
    pub messages_root: PathBuf,
    pub verbose: bool,
}

/// Templates extracted into a reference catalogue.
pub struct ExtractedTemplates {
    pub extraction: Extraction,
    pub template_count: usize,
    pub skipped_count: usize,
}

impl L10nContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = args.root.clone();
        if !root_dir.is_dir() {
            bail!("Repository root is not a directory: {}", root_dir.display());
        }

        let config_result = load_config(&root_dir)?;
        if args.verbose && !config_result.from_file {
            eprintln!("Note: No .l10nrc.json found, using default configuration");
        }
        let config = config_result.config;

        let templates_root = root_dir.join(
            args.templates_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.templates_root)),
        );
        let messages_root = root_dir.join(
            args.messages_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.messages_root)),
        );

        Ok(Self {
            config,
            root_dir,
            templates_root,
            messages_root,
            verbose: args.verbose,
        })
    }

    pub fn source_tag(&self) -> &str {
        &self.config.source_language
    }

    pub fn reference_path(&self) -> PathBuf {
        self.messages_root.join(&self.config.reference_file)
    }

    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.messages_root.join(locale)
    }

    pub fn unused_path(&self, locale: &str) -> PathBuf {
        self.messages_root.join(format!("{}{}", locale, UNUSED_SUFFIX))
    }

    /// Path as shown to the user: relative to the repository root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Walk the templates and build the reference catalogue.
    ///
    /// Fails on the first structural error; nothing is written.
    pub fn extract_templates(&self) -> Result<ExtractedTemplates> {
        if !self.templates_root.is_dir() {
            bail!(
                "Templates directory not found: {}",
                self.templates_root.display()
            );
        }
        let scan = scan_templates(&self.templates_root, &self.config, self.verbose);
        if self.verbose {
            for file in &scan.files {
                eprintln!("Parsing template {}", file.relative);
            }
        }
        let sources = read_templates(&scan.files)?;
        let extraction = extract(sources)?;
        Ok(ExtractedTemplates {
            extraction,
            template_count: scan.files.len(),
            skipped_count: scan.skipped_count,
        })
    }

    /// Read a catalogue file; a missing file is an empty catalogue.
    pub fn read_catalogue(&self, path: &Path) -> Result<LocaleCatalogue> {
        if !path.exists() {
            return Ok(LocaleCatalogue::new());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalogue: {}", path.display()))?;
        parse_catalogue(&text, self.source_tag())
            .map_err(|error| crate::core::FileError::new(self.display_path(path), error).into())
    }

    /// Locale codes with a catalogue in the messages directory, sorted.
    ///
    /// The reference catalogue, unused sidecars, backups and hidden files are
    /// not locales.
    pub fn discover_locales(&self) -> Result<Vec<String>> {
        if !self.messages_root.is_dir() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.messages_root).with_context(|| {
            format!(
                "Failed to read messages directory: {}",
                self.messages_root.display()
            )
        })?;

        let mut locales = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name == self.config.reference_file
                || name.starts_with('.')
                || name.ends_with(UNUSED_SUFFIX)
                || name.ends_with('~')
            {
                continue;
            }
            locales.push(name);
        }
        locales.sort();
        Ok(locales)
    }

    /// The requested locales, or every discovered one when none were given.
    pub fn select_locales(&self, requested: &[String]) -> Result<Vec<String>> {
        if requested.is_empty() {
            return self.discover_locales();
        }
        for locale in requested {
            if locale.is_empty()
                || locale.contains(['/', '\\'])
                || *locale == self.config.reference_file
                || locale.ends_with(UNUSED_SUFFIX)
            {
                bail!("Invalid locale name: \"{}\"", locale);
            }
        }
        Ok(requested.to_vec())
    }
}
