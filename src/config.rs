use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::tags::RESERVED_TAGS;

pub const CONFIG_FILE_NAME: &str = ".l10nrc.json";

/// Suffix of the per-locale sidecar holding translations no template uses anymore.
pub const UNUSED_SUFFIX: &str = ".unused";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_templates_root")]
    pub templates_root: String,
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_reference_file")]
    pub reference_file: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignored_suffixes")]
    pub ignored_suffixes: Vec<String>,
    #[serde(default = "default_ignored_names")]
    pub ignored_names: Vec<String>,
}

fn default_templates_root() -> String {
    "data/pages".to_string()
}

fn default_messages_root() -> String {
    "data/page-l10n".to_string()
}

fn default_reference_file() -> String {
    "reference.messages".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_ignored_suffixes() -> Vec<String> {
    [".mime", ".link", ".icon", "~", ".gresource.xml"]
        .map(String::from)
        .to_vec()
}

fn default_ignored_names() -> Vec<String> {
    ["README", "README.md"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_root: default_templates_root(),
            messages_root: default_messages_root(),
            reference_file: default_reference_file(),
            source_language: default_source_language(),
            ignores: Vec::new(),
            ignored_suffixes: default_ignored_suffixes(),
            ignored_names: default_ignored_names(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid `ignores` globs, a source-language tag that would clash
    /// with the catalogue grammar, and a reference file name that looks like a
    /// sidecar.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        let tag = self.source_language.as_str();
        if tag.is_empty()
            || tag.contains(char::is_whitespace)
            || tag.contains(['{', '}', '%', '#'])
        {
            bail!(
                "Invalid 'sourceLanguage': \"{}\" must be a single tag name",
                tag
            );
        }
        if RESERVED_TAGS.contains(&tag) {
            bail!(
                "Invalid 'sourceLanguage': \"{}\" is a reserved catalogue tag",
                tag
            );
        }

        if self.reference_file.trim().is_empty() {
            bail!("Invalid 'referenceFile': must not be empty");
        }
        if self.reference_file.ends_with(UNUSED_SUFFIX) {
            bail!(
                "Invalid 'referenceFile': \"{}\" would be read as an unused sidecar",
                self.reference_file
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
