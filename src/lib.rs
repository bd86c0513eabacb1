//! prosody-l10n - message catalogue tooling for Prosody templates
//!
//! Extracts translatable `{% trans %}` blocks and `{{ '...' | trans }}`
//! literals from a tree of templates into a reference catalogue, then keeps
//! each locale catalogue in step with it. Translations for keys that drop out
//! of the templates are parked in a `<locale>.unused` sidecar and restored if
//! the key comes back.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tokenizer, catalogue codec, extraction and reconciliation
//! - `issues`: Per-entry issue types shown after a run

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
