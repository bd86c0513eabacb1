//! Core engine: tokenizer, catalogue codec, extraction and reconciliation.
//!
//! Data flows one way:
//!
//! 1. `scanner` splits template text into tokens.
//! 2. `extract` walks the tokens of each template with a `cursor` and builds
//!    the reference catalogue.
//! 3. `reconcile` joins the reference with a locale's existing catalogue and
//!    unused sidecar, both read through `codec`.
//! 4. `codec` renders the results and `writer` replaces the files atomically.

pub mod catalogue;
pub mod codec;
pub mod cursor;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod reconcile;
pub mod scanner;
pub mod tags;
pub mod writer;

pub use catalogue::{
    Catalogue, CatalogueEntry, Keyed, LocaleCatalogue, LocaleEntry, ReferenceCatalogue,
};
pub use codec::{parse_catalogue, serialize, serialize_reference};
pub use error::{FileError, ParseError};
pub use extract::{DuplicateKeyCollision, Extraction, extract};
pub use reconcile::{Reconciliation, reconcile};
pub use scanner::{Token, TokenKind, scan};
