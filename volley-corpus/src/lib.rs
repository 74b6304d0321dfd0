//! URL and identity corpus loading for volley
//!
//! The corpus is supplied once at startup from flat text files and stays
//! immutable for the whole run: an ordered list of URL path suffixes and an
//! ordered list of bearer tokens (the virtual-user identities).

pub mod error;
pub mod loader;

pub use error::{CorpusError, CorpusResult};
pub use loader::Corpus;
