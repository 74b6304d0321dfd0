//! Corpus error types

use thiserror::Error;

/// Corpus result type
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Corpus loading errors
///
/// All of these are fatal at startup: a run never begins with a broken or
/// empty URL corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Corpus file missing or unreadable
    #[error("Failed to read corpus file {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The URL list contained no entries
    #[error("URL corpus {path} is empty")]
    EmptyUrlList { path: String },
}
