//! Report delivery error types

use thiserror::Error;

/// Errors raised while delivering a wave report to a sink
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Filesystem-level failure on the report file
    #[error("Report file error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding failure
    #[error("Failed to encode report row: {0}")]
    Csv(#[from] csv::Error),

    /// Console write failure
    #[error("Console write error: {0}")]
    Console(std::io::Error),
}
