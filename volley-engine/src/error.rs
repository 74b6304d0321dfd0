//! Engine error types

use thiserror::Error;

/// Engine result type
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort a run.
///
/// Per-request failures are not errors here: they are data, counted in the
/// wave statistics. Only an unusable report sink stops the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A report sink rejected a wave report
    #[error("Report delivery failed: {0}")]
    Delivery(#[from] volley_report::DeliveryError),
}
