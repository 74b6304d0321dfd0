//! Batch/wave scheduling and result aggregation for volley
//!
//! The engine drives the run: for every (batch, URL) pair it fans out one
//! request per virtual-user identity, waits for the whole wave behind a join
//! barrier, reduces the outcomes to counts and an average latency, and hands
//! the wave report to the sinks. Concurrency exists within a wave only;
//! waves never overlap.

pub mod aggregate;
pub mod error;
pub mod orchestrator;
pub mod wave;

// Re-export main types
pub use aggregate::{aggregate, WaveStats};
pub use error::{EngineError, EngineResult};
pub use orchestrator::{Orchestrator, RunSummary};
pub use wave::run_wave;
