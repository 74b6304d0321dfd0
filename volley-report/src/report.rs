//! Aggregated wave statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one (batch, URL) wave.
///
/// Created once per wave, immutable once emitted. The invariant
/// `successful + failed == total` holds for every report the engine
/// produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveReport {
    /// Monotonically increasing emission index across the run, starting at 0
    pub sequence: u64,

    /// Wall-clock time the wave started
    pub timestamp: DateTime<Utc>,

    /// Fully-qualified target URL
    pub target_url: String,

    /// Requests that returned HTTP 200 within the timeout
    pub successful: usize,

    /// Requests that timed out, errored, or returned a non-200 status
    pub failed: usize,

    /// Total requests in the wave (the wave's effective concurrency)
    pub total: usize,

    /// 1-based batch index
    pub batch: u32,

    /// Total number of batches in the run
    pub total_batches: u32,

    /// Average latency over successful requests only; `None` when the wave
    /// had no successes
    pub average_latency_ms: Option<f64>,
}

impl WaveReport {
    /// Timestamp in the report file's `YYYY-MM-DD HH:MM:SS` form
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Average latency with two decimals; an all-failed wave renders as `0.00`
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average_latency_ms.unwrap_or(0.0))
    }
}
