//! Wave outcome aggregation

use volley_http::RequestOutcome;

/// Reduced statistics for one wave
#[derive(Debug, Clone, PartialEq)]
pub struct WaveStats {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
    /// Average latency over successes only; `None` for an all-failed wave
    pub average_latency_ms: Option<f64>,
}

/// Reduce a wave's outcomes.
///
/// A pure, order-independent reduction: success count, failure count, and
/// the average latency over successful requests only. Failures carry no
/// latency and cannot shift the average. With zero successes the average is
/// `None`; the sinks decide how to render that.
pub fn aggregate(outcomes: &[RequestOutcome]) -> WaveStats {
    let total = outcomes.len();
    let mut successful = 0usize;
    let mut latency_sum_ms = 0u64;

    for outcome in outcomes {
        if let Some(elapsed_ms) = outcome.elapsed_ms() {
            successful += 1;
            latency_sum_ms += elapsed_ms;
        }
    }

    let average_latency_ms = if successful > 0 {
        Some(latency_sum_ms as f64 / successful as f64)
    } else {
        None
    };

    WaveStats {
        successful,
        failed: total - successful,
        total,
        average_latency_ms,
    }
}
