//! Request outcome classification

use serde::{Deserialize, Serialize};

/// Outcome of one request, as seen by the aggregation layer.
///
/// Failure causes (timeout, transport error, non-200 status) are deliberately
/// not distinguished here: the aggregate only counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestOutcome {
    /// HTTP 200 within the timeout; elapsed wall-clock time in milliseconds,
    /// always at least 1
    Success { elapsed_ms: u64 },

    /// Anything else: construction error, transport error, timeout, non-200
    Failure,
}

impl RequestOutcome {
    /// Build a success outcome, flooring the measured time to 1ms so that a
    /// success is never mistaken for an empty measurement.
    pub fn success(elapsed_ms: u64) -> Self {
        Self::Success {
            elapsed_ms: elapsed_ms.max(1),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Elapsed time for successes, `None` for failures
    pub fn elapsed_ms(&self) -> Option<u64> {
        match self {
            Self::Success { elapsed_ms } => Some(*elapsed_ms),
            Self::Failure => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_floors_to_one_millisecond() {
        assert_eq!(
            RequestOutcome::success(0),
            RequestOutcome::Success { elapsed_ms: 1 }
        );
        assert_eq!(
            RequestOutcome::success(120),
            RequestOutcome::Success { elapsed_ms: 120 }
        );
    }

    #[test]
    fn test_elapsed_ms() {
        assert_eq!(RequestOutcome::success(42).elapsed_ms(), Some(42));
        assert_eq!(RequestOutcome::Failure.elapsed_ms(), None);
    }

    #[test]
    fn test_is_success() {
        assert!(RequestOutcome::success(1).is_success());
        assert!(!RequestOutcome::Failure.is_success());
    }
}
