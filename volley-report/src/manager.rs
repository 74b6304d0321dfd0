//! Report delivery manager fanning out to all configured sinks

use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::DeliveryError;
use crate::report::WaveReport;
use crate::sink::ReportSink;

/// Delivers each wave report to every configured sink, in order.
///
/// Delivery is part of the wave's sequential footprint: the orchestrator
/// does not start the next wave until every sink has accepted the report.
pub struct ReportManager {
    sinks: Vec<Arc<dyn ReportSink>>,
}

impl ReportManager {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink; sinks receive reports in registration order
    pub fn add_sink(&mut self, sink: Arc<dyn ReportSink>) {
        debug!(sink = sink.sink_type(), "Registered report sink");
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver one report to all sinks. The first failing sink aborts the
    /// run; a report that cannot be persisted makes the whole measurement
    /// worthless.
    pub async fn deliver(&self, report: &WaveReport) -> Result<(), DeliveryError> {
        for sink in &self.sinks {
            if let Err(e) = sink.deliver(report).await {
                error!(sink = sink.sink_type(), error = %e, "Report delivery failed");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl Default for ReportManager {
    fn default() -> Self {
        Self::new()
    }
}
