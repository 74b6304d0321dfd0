//! Report sink trait

use crate::errors::DeliveryError;
use crate::report::WaveReport;
use async_trait::async_trait;

/// A destination for wave reports
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver one wave report
    async fn deliver(&self, report: &WaveReport) -> Result<(), DeliveryError>;

    /// Short name for logging
    fn sink_type(&self) -> &'static str;
}
