//! Console summary sink

use async_trait::async_trait;
use tokio::io::{stdout, AsyncWriteExt, BufWriter};

use crate::errors::DeliveryError;
use crate::report::WaveReport;
use crate::sink::ReportSink;

/// Human-readable per-wave summary on stdout
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn render(report: &WaveReport) -> String {
        let average = match report.average_latency_ms {
            Some(avg) => format!("{:.2}", avg),
            None => "n/a".to_string(),
        };

        format!(
            "==================\n\
             Endpoint: {}\n\
             Successful Requests: {}\n\
             Failed Requests: {}\n\
             Total Requests: {}\n\
             Batch Request: {}/{}\n\
             Average Response Time (ms): {}\n\n",
            report.target_url,
            report.successful,
            report.failed,
            report.total,
            report.batch,
            report.total_batches,
            average,
        )
    }
}

#[async_trait]
impl ReportSink for ConsoleSink {
    async fn deliver(&self, report: &WaveReport) -> Result<(), DeliveryError> {
        let mut writer = BufWriter::new(stdout());
        writer
            .write_all(Self::render(report).as_bytes())
            .await
            .map_err(DeliveryError::Console)?;
        writer.flush().await.map_err(DeliveryError::Console)?;
        Ok(())
    }

    fn sink_type(&self) -> &'static str {
        "console"
    }
}
