//! Append-only CSV report file sink

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::errors::DeliveryError;
use crate::report::WaveReport;
use crate::sink::ReportSink;

/// Report file column headers, written once when the file is created
const HEADER: [&str; 8] = [
    "Timestamp",
    "Endpoint",
    "Successful Requests",
    "Failed Requests",
    "Total Requests",
    "Batch Request",
    "Total Batch Requests",
    "Average Response Time (ms)",
];

/// Append-only CSV destination for wave reports.
///
/// The header row is written exactly once, when the file does not yet
/// exist; subsequent runs append rows underneath it.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b';',
        }
    }

    /// Encode one record with the configured delimiter
    fn encode_record(&self, fields: &[String]) -> Result<Vec<u8>, DeliveryError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());
        writer.write_record(fields)?;
        writer
            .into_inner()
            .map_err(|e| DeliveryError::Csv(e.into_error().into()))
    }

    fn io_error(&self, source: std::io::Error) -> DeliveryError {
        DeliveryError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn row_fields(report: &WaveReport) -> Vec<String> {
        vec![
            report.timestamp_display(),
            report.target_url.clone(),
            report.successful.to_string(),
            report.failed.to_string(),
            report.total.to_string(),
            report.batch.to_string(),
            report.total_batches.to_string(),
            report.average_display(),
        ]
    }
}

#[async_trait]
impl ReportSink for CsvFileSink {
    async fn deliver(&self, report: &WaveReport) -> Result<(), DeliveryError> {
        let mut bytes = Vec::new();

        // Header only on first creation; appends never rewrite it.
        let exists = Path::new(&self.path).exists();
        if !exists {
            let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
            bytes.extend(self.encode_record(&header)?);
            info!(path = %self.path.display(), "Creating report file");
        }

        bytes.extend(self.encode_record(&Self::row_fields(report))?);

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        file.write_all(&bytes).await.map_err(|e| self.io_error(e))?;
        file.flush().await.map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), sequence = report.sequence, "Appended report row");
        Ok(())
    }

    fn sink_type(&self) -> &'static str {
        "csv"
    }
}
