//! Wave report delivery for volley
//!
//! A [`WaveReport`] is produced once per (batch, URL) wave and handed to the
//! configured sinks: an append-only CSV file and a human-readable console
//! summary. Sinks are fanned out by [`ReportManager`].

pub mod console;
pub mod csv_file;
pub mod errors;
pub mod manager;
pub mod report;
pub mod sink;

pub use console::ConsoleSink;
pub use csv_file::CsvFileSink;
pub use errors::DeliveryError;
pub use manager::ReportManager;
pub use report::WaveReport;
pub use sink::ReportSink;
