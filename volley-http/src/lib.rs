//! HTTP request execution for volley
//!
//! This crate issues one authenticated GET per virtual user, measures
//! wall-clock latency, and classifies the result. Every failure mode
//! (construction error, transport error, timeout, non-200 status) collapses
//! into [`RequestOutcome::Failure`] so that the wave barrier upstream never
//! has to deal with an unhandled fault.

pub mod client;
pub mod config;
pub mod errors;
pub mod outcome;

// Re-export main types for convenience
pub use client::{HttpExecutor, RequestExecutor};
pub use config::HttpConfig;
pub use errors::HttpError;
pub use outcome::RequestOutcome;
