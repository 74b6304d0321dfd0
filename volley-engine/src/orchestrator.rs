//! Run orchestration: nested batch/URL loops around the wave dispatcher

use crate::aggregate::aggregate;
use crate::error::EngineResult;
use crate::wave::run_wave;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use volley_config::VolleyConfig;
use volley_corpus::Corpus;
use volley_http::RequestExecutor;
use volley_report::{ReportManager, WaveReport};

/// Totals for a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub waves: u64,
    pub total_requests: u64,
}

/// Drives the run: batches outer, URLs inner, one wave at a time.
///
/// Waves are strictly sequential; a wave's report is delivered before the
/// next wave starts, so reports carry monotonically increasing sequence
/// numbers in row-major (batch, URL) order.
pub struct Orchestrator {
    config: VolleyConfig,
    corpus: Corpus,
    executor: Arc<dyn RequestExecutor>,
    reports: ReportManager,
}

impl Orchestrator {
    pub fn new(
        config: VolleyConfig,
        corpus: Corpus,
        executor: Arc<dyn RequestExecutor>,
        reports: ReportManager,
    ) -> Self {
        Self {
            config,
            corpus,
            executor,
            reports,
        }
    }

    pub async fn run(&self) -> EngineResult<RunSummary> {
        let concurrency = self
            .corpus
            .effective_concurrency(self.config.load.concurrency);
        let total_batches = self.config.load.batches;

        info!(
            batches = total_batches,
            urls = self.corpus.urls.len(),
            concurrency,
            "Starting run"
        );

        let mut sequence = 0u64;
        for batch in 1..=total_batches {
            for url_suffix in &self.corpus.urls {
                let target_url = format!("{}{}", self.config.target.base_url, url_suffix);
                let timestamp = Utc::now();

                let outcomes = run_wave(
                    Arc::clone(&self.executor),
                    &target_url,
                    &self.corpus.tokens,
                    concurrency,
                )
                .await;
                let stats = aggregate(&outcomes);

                info!(
                    target_url,
                    batch,
                    successful = stats.successful,
                    failed = stats.failed,
                    "Wave complete"
                );

                let report = WaveReport {
                    sequence,
                    timestamp,
                    target_url,
                    successful: stats.successful,
                    failed: stats.failed,
                    total: stats.total,
                    batch,
                    total_batches,
                    average_latency_ms: stats.average_latency_ms,
                };
                self.reports.deliver(&report).await?;

                sequence += 1;
            }
        }

        Ok(RunSummary {
            waves: sequence,
            total_requests: sequence * concurrency as u64,
        })
    }
}
