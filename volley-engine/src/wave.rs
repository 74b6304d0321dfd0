//! Wave dispatch: one concurrent burst of requests per (batch, URL) target

use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use volley_http::{RequestExecutor, RequestOutcome};

/// Run one wave: exactly `concurrency` workers against `target_url`, each
/// bound to the identity at its own index.
///
/// Worker `i` authenticates as `tokens[i]`; with an empty token list all
/// workers share the anonymous identity. Tokens beyond index
/// `concurrency - 1` are never addressed.
///
/// This is a hard synchronization barrier: the function returns only after
/// every spawned worker has finished, and the returned buffer holds exactly
/// `concurrency` outcomes. A worker that panics is recorded as a failure
/// outcome rather than tearing down the wave.
pub async fn run_wave(
    executor: Arc<dyn RequestExecutor>,
    target_url: &str,
    tokens: &[String],
    concurrency: usize,
) -> Vec<RequestOutcome> {
    debug!(target_url, concurrency, "Dispatching wave");

    let mut workers = JoinSet::new();
    for index in 0..concurrency {
        let executor = Arc::clone(&executor);
        let url = target_url.to_string();
        let token = tokens.get(index).cloned();

        workers.spawn(async move { executor.execute(&url, token.as_deref()).await });
    }

    let mut outcomes = Vec::with_capacity(concurrency);
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                warn!(target_url, error = %e, "Worker task failed to join");
                outcomes.push(RequestOutcome::Failure);
            }
        }
    }

    debug_assert_eq!(outcomes.len(), concurrency);
    outcomes
}
