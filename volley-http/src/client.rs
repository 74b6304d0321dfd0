//! HTTP request execution

use crate::config::HttpConfig;
use crate::errors::HttpError;
use crate::outcome::RequestOutcome;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, warn};

/// Executes one request on behalf of a virtual user
#[async_trait::async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Issue one GET against `url`, authenticated as `token` when present,
    /// and classify the result.
    ///
    /// This is infallible by contract: every error becomes
    /// [`RequestOutcome::Failure`] so the caller's fan-in never blocks on an
    /// unhandled fault.
    async fn execute(&self, url: &str, token: Option<&str>) -> RequestOutcome;
}

/// Request executor backed by reqwest
#[derive(Debug, Clone, Default)]
pub struct HttpExecutor {
    config: HttpConfig,
}

impl HttpExecutor {
    /// Create a new executor with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    /// Create a new executor with specific configuration
    pub fn with_config(config: HttpConfig) -> Self {
        debug!(
            "Creating HttpExecutor with timeout: {}s",
            config.timeout.as_secs()
        );
        Self { config }
    }

    /// Fixed headers for every request plus the per-identity bearer token
    fn build_headers(&self, token: Option<&str>) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.config.headers {
            let header_name = HeaderName::from_str(name)
                .map_err(|_| HttpError::InvalidHeaderName(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| HttpError::InvalidHeaderValue(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        if let Some(token) = token {
            let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| HttpError::InvalidHeaderValue("Authorization".to_string()))?;
            headers.insert(AUTHORIZATION, bearer);
        }

        Ok(headers)
    }

    /// The fallible request path; `execute` folds its errors into an outcome
    async fn try_request(&self, url: &str, token: Option<&str>) -> Result<(), HttpError> {
        // Each worker owns its own client, timer and connection; the timeout
        // is enforced by the transport, not advisory.
        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .danger_accept_invalid_certs(!self.config.verify_ssl)
            .build()?;

        let headers = self.build_headers(token)?;
        let response = client.get(url).headers(headers).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(HttpError::UnexpectedStatus(status));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, url: &str, token: Option<&str>) -> RequestOutcome {
        let start = Instant::now();

        match self.try_request(url, token).await {
            Ok(()) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                debug!(url, elapsed_ms, "Request succeeded");
                RequestOutcome::success(elapsed_ms)
            }
            Err(e) => {
                warn!(url, error = %e, "Request failed");
                RequestOutcome::Failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn executor_with_timeout(secs: u64) -> HttpExecutor {
        HttpExecutor::with_config(HttpConfig {
            timeout: Duration::from_secs(secs),
            ..HttpConfig::default()
        })
    }

    #[tokio::test]
    async fn test_200_is_success_with_positive_elapsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let executor = executor_with_timeout(5);
        let outcome = executor
            .execute(&format!("{}/ok", server.uri()), Some("t1"))
            .await;

        assert!(outcome.is_success());
        assert!(outcome.elapsed_ms().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth"))
            .and(header("Authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let executor = executor_with_timeout(5);
        let outcome = executor
            .execute(&format!("{}/auth", server.uri()), Some("secret-token"))
            .await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_extra_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hdr"))
            .and(header("X-Service-Secret", "abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = HashMap::new();
        headers.insert("X-Service-Secret".to_string(), "abc".to_string());
        let executor = HttpExecutor::with_config(HttpConfig {
            timeout: Duration::from_secs(5),
            headers,
            ..HttpConfig::default()
        });

        let outcome = executor
            .execute(&format!("{}/hdr", server.uri()), None)
            .await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_non_200_status_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/err"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let executor = executor_with_timeout(5);
        let outcome = executor
            .execute(&format!("{}/err", server.uri()), Some("t1"))
            .await;
        assert_eq!(outcome, RequestOutcome::Failure);
    }

    #[tokio::test]
    async fn test_redirect_status_is_failure() {
        // Only an exact 200 counts as success.
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/moved"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let executor = executor_with_timeout(5);
        let outcome = executor
            .execute(&format!("{}/moved", server.uri()), None)
            .await;
        assert_eq!(outcome, RequestOutcome::Failure);
    }

    #[tokio::test]
    async fn test_timeout_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let executor = executor_with_timeout(1);
        let outcome = executor
            .execute(&format!("{}/slow", server.uri()), Some("t1"))
            .await;
        assert_eq!(outcome, RequestOutcome::Failure);
    }

    #[tokio::test]
    async fn test_connection_refused_is_failure() {
        let executor = executor_with_timeout(1);
        let outcome = executor
            .execute("http://127.0.0.1:1/unreachable", Some("t1"))
            .await;
        assert_eq!(outcome, RequestOutcome::Failure);
    }

    #[tokio::test]
    async fn test_no_token_sends_no_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/anon"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let executor = executor_with_timeout(5);
        let outcome = executor
            .execute(&format!("{}/anon", server.uri()), None)
            .await;

        assert!(outcome.is_success());
        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("Authorization").is_none());
    }
}
