//! End-to-end engine tests against a mock HTTP server

use std::sync::Arc;
use std::time::Duration;
use volley_config::VolleyConfig;
use volley_corpus::Corpus;
use volley_engine::Orchestrator;
use volley_http::{HttpConfig, HttpExecutor};
use volley_report::{CsvFileSink, ReportManager};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_config(base_url: &str, batches: u32) -> VolleyConfig {
    let mut config = VolleyConfig::default();
    config.target.base_url = base_url.to_string();
    config.load.batches = batches;
    config.load.concurrency = 1;
    config.http.timeout = Duration::from_secs(2);
    config
}

#[tokio::test]
async fn test_full_run_writes_csv_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/err"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("result.csv");

    let config = run_config(&server.uri(), 2);
    let corpus = Corpus {
        urls: vec!["/ok".to_string(), "/err".to_string()],
        tokens: vec!["t1".to_string(), "t2".to_string(), "t3".to_string()],
    };

    let executor = Arc::new(HttpExecutor::with_config(HttpConfig::from(
        config.http.clone(),
    )));
    let mut reports = ReportManager::new();
    reports.add_sink(Arc::new(CsvFileSink::new(&report_path)));

    let summary = Orchestrator::new(config, corpus, executor, reports)
        .run()
        .await
        .unwrap();

    // 2 batches x 2 URLs, 3 identities each
    assert_eq!(summary.waves, 4);
    assert_eq!(summary.total_requests, 12);

    let content = std::fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5, "header plus one row per wave");
    assert!(lines[0].starts_with("Timestamp;Endpoint"));

    // The /ok waves succeed fully, the /err waves fail fully
    assert!(lines[1].contains("/ok;3;0;3;1;2;"));
    assert!(lines[2].contains("/err;0;3;3;1;2;0.00"));
    assert!(lines[3].contains("/ok;3;0;3;2;2;"));
    assert!(lines[4].contains("/err;0;3;3;2;2;0.00"));
}

#[tokio::test]
async fn test_fatal_corpus_error_leaves_report_untouched() {
    // An empty URL corpus aborts before any wave; the report file must not
    // even be created.
    let dir = tempfile::tempdir().unwrap();
    let urls_path = dir.path().join("urls.txt");
    let tokens_path = dir.path().join("tokens.txt");
    let report_path = dir.path().join("result.csv");
    std::fs::write(&urls_path, "\n").unwrap();
    std::fs::write(&tokens_path, "t1\n").unwrap();

    let corpus_config = volley_config::CorpusConfig {
        url_list_file: urls_path.display().to_string(),
        token_list_file: tokens_path.display().to_string(),
    };

    assert!(Corpus::load(&corpus_config).is_err());
    assert!(!report_path.exists());
}
