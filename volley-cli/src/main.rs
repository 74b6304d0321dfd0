use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use volley_config::{ConfigLoader, VolleyConfig};
use volley_corpus::Corpus;
use volley_engine::Orchestrator;
use volley_http::{HttpConfig, HttpExecutor};
use volley_report::{ConsoleSink, CsvFileSink, ReportManager};

mod cli;
use cli::{Cli, Commands, ConfigCommands};

/// Load configuration from file or environment
fn load_config(config_path: Option<&PathBuf>) -> Result<VolleyConfig> {
    let loader = ConfigLoader::new();

    match config_path {
        Some(path) => {
            if path.exists() {
                loader
                    .from_file(path)
                    .context(format!("Failed to load configuration from {:?}", path))
            } else {
                warn!("Configuration file not found: {:?}. Using environment.", path);
                loader
                    .from_env()
                    .context("Failed to load configuration from environment")
            }
        }
        None => loader
            .from_env()
            .context("Failed to load configuration from environment"),
    }
}

/// Initialize logging.
///
/// Precedence: --log-level flag, then RUST_LOG, then the configured level.
fn init_logging(cli_level: Option<&str>, config: &VolleyConfig) {
    let env_filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level '{}', falling back to info", level);
            EnvFilter::new("info")
        }),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str())),
    };

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn run(config: VolleyConfig) -> Result<()> {
    let corpus = Corpus::load(&config.corpus).context("Failed to load corpus")?;

    if !corpus.tokens.is_empty() {
        debug!(
            identities = corpus.tokens.len(),
            "Token corpus overrides configured concurrency"
        );
    }

    let executor = Arc::new(HttpExecutor::with_config(HttpConfig::from(
        config.http.clone(),
    )));

    let mut reports = ReportManager::new();
    if config.report.console {
        reports.add_sink(Arc::new(ConsoleSink::new()));
    }
    reports.add_sink(Arc::new(CsvFileSink::new(&config.report.file)));

    let report_file = config.report.file.clone();
    let orchestrator = Orchestrator::new(config, corpus, executor, reports);
    let summary = orchestrator
        .run()
        .await
        .context("Run aborted")?;

    info!(
        waves = summary.waves,
        requests = summary.total_requests,
        "Run complete"
    );
    println!(
        "Completed {} waves ({} requests); report appended to {}",
        summary.waves, summary.total_requests, report_file
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Generate => {
                // No logging needed; just emit the sample
                print!("{}", VolleyConfig::generate_sample());
                Ok(())
            }
            ConfigCommands::Validate => {
                let config = load_config(cli.config.as_ref())?;
                init_logging(cli.log_level.as_deref(), &config);
                println!("Configuration is valid");
                Ok(())
            }
        },
        Some(Commands::Run) | None => {
            let config = load_config(cli.config.as_ref())?;
            init_logging(cli.log_level.as_deref(), &config);
            run(config).await
        }
    }
}
