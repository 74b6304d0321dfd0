//! Corpus file loading

use crate::error::{CorpusError, CorpusResult};
use std::path::Path;
use tracing::{debug, info};
use volley_config::CorpusConfig;

/// The immutable target/identity corpus for one run
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Ordered URL path suffixes, appended to the base URL
    pub urls: Vec<String>,

    /// Ordered bearer tokens; may legitimately be empty
    pub tokens: Vec<String>,
}

impl Corpus {
    /// Load the corpus from the configured flat text files.
    ///
    /// The URL file must exist and contain at least one entry. The token
    /// file must exist but may be empty, in which case every wave falls back
    /// to the configured default concurrency.
    pub fn load(config: &CorpusConfig) -> CorpusResult<Self> {
        let urls = read_lines(&config.url_list_file)?;
        if urls.is_empty() {
            return Err(CorpusError::EmptyUrlList {
                path: config.url_list_file.clone(),
            });
        }

        let tokens = read_lines(&config.token_list_file)?;

        info!(
            urls = urls.len(),
            tokens = tokens.len(),
            "Loaded corpus"
        );

        Ok(Self { urls, tokens })
    }

    /// Number of concurrent workers per wave.
    ///
    /// One worker per identity when tokens are present; otherwise the
    /// configured default, with all workers sharing the anonymous identity.
    pub fn effective_concurrency(&self, default_concurrency: usize) -> usize {
        if self.tokens.is_empty() {
            default_concurrency
        } else {
            self.tokens.len()
        }
    }
}

/// Read a flat text corpus file: one entry per line, blank lines ignored.
fn read_lines(path: impl AsRef<Path>) -> CorpusResult<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| CorpusError::FileReadError {
        path: path.display().to_string(),
        source,
    })?;

    let entries: Vec<String> = content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), entries = entries.len(), "Read corpus file");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_corpus_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config_for(urls: &NamedTempFile, tokens: &NamedTempFile) -> CorpusConfig {
        CorpusConfig {
            url_list_file: urls.path().display().to_string(),
            token_list_file: tokens.path().display().to_string(),
        }
    }

    #[test]
    fn test_load_preserves_order() {
        let urls = write_corpus_file("/a\n/b\n/c\n");
        let tokens = write_corpus_file("t1\nt2\n");

        let corpus = Corpus::load(&config_for(&urls, &tokens)).unwrap();
        assert_eq!(corpus.urls, vec!["/a", "/b", "/c"]);
        assert_eq!(corpus.tokens, vec!["t1", "t2"]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let urls = write_corpus_file("/a\n/b\n");
        let tokens = write_corpus_file("t1\n");
        let config = config_for(&urls, &tokens);

        let first = Corpus::load(&config).unwrap();
        let second = Corpus::load(&config).unwrap();
        assert_eq!(first.urls, second.urls);
        assert_eq!(first.tokens, second.tokens);
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let urls = write_corpus_file("/a\n/b\n\n\n");
        let tokens = write_corpus_file("t1\r\nt2\r\n");

        let corpus = Corpus::load(&config_for(&urls, &tokens)).unwrap();
        assert_eq!(corpus.urls, vec!["/a", "/b"]);
        assert_eq!(corpus.tokens, vec!["t1", "t2"]);
    }

    #[test]
    fn test_empty_url_list_is_fatal() {
        let urls = write_corpus_file("\n");
        let tokens = write_corpus_file("t1\n");

        let err = Corpus::load(&config_for(&urls, &tokens)).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyUrlList { .. }));
    }

    #[test]
    fn test_missing_url_file_is_fatal() {
        let tokens = write_corpus_file("t1\n");
        let config = CorpusConfig {
            url_list_file: "/nonexistent/urls.txt".to_string(),
            token_list_file: tokens.path().display().to_string(),
        };

        let err = Corpus::load(&config).unwrap_err();
        assert!(matches!(err, CorpusError::FileReadError { .. }));
    }

    #[test]
    fn test_empty_token_file_is_allowed() {
        let urls = write_corpus_file("/a\n");
        let tokens = write_corpus_file("");

        let corpus = Corpus::load(&config_for(&urls, &tokens)).unwrap();
        assert!(corpus.tokens.is_empty());
    }

    #[test]
    fn test_effective_concurrency() {
        let with_tokens = Corpus {
            urls: vec!["/a".to_string()],
            tokens: vec!["t1".to_string(), "t2".to_string(), "t3".to_string()],
        };
        assert_eq!(with_tokens.effective_concurrency(5), 3);

        let without_tokens = Corpus {
            urls: vec!["/a".to_string()],
            tokens: vec![],
        };
        assert_eq!(without_tokens.effective_concurrency(5), 5);
    }
}
