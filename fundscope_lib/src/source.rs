//! Record sources: where the raw bulk-file text comes from.
//!
//! The parser only needs a string. Sources supply that string and a stable
//! identity key used for caching.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

/// Errors from reading a record source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}

impl SourceError {
    /// Network failures, rate limiting and server errors are worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            SourceError::Network(_) => true,
            SourceError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Something that can produce the raw text of a bulk file.
pub trait RecordSource {
    /// Identity of the underlying data, used as the cache key.
    fn key(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<String, SourceError>> + Send;
}

/// Bulk file on local disk.
///
/// FEC files are not guaranteed to be UTF-8; invalid bytes are replaced.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn key(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Text already in memory, e.g. a test fixture or an upload.
#[derive(Debug, Clone)]
pub struct InlineSource {
    name: String,
    text: String,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl RecordSource for InlineSource {
    fn key(&self) -> String {
        format!("inline:{}", self.name)
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// Exponential backoff with jitter between HTTP attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 30000,
        }
    }
}

impl RetryPolicy {
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// Bulk file served over HTTP(S).
pub struct HttpSource {
    client: reqwest::Client,
    url: url::Url,
    retry: RetryPolicy,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration, retry: RetryPolicy) -> Result<Self, SourceError> {
        let url = url::Url::parse(url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, retry })
    }

    async fn fetch_once(&self) -> Result<String, SourceError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await?;
        tracing::info!("Downloaded {} bytes from {}", bytes.len(), self.url);
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl RecordSource for HttpSource {
    fn key(&self) -> String {
        format!("url:{}", self.url)
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let mut attempt = 0usize;
        loop {
            match self.fetch_once().await {
                Ok(text) => return Ok(text),
                Err(err) => {
                    attempt += 1;
                    if attempt > self.retry.max_retries || !err.is_retryable() {
                        return Err(err);
                    }
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "Fetch of {} failed (attempt {}/{}): {}; retrying in {:.1}s",
                        self.url,
                        attempt,
                        self.retry.max_retries,
                        err,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_delay_grows_and_caps() {
        let policy = RetryPolicy {
            max_retries: 5,
            base_delay_ms: 100,
            max_delay_ms: 1000,
        };
        let first = policy.delay_for_attempt(1).as_millis();
        assert!((80..=120).contains(&first));
        let third = policy.delay_for_attempt(3).as_millis();
        assert!((320..=480).contains(&third));
        let capped = policy.delay_for_attempt(20).as_millis();
        assert!(capped <= 1200);
    }

    #[test]
    fn retryable_statuses() {
        let status = |status| SourceError::HttpStatus {
            url: "http://x".to_string(),
            status,
        };
        assert!(status(429).is_retryable());
        assert!(status(503).is_retryable());
        assert!(!status(404).is_retryable());
        assert!(!status(403).is_retryable());
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = HttpSource::new("not a url", Duration::from_secs(1), RetryPolicy::default());
        assert!(matches!(err, Err(SourceError::InvalidUrl(_))));
    }

    #[test]
    fn keys_identify_the_data() {
        assert_eq!(FileSource::new("/tmp/weball24.txt").key(), "file:/tmp/weball24.txt");
        assert_eq!(InlineSource::new("fixture", "").key(), "inline:fixture");
    }

    #[tokio::test]
    async fn inline_source_returns_text() {
        let source = InlineSource::new("t", "H001|A");
        assert_eq!(source.fetch().await.unwrap(), "H001|A");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = FileSource::new("/nonexistent/weball.txt");
        assert!(matches!(source.fetch().await, Err(SourceError::Io { .. })));
    }
}
