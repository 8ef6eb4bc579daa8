//! Loading service: fetch a source, parse it off the async runtime, cache it.

use std::sync::Arc;
use std::time::Duration;

use fec_weball::{BatchParser, ParsedBatch};

use crate::cache::RecordCache;
use crate::config::Settings;
use crate::error::FundscopeError;
use crate::source::RecordSource;

/// Parsed-batch cache keyed by source identity and parser configuration.
pub struct RecordStore {
    cache: RecordCache<ParsedBatch>,
    parser: BatchParser,
}

impl RecordStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: RecordCache::new(ttl),
            parser: BatchParser::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.cache_ttl)
    }

    pub fn with_parser(mut self, parser: BatchParser) -> Self {
        self.parser = parser;
        self
    }

    fn cache_key<S: RecordSource>(&self, source: &S) -> String {
        format!(
            "{}|{}|{}",
            source.key(),
            self.parser.schema().version,
            self.parser.cycle().unwrap_or(0)
        )
    }

    /// Returns the parsed batch for `source`, fetching and parsing on a miss.
    ///
    /// Parsing runs on the blocking pool so large files do not stall other
    /// tasks. Concurrent loads of the same source share one fetch and parse.
    pub async fn load<S: RecordSource>(&self, source: &S) -> Result<Arc<ParsedBatch>, FundscopeError> {
        let key = self.cache_key(source);
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(hit);
        }

        let parser = self.parser;
        self.cache
            .get_or_load(&key, || async move {
                let raw = source.fetch().await?;
                let batch = tokio::task::spawn_blocking(move || parser.parse(&raw))
                    .await
                    .map_err(|e| FundscopeError::Task(e.to_string()))?;
                tracing::info!(
                    "Parsed {} records from {} ({} lines skipped)",
                    batch.report.decoded,
                    source.key(),
                    batch.report.failed
                );
                Ok::<_, FundscopeError>(batch)
            })
            .await
    }

    /// Forgets the cached batch for `source`.
    pub fn invalidate<S: RecordSource>(&self, source: &S) {
        self.cache.invalidate(&self.cache_key(source));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InlineSource;

    fn line(id: &str) -> String {
        format!("{}|NAME, TEST{}", id, "|".repeat(28))
    }

    #[tokio::test]
    async fn load_parses_and_caches() {
        let store = RecordStore::new(Duration::from_secs(60));
        let source = InlineSource::new("two", format!("{}\n{}\nbad", line("H001"), line("H002")));
        let first = store.load(&source).await.unwrap();
        assert_eq!(first.records.len(), 2);
        assert_eq!(first.report.failed, 1);
        let second = store.load(&source).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn empty_source_is_an_empty_batch() {
        let store = RecordStore::new(Duration::from_secs(60));
        let batch = store.load(&InlineSource::new("empty", "")).await.unwrap();
        assert!(batch.records.is_empty());
        assert!(!batch.report.has_failures());
    }

    #[tokio::test]
    async fn invalidate_forces_reparse() {
        let store = RecordStore::new(Duration::from_secs(60));
        let source = InlineSource::new("one", line("H001"));
        let first = store.load(&source).await.unwrap();
        store.invalidate(&source);
        let second = store.load(&source).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[tokio::test]
    async fn parser_cycle_is_part_of_the_key() {
        let source = InlineSource::new("one", line("H001"));
        let store = RecordStore::new(Duration::from_secs(60))
            .with_parser(BatchParser::new().with_cycle(2020));
        let batch = store.load(&source).await.unwrap();
        assert_eq!(batch.records[0].cycle, 2020);
    }
}
