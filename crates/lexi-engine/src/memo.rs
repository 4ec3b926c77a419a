//! Per-word source responses shared by every field run.

use lexi_sources::{SourceData, SourceError, SourceFetcher, SourceKind};
use tokio::sync::OnceCell;

/// Fetches each source at most once for one word.
///
/// Fields backed by the same source (the dictionary feeds five of them) wait
/// on a single request and each get their own copy of the data. A failed
/// fetch is remembered as `None`, so no other field repeats it.
#[derive(Debug)]
pub struct SourceMemo<'a, S> {
    sources: &'a S,
    word: &'a str,
    slots: [OnceCell<Option<SourceData>>; SourceKind::ALL.len()],
}

impl<'a, S: SourceFetcher> SourceMemo<'a, S> {
    #[must_use]
    pub fn new(sources: &'a S, word: &'a str) -> Self {
        Self {
            sources,
            word,
            slots: std::array::from_fn(|_| OnceCell::new()),
        }
    }

    /// Data from `source`, fetching it on first use.
    pub async fn get(&self, source: SourceKind) -> Option<SourceData> {
        self.slots[slot(source)]
            .get_or_init(|| self.fetch(source))
            .await
            .clone()
    }

    async fn fetch(&self, source: SourceKind) -> Option<SourceData> {
        let word = self.word;
        match self.sources.fetch(source, word).await {
            Ok(data) => Some(data),
            Err(SourceError::NotConfigured(_)) => {
                tracing::debug!(word, %source, "source not configured, skipping");
                None
            }
            Err(SourceError::RateLimited { retry_after_secs }) => {
                tracing::warn!(word, %source, retry_after_secs, "source rate limited, skipping");
                None
            }
            Err(e) => {
                tracing::warn!(word, %source, error = %e, "source unavailable, skipping");
                None
            }
        }
    }
}

const fn slot(source: SourceKind) -> usize {
    match source {
        SourceKind::ThesaurusBasic => 0,
        SourceKind::ThesaurusAdvanced => 1,
        SourceKind::Dictionary => 2,
        SourceKind::Datamuse => 3,
        SourceKind::RhymeBrain => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Basic thesaurus has no key; the dictionary always answers.
    #[derive(Default)]
    struct Unkeyed {
        calls: AtomicU32,
    }

    impl SourceFetcher for Unkeyed {
        async fn fetch(&self, source: SourceKind, _word: &str) -> Result<SourceData, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match source {
                SourceKind::ThesaurusBasic => Err(SourceError::NotConfigured(source)),
                _ => Ok(SourceData {
                    part_of_speech: Some("noun".into()),
                    ..SourceData::default()
                }),
            }
        }
    }

    #[tokio::test]
    async fn unconfigured_source_is_skipped_once() {
        let sources = Unkeyed::default();
        let memo = SourceMemo::new(&sources, "light");

        assert!(memo.get(SourceKind::ThesaurusBasic).await.is_none());
        assert!(memo.get(SourceKind::ThesaurusBasic).await.is_none());
        assert_eq!(sources.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_reads_share_one_fetch() {
        let sources = Unkeyed::default();
        let memo = SourceMemo::new(&sources, "light");

        let (a, b) = tokio::join!(
            memo.get(SourceKind::Dictionary),
            memo.get(SourceKind::Dictionary)
        );

        assert_eq!(a, b);
        assert_eq!(a.and_then(|d| d.part_of_speech).as_deref(), Some("noun"));
        assert_eq!(sources.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn every_source_has_its_own_slot() {
        let mut slots: Vec<usize> = SourceKind::ALL.into_iter().map(slot).collect();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), SourceKind::ALL.len());
        assert!(slots.iter().all(|&s| s < SourceKind::ALL.len()));
    }
}
