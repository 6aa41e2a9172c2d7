pub mod fallback;
pub mod sep;
pub mod variants;
pub mod wikipedia;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{PreferredSource, ReferenceRecord, SourceKind};

use self::fallback::fallback_record;
use self::sep::SepSource;
use self::variants::search_variations;
use self::wikipedia::WikipediaSource;

const USER_AGENT: &str = "sophron-bot/0.3 (philosophical reference lookup)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("no entry for this term")]
    NotFound,

    #[error("reference request failed: {0}")]
    Request(String),

    #[error("unreadable reference response: {0}")]
    Parse(String),
}

/// One external encyclopedia.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    async fn fetch(&self, term: &str) -> Result<ReferenceRecord, ReferenceError>;
}

pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(15))
        .build()
}

#[derive(Clone)]
pub struct ReferenceService {
    wikipedia: Arc<dyn ReferenceSource>,
    sep: Arc<dyn ReferenceSource>,
}

impl ReferenceService {
    pub fn new(wikipedia: Arc<dyn ReferenceSource>, sep: Arc<dyn ReferenceSource>) -> Self {
        Self { wikipedia, sep }
    }

    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        Self::new(
            Arc::new(WikipediaSource::new(http.clone(), config.wikipedia_base_url.clone())),
            Arc::new(SepSource::new(http, config.sep_base_url.clone())),
        )
    }

    fn source(&self, preferred: PreferredSource) -> &dyn ReferenceSource {
        match preferred {
            PreferredSource::Wikipedia => self.wikipedia.as_ref(),
            PreferredSource::Sep => self.sep.as_ref(),
        }
    }

    fn in_preference_order(&self, preferred: PreferredSource) -> [&dyn ReferenceSource; 2] {
        match preferred {
            PreferredSource::Wikipedia => [self.wikipedia.as_ref(), self.sep.as_ref()],
            PreferredSource::Sep => [self.sep.as_ref(), self.wikipedia.as_ref()],
        }
    }

    /// Single-source lookup of exactly `term`, no variations, no fallback.
    pub async fn fetch_direct(
        &self,
        preferred: PreferredSource,
        term: &str,
    ) -> Result<ReferenceRecord, AppError> {
        let term = term.trim();
        let source_name = match preferred {
            PreferredSource::Wikipedia => "Wikipedia",
            PreferredSource::Sep => "SEP",
        };
        if term.is_empty() {
            return Err(AppError::validation("Term is required"));
        }

        self.source(preferred)
            .fetch(term)
            .await
            .map_err(|e| AppError::from_reference(e, source_name, term))
    }

    /// Tries every search variation against the preferred source, then
    /// against the other one, and falls back to a locally synthesized entry.
    /// Never fails.
    pub async fn lookup(&self, term: &str, preferred: PreferredSource) -> ReferenceRecord {
        let term = term.trim();
        let variations = search_variations(term);

        for source in self.in_preference_order(preferred) {
            for (index, variation) in variations.iter().enumerate() {
                match source.fetch(variation).await {
                    Ok(record) if record.definition.trim().is_empty() => continue,
                    Ok(mut record) => {
                        if index > 0 {
                            info!(
                                term,
                                variation = variation.as_str(),
                                source = source.kind().as_str(),
                                "reference found through search variation"
                            );
                        }
                        record.original_term = Some(term.to_string());
                        return record;
                    }
                    Err(ReferenceError::NotFound) => {}
                    Err(e) if index == 0 => {
                        warn!(term, source = source.kind().as_str(), error = %e, "reference lookup failed");
                    }
                    Err(_) => {}
                }
            }
        }

        info!(term, "no reference source knows the term, using fallback entry");
        fallback_record(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FakeSource {
        kind: SourceKind,
        entries: HashMap<String, Result<ReferenceRecord, ReferenceError>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(kind: SourceKind) -> Self {
            Self { kind, entries: HashMap::new(), calls: Mutex::new(Vec::new()) }
        }

        fn with(mut self, term: &str, outcome: Result<ReferenceRecord, ReferenceError>) -> Self {
            self.entries.insert(term.to_string(), outcome);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReferenceSource for FakeSource {
        fn kind(&self) -> SourceKind {
            self.kind
        }

        async fn fetch(&self, term: &str) -> Result<ReferenceRecord, ReferenceError> {
            self.calls.lock().unwrap().push(term.to_string());
            self.entries.get(term).cloned().unwrap_or(Err(ReferenceError::NotFound))
        }
    }

    fn record(title: &str, definition: &str, kind: SourceKind) -> ReferenceRecord {
        ReferenceRecord {
            title: title.to_string(),
            definition: definition.to_string(),
            related_concepts: Vec::new(),
            related_philosophers: Vec::new(),
            further_reading: Vec::new(),
            key_points: Vec::new(),
            thumbnail: None,
            source_url: None,
            source_kind: kind,
            original_term: None,
        }
    }

    fn service(wikipedia: FakeSource, sep: FakeSource) -> (ReferenceService, Arc<FakeSource>, Arc<FakeSource>) {
        let wikipedia = Arc::new(wikipedia);
        let sep = Arc::new(sep);
        (ReferenceService::new(wikipedia.clone(), sep.clone()), wikipedia, sep)
    }

    #[tokio::test]
    async fn sep_hit_on_second_variation() {
        let (svc, wikipedia, sep) = service(
            FakeSource::new(SourceKind::Wikipedia),
            FakeSource::new(SourceKind::Sep)
                .with("free will", Ok(record("Free Will", "The capacity to choose.", SourceKind::Sep))),
        );

        let found = svc.lookup("free-will", PreferredSource::Wikipedia).await;

        assert_eq!(found.source_kind, SourceKind::Sep);
        assert_eq!(found.title, "Free Will");
        assert_eq!(found.original_term.as_deref(), Some("free-will"));
        assert_eq!(wikipedia.calls(), vec!["free-will", "free will", "freewill"]);
        assert_eq!(sep.calls(), vec!["free-will", "free will"]);
    }

    #[tokio::test]
    async fn preferred_source_is_asked_first() {
        let (svc, wikipedia, _sep) = service(
            FakeSource::new(SourceKind::Wikipedia)
                .with("Qualia", Ok(record("Qualia", "Wiki text", SourceKind::Wikipedia))),
            FakeSource::new(SourceKind::Sep)
                .with("Qualia", Ok(record("Qualia", "SEP text", SourceKind::Sep))),
        );

        let found = svc.lookup("Qualia", PreferredSource::Sep).await;

        assert_eq!(found.definition, "SEP text");
        assert!(wikipedia.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_definition_counts_as_miss() {
        let (svc, _, _) = service(
            FakeSource::new(SourceKind::Wikipedia)
                .with("Qualia", Ok(record("Qualia", "  ", SourceKind::Wikipedia))),
            FakeSource::new(SourceKind::Sep)
                .with("Qualia", Ok(record("Qualia", "SEP text", SourceKind::Sep))),
        );

        let found = svc.lookup("Qualia", PreferredSource::Wikipedia).await;

        assert_eq!(found.source_kind, SourceKind::Sep);
    }

    #[tokio::test]
    async fn errors_everywhere_produce_fallback() {
        let (svc, _, _) = service(
            FakeSource::new(SourceKind::Wikipedia)
                .with("moral luck", Err(ReferenceError::Request("timeout".into()))),
            FakeSource::new(SourceKind::Sep),
        );

        let found = svc.lookup("moral luck", PreferredSource::Wikipedia).await;

        assert_eq!(found.source_kind, SourceKind::Fallback);
        assert_eq!(found.title, "moral luck");
        assert_eq!(found.original_term.as_deref(), Some("moral luck"));
    }

    #[tokio::test]
    async fn direct_fetch_maps_not_found() {
        let (svc, _, _) = service(FakeSource::new(SourceKind::Wikipedia), FakeSource::new(SourceKind::Sep));

        let err = svc.fetch_direct(PreferredSource::Sep, "nothing").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No SEP entry found for 'nothing'");
    }

    #[tokio::test]
    async fn direct_fetch_does_not_try_variations() {
        let (svc, wikipedia, sep) = service(FakeSource::new(SourceKind::Wikipedia), FakeSource::new(SourceKind::Sep));

        let err = svc.fetch_direct(PreferredSource::Wikipedia, "free-will").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(wikipedia.calls(), vec!["free-will"]);
        assert!(sep.calls().is_empty());
    }

    #[tokio::test]
    async fn direct_fetch_rejects_blank_term() {
        let (svc, _, _) = service(FakeSource::new(SourceKind::Wikipedia), FakeSource::new(SourceKind::Sep));

        let err = svc.fetch_direct(PreferredSource::Wikipedia, "  ").await.unwrap_err();

        assert!(err.is_validation());
    }
}
