use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use super::{ReferenceError, ReferenceSource};
use crate::models::{ReferenceRecord, SourceKind};

const KNOWN_PHILOSOPHERS: &[&str] = &[
    "Aristotle", "Plato", "Socrates", "Kant", "Hume", "Descartes", "Nietzsche", "Mill",
    "Bentham", "Hegel", "Spinoza", "Locke", "Hobbes", "Rousseau", "Kierkegaard", "Sartre",
    "Camus", "Wittgenstein", "Russell", "Aquinas", "Augustine", "Confucius", "Lao Tzu",
    "Marcus Aurelius", "Epictetus",
];

/// Wikipedia REST summary endpoint (`/page/summary/{title}`).
pub struct WikipediaSource {
    http: reqwest::Client,
    base_url: String,
}

impl WikipediaSource {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    fn summary_url(&self, term: &str) -> Result<Url, ReferenceError> {
        let title = term.trim().replace(' ', "_");
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ReferenceError::Request(format!("invalid Wikipedia base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ReferenceError::Request("Wikipedia base URL cannot hold a path".into()))?
            .pop_if_empty()
            .extend(["page", "summary", title.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl ReferenceSource for WikipediaSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Wikipedia
    }

    async fn fetch(&self, term: &str) -> Result<ReferenceRecord, ReferenceError> {
        let url = self.summary_url(term)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ReferenceError::Request(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ReferenceError::NotFound),
            status if !status.is_success() => {
                return Err(ReferenceError::Request(format!("Wikipedia API error: {status}")));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReferenceError::Request(e.to_string()))?;
        parse_summary(&body)
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Summary {
    #[serde(rename = "type", default)]
    page_type: String,
    title: String,
    #[serde(default)]
    extract: String,
    thumbnail: Option<Thumbnail>,
    content_urls: Option<ContentUrls>,
}

#[derive(Deserialize)]
struct Thumbnail {
    source: String,
}

#[derive(Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrl>,
}

#[derive(Deserialize)]
struct PageUrl {
    page: String,
}

/// Disambiguation pages and empty extracts count as misses.
pub fn parse_summary(body: &str) -> Result<ReferenceRecord, ReferenceError> {
    let summary: Summary =
        serde_json::from_str(body).map_err(|e| ReferenceError::Parse(e.to_string()))?;

    if summary.page_type == "disambiguation" || summary.extract.trim().is_empty() {
        return Err(ReferenceError::NotFound);
    }

    Ok(ReferenceRecord {
        key_points: key_points(&summary.extract),
        related_concepts: mentioned_philosophers(&summary.extract),
        related_philosophers: Vec::new(),
        further_reading: Vec::new(),
        thumbnail: summary.thumbnail.map(|t| t.source),
        source_url: summary.content_urls.and_then(|u| u.desktop).map(|d| d.page),
        source_kind: SourceKind::Wikipedia,
        original_term: None,
        title: summary.title,
        definition: summary.extract,
    })
}

/// Up to three of the first three sentences, keeping those strictly longer
/// than 20 and shorter than 100 characters.
fn key_points(text: &str) -> Vec<String> {
    text.split('.')
        .take(3)
        .map(str::trim)
        .filter(|s| (21..100).contains(&s.chars().count()))
        .map(str::to_string)
        .collect()
}

fn mentioned_philosophers(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    KNOWN_PHILOSOPHERS
        .iter()
        .filter(|name| lower.contains(&name.to_lowercase()))
        .take(4)
        .map(|name| (*name).to_string())
        .collect()
}
