use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{StatusCode, Url};

use super::{ReferenceError, ReferenceSource};
use crate::models::{ReferenceRecord, SourceKind};

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid title regex"));
static PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div\s+id="preamble"[^>]*>(.*?)</div>"#).expect("valid preamble regex")
});
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid paragraph regex"));
static RELATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div\s+id="related-entries"[^>]*>(.*?)</div>"#)
        .expect("valid related-entries regex")
});
static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a[^>]*>(.*?)</a>").expect("valid anchor regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Stanford Encyclopedia of Philosophy entry pages (`/entries/{slug}/`).
pub struct SepSource {
    http: reqwest::Client,
    base_url: String,
}

impl SepSource {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    fn entry_url(&self, term: &str) -> Result<Url, ReferenceError> {
        let slug = slug(term);
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ReferenceError::Request(format!("invalid SEP base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ReferenceError::Request("SEP base URL cannot hold a path".into()))?
            .pop_if_empty()
            .extend(["entries", slug.as_str(), ""]);
        Ok(url)
    }
}

#[async_trait]
impl ReferenceSource for SepSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Sep
    }

    async fn fetch(&self, term: &str) -> Result<ReferenceRecord, ReferenceError> {
        if slug(term).is_empty() {
            return Err(ReferenceError::NotFound);
        }
        let url = self.entry_url(term)?;
        let page_url = url.to_string();
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ReferenceError::Request(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ReferenceError::NotFound),
            status if !status.is_success() => {
                return Err(ReferenceError::Request(format!("SEP API error: {status}")));
            }
            _ => {}
        }

        let html = response
            .text()
            .await
            .map_err(|e| ReferenceError::Request(e.to_string()))?;
        parse_entry(&html, &page_url)
    }
}

/// SEP entry slug: lowercase, whitespace runs become `-`.
pub fn slug(term: &str) -> String {
    term.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Extracts title, the preamble's first paragraph and the related entries
/// from an entry page. A page without a preamble is not an entry.
pub fn parse_entry(html: &str, page_url: &str) -> Result<ReferenceRecord, ReferenceError> {
    let preamble = PREAMBLE
        .captures(html)
        .and_then(|c| c.get(1))
        .ok_or(ReferenceError::NotFound)?
        .as_str();
    let definition = PARAGRAPH
        .captures(preamble)
        .and_then(|c| c.get(1))
        .map(|m| plain_text(m.as_str()))
        .filter(|d| !d.is_empty())
        .ok_or(ReferenceError::NotFound)?;

    let title = TITLE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| plain_text(m.as_str()))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ReferenceError::Parse("entry page has no title".into()))?;

    let related_concepts = RELATED
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|block| {
            ANCHOR
                .captures_iter(block.as_str())
                .filter_map(|c| c.get(1))
                .map(|m| plain_text(m.as_str()))
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(ReferenceRecord {
        further_reading: further_reading(&title),
        title,
        definition,
        related_concepts,
        related_philosophers: Vec::new(),
        key_points: Vec::new(),
        thumbnail: None,
        source_url: Some(page_url.to_string()),
        source_kind: SourceKind::Sep,
        original_term: None,
    })
}

fn further_reading(title: &str) -> Vec<String> {
    vec![
        format!("Stanford Encyclopedia of Philosophy: {title}"),
        format!("Internet Encyclopedia of Philosophy: {title}"),
        "Routledge Companion to Philosophy".to_string(),
        format!("Recent discussions on {title}"),
    ]
}

fn plain_text(fragment: &str) -> String {
    let stripped = TAG.replace_all(fragment, "");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&rsquo;", "\u{2019}")
        .replace("&lsquo;", "\u{2018}")
        .replace("&ldquo;", "\u{201c}")
        .replace("&rdquo;", "\u{201d}")
        .replace("&mdash;", "\u{2014}")
        .replace("&ndash;", "\u{2013}")
        .replace("&amp;", "&");
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}
