//! Where a curriculum day's sentences come from.
//!
//! Both sources resolve `path_template` (e.g. `day{N}/data{N}.json`) against
//! a base: a local directory or an HTTP base URL.

use std::path::PathBuf;

use reqwest::header::CACHE_CONTROL;
use url::Url;

use super::sentences::{fallback_sentences, DayContent, Sentence};
use crate::error::ContentError;
use crate::storage::ContentConfig;

/// Async provider of one day's sentence list.
#[allow(async_fn_in_trait)]
pub trait SentenceSource {
    async fn load_day(&self, day: u32) -> Result<Vec<Sentence>, ContentError>;
}

fn day_path(template: &str, day: u32) -> String {
    template.replace("{N}", &day.to_string())
}

fn parse_day(day: u32, body: &[u8]) -> Result<Vec<Sentence>, ContentError> {
    let invalid = |message: String| ContentError::Invalid { day, message };
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| invalid(e.to_string()))?;
    if !value.is_array() {
        return Err(invalid("expected a JSON array".into()));
    }
    let sentences: Vec<Sentence> =
        serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
    if sentences.is_empty() {
        return Err(ContentError::Empty(day));
    }
    Ok(sentences)
}

/// Reads day files from a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    template: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, template: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            template: template.into(),
        }
    }

    pub fn path_for(&self, day: u32) -> PathBuf {
        self.root.join(day_path(&self.template, day))
    }
}

impl SentenceSource for DirectorySource {
    async fn load_day(&self, day: u32) -> Result<Vec<Sentence>, ContentError> {
        let path = self.path_for(day);
        match tokio::fs::read(&path).await {
            Ok(body) => parse_day(day, &body),
            Err(source) => Err(ContentError::Read { path, source }),
        }
    }
}

/// Fetches day files over HTTP, bypassing caches.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
    template: String,
}

impl HttpSource {
    pub fn new(base: &str, template: impl Into<String>) -> Result<Self, ContentError> {
        // Url::join drops the last segment unless the base ends in '/'.
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{base}/"))?
        };
        Ok(Self {
            client: reqwest::Client::new(),
            base,
            template: template.into(),
        })
    }

    pub fn url_for(&self, day: u32) -> Result<Url, ContentError> {
        Ok(self.base.join(&day_path(&self.template, day))?)
    }
}

impl SentenceSource for HttpSource {
    async fn load_day(&self, day: u32) -> Result<Vec<Sentence>, ContentError> {
        let url = self.url_for(day)?;
        let http_err = |e: reqwest::Error| ContentError::Http {
            url: url.to_string(),
            message: e.to_string(),
        };
        let resp = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(http_err)?;
        if !resp.status().is_success() {
            return Err(ContentError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let body = resp.bytes().await.map_err(http_err)?;
        parse_day(day, &body)
    }
}

/// Source picked from configuration.
#[derive(Debug, Clone)]
pub enum ContentSource {
    Directory(DirectorySource),
    Http(HttpSource),
}

impl ContentSource {
    /// `http://` and `https://` sources are fetched, anything else is a path.
    pub fn from_config(config: &ContentConfig) -> Result<Self, ContentError> {
        let source = config.source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            Ok(ContentSource::Http(HttpSource::new(
                source,
                config.path_template.clone(),
            )?))
        } else {
            Ok(ContentSource::Directory(DirectorySource::new(
                source,
                config.path_template.clone(),
            )))
        }
    }
}

impl SentenceSource for ContentSource {
    async fn load_day(&self, day: u32) -> Result<Vec<Sentence>, ContentError> {
        match self {
            ContentSource::Directory(source) => source.load_day(day).await,
            ContentSource::Http(source) => source.load_day(day).await,
        }
    }
}

/// Load a day, substituting the built-in sample on any failure.
pub async fn load_day_or_fallback<S: SentenceSource>(source: &S, day: u32) -> DayContent {
    match source.load_day(day).await {
        Ok(sentences) => DayContent {
            day,
            sentences,
            fallback: false,
        },
        Err(e) => {
            tracing::warn!(day, error = %e, "sentence load failed, using fallback sample");
            DayContent {
                day,
                sentences: fallback_sentences(),
                fallback: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_replaces_every_placeholder() {
        assert_eq!(day_path("day{N}/data{N}.json", 7), "day7/data7.json");
    }

    #[test]
    fn http_base_without_trailing_slash_keeps_path() {
        let source = HttpSource::new("https://example.com/data/curriculum", "day{N}/data{N}.json")
            .unwrap();
        assert_eq!(
            source.url_for(3).unwrap().as_str(),
            "https://example.com/data/curriculum/day3/data3.json"
        );
    }

    #[test]
    fn parse_rejects_non_arrays_and_empty() {
        assert!(matches!(parse_day(1, b"{}"), Err(ContentError::Invalid { .. })));
        assert!(matches!(parse_day(1, b"[]"), Err(ContentError::Empty(1))));
        assert!(matches!(parse_day(1, b"not json"), Err(ContentError::Invalid { .. })));
        let ok = parse_day(1, br#"[{"korean":"a","japanese":"b"}]"#).unwrap();
        assert_eq!(ok.len(), 1);
    }

    #[test]
    fn config_picks_source_kind() {
        let mut cfg = ContentConfig::default();
        assert!(matches!(
            ContentSource::from_config(&cfg).unwrap(),
            ContentSource::Directory(_)
        ));
        cfg.source = "https://example.com/c".into();
        assert!(matches!(
            ContentSource::from_config(&cfg).unwrap(),
            ContentSource::Http(_)
        ));
    }
}
