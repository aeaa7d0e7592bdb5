//! Catalog HTTP client trait and `reqwest`-backed implementation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use cardex_core::record::CardRecord;
use log::{debug, warn};
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::encode::EncodedQuery;
use crate::error::ClientError;
use crate::normalize::normalize_response;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Search endpoint path under the catalog base URL.
pub const SEARCH_PATH: &str = "/search";

/// Primary card download endpoint path.
pub const DOWNLOAD_PATH: &str = "/api/characters/download";

/// Legacy card download endpoint path, tried when the primary fails.
pub const LEGACY_DOWNLOAD_PATH: &str = "/api/download";

/// Response header carrying the downloaded payload's content discriminator.
pub const CONTENT_KIND_HEADER: &str = "X-Custom-Content-Type";

/// Content kind of a downloaded payload, as declared by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    /// A character card ready for host-side import.
    Character,
    /// A kind this client does not know how to ingest.
    Unknown(String),
}

impl ContentKind {
    /// Classify the discriminator header value.
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        match value {
            Some("character") => Self::Character,
            Some(other) => Self::Unknown(other.to_owned()),
            None => Self::Unknown("unspecified".to_owned()),
        }
    }
}

/// A downloaded card payload with its name and declared kind.
#[derive(Debug, Clone)]
pub struct DownloadedCard {
    /// File name extracted from `Content-Disposition`, or a derived default.
    pub file_name: String,
    /// Declared content kind.
    pub kind: ContentKind,
    /// Raw payload bytes.
    pub bytes: Vec<u8>,
}

/// Communicates with a cardex-compatible catalog service.
pub trait CatalogClient: Send + Sync {
    /// Run a search and return normalized records in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status,
    /// or an unparseable body.
    fn search<'a>(
        &'a self,
        query: &'a EncodedQuery,
    ) -> BoxFuture<'a, Result<Vec<CardRecord>, ClientError>>;

    /// Download the card identified by `path`, falling back to the legacy
    /// endpoint when the primary one fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BothEndpointsFailed`] when neither endpoint
    /// produced a success response.
    fn download<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<DownloadedCard, ClientError>>;
}

/// `reqwest`-backed implementation of [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    headers: HeaderMap,
    http: Arc<reqwest::Client>,
}

impl HttpCatalogClient {
    /// Create a new client targeting `base_url` with caller-supplied
    /// (typically auth) headers attached to every request.
    pub fn new(base_url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            base_url: base_url.into(),
            headers,
            http: Arc::new(reqwest::Client::new()),
        }
    }

    async fn attempt_download(&self, url: &str, path: &str) -> Result<reqwest::Response, String> {
        let outcome = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(&serde_json::json!({ "url": path }))
            .send()
            .await;
        match outcome {
            Ok(resp) if resp.status().is_success() => Ok(resp),
            Ok(resp) => Err(format!("status {}", resp.status())),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Turn a non-success response into [`ClientError::UnexpectedStatus`],
/// extracting a server-supplied message when one is present.
async fn status_error(resp: reqwest::Response) -> ClientError {
    let status = resp.status();
    let raw = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&raw)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned()
        });
    ClientError::UnexpectedStatus {
        status: status.as_u16(),
        body: message,
    }
}

/// Extract a file name from a `Content-Disposition` header value.
fn filename_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .filter_map(|part| part.trim().strip_prefix("filename="))
        .map(|f| f.trim_matches('"').to_owned())
        .find(|f| !f.is_empty())
}

/// Default file name for a card path when no header supplies one.
fn default_file_name(path: &str) -> String {
    let slug = path.rsplit('/').next().unwrap_or(path);
    format!("{slug}.png")
}

impl CatalogClient for HttpCatalogClient {
    fn search<'a>(
        &'a self,
        query: &'a EncodedQuery,
    ) -> BoxFuture<'a, Result<Vec<CardRecord>, ClientError>> {
        Box::pin(async move {
            let url = format!("{}{SEARCH_PATH}", self.base_url);
            debug!("searching catalog: {url}?{query}");

            let resp = self
                .http
                .get(&url)
                .headers(self.headers.clone())
                .query(&query.as_pairs())
                .send()
                .await?;

            if !resp.status().is_success() {
                return Err(status_error(resp).await);
            }

            let body: Value = resp
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))?;
            Ok(normalize_response(&body))
        })
    }

    fn download<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<DownloadedCard, ClientError>> {
        Box::pin(async move {
            let primary_url = format!("{}{DOWNLOAD_PATH}", self.base_url);
            debug!("downloading {path} from {primary_url}");

            let resp = match self.attempt_download(&primary_url, path).await {
                Ok(resp) => resp,
                Err(primary) => {
                    let legacy_url = format!("{}{LEGACY_DOWNLOAD_PATH}", self.base_url);
                    warn!("primary download failed ({primary}), trying {legacy_url}");
                    self.attempt_download(&legacy_url, path)
                        .await
                        .map_err(|legacy| ClientError::BothEndpointsFailed { primary, legacy })?
                }
            };

            let kind = ContentKind::from_header(
                resp.headers()
                    .get(CONTENT_KIND_HEADER)
                    .and_then(|v| v.to_str().ok()),
            );
            let file_name = resp
                .headers()
                .get(reqwest::header::CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok())
                .and_then(filename_from_disposition)
                .unwrap_or_else(|| default_file_name(path));

            let bytes = resp.bytes().await?.to_vec();
            Ok(DownloadedCard {
                file_name,
                kind,
                bytes,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_kind_classifies_header() {
        assert_eq!(
            ContentKind::from_header(Some("character")),
            ContentKind::Character
        );
        assert_eq!(
            ContentKind::from_header(Some("lorebook")),
            ContentKind::Unknown("lorebook".to_owned())
        );
        assert_eq!(
            ContentKind::from_header(None),
            ContentKind::Unknown("unspecified".to_owned())
        );
    }

    #[test]
    fn filename_parses_from_disposition() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="ranger.png""#),
            Some("ranger.png".to_owned())
        );
        assert_eq!(
            filename_from_disposition("attachment; filename=ranger.png"),
            Some("ranger.png".to_owned())
        );
        assert_eq!(filename_from_disposition("attachment"), None);
    }

    #[test]
    fn default_file_name_uses_slug() {
        assert_eq!(default_file_name("alice/forest-ranger"), "forest-ranger.png");
        assert_eq!(default_file_name("loner"), "loner.png");
    }
}
