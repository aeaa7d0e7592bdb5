//! Host-application collaborators: notifications, ingestion, auth headers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::Settings;

/// A click-action attached to a notification, pointing at a URL the user can
/// open manually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Human-readable label.
    pub label: String,
    /// URL to open.
    pub url: String,
}

/// User-facing toast/notification sink.
///
/// The orchestrator calls this on every failure and empty-result path.
pub trait Notifier: Send + Sync {
    /// Informational message.
    fn info(&self, message: &str, title: &str);
    /// Warning message.
    fn warning(&self, message: &str, title: &str);
    /// Error message, optionally with a manual-fallback action.
    fn error(&self, message: &str, title: &str, action: Option<Action>);
}

/// Accepts a downloaded file payload and performs host-side import.
pub trait Ingestor: Send + Sync {
    /// Ingest `bytes` under `file_name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be stored.
    fn ingest(&self, bytes: &[u8], file_name: &str) -> Result<()>;
}

/// Console-backed [`Notifier`] for the CLI front-end.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str, title: &str) {
        println!("{title}: {message}");
    }

    fn warning(&self, message: &str, title: &str) {
        eprintln!("warning: {title}: {message}");
    }

    fn error(&self, message: &str, title: &str, action: Option<Action>) {
        eprintln!("error: {title}: {message}");
        if let Some(action) = action {
            eprintln!("  {}: {}", action.label, action.url);
        }
    }
}

/// [`Ingestor`] that drops files into an import directory.
#[derive(Debug)]
pub struct DirIngestor {
    root: PathBuf,
}

impl DirIngestor {
    /// Create an ingestor rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default import directory (`~/.cardex/imports`).
    #[must_use]
    pub fn default_root() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_owned());
        PathBuf::from(home).join(".cardex").join("imports")
    }
}

impl Ingestor for DirIngestor {
    fn ingest(&self, bytes: &[u8], file_name: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;
        let safe_name = Path::new(file_name)
            .file_name()
            .map_or_else(|| "card.png".to_owned(), |n| n.to_string_lossy().into_owned());
        let target = self.root.join(safe_name);
        std::fs::write(&target, bytes).with_context(|| format!("writing {}", target.display()))?;
        info!("imported {}", target.display());
        Ok(())
    }
}

/// Build the auth header set for catalog calls from the persisted settings.
///
/// # Errors
///
/// Returns an error if the API key contains bytes invalid in a header value.
pub fn auth_headers(settings: &Settings) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if !settings.api_key.is_empty() {
        let value = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .context("API key is not a valid header value")?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_headers_empty_without_key() {
        let headers = auth_headers(&Settings::default()).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn auth_headers_carry_bearer_token() {
        let settings = Settings {
            api_key: "sekrit".to_owned(),
            ..Settings::default()
        };
        let headers = auth_headers(&settings).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer sekrit");
    }

    #[test]
    fn ingestor_strips_path_components_from_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let ingestor = DirIngestor::new(dir.path().join("imports"));
        ingestor.ingest(b"bytes", "../../evil.png").unwrap();
        assert!(dir.path().join("imports").join("evil.png").is_file());
        assert!(!dir.path().join("evil.png").exists());
    }
}
