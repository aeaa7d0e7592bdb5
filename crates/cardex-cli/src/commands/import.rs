//! `cardex import <author/slug>` — download a card into the import directory.

use std::sync::Arc;

use anyhow::Result;

use cardex_client::client::HttpCatalogClient;
use cardex_core::card_path::CardPath;

use crate::config::{default_config_path, load_or_default};
use crate::host::{auth_headers, ConsoleNotifier, DirIngestor};
use crate::session::Orchestrator;

/// Run `cardex import`.
///
/// # Errors
///
/// Returns an error for a malformed card path or unusable settings; download
/// and ingestion failures are reported through the notifier instead.
pub async fn run_import(path: &str) -> Result<()> {
    let card = CardPath::parse(path)?;

    let mut settings = load_or_default(&default_config_path());
    settings.apply_env();

    let headers = auth_headers(&settings)?;
    let client = Arc::new(HttpCatalogClient::new(settings.base_url.clone(), headers));
    let orchestrator = Orchestrator::new(
        client,
        Arc::new(ConsoleNotifier),
        Arc::new(DirIngestor::new(DirIngestor::default_root())),
    );

    orchestrator.import(card.as_str()).await;
    Ok(())
}
