//! Search session state and the search/import orchestrator.

use std::sync::Arc;

use cardex_client::client::{CatalogClient, ContentKind};
use cardex_client::encode::encode_query;
use cardex_core::options::{normalize, RawSearchOptions};
use cardex_core::record::CardRecord;
use log::{debug, info};

use crate::config::Settings;
use crate::host::{Action, Ingestor, Notifier};

/// Base URL of the human-facing catalog page, used for manual fallbacks.
pub const CARD_PAGE_BASE: &str = "https://chub.ai/characters";

/// Explicit view state for one search surface.
///
/// Replaces ambient shared variables: the displayed result list and the
/// searching flag live here and are updated only through [`begin`] /
/// [`finish`], which carry a request generation so a stale overlapping
/// response cannot overwrite a newer one.
///
/// [`begin`]: SearchSession::begin
/// [`finish`]: SearchSession::finish
#[derive(Debug, Default)]
pub struct SearchSession {
    results: Vec<CardRecord>,
    searching: bool,
    generation: u64,
}

impl SearchSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed result list.
    #[must_use]
    pub fn results(&self) -> &[CardRecord] {
        &self.results
    }

    /// Whether a search is visually in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Mark the searching state and open a new request generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.searching = true;
        self.generation
    }

    /// Clear the searching state and, if `generation` is still current,
    /// replace the displayed list wholesale. Returns whether the list was
    /// applied; a stale generation only clears the flag.
    pub fn finish(&mut self, generation: u64, records: Vec<CardRecord>) -> bool {
        self.searching = false;
        if generation == self.generation {
            self.results = records;
            true
        } else {
            debug!("dropping stale search response (generation {generation})");
            false
        }
    }
}

/// Sequences search and import cycles against the catalog client and the
/// host collaborators.
pub struct Orchestrator {
    client: Arc<dyn CatalogClient>,
    notifier: Arc<dyn Notifier>,
    ingestor: Arc<dyn Ingestor>,
}

impl Orchestrator {
    /// Create a new `Orchestrator`.
    #[must_use]
    pub fn new(
        client: Arc<dyn CatalogClient>,
        notifier: Arc<dyn Notifier>,
        ingestor: Arc<dyn Ingestor>,
    ) -> Self {
        Self {
            client,
            notifier,
            ingestor,
        }
    }

    /// Run one search cycle: normalize, write preferences back, encode,
    /// fetch, normalize the response, publish to the session.
    ///
    /// Failures are reported through the notifier and yield an empty list;
    /// this never returns an error and never leaves the searching flag set.
    pub async fn search(
        &self,
        session: &mut SearchSession,
        settings: &mut Settings,
        raw: &RawSearchOptions,
    ) -> Vec<CardRecord> {
        let opts = normalize(raw, &settings.flags, settings.find_count);
        settings.remember(&opts);
        let query = encode_query(&opts);

        let generation = session.begin();
        let outcome = self.client.search(&query).await;

        match outcome {
            Ok(records) => {
                info!("search returned {} records", records.len());
                if records.is_empty() {
                    self.notifier
                        .info("No characters found matching your criteria.", "Catalog Search");
                }
                session.finish(generation, records.clone());
                records
            }
            Err(e) => {
                self.notifier
                    .error(&e.to_string(), "Catalog Search Failed", None);
                session.finish(generation, Vec::new());
                Vec::new()
            }
        }
    }

    /// Download the card at `path` and hand it to the ingestion collaborator.
    ///
    /// Both download endpoints failing produces one consolidated error
    /// notification with a manual-fallback action; an unknown content kind
    /// produces a warning and no ingestion. Never returns an error.
    pub async fn import(&self, path: &str) {
        match self.client.download(path).await {
            Err(e) => {
                self.notifier.error(
                    &e.to_string(),
                    "Card Download Failed",
                    Some(Action {
                        label: "Open the catalog page".to_owned(),
                        url: card_page_url(path),
                    }),
                );
            }
            Ok(card) => match card.kind {
                ContentKind::Character => {
                    if let Err(e) = self.ingestor.ingest(&card.bytes, &card.file_name) {
                        self.notifier
                            .error(&e.to_string(), "Card Import Failed", None);
                    } else {
                        self.notifier
                            .info(&format!("Imported {}", card.file_name), "Card Import");
                    }
                }
                ContentKind::Unknown(kind) => {
                    self.notifier.warning(
                        &format!("Unknown content type '{kind}', nothing imported."),
                        "Card Import",
                    );
                }
            },
        }
    }
}

/// The human-facing catalog page for a card path.
#[must_use]
pub fn card_page_url(path: &str) -> String {
    format!("{CARD_PAGE_BASE}/{path}")
}
