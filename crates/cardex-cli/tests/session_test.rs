use std::sync::{Arc, Mutex};

use cardex_cli::config::Settings;
use cardex_cli::host::{Action, Ingestor, Notifier};
use cardex_cli::session::{Orchestrator, SearchSession};
use cardex_client::client::{BoxFuture, CatalogClient, ContentKind, DownloadedCard};
use cardex_client::encode::EncodedQuery;
use cardex_client::error::ClientError;
use cardex_core::options::RawSearchOptions;
use cardex_core::record::CardRecord;

fn record(path: &str) -> CardRecord {
    CardRecord {
        path: path.to_owned(),
        name: "X".to_owned(),
        description: "No description.".to_owned(),
        author: path.split('/').next().unwrap().to_owned(),
        tags: Vec::new(),
        image_url: "img/default-avatar.png".to_owned(),
    }
}

/// Catalog stub: `None` fails every call, `Some` returns the fixed records.
struct StubClient {
    records: Option<Vec<CardRecord>>,
    card: Option<DownloadedCard>,
}

impl CatalogClient for StubClient {
    fn search<'a>(
        &'a self,
        _query: &'a EncodedQuery,
    ) -> BoxFuture<'a, Result<Vec<CardRecord>, ClientError>> {
        Box::pin(async move {
            self.records.clone().ok_or(ClientError::UnexpectedStatus {
                status: 500,
                body: "boom".to_owned(),
            })
        })
    }

    fn download<'a>(&'a self, _path: &'a str) -> BoxFuture<'a, Result<DownloadedCard, ClientError>> {
        Box::pin(async move {
            self.card.clone().ok_or(ClientError::BothEndpointsFailed {
                primary: "status 500".to_owned(),
                legacy: "status 404".to_owned(),
            })
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<(String, Option<Action>)>>,
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str, _title: &str) {
        self.infos.lock().unwrap().push(message.to_owned());
    }

    fn warning(&self, message: &str, _title: &str) {
        self.warnings.lock().unwrap().push(message.to_owned());
    }

    fn error(&self, message: &str, _title: &str, action: Option<Action>) {
        self.errors.lock().unwrap().push((message.to_owned(), action));
    }
}

#[derive(Default)]
struct RecordingIngestor {
    files: Mutex<Vec<String>>,
}

impl Ingestor for RecordingIngestor {
    fn ingest(&self, _bytes: &[u8], file_name: &str) -> anyhow::Result<()> {
        self.files.lock().unwrap().push(file_name.to_owned());
        Ok(())
    }
}

fn orchestrator(
    client: StubClient,
) -> (Orchestrator, Arc<RecordingNotifier>, Arc<RecordingIngestor>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let ingestor = Arc::new(RecordingIngestor::default());
    let orch = Orchestrator::new(Arc::new(client), notifier.clone(), ingestor.clone());
    (orch, notifier, ingestor)
}

#[tokio::test]
async fn failed_search_reports_once_and_clears_flag() {
    let (orch, notifier, _) = orchestrator(StubClient {
        records: None,
        card: None,
    });
    let mut session = SearchSession::new();
    let mut settings = Settings::default();

    let records = orch
        .search(&mut session, &mut settings, &RawSearchOptions::default())
        .await;

    assert!(records.is_empty());
    assert!(session.results().is_empty());
    assert!(!session.is_searching());
    assert_eq!(notifier.errors.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn successful_search_publishes_records() {
    let (orch, notifier, _) = orchestrator(StubClient {
        records: Some(vec![record("alice/a"), record("bob/b")]),
        card: None,
    });
    let mut session = SearchSession::new();
    let mut settings = Settings::default();

    let records = orch
        .search(&mut session, &mut settings, &RawSearchOptions::default())
        .await;

    assert_eq!(records.len(), 2);
    assert_eq!(session.results().len(), 2);
    assert!(!session.is_searching());
    assert!(notifier.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_result_notifies_info() {
    let (orch, notifier, _) = orchestrator(StubClient {
        records: Some(Vec::new()),
        card: None,
    });
    let mut session = SearchSession::new();
    let mut settings = Settings::default();

    orch.search(&mut session, &mut settings, &RawSearchOptions::default())
        .await;

    assert_eq!(notifier.infos.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn search_writes_preferences_back() {
    let (orch, _, _) = orchestrator(StubClient {
        records: Some(Vec::new()),
        card: None,
    });
    let mut session = SearchSession::new();
    let mut settings = Settings::default();
    let raw = RawSearchOptions {
        nsfw: Some(true),
        page_size: Some("12".to_owned()),
        ..RawSearchOptions::default()
    };

    orch.search(&mut session, &mut settings, &raw).await;

    assert!(settings.flags.nsfw);
    assert_eq!(settings.find_count, 12);
}

#[test]
fn stale_generation_does_not_overwrite() {
    let mut session = SearchSession::new();
    let first = session.begin();
    let second = session.begin();

    // The older request resolves last; its records must not be applied,
    // but the searching flag still clears.
    assert!(session.finish(second, vec![record("alice/new")]));
    assert!(!session.finish(first, vec![record("alice/old")]));
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].path, "alice/new");
    assert!(!session.is_searching());
}

#[tokio::test]
async fn import_hands_character_to_ingestor() {
    let (orch, notifier, ingestor) = orchestrator(StubClient {
        records: None,
        card: Some(DownloadedCard {
            file_name: "ranger.png".to_owned(),
            kind: ContentKind::Character,
            bytes: vec![1, 2, 3],
        }),
    });

    orch.import("alice/forest-ranger").await;

    assert_eq!(*ingestor.files.lock().unwrap(), vec!["ranger.png".to_owned()]);
    assert!(notifier.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn import_warns_on_unknown_kind_without_ingesting() {
    let (orch, notifier, ingestor) = orchestrator(StubClient {
        records: None,
        card: Some(DownloadedCard {
            file_name: "thing.bin".to_owned(),
            kind: ContentKind::Unknown("lorebook".to_owned()),
            bytes: vec![1],
        }),
    });

    orch.import("alice/forest-ranger").await;

    assert!(ingestor.files.lock().unwrap().is_empty());
    assert_eq!(notifier.warnings.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_import_offers_manual_fallback() {
    let (orch, notifier, ingestor) = orchestrator(StubClient {
        records: None,
        card: None,
    });

    orch.import("alice/forest-ranger").await;

    assert!(ingestor.files.lock().unwrap().is_empty());
    let errors = notifier.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    let action = errors[0].1.as_ref().expect("manual fallback action");
    assert!(action.url.ends_with("/alice/forest-ranger"));
}
