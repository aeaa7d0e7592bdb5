//! `cardex search` — query the catalog and print matching cards.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use log::warn;

use cardex_client::client::HttpCatalogClient;
use cardex_core::options::RawSearchOptions;

use crate::config::{default_config_path, load_or_default, save_settings, Settings};
use crate::debounce::Cooldown;
use crate::host::{auth_headers, ConsoleNotifier, DirIngestor};
use crate::session::{Orchestrator, SearchSession};

/// Arguments for `cardex search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text search term.
    pub term: Option<String>,
    /// Comma-separated tags that results must carry.
    #[arg(long)]
    pub tags: Option<String>,
    /// Comma-separated tags that results must not carry.
    #[arg(long)]
    pub exclude_tags: Option<String>,
    /// Match any included tag instead of all of them.
    #[arg(long = "or")]
    pub inclusive_or: bool,
    /// Name substring filter.
    #[arg(long)]
    pub namelike: Option<String>,
    /// Language filter.
    #[arg(long)]
    pub language: Option<String>,
    /// Minimum token count.
    #[arg(long)]
    pub min_tokens: Option<String>,
    /// Maximum token count.
    #[arg(long)]
    pub max_tokens: Option<String>,
    /// Minimum tag count.
    #[arg(long)]
    pub min_tags: Option<String>,
    /// Minimum number of users who chatted.
    #[arg(long)]
    pub min_users: Option<String>,
    /// Maximum age in days.
    #[arg(long)]
    pub max_days: Option<String>,
    /// Minimum AI rating.
    #[arg(long)]
    pub min_rating: Option<String>,
    /// Include NSFW results (overrides the persisted preference).
    #[arg(long)]
    pub nsfw: Option<bool>,
    /// Include NSFL results.
    #[arg(long)]
    pub nsfl: Option<bool>,
    /// Only NSFW results.
    #[arg(long)]
    pub nsfw_only: Option<bool>,
    /// Require a card image.
    #[arg(long)]
    pub require_images: Option<bool>,
    /// Require example dialogues.
    #[arg(long)]
    pub require_example_dialogues: Option<bool>,
    /// Require alternate greetings.
    #[arg(long)]
    pub require_alternate_greetings: Option<bool>,
    /// Require a custom system prompt.
    #[arg(long)]
    pub require_custom_prompt: Option<bool>,
    /// Require an expression pack.
    #[arg(long)]
    pub require_expressions: Option<bool>,
    /// Require attached lore.
    #[arg(long)]
    pub require_lore: Option<bool>,
    /// Require embedded lore books.
    #[arg(long)]
    pub require_lore_embedded: Option<bool>,
    /// Require linked lore books.
    #[arg(long)]
    pub require_lore_linked: Option<bool>,
    /// Only recommended or verified results.
    #[arg(long)]
    pub recommended_verified: Option<bool>,
    /// Include forks of other cards.
    #[arg(long)]
    pub include_forks: Option<bool>,
    /// Sort key (wire name, e.g. `download_count`, `star_count`, `name`).
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort ascending instead of descending.
    #[arg(long)]
    pub asc: bool,
    /// Page number (1-indexed).
    #[arg(long)]
    pub page: Option<String>,
    /// Results per page.
    #[arg(long)]
    pub first: Option<String>,
    /// Re-run the search for each line typed on stdin.
    #[arg(long)]
    pub interactive: bool,
}

impl SearchArgs {
    fn into_raw(self) -> RawSearchOptions {
        RawSearchOptions {
            search_term: self.term,
            name_like: self.namelike,
            language: self.language,
            include_tags: self.tags,
            exclude_tags: self.exclude_tags,
            inclusive_or: self.inclusive_or.then_some(true),
            min_tokens: self.min_tokens,
            max_tokens: self.max_tokens,
            min_tags: self.min_tags,
            min_users_chatted: self.min_users,
            max_days_ago: self.max_days,
            min_ai_rating: self.min_rating,
            nsfw: self.nsfw,
            nsfl: self.nsfl,
            nsfw_only: self.nsfw_only,
            require_images: self.require_images,
            require_example_dialogues: self.require_example_dialogues,
            require_alternate_greetings: self.require_alternate_greetings,
            require_custom_prompt: self.require_custom_prompt,
            require_expressions: self.require_expressions,
            require_lore: self.require_lore,
            require_lore_embedded: self.require_lore_embedded,
            require_lore_linked: self.require_lore_linked,
            recommended_verified: self.recommended_verified,
            include_forks: self.include_forks,
            sort: self.sort,
            sort_ascending: self.asc.then_some(true),
            page_size: self.first,
            page: self.page,
        }
    }
}

/// Run `cardex search`.
///
/// # Errors
///
/// Returns an error when the settings or auth headers cannot be assembled;
/// search failures themselves are reported through the notifier instead.
pub async fn run_search(args: SearchArgs) -> Result<()> {
    let config_path = default_config_path();
    let mut settings = load_or_default(&config_path);
    settings.apply_env();

    let headers = auth_headers(&settings)?;
    let client = Arc::new(HttpCatalogClient::new(settings.base_url.clone(), headers));
    let orchestrator = Orchestrator::new(
        client,
        Arc::new(ConsoleNotifier),
        Arc::new(DirIngestor::new(DirIngestor::default_root())),
    );

    let interactive = args.interactive;
    let mut session = SearchSession::new();
    let raw = args.into_raw();

    if interactive {
        interactive_loop(&orchestrator, &mut session, &mut settings, raw).await?;
    } else {
        let records = orchestrator.search(&mut session, &mut settings, &raw).await;
        print_records(&records);
    }

    if let Err(e) = save_settings(&settings, &config_path) {
        warn!("could not persist settings: {e}");
    }
    Ok(())
}

/// Read search terms line by line and re-run the search for each, with the
/// keystroke cooldown suppressing bursts. An empty line or EOF quits.
async fn interactive_loop(
    orchestrator: &Orchestrator,
    session: &mut SearchSession,
    settings: &mut Settings,
    mut raw: RawSearchOptions,
) -> Result<()> {
    let mut cooldown = Cooldown::keystroke();
    let mut line = String::new();
    loop {
        line.clear();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let term = line.trim();
        if term.is_empty() {
            break;
        }
        if !cooldown.ready() {
            continue;
        }
        raw.search_term = Some(term.to_owned());
        let records = orchestrator.search(session, settings, &raw).await;
        print_records(&records);
    }
    Ok(())
}

fn print_records(records: &[cardex_core::record::CardRecord]) {
    for record in records {
        println!("{}  {} (by {})", record.path, record.name, record.author);
        if !record.tags.is_empty() {
            println!("    tags: {}", record.tags.join(", "));
        }
    }
}
