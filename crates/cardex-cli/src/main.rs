use clap::{Parser, Subcommand};

use cardex_cli::commands::config::{run_config, ConfigArgs};
use cardex_cli::commands::import::run_import;
use cardex_cli::commands::search::{run_search, SearchArgs};

#[derive(Parser)]
#[command(name = "cardex", about = "Search and import character cards from a remote catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search(SearchArgs),
    /// Download a card and drop it into the import directory
    Import {
        /// Card path in the form author/card-slug
        path: String,
    },
    /// Show or update persisted settings
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Import { path } => run_import(&path).await,
        Commands::Config(args) => run_config(args),
    }
}
