use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use shaker_core::favorites::FavoritesStore;
use shaker_core::storage::KeyValueStorage;
use shaker_infrastructure::{CocktailDbGateway, JsonFileStorage, load_config};

mod commands;

#[derive(Parser)]
#[command(name = "shaker")]
#[command(about = "Shaker - browse cocktail recipes from TheCocktailDB", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a batch of random drinks
    Random {
        /// Number of concurrent random fetches (default from config)
        #[arg(long)]
        count: Option<usize>,
    },
    /// Search drinks by name
    Search { term: String },
    /// Show one recipe in full
    Show { id: String },
    /// Manage the locally persisted favorites list
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List saved drinks
    List,
    /// Add or remove a drink id
    Toggle { id: String },
    /// Print the number of saved drinks
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config()?;

    let gateway = Arc::new(CocktailDbGateway::from_settings(&config.api));
    let storage: Arc<dyn KeyValueStorage> = match &config.storage.data_dir {
        Some(dir) => Arc::new(JsonFileStorage::new(dir)),
        None => Arc::new(JsonFileStorage::default_location()?),
    };
    let favorites = Arc::new(FavoritesStore::new(storage));

    match cli.command {
        Commands::Random { count } => {
            let count = count.unwrap_or(config.api.random_batch_size);
            commands::random::run(gateway, count).await;
        }
        Commands::Search { term } => commands::search::run(gateway, &term).await,
        Commands::Show { id } => commands::show::run(gateway, favorites, &id).await,
        Commands::Favorites { action } => match action {
            FavoritesAction::List => commands::favorites::list(gateway, favorites).await,
            FavoritesAction::Toggle { id } => commands::favorites::toggle(favorites, &id).await?,
            FavoritesAction::Count => commands::favorites::count(favorites).await,
        },
    }

    Ok(())
}
