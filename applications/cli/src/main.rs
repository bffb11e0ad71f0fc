/// Tunebox - terminal music player
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebox_cli::{bootstrap, render, shell, TuneboxConfig};
use tunebox_storage::{FavoritesStore, PlaylistStore};

#[derive(Parser)]
#[command(name = "tunebox")]
#[command(about = "Search, queue and play music from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./tunebox.toml if present)
    #[arg(short, long, global = true, env = "TUNEBOX_CONFIG")]
    config: Option<PathBuf>,

    /// Keep favorites and playlists in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive player (default)
    Shell,
    /// Search the catalog once and print the results
    Search {
        /// Free-text query
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// List favorite tracks
    Favorites,
    /// List playlists
    Playlists,
    /// Resolve and list the curated albums
    Albums,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with shell output on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunebox=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = TuneboxConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let (session, events) = bootstrap::session(&config, cli.ephemeral).await?;
            shell::run(session, events).await?;
        }
        Commands::Search { query } => {
            search(&config, &query.join(" ")).await?;
        }
        Commands::Favorites => {
            list_favorites(&config, cli.ephemeral).await?;
        }
        Commands::Playlists => {
            list_playlists(&config, cli.ephemeral).await?;
        }
        Commands::Albums => {
            list_albums(&config).await?;
        }
    }

    Ok(())
}

async fn search(config: &TuneboxConfig, query: &str) -> anyhow::Result<()> {
    let catalog = bootstrap::catalog(config)?;
    let tracks = catalog.search(query).await;

    println!("Results for \"{query}\":");
    print!("{}", render::track_list(&tracks));
    Ok(())
}

async fn list_favorites(config: &TuneboxConfig, ephemeral: bool) -> anyhow::Result<()> {
    let kv = bootstrap::open_store(config, ephemeral).await?;
    let favorites = FavoritesStore::load(kv).await;

    println!("Favorites:");
    print!("{}", render::track_list(favorites.tracks()));
    Ok(())
}

async fn list_playlists(config: &TuneboxConfig, ephemeral: bool) -> anyhow::Result<()> {
    let kv = bootstrap::open_store(config, ephemeral).await?;
    let favorites = FavoritesStore::load(kv.clone()).await;
    let playlists = PlaylistStore::load(kv).await;

    println!("Playlists:");
    print!("{}", render::playlist_list(&playlists.list(&favorites)));
    Ok(())
}

async fn list_albums(config: &TuneboxConfig) -> anyhow::Result<()> {
    let catalog = bootstrap::catalog(config)?;

    println!("Albums:");
    for (i, album) in catalog.albums().await.iter().enumerate() {
        println!("  {:>2}. {} - {} ({} songs)", i + 1, album.name, album.artist, album.songs.len());
    }
    Ok(())
}
