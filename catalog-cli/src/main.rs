//! Data Catalog - launcher for the catalog browser
//!
//! Serves the compiled web UI and offers offline access to the fixture seed
//! and exported catalog payloads.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use catalog_shared::fixtures::seed_forest;
use catalog_shared::{AssetStore, ForestStorage, LoadSource};
use datacatalog::storage::{default_data_path, FileStorage};
use datacatalog::{server, tree};

#[derive(Parser, Debug)]
#[command(name = "datacatalog")]
#[command(version)]
#[command(about = "Browse the data catalog in your browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Port for the web UI
    #[arg(short, long, default_value = "8080", env = "DATACATALOG_PORT", global = true)]
    port: u16,

    /// Don't open browser automatically
    #[arg(long, global = true)]
    no_browser: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the web UI (default)
    Serve,
    /// Print the fixture seed, or write it to a payload file
    Seed {
        /// Write the seed to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the catalog tree
    Tree {
        /// Payload file to read; seeded when it does not exist yet
        #[arg(long, env = "DATACATALOG_DATA")]
        data: Option<PathBuf>,

        /// Use the default payload file in the data directory
        #[arg(long, conflicts_with = "data")]
        stored: bool,

        /// Only show assets matching this text, with their ancestors
        #[arg(long)]
        search: Option<String>,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Some(Commands::Serve) | None => {
            serve(cli.port, !cli.no_browser).await?;
        }
        Some(Commands::Seed { out }) => {
            print_seed(out)?;
        }
        Some(Commands::Tree { data, stored, search }) => {
            let data = if stored { Some(default_data_path()) } else { data };
            print_tree(data, search.as_deref())?;
        }
        Some(Commands::Version) => {
            println!("Data Catalog {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

async fn serve(port: u16, open_browser: bool) -> anyhow::Result<()> {
    info!("Starting Data Catalog...");

    let url = format!("http://127.0.0.1:{}", port);
    let server_handle = server::start_server(port).await?;

    if open_browser {
        info!("Opening browser...");
        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser: {}", e);
            info!("Please open {} in your browser", url);
        }
    }

    info!("Data Catalog is running at {}", url);
    info!("Press Ctrl+C to stop");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
        result = server_handle => {
            match result {
                Ok(Err(e)) => tracing::error!("Server error: {}", e),
                Err(e) => tracing::error!("Server task failed: {}", e),
                Ok(Ok(())) => {}
            }
        }
    }

    info!("Data Catalog stopped.");
    Ok(())
}

fn print_seed(out: Option<PathBuf>) -> anyhow::Result<()> {
    let forest = seed_forest();
    match out {
        Some(path) => {
            FileStorage::new(&path).write(&forest)?;
            info!(assets = forest.asset_count(), "Seed written to {}", path.display());
        }
        None => println!("{}", forest.to_json_pretty()?),
    }
    Ok(())
}

fn print_tree(data: Option<PathBuf>, search: Option<&str>) -> anyhow::Result<()> {
    let forest = match data {
        Some(path) => {
            let mut store = AssetStore::new(FileStorage::new(&path));
            match store.load()? {
                LoadSource::Stored => info!("Loaded catalog from {}", path.display()),
                LoadSource::Seeded => info!("Seeded {}", path.display()),
                LoadSource::Recovered => warn!("Replaced unreadable payload in {} with the seed", path.display()),
            }
            store.forest().clone()
        }
        None => seed_forest(),
    };

    print!("{}", tree::render_tree(&forest, search));
    Ok(())
}
