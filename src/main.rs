//! CLI entry point for folhetim

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folhetim")]
#[command(version = "0.1.0")]
#[command(about = "A blog front page server for headless CMS backends", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Content service API URL (overrides folhetim.yml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the index page server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Render the index page to static files
    #[command(alias = "r")]
    Render {
        /// Output directory (defaults to public)
        #[arg(short, long, default_value = "public")]
        output: PathBuf,
    },

    /// Fetch posts and list them on the terminal
    Fetch {
        /// Number of extra pages to load after the first
        #[arg(short, long, default_value = "0")]
        pages: usize,

        /// Keep loading pages until the cursor runs out
        #[arg(long)]
        all: bool,
    },

    /// Display version information
    Version,
}

fn load_app(base_dir: &std::path::Path, api_url: Option<String>) -> Result<folhetim::Folhetim> {
    let mut app = folhetim::Folhetim::new(base_dir)?;
    if let Some(api_url) = api_url {
        app.config.api_url = api_url;
    }
    Ok(app)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folhetim=debug,info"
    } else {
        "folhetim=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Serve { port, ip } => {
            let app = load_app(&base_dir, cli.api_url)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folhetim::server::start(&app, &ip, port).await?;
        }

        Commands::Render { output } => {
            let app = load_app(&base_dir, cli.api_url)?;
            let output_dir = if output.is_absolute() {
                output
            } else {
                base_dir.join(output)
            };
            tracing::info!("Rendering index page...");
            folhetim::commands::render::run(&app, &output_dir).await?;
            println!("Rendered to {:?}", output_dir);
        }

        Commands::Fetch { pages, all } => {
            let app = load_app(&base_dir, cli.api_url)?;
            folhetim::commands::fetch::run(&app, pages, all).await?;
        }

        Commands::Version => {
            println!("folhetim version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
