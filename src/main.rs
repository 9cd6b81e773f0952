use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use updir::config::Config;
use updir::{routes, AppState};

#[derive(Parser, Debug)]
#[command(name = "updir")]
#[command(about = "Minimal HTTP file server with directory listings and uploads")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "UPDIR_PORT", default_value = "11011")]
    port: u16,

    /// Directory to serve
    #[arg(short, long, env = "UPDIR_DIR", default_value = ".")]
    dir: PathBuf,

    /// Address to bind to
    #[arg(short, long, env = "UPDIR_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Config file path (optional)
    #[arg(short, long, env = "UPDIR_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, env = "UPDIR_VERBOSE")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "updir=debug,tower_http=debug"
    } else {
        "updir=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from file if provided, otherwise use defaults
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Resolve the root to a symlink-free absolute path; the root is fixed for
    // the lifetime of the process.
    let root_dir = std::fs::canonicalize(&cli.dir)
        .map_err(|e| format!("failed to resolve root directory {}: {e}", cli.dir.display()))?;

    if !root_dir.is_dir() {
        return Err(format!("root path is not a directory: {}", root_dir.display()).into());
    }

    let state = AppState::with_config(root_dir.clone(), config);
    let app = routes::router(state);

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port).parse()?;
    info!("serving {} on {}", root_dir.display(), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
