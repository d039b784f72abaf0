use alias_shortener::config::{self, Config, StorageKind};
use alias_shortener::server;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// URL shortener with in-memory or PostgreSQL storage.
#[derive(Parser)]
#[command(name = "alias-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use PostgreSQL for storing URLs
    #[arg(short = 'd', long = "use-postgres")]
    use_postgres: bool,

    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if cli.use_postgres {
        config.storage = StorageKind::Postgres;
    }
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }

    init_tracing(&config);

    config.validate()?;
    config.print_summary();

    tracing::info!("starting alias-shortener");
    tracing::debug!("debug messages are enabled");

    if let Err(e) = server::run(config).await {
        tracing::error!("server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Installs the global subscriber using the configured filter and format.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
