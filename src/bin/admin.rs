//! CLI administration tool for alias-shortener.
//!
//! Works directly against the PostgreSQL backend, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL (prompts for the alias when omitted)
//! cargo run --bin admin -- link add https://example.com ex
//!
//! # Look up an alias
//! cargo run --bin admin -- link get ex
//!
//! # Check the connection and create the schema if needed
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`,
//! as for the server.

use alias_shortener::application::services::UrlService;
use alias_shortener::config::PostgresConfig;
use alias_shortener::domain::entities::UrlMapping;
use alias_shortener::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage URL mappings
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Save a URL under an alias
    Add {
        /// Original URL
        url: String,

        /// Alias (prompted for when omitted)
        alias: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the URL saved under an alias
    Get {
        /// Alias to resolve
        alias: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Connect and bootstrap the schema
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let pg = PostgresConfig::from_env()?
        .context("DATABASE_URL or DB_USER/DB_PASSWORD/DB_NAME must be set")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pg).await?,
        Commands::Db { action } => handle_db_action(action, &pg).await?,
    }

    Ok(())
}

async fn connect(pg: &PostgresConfig) -> Result<UrlService> {
    let repository = PgUrlRepository::connect(pg)
        .await
        .context("Failed to connect to database")?;

    Ok(UrlService::new(Arc::new(repository)))
}

/// Dispatches mapping commands.
async fn handle_link_action(action: LinkAction, pg: &PostgresConfig) -> Result<()> {
    match action {
        LinkAction::Add { url, alias, yes } => add_link(pg, url, alias, yes).await,
        LinkAction::Get { alias } => get_link(pg, alias).await,
    }
}

/// Saves a mapping after an optional confirmation.
async fn add_link(
    pg: &PostgresConfig,
    url: String,
    alias: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Add URL".bright_blue().bold());
    println!();

    let alias = match alias {
        Some(a) => a,
        None => Input::<String>::new()
            .with_prompt("Alias")
            .interact_text()?,
    };

    let mapping = UrlMapping::new(url, alias);

    println!("  URL:   {}", mapping.url.cyan());
    println!("  Alias: {}", mapping.alias.bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Save this mapping?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = connect(pg).await?;
    service
        .save_url(&mapping.url, &mapping.alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save mapping: {}", e))?;

    println!("{}", "✅ Mapping saved".green().bold());
    println!();

    Ok(())
}

/// Prints the URL saved under `alias`.
async fn get_link(pg: &PostgresConfig, alias: String) -> Result<()> {
    let service = connect(pg).await?;

    match service.resolve(&alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(e) => {
            println!("  {} {}", alias.bright_yellow(), e.to_string().red());
            Err(anyhow::anyhow!("Lookup failed: {}", e))
        }
    }
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pg: &PostgresConfig) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Checking database".bright_blue().bold());
            println!("  {}", pg.masked_url().bright_black());

            connect(pg).await?;

            println!("{}", "✅ Connected, url table ready".green().bold());
        }
    }

    Ok(())
}
