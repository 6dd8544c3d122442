//! CLI administration tool for linkvault.
//!
//! Inspects and maintains the url store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Newest mappings first
//! cargo run --bin admin -- list --limit 20
//!
//! # One record (does not count a hit)
//! cargo run --bin admin -- show Xy3_a9Qk
//!
//! # Remove a mapping
//! cargo run --bin admin -- delete Xy3_a9Qk
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use linkvault::application::services::ShortenerService;
use linkvault::config::Config;
use linkvault::domain::entities::UrlMapping;
use linkvault::infrastructure::persistence::PgUrlMappingRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Service = ShortenerService<PgUrlMappingRepository>;

/// CLI tool for managing linkvault.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show totals across all short URLs
    Stats,

    /// List stored short URLs, newest first
    List {
        /// Maximum number of rows to print
        #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..))]
        limit: Option<i64>,
    },

    /// Show one short URL without counting a hit
    Show {
        /// Short code to inspect
        code: String,
    },

    /// Delete a short URL
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(PgUrlMappingRepository::new(Arc::new(pool.clone())));
    let service = ShortenerService::new(repository);

    match cli.command {
        Commands::Stats => handle_stats(&service).await?,
        Commands::List { limit } => handle_list(&service, limit).await?,
        Commands::Show { code } => handle_show(&service, &code).await?,
        Commands::Delete { code, yes } => handle_delete(&service, &code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays store-wide totals.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  URLs:            {}",
        summary.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:          {}",
        summary.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Avg clicks/URL:  {}",
        summary.average_clicks().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists mappings in a table.
///
/// # Output Format
///
/// ```text
/// 🔗 Short URLs
///
///   Code       Clicks  Created           URL
///   ────────────────────────────────────────────────────────────
///   Xy3_a9Qk   12      2025-01-15 10:30  https://example.com
/// ```
async fn handle_list(service: &Service, limit: Option<i64>) -> Result<()> {
    println!("{}", "🔗 Short URLs".bright_blue().bold());
    println!();

    let mappings = service
        .list(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list urls: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No URLs stored yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<12} {:<7} {:<17} {}",
            mapping.short_code.cyan(),
            mapping.access_count,
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url
        );
    }

    println!();
    println!(
        "  Shown: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints a single record.
async fn handle_show(service: &Service, code: &str) -> Result<()> {
    let mapping = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_mapping(&mapping);

    Ok(())
}

/// Deletes a mapping after confirmation (default: No).
async fn handle_delete(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Short URL".bright_blue().bold());
    println!();

    let mapping = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_mapping(&mapping);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete {}: {}", code, e))?;

    println!();
    println!("{}", "✅ Short URL deleted".green().bold());
    println!();

    Ok(())
}

fn print_mapping(mapping: &UrlMapping) {
    println!("  Code:     {}", mapping.short_code.cyan());
    println!("  URL:      {}", mapping.original_url);
    println!(
        "  Clicks:   {}",
        mapping.access_count.to_string().bright_green()
    );
    println!(
        "  Created:  {}",
        mapping.created_at.to_rfc3339().bright_black()
    );
    println!(
        "  Updated:  {}",
        mapping.updated_at.to_rfc3339().bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let columns: Vec<(String, String, String)> = sqlx::query_as(
                r#"
                SELECT column_name::TEXT, data_type::TEXT, is_nullable::TEXT
                FROM information_schema.columns
                WHERE table_name = 'urls'
                ORDER BY ordinal_position
                "#,
            )
            .fetch_all(pool)
            .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            if columns.is_empty() {
                println!(
                    "{}",
                    "  Table 'urls' does not exist, run `admin db migrate`".yellow()
                );
            } else {
                println!("  {}", "Table 'urls':".bright_white().bold());
                for (name, data_type, nullable) in columns {
                    let null_marker = if nullable == "NO" { "NOT NULL" } else { "" };
                    println!("    - {}: {} {}", name.cyan(), data_type, null_marker);
                }
            }
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🔧 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["admin", "list", "--limit", "-1"]).is_err());
        assert!(Cli::try_parse_from(["admin", "list", "--limit", "0"]).is_err());

        let cli = Cli::try_parse_from(["admin", "list", "--limit", "5"]).unwrap();
        assert!(matches!(cli.command, Commands::List { limit: Some(5) }));
    }

    #[test]
    fn test_list_without_limit() {
        let cli = Cli::try_parse_from(["admin", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List { limit: None }));
    }
}
